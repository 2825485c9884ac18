use anyhow::{ensure, Context, Result};
use log::info;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::Food;
use super::grid::Grid;
use super::rng::GameRng;
use super::snake::{SnakeBody, SnakeEvent};

/// What happened during one frame tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The snake ate the food this frame
    pub ate_food: bool,
    /// The snake hit a wall or itself this frame
    pub died: bool,
    /// The score reached the win threshold, or the board filled up
    pub won: bool,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The game engine: owns the grid, the snake, the food and the RNG, and
/// drives them through the per-frame tick sequence.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: SnakeBody,
    food: Food,
    rng: GameRng,
    score: u32,
    outcome: Option<Outcome>,
}

impl GameEngine {
    /// Build a fresh game. Configuration problems are fatal here, not later.
    pub fn new(config: GameConfig) -> Result<Self> {
        ensure!(
            config.grid_width >= 7 && config.grid_height >= 7,
            "grid must be at least 7x7 cells including the wall ring, got {}x{}",
            config.grid_width,
            config.grid_height
        );
        ensure!(config.transit_ms > 0, "transit duration must be non-zero");
        ensure!(
            (0.0..=1.0).contains(&config.win_fraction),
            "win fraction must be within 0..=1, got {}",
            config.win_fraction
        );

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut grid = Grid::new(config.grid_width, config.grid_height);
        let snake = SnakeBody::new(&mut grid, &mut rng, config.transit_ms);
        let food =
            Food::spawn(&mut grid, &mut rng).context("no free cell to place the first food")?;

        info!(
            "new game: {}x{} grid, seed {}",
            config.grid_width,
            config.grid_height,
            rng.seed()
        );

        Ok(Self {
            config,
            grid,
            snake,
            food,
            rng,
            score: 0,
            outcome: None,
        })
    }

    /// Queue a direction change for the snake's head
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// One frame of simulation: advance every segment animation, then
    /// evaluate collisions and food at the head's leading edge.
    pub fn tick(&mut self, dt_ms: u32) -> TickResult {
        let mut result = TickResult::default();

        self.snake.advance(dt_ms, &mut self.grid);
        match self
            .snake
            .evaluate_collisions_and_food(dt_ms, &mut self.grid)
        {
            Some(SnakeEvent::AteFood) => {
                result.ate_food = true;
                self.score += 1;
                info!("food eaten, score {}/{}", self.score, self.win_threshold());

                if self.score >= self.win_threshold() {
                    result.won = true;
                } else if !self.food.respawn(&mut self.grid, &mut self.rng) {
                    info!("no background cell left for food, board is full");
                    result.won = true;
                }

                if result.won {
                    self.snake.freeze();
                    self.outcome = Some(Outcome::Won);
                    info!("game won with score {}", self.score);
                }
            }
            Some(SnakeEvent::Died) => {
                result.died = true;
                self.outcome = Some(Outcome::Lost);
                info!("snake died with score {}", self.score);
            }
            None => {}
        }

        result
    }

    /// Start over: snake reborn at the center, score cleared. The food stays
    /// where it was.
    pub fn restart(&mut self) {
        self.snake.rebirth(&mut self.grid, &mut self.rng);
        self.score = 0;
        self.outcome = None;
        info!("game restarted");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score needed to win: a fraction of the interior cell count
    pub fn win_threshold(&self) -> u32 {
        ((self.grid.interior_cells() as f32 * self.config.win_fraction) as u32).max(1)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
