use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct InteractiveMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl InteractiveMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(config)?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Simulation ticks at ~60 Hz; each tick advances animations by the
        // wall-clock time actually elapsed, so transits keep their duration
        // even when the timer drifts
        let tick_interval = Duration::from_millis(16);
        let mut tick_timer = interval(tick_interval);
        let mut last_tick = Instant::now();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    let now = Instant::now();
                    let dt_ms = now.duration_since(last_tick).as_millis() as u32;
                    last_tick = now;
                    self.update_game(dt_ms);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::Steer(direction) => {
                    self.engine.request_direction(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self, dt_ms: u32) {
        let result = self.engine.tick(dt_ms);

        if result.won {
            self.metrics.on_win(self.engine.score());
        } else if result.died {
            self.metrics.on_game_over(self.engine.score());
        }
    }

    fn reset_game(&mut self) {
        self.engine.restart();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_initialization() {
        let config = GameConfig::default();
        let mode = InteractiveMode::new(config).unwrap();
        assert!(!mode.engine.is_over());
        assert_eq!(mode.engine.score(), 0);
    }

    #[test]
    fn test_reset_clears_the_run() {
        let mut mode = InteractiveMode::new(GameConfig::default()).unwrap();

        // drive straight until the wall ends the game
        while !mode.engine.is_over() {
            mode.update_game(31);
        }
        assert_eq!(mode.metrics.games_played, 1);

        mode.reset_game();
        assert_eq!(mode.engine.score(), 0);
        assert!(!mode.engine.is_over());
    }
}
