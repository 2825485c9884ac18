use log::debug;

use super::grid::{Cell, CellTag, Grid};
use super::rng::GameRng;

/// The single food pellet on the board.
///
/// Spawning picks a random interior cell and scans forward from it in
/// row-major order, wrapping each axis, until a background cell is found. The
/// scan probes every interior cell at most once, so a full board terminates
/// with a spawn failure instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Place the first food; `None` if no background cell exists
    pub fn spawn(grid: &mut Grid, rng: &mut GameRng) -> Option<Self> {
        let position = find_spawn_cell(grid, rng)?;
        grid.set(position, CellTag::Food);
        debug!("food spawned at ({}, {})", position.x, position.y);
        Some(Self { position })
    }

    /// Place the next food after the current one was eaten; false if the
    /// board has no background cell left
    pub fn respawn(&mut self, grid: &mut Grid, rng: &mut GameRng) -> bool {
        match find_spawn_cell(grid, rng) {
            Some(position) => {
                grid.set(position, CellTag::Food);
                self.position = position;
                debug!("food respawned at ({}, {})", position.x, position.y);
                true
            }
            None => false,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }
}

fn find_spawn_cell(grid: &Grid, rng: &mut GameRng) -> Option<Cell> {
    let (min_x, max_x) = (1, grid.width() as i32 - 2);
    let (min_y, max_y) = (1, grid.height() as i32 - 2);

    let mut cell = Cell::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y));

    for _ in 0..grid.interior_cells() {
        if grid.get(cell) == CellTag::Background {
            return Some(cell);
        }
        cell.x += 1;
        if cell.x > max_x {
            cell.x = min_x;
            cell.y += 1;
        }
        if cell.y > max_y {
            cell.y = min_y;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_on_background_interior_cell() {
        let mut grid = Grid::new(9, 9);
        let mut rng = GameRng::new(3);

        let food = Food::spawn(&mut grid, &mut rng).unwrap();
        let cell = food.position();

        assert!(cell.x >= 1 && cell.x <= 7);
        assert!(cell.y >= 1 && cell.y <= 7);
        assert_eq!(grid.get(cell), CellTag::Food);
    }

    #[test]
    fn test_scans_past_occupied_cells() {
        let mut grid = Grid::new(9, 9);
        let mut rng = GameRng::new(5);

        // leave exactly one free interior cell
        let free = Cell::new(4, 6);
        for y in 1..=7 {
            for x in 1..=7 {
                let cell = Cell::new(x, y);
                if cell != free {
                    grid.set(cell, CellTag::SnakeBody);
                }
            }
        }

        let food = Food::spawn(&mut grid, &mut rng).unwrap();
        assert_eq!(food.position(), free);
        assert_eq!(grid.get(free), CellTag::Food);
    }

    #[test]
    fn test_full_board_reports_failure() {
        let mut grid = Grid::new(9, 9);
        let mut rng = GameRng::new(11);

        for y in 1..=7 {
            for x in 1..=7 {
                grid.set(Cell::new(x, y), CellTag::SnakeBody);
            }
        }

        assert!(Food::spawn(&mut grid, &mut rng).is_none());
    }

    #[test]
    fn test_respawn_moves_the_pellet() {
        let mut grid = Grid::new(9, 9);
        let mut rng = GameRng::new(8);

        let mut food = Food::spawn(&mut grid, &mut rng).unwrap();
        let first = food.position();

        // the eaten cell is no longer background, so the next spawn must
        // land elsewhere
        grid.set(first, CellTag::SnakeHead);
        assert!(food.respawn(&mut grid, &mut rng));
        assert_ne!(food.position(), first);
        assert_eq!(grid.get(food.position()), CellTag::Food);
    }
}
