use super::direction::Direction;

/// What currently occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTag {
    Background,
    Wall,
    SnakeHead,
    SnakeBody,
    Food,
}

/// An integer cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The occupancy map: a dense grid of cell tags whose outermost ring is wall.
///
/// The snake and food components keep this in lockstep with their own state;
/// collision and spawn decisions read it back. Callers only ever address
/// in-range cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellTag>,
}

impl Grid {
    /// Create a grid with a wall ring around a background interior
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self {
            width,
            height,
            cells: vec![CellTag::Background; width * height],
        };

        for x in 0..width as i32 {
            grid.set(Cell::new(x, 0), CellTag::Wall);
            grid.set(Cell::new(x, height as i32 - 1), CellTag::Wall);
        }
        for y in 0..height as i32 {
            grid.set(Cell::new(0, y), CellTag::Wall);
            grid.set(Cell::new(width as i32 - 1, y), CellTag::Wall);
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, cell: Cell) -> CellTag {
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, tag: CellTag) {
        let index = self.index(cell);
        self.cells[index] = tag;
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// The cell at the middle of the grid, where the snake is (re)born
    pub fn center(&self) -> Cell {
        Cell::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Number of cells inside the wall ring
    pub fn interior_cells(&self) -> usize {
        (self.width - 2) * (self.height - 2)
    }

    /// Number of cells currently tagged background
    pub fn background_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|tag| **tag == CellTag::Background)
            .count()
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell), "cell out of range: {:?}", cell);
        cell.y as usize * self.width + cell.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_ring() {
        let grid = Grid::new(10, 8);

        for x in 0..10 {
            assert_eq!(grid.get(Cell::new(x, 0)), CellTag::Wall);
            assert_eq!(grid.get(Cell::new(x, 7)), CellTag::Wall);
        }
        for y in 0..8 {
            assert_eq!(grid.get(Cell::new(0, y)), CellTag::Wall);
            assert_eq!(grid.get(Cell::new(9, y)), CellTag::Wall);
        }
        assert_eq!(grid.get(Cell::new(1, 1)), CellTag::Background);
        assert_eq!(grid.get(Cell::new(8, 6)), CellTag::Background);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(10, 10);
        let cell = Cell::new(3, 4);

        grid.set(cell, CellTag::Food);
        assert_eq!(grid.get(cell), CellTag::Food);

        grid.set(cell, CellTag::Background);
        assert_eq!(grid.get(cell), CellTag::Background);
    }

    #[test]
    fn test_center_and_counts() {
        let grid = Grid::new(9, 9);
        assert_eq!(grid.center(), Cell::new(4, 4));
        assert_eq!(grid.interior_cells(), 49);
        assert_eq!(grid.background_cells(), 49);
    }

    #[test]
    fn test_background_count_tracks_writes() {
        let mut grid = Grid::new(9, 9);
        grid.set(Cell::new(4, 4), CellTag::SnakeHead);
        grid.set(Cell::new(2, 2), CellTag::Food);
        assert_eq!(grid.background_cells(), 47);
    }

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.moved_in_direction(Direction::Right), Cell::new(6, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Left), Cell::new(4, 5));
    }
}
