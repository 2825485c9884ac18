use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells, wall ring included
    pub grid_width: usize,
    /// Height of the grid in cells, wall ring included
    pub grid_height: usize,
    /// Time a segment takes to travel from one cell to the next
    pub transit_ms: u32,
    /// Fraction of interior cells the score must cover to win
    pub win_fraction: f32,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 22,
            grid_height: 22,
            transit_ms: 62,
            win_fraction: 0.75,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// A 7x7-interior grid, handy for tests
    pub fn small() -> Self {
        Self::new(9, 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 22);
        assert_eq!(config.grid_height, 22);
        assert_eq!(config.transit_ms, 62);
        assert_eq!(config.win_fraction, 0.75);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
    }
}
