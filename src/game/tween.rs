use super::grid::Cell;

/// A float position in cell units, used while a segment is between cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_cell(cell: Cell) -> Self {
        Self {
            x: cell.x as f32,
            y: cell.y as f32,
        }
    }

    /// The cell this point currently lies in
    pub fn cell(&self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// A time-driven linear interpolation between two positions.
///
/// One transit at a time: `begin` starts a new one from the current
/// interpolated value, `step` advances it and reports completion exactly once,
/// `teleport` cancels and snaps. The duration is fixed at construction.
#[derive(Debug, Clone)]
pub struct Tween {
    from: PointF,
    to: PointF,
    duration_ms: u32,
    elapsed_ms: u32,
    active: bool,
}

impl Tween {
    /// A stationary tween holding a value
    pub fn fixed(at: PointF, duration_ms: u32) -> Self {
        Self {
            from: at,
            to: at,
            duration_ms,
            elapsed_ms: 0,
            active: false,
        }
    }

    /// Start a transit from the current value toward a new target
    pub fn begin(&mut self, to: PointF) {
        self.from = self.value();
        self.to = to;
        self.elapsed_ms = 0;
        self.active = true;
    }

    /// Cancel any in-flight transit and snap to a value
    pub fn teleport(&mut self, at: PointF) {
        self.from = at;
        self.to = at;
        self.elapsed_ms = 0;
        self.active = false;
    }

    /// The current interpolated value
    pub fn value(&self) -> PointF {
        if !self.active {
            return self.to;
        }
        let t = self.elapsed_ms as f32 / self.duration_ms as f32;
        PointF::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Advance by `dt_ms`; returns true at the step that completes the transit
    pub fn step(&mut self, dt_ms: u32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_holds_value() {
        let mut tween = Tween::fixed(PointF::new(3.0, 4.0), 100);
        assert!(!tween.is_animating());
        assert_eq!(tween.value(), PointF::new(3.0, 4.0));
        assert!(!tween.step(50));
    }

    #[test]
    fn test_interpolates_linearly() {
        let mut tween = Tween::fixed(PointF::new(2.0, 5.0), 100);
        tween.begin(PointF::new(3.0, 5.0));

        assert!(!tween.step(25));
        assert_eq!(tween.value(), PointF::new(2.25, 5.0));

        assert!(!tween.step(25));
        assert_eq!(tween.value(), PointF::new(2.5, 5.0));
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut tween = Tween::fixed(PointF::new(0.0, 0.0), 60);
        tween.begin(PointF::new(0.0, 1.0));

        assert!(!tween.step(30));
        assert!(tween.step(30));
        assert_eq!(tween.value(), PointF::new(0.0, 1.0));

        // stationary until the next begin
        assert!(!tween.step(60));
    }

    #[test]
    fn test_begin_from_midflight_value() {
        let mut tween = Tween::fixed(PointF::new(0.0, 0.0), 100);
        tween.begin(PointF::new(1.0, 0.0));
        tween.step(50);

        tween.begin(PointF::new(0.5, 1.0));
        assert_eq!(tween.value(), PointF::new(0.5, 0.0));
        tween.step(100);
        assert_eq!(tween.value(), PointF::new(0.5, 1.0));
    }

    #[test]
    fn test_teleport_cancels() {
        let mut tween = Tween::fixed(PointF::new(0.0, 0.0), 100);
        tween.begin(PointF::new(1.0, 0.0));
        tween.step(50);

        tween.teleport(PointF::new(9.0, 9.0));
        assert!(!tween.is_animating());
        assert_eq!(tween.value(), PointF::new(9.0, 9.0));
        assert!(!tween.step(100));
    }

    #[test]
    fn test_cell_from_point() {
        assert_eq!(PointF::new(4.0, 7.0).cell(), Cell::new(4, 7));
        assert_eq!(PointF::new(4.999, 7.001).cell(), Cell::new(4, 7));
    }
}
