use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Cell, CellTag, Grid};
use super::rng::GameRng;
use super::tween::{PointF, Tween};

/// Forward sampling offset for the cell a segment is entering: just under one
/// cell width, so the destination cell is read before the transit completes.
const LEADING_EDGE: f32 = 0.999;

/// One body unit of the snake: an animated position plus the direction of its
/// current transit (`None` once stopped).
///
/// The logical cell is the floor of the animated position; it is cell-aligned
/// exactly when a transit completes.
#[derive(Debug, Clone)]
pub struct Segment {
    position: Tween,
    direction: Option<Direction>,
}

impl Segment {
    fn stationary(at: PointF, transit_ms: u32) -> Self {
        Self {
            position: Tween::fixed(at, transit_ms),
            direction: None,
        }
    }

    /// The animated position, for smooth rendering
    pub fn render_position(&self) -> PointF {
        self.position.value()
    }

    /// The cell this segment logically occupies right now
    pub fn cell(&self) -> Cell {
        self.position.value().cell()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The cell this segment is moving into, sampled at its leading edge.
    /// Moving up or left the position itself already crosses into the
    /// destination cell; moving right or down it is offset by almost a cell.
    fn leading_cell(&self) -> Cell {
        let p = self.position.value();
        match self.direction {
            Some(Direction::Right) => PointF::new(p.x + LEADING_EDGE, p.y).cell(),
            Some(Direction::Down) => PointF::new(p.x, p.y + LEADING_EDGE).cell(),
            _ => p.cell(),
        }
    }
}

/// Something the snake did this frame that the owner must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    AteFood,
    Died,
}

/// The snake body: an ordered chain of segments, head at index 0.
///
/// Segments animate independently between cells but stay logically glued:
/// each body segment re-derives its direction from the segment ahead whenever
/// its own transit completes, so turns ripple from head to tail one transit
/// apart. Direction requests queue up and are consumed one per completed head
/// transit. The chain never drops below one segment; death freezes it in
/// place until `rebirth`.
#[derive(Debug)]
pub struct SnakeBody {
    segments: Vec<Segment>,
    pending: VecDeque<Direction>,
    prev_tail_dir: Option<Direction>,
    dead: bool,
    transit_ms: u32,
}

impl SnakeBody {
    pub fn new(grid: &mut Grid, rng: &mut GameRng, transit_ms: u32) -> Self {
        let mut snake = Self {
            segments: Vec::new(),
            pending: VecDeque::new(),
            prev_tail_dir: None,
            dead: false,
            transit_ms,
        };
        snake.rebirth(grid, rng);
        snake
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head_cell(&self) -> Cell {
        self.head().cell()
    }

    pub fn head_direction(&self) -> Option<Direction> {
        self.head().direction
    }

    /// Queue a direction change. It takes effect when the head's current
    /// transit completes, and is dropped there if it would reverse the head
    /// 180 degrees. Requests made while dead sit in the queue until rebirth
    /// clears it.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    /// Advance every segment's animation; transits that complete run the
    /// per-segment step protocol.
    pub fn advance(&mut self, dt_ms: u32, grid: &mut Grid) {
        for i in 0..self.segments.len() {
            if self.segments[i].position.step(dt_ms) {
                self.on_transit_complete(i, grid);
            }
        }
    }

    /// Check the head's leading edge against the occupancy map, then bring
    /// the map up to date with every in-flight segment. Called once per
    /// frame, after `advance`.
    pub fn evaluate_collisions_and_food(
        &mut self,
        dt_ms: u32,
        grid: &mut Grid,
    ) -> Option<SnakeEvent> {
        let mut event = None;

        if self.head().direction.is_some() {
            match grid.get(self.head().leading_cell()) {
                CellTag::Food => {
                    self.grow(dt_ms, grid);
                    event = Some(SnakeEvent::AteFood);
                }
                CellTag::Wall | CellTag::SnakeBody => {
                    self.snap_to_boundaries();
                    self.stop();
                    self.dead = true;
                    event = Some(SnakeEvent::Died);
                }
                _ => {}
            }
        }

        self.retag(grid);
        event
    }

    /// Reset to a single head segment at the grid center, facing a random
    /// direction and already in transit.
    pub fn rebirth(&mut self, grid: &mut Grid, rng: &mut GameRng) {
        for segment in &self.segments {
            grid.set(segment.cell(), CellTag::Background);
        }
        self.segments.clear();
        self.pending.clear();
        self.dead = false;

        let center = grid.center();
        let mut head = Segment::stationary(PointF::from_cell(center), self.transit_ms);
        head.direction = Some(Direction::ALL[rng.gen_range(0..Direction::ALL.len())]);
        grid.set(center, CellTag::SnakeHead);
        self.prev_tail_dir = head.direction;
        self.segments.push(head);
        self.commit_transit(0);
    }

    /// Stop committing new transits without the death snap. Segments glide to
    /// the next cell boundary and rest there; used when the game is won.
    pub fn freeze(&mut self) {
        self.dead = true;
    }

    fn head(&self) -> &Segment {
        self.segments.first().expect("chain is never empty")
    }

    fn tail(&self) -> &Segment {
        self.segments.last().expect("chain is never empty")
    }

    /// The step protocol, one routine for every chain index. The segment is
    /// cell-aligned when this runs.
    fn on_transit_complete(&mut self, index: usize, grid: &mut Grid) {
        let Some(direction) = self.segments[index].direction else {
            return;
        };

        let (dx, dy) = direction.delta();
        let vacated = self.segments[index].cell().moved_by(-dx, -dy);
        grid.set(vacated, CellTag::Background);

        if index == 0 {
            if self.dead {
                return;
            }
            self.prev_tail_dir = self.tail().direction;
            self.apply_next_pending();
            self.commit_transit(0);
        } else {
            self.follow_ahead(index);
            if self.dead {
                return;
            }
            self.commit_transit(index);
        }
    }

    /// Consume one queued direction; same-axis reversals are rejected,
    /// perpendicular turns and same-direction re-presses go through.
    fn apply_next_pending(&mut self) {
        let Some(requested) = self.pending.pop_front() else {
            return;
        };
        match self.segments[0].direction {
            Some(current) if requested.is_opposite(current) => {}
            _ => self.segments[0].direction = Some(requested),
        }
    }

    /// The follow rule: trail the segment ahead by heading toward wherever it
    /// is now. Equal coordinates keep the current direction.
    fn follow_ahead(&mut self, index: usize) {
        let me = self.segments[index].position.value();
        let ahead = self.segments[index - 1].position.value();

        let direction = if me.y > ahead.y {
            Some(Direction::Up)
        } else if me.x < ahead.x {
            Some(Direction::Right)
        } else if me.y < ahead.y {
            Some(Direction::Down)
        } else if me.x > ahead.x {
            Some(Direction::Left)
        } else {
            self.segments[index].direction
        };
        self.segments[index].direction = direction;
    }

    fn commit_transit(&mut self, index: usize) {
        let Some(direction) = self.segments[index].direction else {
            return;
        };
        let (dx, dy) = direction.delta();
        let value = self.segments[index].position.value();
        self.segments[index]
            .position
            .begin(PointF::new(value.x + dx as f32, value.y + dy as f32));
    }

    /// Corner-aware tail insertion. The new tail occupies the cell the old
    /// tail is vacating along its *previous* travel direction, so the chain
    /// stays contiguous even when the tail is mid-turn, and it retraces the
    /// old tail's prior path.
    fn grow(&mut self, dt_ms: u32, grid: &mut Grid) {
        let Some(prev) = self.prev_tail_dir else {
            return;
        };
        let tail_cell = self.tail().cell();
        let tail_dir = self.tail().direction;

        let (dx, dy) = match prev {
            Direction::Up => match tail_dir {
                Some(Direction::Right) => (0, 1),
                Some(Direction::Left) => (1, 1),
                _ => (0, 2),
            },
            Direction::Right => match tail_dir {
                Some(Direction::Up) => (-1, 1),
                _ => (-1, 0),
            },
            Direction::Down => match tail_dir {
                Some(Direction::Left) => (1, -1),
                _ => (0, -1),
            },
            Direction::Left => match tail_dir {
                Some(Direction::Up) => (1, 1),
                Some(Direction::Down) => (1, 0),
                _ => (2, 0),
            },
        };

        let cell = tail_cell.moved_by(dx, dy);
        let mut segment = Segment::stationary(PointF::from_cell(cell), self.transit_ms);
        segment.direction = Some(prev);
        grid.set(cell, CellTag::SnakeBody);
        self.segments.push(segment);

        let index = self.segments.len() - 1;
        self.commit_transit(index);
        // the rest of the chain already received this frame's time slice
        if self.segments[index].position.step(dt_ms) {
            self.on_transit_complete(index, grid);
        }
    }

    /// Snap every segment to the cell boundary behind its direction of
    /// travel, so the death pose is not mid-cell.
    fn snap_to_boundaries(&mut self) {
        for segment in &mut self.segments {
            let p = segment.position.value();
            let snapped = match segment.direction {
                Some(Direction::Up) => PointF::new(p.x, (p.y + 1.0).floor()),
                Some(Direction::Right) => PointF::new(p.x.floor(), p.y),
                Some(Direction::Down) => PointF::new(p.x, p.y.floor()),
                Some(Direction::Left) => PointF::new((p.x + 1.0).floor(), p.y),
                None => continue,
            };
            segment.position.teleport(snapped);
        }
    }

    fn stop(&mut self) {
        for segment in &mut self.segments {
            segment.direction = None;
        }
        self.prev_tail_dir = None;
    }

    /// Re-tag the cell each moving segment is entering, keeping the map
    /// authoritative. Stopped segments write nothing, which freezes the board
    /// after death.
    fn retag(&mut self, grid: &mut Grid) {
        if self.head().direction.is_some() {
            grid.set(self.head().leading_cell(), CellTag::SnakeHead);
        }
        for segment in &self.segments[1..] {
            if segment.direction.is_some() {
                grid.set(segment.leading_cell(), CellTag::SnakeBody);
            }
        }
    }
}
