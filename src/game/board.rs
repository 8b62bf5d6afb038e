use super::direction::Direction;
use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Positions, Rect, Size};
use std::collections::HashSet;

/// Static per-session geometry: playable bounds, obstacles, and the snake's
/// starting cell.  Obstacles never change once the session has begun.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(super) bounds: Bounds,
    pub(super) obstacles: HashSet<Position>,
    pub(super) snake_start: (Position, Direction),
}

impl Board {
    pub(super) fn new(bounds: Bounds) -> Board {
        let center = Position::new(bounds.width / 2, bounds.height / 2);
        Board {
            bounds,
            obstacles: HashSet::new(),
            snake_start: (center, Direction::East),
        }
    }

    /// Scatter obstacles over the board.  `occupied` holds every cell that
    /// must stay clear (the snake and the food); the lane in front of the
    /// snake's starting position is kept clear as well.  Placement stops at
    /// the target count or after a bounded number of random draws, so a
    /// crowded board yields fewer obstacles rather than a stalled session.
    pub(super) fn scatter_obstacles<R: Rng>(&mut self, rng: &mut R, occupied: &HashSet<Position>) {
        let cells = usize::from(self.bounds.width) * usize::from(self.bounds.height);
        let target = (cells / consts::OBSTACLE_DENSITY).min(consts::MAX_OBSTACLES);
        let (start, heading) = self.snake_start;
        let lane = std::iter::successors(Some(start), |&p| heading.advance(p, self.bounds))
            .take(consts::FORWARDS_CLEARANCE)
            .collect::<HashSet<Position>>();
        let mut attempts = consts::OBSTACLE_MAX_ATTEMPTS;
        while self.obstacles.len() < target && attempts > 0 {
            attempts -= 1;
            let pos = self.bounds.random_position(rng);
            if occupied.contains(&pos) || lane.contains(&pos) || self.obstacles.contains(&pos) {
                continue;
            }
            self.obstacles.insert(pos);
        }
    }
}

/// The playable area of a board, in cells.  `wrap` is true when the edges
/// wrap around instead of being walls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) wrap: bool,
}

impl Bounds {
    /// Smallest terminal on which a game can be started
    pub(crate) const MIN_TERMINAL: Size = Size {
        width: consts::MIN_BOARD_SIZE.width + 4,
        height: consts::MIN_BOARD_SIZE.height + 5,
    };

    /// Derive the playable bounds for a terminal of `size`, or `None` when
    /// the board would fall below the minimum playable size.  The board is
    /// the centered display area minus one HUD row, two message rows, and
    /// the border.
    pub(crate) fn for_terminal(size: Size, wrap: bool) -> Option<Bounds> {
        let width = size
            .width
            .min(consts::DISPLAY_SIZE.width)
            .saturating_sub(4);
        let height = size
            .height
            .min(consts::DISPLAY_SIZE.height)
            .saturating_sub(5);
        (width >= consts::MIN_BOARD_SIZE.width && height >= consts::MIN_BOARD_SIZE.height)
            .then_some(Bounds { width, height, wrap })
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(super) fn random_position<R: Rng>(self, rng: &mut R) -> Position {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        Position::new(x, y)
    }
}
