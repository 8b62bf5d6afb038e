use super::board::Bounds;
use ratatui::layout::Position;

/// The four headings the snake can move in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The unit step for this heading, as (column, row) deltas.  The y axis
    /// grows downwards, matching the terminal.
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Step `pos` one cell along this heading.  On a wrapping board the
    /// coordinate comes back in around the far edge; otherwise `None` marks
    /// a blocked move.
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let (dx, dy) = self.delta();
        let x = step(pos.x, dx, bounds.width, bounds.wrap)?;
        let y = step(pos.y, dy, bounds.height, bounds.wrap)?;
        Some(Position { x, y })
    }

    pub(super) fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Offset `coord` by `delta` within `0..len`, wrapping around if asked to
fn step(coord: u16, delta: i32, len: u16, wrap: bool) -> Option<u16> {
    let moved = i32::from(coord) + delta;
    match u16::try_from(moved) {
        Ok(c) if c < len => Some(c),
        _ if wrap && moved < 0 => Some(len - 1),
        _ if wrap => Some(0),
        _ => None,
    }
}
