use super::board::Bounds;
use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the board the snake
/// is on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// Heading queued by input, applied at the start of the next move
    pub(super) pending: Option<Direction>,

    /// Number of upcoming moves during which the tail is kept instead of
    /// dropped
    pub(super) growth_pending: usize,
}

impl Snake {
    /// Create a new snake of length 1 with its head at `head`, facing in
    /// `direction`
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            direction,
            pending: None,
            growth_pending: 0,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.body
            .front()
            .copied()
            .expect("snake body should never be empty")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Queue a change of heading for the next move.  A reversal onto the
    /// snake's own neck is discarded.
    pub(super) fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = Some(direction);
        }
    }

    /// Return the cell the head will move into on the next [`advance`],
    /// taking any queued heading into account
    ///
    /// [`advance`]: Snake::advance
    pub(super) fn next_head(&self, bounds: Bounds) -> Option<Position> {
        self.pending
            .unwrap_or(self.direction)
            .advance(self.head(), bounds)
    }

    /// Move the snake forwards one cell, applying any queued heading first.
    /// The tail is kept while growth is pending and dropped otherwise.
    /// Returns `false` if the snake was unable to advance due to hitting a
    /// non-wraparound edge.
    pub(super) fn advance(&mut self, bounds: Bounds) -> bool {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        let Some(head) = self.direction.advance(self.head(), bounds) else {
            return false;
        };
        self.body.push_front(head);
        if self.growth_pending > 0 {
            self.growth_pending -= 1;
        } else {
            let _ = self.body.pop_back();
        }
        true
    }

    /// Lengthen the snake by `cells` over its next `cells` moves
    pub(super) fn grow(&mut self, cells: usize) {
        self.growth_pending += cells;
    }

    /// Whether any part of the snake occupies `pos`
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Whether the head overlaps any other cell of the body.  Only
    /// meaningful directly after a move.
    pub(super) fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            width: 30,
            height: 20,
            wrap: false,
        }
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Position::new(15, 10), Direction::East);
        assert_eq!(snake.body.len(), 1);
        assert_eq!(snake.head(), Position::new(15, 10));
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.growth_pending, 0);
    }

    #[test]
    fn advance_without_growth() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.head(), Position::new(16, 10));
        assert_eq!(snake.body.len(), 1);
    }

    #[test]
    fn advance_with_growth() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        snake.grow(2);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.growth_pending, 1);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.body.len(), 3);
        assert_eq!(snake.growth_pending, 0);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.body.len(), 3);
        assert_eq!(
            snake.body,
            VecDeque::from([
                Position::new(18, 10),
                Position::new(17, 10),
                Position::new(16, 10),
            ])
        );
    }

    #[test]
    fn reversal_discarded() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        snake.change_direction(Direction::West);
        assert_eq!(snake.pending, None);
        snake.change_direction(Direction::South);
        assert_eq!(snake.pending, Some(Direction::South));
        // Still compared against the active heading, not the queued one:
        snake.change_direction(Direction::West);
        assert_eq!(snake.pending, Some(Direction::South));
    }

    #[test]
    fn queued_heading_applied_once() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        snake.change_direction(Direction::South);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.direction, Direction::South);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.head(), Position::new(15, 11));
    }

    #[test]
    fn down_then_up_does_not_reverse() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        snake.grow(3);
        assert!(snake.advance(bounds()));
        snake.change_direction(Direction::South);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.direction, Direction::South);
        snake.change_direction(Direction::North);
        assert!(snake.advance(bounds()));
        assert_eq!(snake.direction, Direction::South);
        assert!(!snake.self_collision());
    }

    #[test]
    fn advance_into_wall() {
        let mut snake = Snake::new(Position::new(29, 10), Direction::East);
        assert!(!snake.advance(bounds()));
        assert_eq!(snake.head(), Position::new(29, 10));
        assert_eq!(snake.body.len(), 1);
    }

    #[test]
    fn advance_wraps() {
        let mut snake = Snake::new(Position::new(29, 10), Direction::East);
        let bounds = Bounds {
            wrap: true,
            ..bounds()
        };
        assert!(snake.advance(bounds));
        assert_eq!(snake.head(), Position::new(0, 10));
    }

    #[test]
    fn next_head_honors_pending() {
        let mut snake = Snake::new(Position::new(15, 10), Direction::East);
        assert_eq!(snake.next_head(bounds()), Some(Position::new(16, 10)));
        snake.change_direction(Direction::North);
        assert_eq!(snake.next_head(bounds()), Some(Position::new(15, 9)));
    }

    #[test]
    fn tail_chasing_is_not_a_collision() {
        // A snake moving into the cell its tail just vacated stays alive
        let mut snake = Snake::new(Position::new(5, 5), Direction::East);
        snake.grow(3);
        for _ in 0..3 {
            assert!(snake.advance(bounds()));
        }
        assert_eq!(snake.body.len(), 4);
        snake.change_direction(Direction::South);
        assert!(snake.advance(bounds()));
        snake.change_direction(Direction::West);
        assert!(snake.advance(bounds()));
        snake.change_direction(Direction::North);
        assert!(snake.advance(bounds()));
        // Head is now at (7, 5), where the tail was three moves ago
        assert_eq!(snake.head(), Position::new(7, 5));
        assert!(!snake.self_collision());
    }

    #[test]
    fn self_collision_detected() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::East);
        snake.grow(5);
        for _ in 0..5 {
            assert!(snake.advance(bounds()));
        }
        assert_eq!(snake.body.len(), 6);
        snake.change_direction(Direction::South);
        assert!(snake.advance(bounds()));
        snake.change_direction(Direction::West);
        assert!(snake.advance(bounds()));
        snake.change_direction(Direction::North);
        assert!(snake.advance(bounds()));
        assert!(snake.self_collision());
    }
}
