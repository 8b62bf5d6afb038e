//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake at the start of a session
pub(crate) const INITIAL_TICK: Duration = Duration::from_millis(200);

/// How much the tick interval shrinks each time food is eaten
pub(crate) const SPEEDUP_PER_FOOD: Duration = Duration::from_millis(5);

/// How much `+`/`-` change the tick interval
pub(crate) const MANUAL_SPEED_STEP: Duration = Duration::from_millis(25);

/// Shortest allowed tick interval
pub(crate) const MIN_TICK: Duration = Duration::from_millis(50);

/// Longest allowed tick interval
pub(crate) const MAX_TICK: Duration = Duration::from_millis(500);

/// Points awarded per food eaten
pub(crate) const POINTS_PER_FOOD: u32 = 10;

/// All drawing happens in a centered rectangle of this size; anything the
/// terminal has beyond it is left blank.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Smallest board the game will start on
pub(crate) const MIN_BOARD_SIZE: Size = Size {
    width: 12,
    height: 8,
};

/// One obstacle per this many playable cells
pub(crate) const OBSTACLE_DENSITY: usize = 20;

/// Hard ceiling on the number of obstacles per session
pub(crate) const MAX_OBSTACLES: usize = 15;

/// Give up scattering obstacles after this many random draws
pub(crate) const OBSTACLE_MAX_ATTEMPTS: usize = 256;

/// Keep this many cells in front of the snake's starting position free of
/// obstacles
pub(crate) const FORWARDS_CLEARANCE: usize = 7;

/// Head glyph while the snake is moving up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Head glyph while the snake is moving down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Head glyph while the snake is moving right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Head glyph while the snake is moving left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for every body segment behind the head
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph replacing the head after it hit an obstacle, a wall, or the body
pub(crate) const COLLISION_SYMBOL: char = '×';

/// How the snake's head and body are drawn
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// How the food is drawn
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// How obstacles are drawn
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// How [`COLLISION_SYMBOL`] is drawn
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// How key codes named in the interface are drawn
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// How the score bar over the board is drawn
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// How the selected row of a menu is drawn
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
