mod board;
mod direction;
mod help;
mod paused;
mod snake;
pub(crate) use self::board::Bounds;
use self::board::Board;
use self::direction::Direction;
use self::help::Help;
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// One game session, from the first tick until the player leaves for the
/// menu, restarts, or quits
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    snake: Snake,
    food: Option<Position>,
    board: Board,
    tick_interval: Duration,
    state: GameState,
    globals: Globals,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals, bounds: Bounds) -> Self {
        Game::new_with_rng(globals, bounds, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, bounds: Bounds, rng: R) -> Game<R> {
        let board = Board::new(bounds);
        let (start, heading) = board.snake_start;
        let mut game = Game {
            rng,
            score: 0,
            snake: Snake::new(start, heading),
            food: None,
            board,
            tick_interval: consts::INITIAL_TICK,
            state: GameState::Running,
            globals,
            next_tick: None,
        };
        game.place_food();
        if game.globals.options.obstacles {
            let mut occupied = game.snake.body.iter().copied().collect::<HashSet<Position>>();
            occupied.extend(game.food);
            game.board.scatter_obstacles(&mut game.rng, &occupied);
        }
        game
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if !self.running() {
            // Modal states have no ticks to run, so a blocking read is fine
            return Ok(self.handle_event(read()?));
        }
        let deadline = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + self.tick_interval);
        let wait = deadline.saturating_duration_since(Instant::now());
        if !wait.is_zero() && poll(wait)? {
            Ok(self.handle_event(read()?))
        } else {
            self.advance();
            self.next_tick = None;
            Ok(None)
        }
    }

    /// Run one simulation tick: move the snake, check walls, obstacles, and
    /// the snake itself, then handle food.  Does nothing unless the session
    /// is running.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let bounds = self.board.bounds;
        // Growth is booked before the move so that the tail survives the
        // very tick the food is eaten on.
        let eating = self
            .snake
            .next_head(bounds)
            .is_some_and(|pos| self.food == Some(pos));
        if eating {
            self.snake.grow(self.globals.options.difficulty.growth());
        }
        if !self.snake.advance(bounds) {
            self.die();
            return;
        }
        let head = self.snake.head();
        if self.board.obstacles.contains(&head) {
            self.die();
            return;
        }
        if self.snake.self_collision() {
            self.die();
            return;
        }
        if eating {
            self.score += consts::POINTS_PER_FOOD;
            self.tick_interval = self
                .tick_interval
                .saturating_sub(consts::SPEEDUP_PER_FOOD)
                .max(consts::MIN_TICK);
            self.place_food();
            if self.food.is_none() {
                // The snake owns every cell of the board.
                self.state = GameState::Cleared;
                self.finalize_score();
            }
        }
    }

    /// Put the food on a uniformly-chosen free cell, or on no cell at all
    /// if the snake and the obstacles cover the whole board
    fn place_food(&mut self) {
        let mut occupied = self.board.obstacles.clone();
        occupied.extend(self.snake.body.iter().copied());
        self.food = self
            .board
            .bounds
            .positions()
            .filter(move |pos| !occupied.contains(pos))
            .choose(&mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                    return None;
                }
                let command = Command::from_key_event(event.as_key_press_event()?)?;
                if let Some(heading) = steering(command) {
                    self.snake.change_direction(heading);
                    return None;
                }
                match command {
                    Command::Quit => return Some(Screen::Quit),
                    Command::Esc | Command::P => self.pause(),
                    Command::Help => self.state = GameState::Help(None),
                    Command::Faster => self.adjust_speed(true),
                    Command::Slower => self.adjust_speed(false),
                    _ => (),
                }
            }
            GameState::Paused(mut paused) => {
                if let Some(key) = event.as_key_press_event() {
                    if Command::from_key_event(key) == Some(Command::Help) {
                        self.state = GameState::Help(Some(paused));
                        return None;
                    }
                }
                match paused.handle_event(event) {
                    Some(PauseOpt::Resume) => self.resume(),
                    Some(PauseOpt::Restart) => return Some(self.restart()),
                    Some(PauseOpt::MainMenu) => return Some(self.to_menu()),
                    Some(PauseOpt::Quit) => return Some(Screen::Quit),
                    None => self.state = GameState::Paused(paused),
                }
            }
            GameState::Help(prior) => {
                let key = event.as_key_press_event()?;
                if Command::from_key_event(key) == Some(Command::Quit) {
                    return Some(Screen::Quit);
                }
                match prior {
                    Some(paused) => self.state = GameState::Paused(paused),
                    None => self.resume(),
                }
            }
            GameState::Dead | GameState::Cleared => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R => return Some(self.restart()),
                    Command::M => return Some(self.to_menu()),
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }

    /// A fresh session on the same board geometry, settings retained
    fn restart(&self) -> Screen {
        Screen::Game(Game::new(self.globals.clone(), self.board.bounds))
    }

    fn to_menu(&self) -> Screen {
        Screen::Main(crate::menu::MainMenu::new(self.globals.clone()))
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Paused::new());
    }

    fn resume(&mut self) {
        self.state = GameState::Running;
        // Don't count time spent on a modal screen against the next tick
        self.next_tick = None;
    }

    fn adjust_speed(&mut self, faster: bool) {
        self.tick_interval = if faster {
            self.tick_interval
                .saturating_sub(consts::MANUAL_SPEED_STEP)
                .max(consts::MIN_TICK)
        } else {
            self.tick_interval
                .saturating_add(consts::MANUAL_SPEED_STEP)
                .min(consts::MAX_TICK)
        };
        self.next_tick = None;
    }

    fn die(&mut self) {
        self.state = GameState::Dead;
        self.finalize_score();
    }

    /// Fold the session score into the high-score table and persist it.  A
    /// broken scores file must never interrupt play, so save errors are
    /// dropped here.
    fn finalize_score(&mut self) {
        if self.globals.scores.record(self.score) {
            let _ = self.globals.config.save_scores(&self.globals.scores);
        }
    }
}

/// The heading a command steers the snake towards, if it is a steering
/// command at all
fn steering(cmd: Command) -> Option<Direction> {
    match cmd {
        Command::Up => Some(Direction::North),
        Command::Down => Some(Direction::South),
        Command::Left => Some(Direction::West),
        Command::Right => Some(Direction::East),
        _ => None,
    }
}

/// Build a line of control hints, each a label followed by its key
fn keyed_line(prefix: &'static str, entries: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::raw(prefix);
    for (i, &(label, key)) in entries.iter().enumerate() {
        if i > 0 {
            line.push_span(" — ");
        }
        line.push_span(label);
        line.push_span("(");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {score}   High: {high}   Speed: {speed} ms   {difficulty}",
                score = self.score,
                high = self.globals.scores.get(),
                speed = self.tick_interval.as_millis(),
                difficulty = self.globals.options.difficulty,
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board_size = self.board.bounds.size();
        let frame_size = Size::new(
            board_size.width.saturating_add(2),
            board_size.height.saturating_add(2),
        );
        let block_area = center_rect(block_area, frame_size);
        if self.board.bounds.wrap {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &pos in self.snake.body.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(pos) = self.food {
            canvas.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &pos in &self.board.obstacles {
            canvas.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        // The head goes on last so a collision marker covers whatever got hit
        let (head_glyph, head_style) = match self.state {
            GameState::Dead => (consts::COLLISION_SYMBOL, consts::COLLISION_STYLE),
            _ => (self.snake.head_symbol(), consts::SNAKE_STYLE),
        };
        canvas.draw_cell(self.snake.head(), head_glyph, head_style);

        match self.state {
            GameState::Running => {
                keyed_line(
                    " ",
                    &[
                        ("Pause ", "p"),
                        ("Help ", "?"),
                        ("Speed ", "+/-"),
                        ("Quit ", "q"),
                    ],
                )
                .render(msg2_area, buf);
            }
            GameState::Paused(paused) => {
                let popup = center_rect(display, Size::new(Paused::WIDTH, Paused::HEIGHT));
                paused.render(popup, buf);
            }
            GameState::Help(_) => {
                let popup = center_rect(display, Size::new(Help::WIDTH, Help::HEIGHT));
                Help.render(popup, buf);
            }
            GameState::Dead | GameState::Cleared => {
                let banner = if self.state == GameState::Dead {
                    " — GAME OVER —"
                } else {
                    " — BOARD CLEARED —"
                };
                Span::from(banner).render(msg1_area, buf);
                keyed_line(
                    " Choose One: ",
                    &[("Restart ", "r"), ("Main Menu ", "m"), ("Quit ", "q")],
                )
                .render(msg2_area, buf);
            }
        }
    }
}

/// Buffer wrapper that maps board cells to screen cells and drops writes
/// landing outside the addressable area
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn cell_at(&mut self, pos: Position) -> Option<&mut Cell> {
        let x = self.area.x.checked_add(pos.x)?;
        let y = self.area.y.checked_add(pos.y)?;
        self.buf.cell_mut((x, y))
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.cell_at(pos) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.cell_at(pos) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Border drawn around a wrapping board, dotted to suggest that the edge is
/// not solid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let right = area.width - 1;
        let bottom = area.height - 1;
        let mut canvas = Canvas { area, buf };
        for x in 0..=right {
            let glyph = if x == 0 || x == right { '·' } else { '⋯' };
            canvas.draw_char(Position::new(x, 0), glyph);
            canvas.draw_char(Position::new(x, bottom), glyph);
        }
        for y in 1..bottom {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(right, y), '⋮');
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    /// The key-reference overlay, remembering the pause menu to go back to
    /// (if any)
    Help(Option<Paused>),
    Dead,
    /// The snake has filled the board and there is no free cell left to
    /// place food in
    Cleared,
}
