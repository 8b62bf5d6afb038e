mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::{Bounds, Game};
use crate::options::{Adjustable, OptKey, OptValue, Options};
use crate::resize::ResizeNotice;
use crate::util::{get_display_area, EnumExt, Globals};
use crossterm::event::{read, Event};
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    globals: Globals,
    selection: Selection,
    options: OptionsMenu,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        let options = OptionsMenu::new(globals.options);
        MainMenu {
            globals,
            selection: Selection::default(),
            options,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        let event = read()?;
        let size = crossterm::terminal::size().map(Size::from)?;
        Ok(self.handle_event(event, size))
    }

    fn handle_event(&mut self, event: Event, size: Size) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        let on_options = self.selection == Selection::Options;
        match cmd {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::P => return Some(self.play(size)),
            Command::O => self.options.toggle_row(OptKey::Obstacles),
            Command::B => self.options.toggle_row(OptKey::Walls),
            Command::Home => self.select(Selection::PlayButton, None),
            Command::End => self.select(Selection::QuitButton, None),
            Command::Enter => match self.selection {
                Selection::PlayButton => return Some(self.play(size)),
                Selection::Options => self.options.toggle_selected(),
                Selection::QuitButton => return Some(Screen::Quit),
            },
            Command::Space if on_options => self.options.toggle_selected(),
            Command::Left if on_options => self.options.adjust_selected(false),
            Command::Right if on_options => self.options.adjust_selected(true),
            Command::Up => match self.selection {
                Selection::PlayButton => (),
                Selection::Options => {
                    let landing = self.options.select_prev_row();
                    self.leave_options_if(landing);
                }
                Selection::QuitButton => self.select(Selection::Options, Some(false)),
            },
            Command::Down => match self.selection {
                Selection::PlayButton => self.select(Selection::Options, Some(true)),
                Selection::Options => {
                    let landing = self.options.select_next_row();
                    self.leave_options_if(landing);
                }
                Selection::QuitButton => (),
            },
            Command::Next => match self.selection {
                Selection::PlayButton => self.select(Selection::Options, Some(true)),
                Selection::Options => {
                    let landing = self.options.select_next_row();
                    self.leave_options_if(landing);
                }
                Selection::QuitButton => self.select(Selection::PlayButton, None),
            },
            Command::Prev => match self.selection {
                Selection::PlayButton => self.select(Selection::QuitButton, None),
                Selection::Options => {
                    let landing = self.options.select_prev_row();
                    self.leave_options_if(landing);
                }
                Selection::QuitButton => self.select(Selection::Options, Some(false)),
            },
            _ => (),
        }
        None
    }

    /// Start a game on a board sized for the terminal, or show the resize
    /// notice when the terminal cannot fit one
    fn play(&self, size: Size) -> Screen {
        let options = self.options.to_options();
        let mut globals = self.globals.clone();
        globals.options = options;
        let _ = globals.config.save_options(options);
        match Bounds::for_terminal(size, !options.walls) {
            Some(bounds) => Screen::Game(Game::new(globals, bounds)),
            None => Screen::Resize(ResizeNotice::new(globals)),
        }
    }

    fn select(&mut self, selection: Selection, first_option: Option<bool>) {
        self.selection = selection;
        if selection == Selection::Options {
            self.options.selection = first_option.map(|first| {
                if first {
                    OptKey::min()
                } else {
                    OptKey::max()
                }
            });
        }
    }

    /// Apply a screen transition produced by walking off the end of the
    /// options rows
    fn leave_options_if(&mut self, landing: Option<Selection>) {
        if let Some(sel) = landing {
            self.select(sel, None);
        }
    }

    fn button(label: &'static str, key: &'static str, selected: bool) -> Line<'static> {
        let style = if selected {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled(format!("[{label} ("), style),
            Span::styled(key, consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
        .centered()
    }
}

/// Center a width-`width` strip horizontally within `area`
fn hcenter(area: Rect, width: u16) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    area
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, options_area, quit_area] = Layout::vertical([
            Logo::HEIGHT,
            Instructions::HEIGHT,
            1,
            OptionsMenu::HEIGHT,
            1,
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(display);

        Logo.render(hcenter(logo_area, Logo::WIDTH), buf);
        Instructions.render(hcenter(instructions_area, Instructions::WIDTH), buf);
        MainMenu::button("Play", "p", self.selection == Selection::PlayButton)
            .render(play_area, buf);
        (&self.options).render(hcenter(options_area, OptionsMenu::WIDTH), buf);
        MainMenu::button("Quit", "q", self.selection == Selection::QuitButton)
            .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    Options,
    QuitButton,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct OptionsMenu {
    /// `Some(key)` while the main-menu cursor is inside the options box,
    /// pointing at the row for `key`
    selection: Option<OptKey>,
    settings: EnumMap<OptKey, OptValue>,
}

impl OptionsMenu {
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const LABEL_VALUE_GUTTER: u16 = 2;
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = OptKey::LENGTH as u16 + 2; // rows plus the border
    const WIDTH: u16 = Self::POINTER_WIDTH
        + OptKey::DISPLAY_WIDTH
        + Self::LABEL_VALUE_GUTTER
        + OptValue::DISPLAY_WIDTH
        + 2 * Self::HORIZONTAL_PADDING
        + 2; // columns plus the border

    fn new(options: Options) -> Self {
        let settings = EnumMap::from_iter(OptKey::iter().map(|key| (key, options.get(key))));
        OptionsMenu {
            selection: None,
            settings,
        }
    }

    fn to_options(&self) -> Options {
        let mut opts = Options::default();
        for key in OptKey::iter() {
            opts.set(key, self.settings[key]);
        }
        opts
    }

    /// Move the cursor up one row.  Walking off the top hands the cursor
    /// back to the main menu.
    fn select_prev_row(&mut self) -> Option<Selection> {
        self.selection = self.selection?.prev();
        if self.selection.is_none() {
            Some(Selection::PlayButton)
        } else {
            None
        }
    }

    /// Likewise downwards
    fn select_next_row(&mut self) -> Option<Selection> {
        self.selection = self.selection?.next();
        if self.selection.is_none() {
            Some(Selection::QuitButton)
        } else {
            None
        }
    }

    fn adjust_selected(&mut self, increase: bool) {
        if let Some(key) = self.selection {
            if increase {
                self.settings[key].increase();
            } else {
                self.settings[key].decrease();
            }
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(key) = self.selection {
            self.settings[key].toggle();
        }
    }

    /// Flip a row without it having to be selected, for the dedicated
    /// toggle keys
    fn toggle_row(&mut self, key: OptKey) {
        self.settings[key].toggle();
    }
}

impl Widget for &OptionsMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Options: ")
            .padding(Padding::horizontal(OptionsMenu::HORIZONTAL_PADDING));
        let rows_area = block.inner(area);
        block.render(area, buf);
        for (key, row) in OptKey::iter().zip(rows_area.rows()) {
            let selected = self.selection == Some(key);
            let row_style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let text = format!(
                "{marker:<mw$}{key:<kw$}{gap:gw$}{value}",
                marker = if selected { "»" } else { "" },
                mw = usize::from(OptionsMenu::POINTER_WIDTH),
                kw = usize::from(OptKey::DISPLAY_WIDTH),
                gap = "",
                gw = usize::from(OptionsMenu::LABEL_VALUE_GUTTER),
                value = self.settings[key],
            );
            Span::styled(text, row_style).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_globals() -> Globals {
        let mut globals = Globals::default();
        globals.config.files.save_options = false;
        globals.config.files.save_scores = false;
        globals
    }

    mod main_menu {
        use super::*;
        use crate::options::Difficulty;
        use crossterm::event::KeyCode;
        use ratatui::{buffer::Buffer, layout::Rect};

        const DISPLAY: Size = Size {
            width: 80,
            height: 24,
        };

        #[test]
        fn draw_initial() {
            let menu = MainMenu::new(test_globals());
            let area = Rect::new(0, 0, 80, 24);
            let mut buffer = Buffer::empty(area);
            menu.render(area, &mut buffer);
            let mut expected = Buffer::with_lines([
                "                                █ █ █ █▀█ █▀▀ █▀█                               ",
                "                                ▀▄▀ █ █▀▀ █▀▀ █▀▄                               ",
                "                                 ▀  ▀ ▀   ▀▀▀ ▀ ▀                               ",
                "                                                                                ",
                "                                 ⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬>  ●                              ",
                "                                                                                ",
                "                              Steer the snake with:                             ",
                "                                     ← ↓ ↑ →                                    ",
                "                                 or: h j k l                                    ",
                "                                 or: a s w d                                    ",
                "                              Eat the food, but                                 ",
                "                              don't hit yourself!                               ",
                "                                                                                ",
                "                                   [Play (p)]                                   ",
                "                                                                                ",
                "                          ┌ Options: ────────────────┐                         ",
                "                          │   Difficulty  ◀ Normal ▶ │                         ",
                "                          │   Obstacles      [ ]     │                         ",
                "                          │   Walls          [✓]     │                         ",
                "                          └──────────────────────────┘                         ",
                "                                                                                ",
                "                                   [Quit (q)]                                   ",
                "                                                                                ",
                "                                                                                ",
            ]);
            expected.set_style(Rect::new(32, 0, 17, 3), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(33, 4, 13, 1), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(48, 4, 1, 1), consts::FOOD_STYLE);
            // The key glyphs on the three steering-hint rows:
            for y in 7..10 {
                for x in [37, 39, 41, 43] {
                    expected.set_style(Rect::new(x, y, 1, 1), consts::KEY_STYLE);
                }
            }
            expected.set_style(Rect::new(42, 13, 1, 1), consts::KEY_STYLE);
            expected.set_style(Rect::new(35, 13, 10, 1), consts::MENU_SELECTION_STYLE);
            expected.set_style(Rect::new(42, 21, 1, 1), consts::KEY_STYLE);
            pretty_assertions::assert_eq!(buffer, expected);
        }

        #[test]
        fn cycle_difficulty_on_options_row() {
            let mut menu = MainMenu::new(test_globals());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Down.into()), DISPLAY)
                .is_none());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Right.into()), DISPLAY)
                .is_none());
            assert_eq!(menu.options.to_options().difficulty, Difficulty::Hard);
            assert!(menu
                .handle_event(Event::Key(KeyCode::Right.into()), DISPLAY)
                .is_none());
            assert_eq!(menu.options.to_options().difficulty, Difficulty::Easy);
            assert!(menu
                .handle_event(Event::Key(KeyCode::Left.into()), DISPLAY)
                .is_none());
            assert_eq!(menu.options.to_options().difficulty, Difficulty::Hard);
        }

        #[test]
        fn dedicated_toggle_keys() {
            let mut menu = MainMenu::new(test_globals());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Char('o').into()), DISPLAY)
                .is_none());
            assert!(menu.options.to_options().obstacles);
            assert!(menu
                .handle_event(Event::Key(KeyCode::Char('b').into()), DISPLAY)
                .is_none());
            assert!(!menu.options.to_options().walls);
            assert!(menu
                .handle_event(Event::Key(KeyCode::Char('b').into()), DISPLAY)
                .is_none());
            assert!(menu.options.to_options().walls);
        }

        #[test]
        fn toggle_selected_row_with_space() {
            let mut menu = MainMenu::new(test_globals());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Down.into()), DISPLAY)
                .is_none());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Down.into()), DISPLAY)
                .is_none());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Char(' ').into()), DISPLAY)
                .is_none());
            assert!(menu.options.to_options().obstacles);
        }

        #[test]
        fn play_starts_a_game() {
            let mut menu = MainMenu::new(test_globals());
            let screen = menu.handle_event(Event::Key(KeyCode::Char('p').into()), DISPLAY);
            assert!(matches!(screen, Some(Screen::Game(_))));
        }

        #[test]
        fn play_on_a_tiny_terminal_asks_for_a_resize() {
            let mut menu = MainMenu::new(test_globals());
            let screen =
                menu.handle_event(Event::Key(KeyCode::Char('p').into()), Size::new(10, 5));
            assert!(matches!(screen, Some(Screen::Resize(_))));
        }

        #[test]
        fn quit() {
            let mut menu = MainMenu::new(test_globals());
            assert!(matches!(
                menu.handle_event(Event::Key(KeyCode::Char('q').into()), DISPLAY),
                Some(Screen::Quit)
            ));
        }

        /// Tab walks Play → each options row → Quit → Play and back into the
        /// first options row
        #[test]
        fn tab_wraparound() {
            let mut menu = MainMenu::new(test_globals());
            assert_eq!(menu.options.selection, None);
            for _ in OptKey::iter() {
                assert!(menu
                    .handle_event(Event::Key(KeyCode::Tab.into()), DISPLAY)
                    .is_none());
            }
            assert_eq!(menu.options.selection, Some(OptKey::max()));
            assert!(menu
                .handle_event(Event::Key(KeyCode::Tab.into()), DISPLAY)
                .is_none());
            assert_eq!(menu.options.selection, None);
            assert!(menu
                .handle_event(Event::Key(KeyCode::Tab.into()), DISPLAY)
                .is_none());
            assert!(menu
                .handle_event(Event::Key(KeyCode::Tab.into()), DISPLAY)
                .is_none());
            assert_eq!(menu.options.selection, Some(OptKey::min()));
        }
    }

    mod options_menu {
        use super::*;
        use crate::options::Difficulty;

        #[test]
        fn settings_survive_the_menu() {
            let all = [
                Options::default(),
                Options {
                    difficulty: Difficulty::Hard,
                    obstacles: true,
                    walls: false,
                },
            ];
            for opts in all {
                assert_eq!(OptionsMenu::new(opts).to_options(), opts);
            }
        }
    }
}
