use crate::app::Screen;
use crate::command::Command;
use crate::game::{Bounds, Game};
use crate::menu::MainMenu;
use crate::util::{center_rect, Globals};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};
use std::io;

/// Screen shown instead of a game when the terminal is too small to hold a
/// playable board.  Waits for a resize (which starts the game) or a key
/// (which goes back to the menu).
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ResizeNotice {
    globals: Globals,
}

impl ResizeNotice {
    const WIDTH: u16 = 44;
    const HEIGHT: u16 = 5;

    pub(crate) fn new(globals: Globals) -> ResizeNotice {
        ResizeNotice { globals }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&self, event: Event) -> Option<Screen> {
        match event {
            Event::Resize(width, height) => {
                let wrap = !self.globals.options.walls;
                Bounds::for_terminal(Size::new(width, height), wrap)
                    .map(|bounds| Screen::Game(Game::new(self.globals.clone(), bounds)))
            }
            _ => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit | Command::Q => Some(Screen::Quit),
                _ => Some(Screen::Main(MainMenu::new(self.globals.clone()))),
            },
        }
    }
}

impl Widget for &ResizeNotice {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(
            area,
            Size {
                width: ResizeNotice::WIDTH,
                height: ResizeNotice::HEIGHT,
            },
        );
        let block = Block::bordered()
            .title(" TERMINAL TOO SMALL ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        Text::from_iter([
            Line::from("The board does not fit in this terminal."),
            Line::from(format!(
                "Resize it to at least {width}×{height} cells,",
                width = Bounds::MIN_TERMINAL.width,
                height = Bounds::MIN_TERMINAL.height,
            )),
            Line::from("or press any key to return to the menu."),
        ])
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn test_globals() -> Globals {
        let mut globals = Globals::default();
        globals.config.files.save_options = false;
        globals.config.files.save_scores = false;
        globals
    }

    #[test]
    fn resize_to_fit_starts_a_game() {
        let notice = ResizeNotice::new(test_globals());
        assert!(matches!(
            notice.handle_event(Event::Resize(80, 24)),
            Some(Screen::Game(_))
        ));
    }

    #[test]
    fn resize_still_too_small_keeps_waiting() {
        let notice = ResizeNotice::new(test_globals());
        assert!(notice.handle_event(Event::Resize(10, 5)).is_none());
    }

    #[test]
    fn any_key_returns_to_menu() {
        let notice = ResizeNotice::new(test_globals());
        assert!(matches!(
            notice.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(Screen::Main(_))
        ));
    }

    #[test]
    fn quit_keys_quit() {
        let notice = ResizeNotice::new(test_globals());
        assert!(matches!(
            notice.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn render_message() {
        let notice = ResizeNotice::new(test_globals());
        let area = Rect::new(0, 0, 50, 11);
        let mut buffer = Buffer::empty(area);
        (&notice).render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "   ┌─────────── TERMINAL TOO SMALL ───────────┐   ",
            "   │ The board does not fit in this terminal. │   ",
            "   │ Resize it to at least 16×13 cells,       │   ",
            "   │ or press any key to return to the menu.  │   ",
            "   └──────────────────────────────────────────┘   ",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
