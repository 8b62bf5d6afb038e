use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// Menu popup shown while the simulation is frozen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    selection: PauseOpt,
}

impl Paused {
    /// Size of the `Rect` the popup should be rendered into
    pub(super) const WIDTH: u16 = 19;
    pub(super) const HEIGHT: u16 = 6;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Feed one input event to the menu.  `Some` means the player picked an
    /// option.
    pub(super) fn handle_event(&mut self, event: Event) -> Option<PauseOpt> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(choice) = PauseOpt::hotkey(cmd) {
            return Some(choice);
        }
        self.selection = match cmd {
            Command::Enter => return Some(self.selection),
            Command::Up => self.selection.prev().unwrap_or(self.selection),
            Command::Down => self.selection.next().unwrap_or(self.selection),
            Command::Next => self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => PauseOpt::min(),
            Command::End => PauseOpt::max(),
            _ => self.selection,
        };
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    Resume,
    Restart,
    MainMenu,
    Quit,
}

impl PauseOpt {
    /// The option a key picks directly, without it having to be selected
    fn hotkey(cmd: Command) -> Option<PauseOpt> {
        match cmd {
            Command::Esc | Command::P => Some(PauseOpt::Resume),
            Command::R => Some(PauseOpt::Restart),
            Command::M => Some(PauseOpt::MainMenu),
            Command::Q | Command::Quit => Some(PauseOpt::Quit),
            _ => None,
        }
    }

    fn label(self) -> (&'static str, &'static str) {
        match self {
            PauseOpt::Resume => ("Resume", "p"),
            PauseOpt::Restart => ("Restart", "r"),
            PauseOpt::MainMenu => ("Main Menu", "m"),
            PauseOpt::Quit => ("Quit", "q"),
        }
    }

    fn to_line(self, selected: bool) -> Line<'static> {
        let (name, key) = self.label();
        let line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(name),
            Span::raw(" ("),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        if selected {
            line.style(consts::MENU_SELECTION_STYLE)
        } else {
            line
        }
    }
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ─────┐
     * │ » Resume (p)    │
     * │   Restart (r)   │
     * │   Main Menu (m) │
     * │   Quit (q)      │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn resume_keys() {
        let mut paused = Paused::new();
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Esc.into())),
            Some(PauseOpt::Resume)
        );
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Char('p').into())),
            Some(PauseOpt::Resume)
        );
    }

    #[test]
    fn select_and_confirm() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_event(Event::Key(KeyCode::Down.into())), None);
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(PauseOpt::Restart)
        );
    }

    #[test]
    fn selection_saturates() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_event(Event::Key(KeyCode::Up.into())), None);
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(PauseOpt::Resume)
        );
        for _ in 0..6 {
            assert_eq!(paused.handle_event(Event::Key(KeyCode::Down.into())), None);
        }
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(PauseOpt::Quit)
        );
    }

    #[test]
    fn tab_wraps() {
        let mut paused = Paused::new();
        for _ in 0..PauseOpt::LENGTH {
            assert_eq!(paused.handle_event(Event::Key(KeyCode::Tab.into())), None);
        }
        assert_eq!(
            paused.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(PauseOpt::Resume)
        );
    }
}
