use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The gestures the game reacts to, regardless of which key produced them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Home,
    End,
    Next,
    Prev,
    Esc,
    Help,
    Faster,
    Slower,
    P,
    Q,
    R,
    M,
    O,
    B,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let plain = ev.modifiers.is_empty();
        match ev.code {
            KeyCode::Char('c') if ev.modifiers == KeyModifiers::CONTROL => Some(Command::Quit),
            KeyCode::Up | KeyCode::Char('w' | 'k') if plain => Some(Command::Up),
            KeyCode::Down | KeyCode::Char('s' | 'j') if plain => Some(Command::Down),
            KeyCode::Left | KeyCode::Char('a' | 'h') if plain => Some(Command::Left),
            KeyCode::Right | KeyCode::Char('d' | 'l') if plain => Some(Command::Right),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Char(' ') if plain => Some(Command::Space),
            KeyCode::Home => Some(Command::Home),
            KeyCode::End => Some(Command::End),
            KeyCode::Tab => Some(Command::Next),
            KeyCode::BackTab => Some(Command::Prev),
            KeyCode::Esc => Some(Command::Esc),
            // `?` and `+` arrive shifted on most layouts
            KeyCode::Char('?') => Some(Command::Help),
            KeyCode::Char('+' | '=') => Some(Command::Faster),
            KeyCode::Char('-') if plain => Some(Command::Slower),
            KeyCode::Char('p') if plain => Some(Command::P),
            KeyCode::Char('q') if plain => Some(Command::Q),
            KeyCode::Char('r') if plain => Some(Command::R),
            KeyCode::Char('m') if plain => Some(Command::M),
            KeyCode::Char('o') if plain => Some(Command::O),
            KeyCode::Char('b') if plain => Some(Command::B),
            _ => None,
        }
    }
}
