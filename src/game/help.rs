use crate::consts;
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

/// A modal key-reference overlay, dismissed by any key
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Help;

impl Help {
    /// The height that should be used for the `Rect` passed to
    /// `Help::render()`
    pub(super) const HEIGHT: u16 = 9;

    /// The width that should be used for the `Rect` passed to
    /// `Help::render()`
    pub(super) const WIDTH: u16 = 26;

    fn to_line(key: &'static str, action: &'static str) -> Line<'static> {
        Line::from_iter([
            Span::styled(format!("{key:12}"), consts::KEY_STYLE),
            Span::raw(action),
        ])
    }
}

impl Widget for Help {
    /*
     * ┌───────── HELP ─────────┐
     * │ ←↓↑→ wasd  steer       │
     * │ p Esc      pause       │
     * │ + -        speed       │
     * │ r          restart     │
     * │ q          quit        │
     * │                        │
     * │ any key to go back     │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" HELP ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Help::to_line("←↓↑→ wasd", "steer"),
            Help::to_line("p Esc", "pause"),
            Help::to_line("+ -", "speed"),
            Help::to_line("r", "restart"),
            Help::to_line("q", "quit"),
            Line::default(),
            Line::from("any key to go back"),
        ];
        for (line, row) in lines.iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
