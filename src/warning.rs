use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing a recoverable problem.  Whatever screen is underneath
/// stays frozen until the player acknowledges it with Enter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    /// The message and its cause chain, pre-wrapped to [`Warning::TEXT_WIDTH`]
    lines: Vec<String>,
}

impl Warning {
    const TEXT_WIDTH: u16 = 48;

    fn new(msg: &str, causes: &[String]) -> Warning {
        let mut lines = Vec::new();
        push_wrapped(&mut lines, msg, "", "");
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            if let [only] = causes {
                push_wrapped(&mut lines, only, "    ", "    ");
            } else {
                for (i, cause) in causes.iter().enumerate() {
                    let number = format!("{i:>5}: ");
                    push_wrapped(&mut lines, cause, &number, "       ");
                }
            }
        }
        Warning { lines }
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }
}

/// Wrap `msg` to the popup's text width and append the resulting lines
fn push_wrapped(lines: &mut Vec<String>, msg: &str, first_indent: &str, indent: &str) {
    let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
        .break_words(true)
        .initial_indent(first_indent)
        .subsequent_indent(indent);
    lines.extend(textwrap::wrap(msg, opts).into_iter().map(Cow::into_owned));
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut causes = Vec::new();
        let mut src = e.source();
        while let Some(cause) = src {
            causes.push(cause.to_string());
            src = cause.source();
        }
        Warning::new(&e.to_string(), &causes)
    }
}

impl Widget for &Warning {
    // Expects the whole display area, not a pre-sized popup rect; the popup
    // centers itself.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        let popup_size = Size {
            width: Warning::TEXT_WIDTH + 4,
            height: text_height.saturating_add(4).min(area.height),
        };
        let popup = center_rect(area, popup_size);
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .spacing(1)
            .areas(block.inner(popup));
        Clear.render(popup, buf);
        block.render(popup, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}
