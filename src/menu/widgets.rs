use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT_WIDTH: u16 = 17;
    const TEXT_HEIGHT: u16 = 3;
    const BODY_LENGTH: u16 = 12;
    const FOOD_GUTTER: u16 = 2;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::TEXT_WIDTH;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
        "█ █ █ █▀█ █▀▀ █▀█",
        "▀▄▀ █ █▀▀ █▀▀ █▀▄",
        " ▀  ▀ ▀   ▀▀▀ ▀ ▀",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [text_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(text_area, buf);
        // A little snake bearing down on its food, under the title
        let [body_area, head_area, _, food_area] = Layout::horizontal([
            Constraint::Length(Self::BODY_LENGTH),
            Constraint::Length(1),
            Constraint::Length(Self::FOOD_GUTTER),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(diagram_area);
        fill(buf, body_area, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        fill(buf, head_area, consts::SNAKE_HEAD_EAST_SYMBOL, consts::SNAKE_STYLE);
        fill(buf, food_area, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
    }
}

/// Set every cell of `area` to `symbol`
fn fill(buf: &mut Buffer, area: Rect, symbol: char, style: Style) {
    for p in area.positions() {
        if let Some(cell) = buf.cell_mut(p) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 21;

    fn key_row(prefix: &'static str, keys: [&'static str; 4]) -> Line<'static> {
        let mut line = Line::raw(prefix);
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                line.push_span(" ");
            }
            line.push_span(Span::styled(key, consts::KEY_STYLE));
        }
        line
    }
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Steer the snake with:"),
            Self::key_row("       ", ["←", "↓", "↑", "→"]),
            Self::key_row("   or: ", ["h", "j", "k", "l"]),
            Self::key_row("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the food, but"),
            Line::from("don't hit yourself!"),
        ]);
        debug_assert_eq!(
            (text.width(), text.height()),
            (usize::from(Self::WIDTH), usize::from(Self::HEIGHT)),
            "Instructions text drifted from its declared dimensions"
        );
        text.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod logo {
        use super::*;

        #[test]
        fn test_render() {
            let mut buffer = Buffer::empty(Rect::new(0, 0, 25, 8));
            Logo.render(Rect::new(3, 1, Logo::WIDTH, Logo::HEIGHT), &mut buffer);
            #[rustfmt::skip]
            let mut expected = Buffer::with_lines([
                "",
                "   █ █ █ █▀█ █▀▀ █▀█     ",
                "   ▀▄▀ █ █▀▀ █▀▀ █▀▄     ",
                "    ▀  ▀ ▀   ▀▀▀ ▀ ▀     ",
                "",
                "    ⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬>  ●     ",
                "",
                "",
            ]);
            expected.set_style(Rect::new(3, 1, 17, 3), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(4, 5, 13, 1), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(19, 5, 1, 1), consts::FOOD_STYLE);
            pretty_assertions::assert_eq!(buffer, expected);
        }

        #[test]
        fn text_width() {
            assert!(Logo::TEXT
                .iter()
                .all(|ln| ln.chars().count() == usize::from(Logo::TEXT_WIDTH)));
        }
    }

    mod instructions {
        use super::*;

        #[test]
        fn key_row_layout() {
            let line = Instructions::key_row("   or: ", ["a", "s", "w", "d"]);
            assert_eq!(line.to_string(), "   or: a s w d");
        }
    }
}
