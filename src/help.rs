use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "h, l, LEFT, RIGHT   Move one day\n",
    "k, j, UP, DOWN      Move one week\n",
    "ENTER, SPACE        Pick the day under the cursor\n",
    "n, PAGE DOWN        Show the next month\n",
    "p, PAGE UP          Show the previous month\n",
    "a                   Apply the picked range\n",
    "c, ESC              Cancel changes\n",
    "o                   Open or close the picker\n",
    "?                   Show this help\n",
    "q                   Quit\n",
    "\n",
    "Press the Any Key to dismiss.\n",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Border on each side plus one column of padding
        let width = TEXT
            .iter()
            .map(|s| s.trim_end().chars().count())
            .max()
            .and_then(|w| u16::try_from(w + 4).ok())
            .unwrap_or(u16::MAX);
        let height = u16::try_from(TEXT.len() + 2).unwrap_or(u16::MAX);
        let [help_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [help_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(help_area);
        let block = Block::bordered()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        Clear.render(help_area, buf);
        Paragraph::new(Text::raw(TEXT.concat()))
            .block(block)
            .style(self.0)
            .render(help_area, buf);
    }
}
