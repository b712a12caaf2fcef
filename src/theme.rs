use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const UNAVAILABLE_STYLE: Style = BASE_STYLE
    .fg(Color::DarkGray)
    .add_modifier(Modifier::CROSSED_OUT);

pub(crate) const DAILY_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightBlue);

pub(crate) const WEEKLY_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen);

pub(crate) const MONTHLY_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightMagenta);

// Layered on top of whatever the cell already has
pub(crate) const HOVER_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

pub(crate) const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

pub(crate) const HELP_STYLE: Style = BASE_STYLE;
