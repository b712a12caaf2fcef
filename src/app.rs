use crate::calendar::{OutOfTimeError, PickerView, RangePicker};
use crate::help::Help;
use crate::theme::{BASE_STYLE, HELP_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io::{self, Write};
use time::{Date, Duration};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: RangePicker,
    cursor: Date,
    state: AppState,
}

impl App {
    /// `cursor` must be a date shown in the picker's window
    pub(crate) fn new(picker: RangePicker, cursor: Date) -> App {
        App {
            picker,
            cursor,
            state: AppState::Picking,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<RangePicker> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker)
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => match key {
                KeyCode::Char('o') => {
                    self.toggle_open();
                    true
                }
                KeyCode::Char('q') => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ if self.picker.is_open() => self.handle_picker_key(key),
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
            KeyCode::Char('n') | KeyCode::PageDown => self.change_month(Direction::Next),
            KeyCode::Char('p') | KeyCode::PageUp => self.change_month(Direction::Previous),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(),
            KeyCode::Char('a') => {
                self.picker.on_apply();
                true
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                self.picker.on_cancel();
                true
            }
            _ => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn toggle_open(&mut self) {
        self.picker.on_toggle_open();
        if self.picker.is_open() {
            self.hover(true);
        }
    }

    fn click(&mut self) -> bool {
        let Some(pos) = self.picker.window().position_of(self.cursor) else {
            return false;
        };
        let clicked = self.picker.on_day_click(pos);
        if clicked {
            self.hover(true);
        }
        clicked
    }

    fn hover(&mut self, enter: bool) {
        if let Some(pos) = self.picker.window().position_of(self.cursor) {
            if enter {
                self.picker.on_day_hover_enter(pos);
            } else {
                self.picker.on_day_hover_leave(pos);
            }
        }
    }

    fn move_cursor(&mut self, days: i64) -> bool {
        let Some(target) = self.cursor.checked_add(Duration::days(days)) else {
            return false;
        };
        self.hover(false);
        while !self.picker.window().contains(target) {
            let dir = if self
                .picker
                .window()
                .last_date()
                .is_some_and(|last| target > last)
            {
                Direction::Next
            } else {
                Direction::Previous
            };
            if let Err(e) = self.step(dir) {
                log::debug!("Cannot move cursor to {target}: {e}");
                self.hover(true);
                return false;
            }
        }
        self.cursor = target;
        self.hover(true);
        true
    }

    fn change_month(&mut self, dir: Direction) -> bool {
        self.hover(false);
        let moved = self.step(dir).is_ok();
        // Keep the cursor on screen
        let window = self.picker.window();
        if !window.contains(self.cursor) {
            let clamped = match dir {
                Direction::Next => window.first_date(),
                Direction::Previous => window.last_date(),
            };
            if let Some(date) = clamped {
                self.cursor = date;
            }
        }
        self.hover(true);
        moved
    }

    fn step(&mut self, dir: Direction) -> Result<(), OutOfTimeError> {
        match dir {
            Direction::Next => self.picker.on_next_month(),
            Direction::Previous => self.picker.on_previous_month(),
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        PickerView::new(&self.picker)
            .cursor(self.cursor)
            .render(area, buf);
        if self.state == AppState::Helping {
            Help(HELP_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Next,
    Previous,
}
