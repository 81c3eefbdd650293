//! Title input row with the due-date chip.
//!
//! Holds the draft title with char-indexed cursor editing. Enter submits only
//! when the trimmed buffer is non-empty; an empty draft simply does nothing,
//! matching the silent no-op contract of the list's `add`.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

pub struct InputComponent {
    pub input_buffer: String,
    pub cursor_position: usize,
    selected_date: NaiveDate,
    date_format: String,
    focused: bool,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            input_buffer: String::new(),
            cursor_position: 0,
            selected_date: datetime::today(),
            date_format: datetime::DATE_FORMAT.to_string(),
            focused: false,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn set_date_format(&mut self, format: String) {
        self.date_format = format;
    }

    /// Byte offset of the cursor's char position, for mid-string edits.
    fn byte_pos(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(pos, _)| pos)
            .unwrap_or(self.input_buffer.len())
    }

    fn char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => {
                if self.input_buffer.trim().is_empty() {
                    // Nothing to submit; the list's add is never called.
                    return Action::None;
                }
                let title = std::mem::take(&mut self.input_buffer);
                self.cursor_position = 0;
                Action::AddTask { title }
            }
            KeyCode::Char(c) => {
                let byte_pos = self.byte_pos();
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_pos();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_pos = self.byte_pos();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::input_row_layout(rect);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let input = Paragraph::new(self.input_buffer.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("New task")
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(input, chunks[0]);

        if self.focused {
            f.set_cursor_position((chunks[0].x + 1 + self.cursor_position as u16, chunks[0].y + 1));
        }

        let date_chip = Paragraph::new(datetime::format_with(self.selected_date, &self.date_format))
            .block(Block::default().borders(Borders::ALL).title("Due"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(date_chip, chunks[1]);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
