//! Modal date-picker dialog.
//!
//! The terminal stand-in for the platform's native date control. Opening
//! seeds it with the currently selected date; Enter commits the value and
//! hides the control; Esc dismisses it leaving the previous value unchanged.

use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

/// Which date field the up/down keys adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DateField {
    Year,
    Month,
    #[default]
    Day,
}

#[derive(Default)]
pub struct DatePickerDialog {
    visible: bool,
    value: Option<NaiveDate>,
    field: DateField,
}

impl DatePickerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the control seeded with the currently selected date.
    pub fn open(&mut self, current: NaiveDate) {
        self.visible = true;
        self.value = Some(current);
        self.field = DateField::Day;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.value = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    fn step(&mut self, delta: i32) {
        let Some(value) = self.value else {
            return;
        };
        self.value = Some(match self.field {
            DateField::Year => datetime::step_year(value, delta),
            DateField::Month => datetime::step_month(value, delta),
            DateField::Day => datetime::step_day(value, delta as i64),
        });
    }

    fn field_span(&self, text: String, field: DateField) -> Span<'static> {
        if self.field == field {
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::White))
        }
    }
}

impl Component for DatePickerDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }

        match key.code {
            KeyCode::Left => {
                self.field = match self.field {
                    DateField::Year => DateField::Year,
                    DateField::Month => DateField::Year,
                    DateField::Day => DateField::Month,
                };
                Action::None
            }
            KeyCode::Right => {
                self.field = match self.field {
                    DateField::Year => DateField::Month,
                    DateField::Month => DateField::Day,
                    DateField::Day => DateField::Day,
                };
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(-1);
                Action::None
            }
            KeyCode::Enter => match self.value {
                Some(value) => Action::DateSelected(value),
                None => Action::CancelDatePicker,
            },
            KeyCode::Esc => Action::CancelDatePicker,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }
        let Some(value) = self.value else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect_lines(40, 7, rect);
        f.render_widget(Clear, dialog_area);

        let date_line = Line::from(vec![
            self.field_span(format!("{:04}", value.year()), DateField::Year),
            Span::styled("-", Style::default().fg(Color::DarkGray)),
            self.field_span(format!("{:02}", value.month()), DateField::Month),
            Span::styled("-", Style::default().fg(Color::DarkGray)),
            self.field_span(format!("{:02}", value.day()), DateField::Day),
        ]);

        let instructions = Line::from(Span::styled(
            "←/→ field • ↑/↓ adjust • Enter select • Esc cancel",
            Style::default().fg(Color::Yellow),
        ));

        let dialog = Paragraph::new(vec![Line::from(""), date_line, Line::from(""), instructions])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Due date")
                    .title_alignment(Alignment::Center),
            )
            .alignment(Alignment::Center);
        f.render_widget(dialog, dialog_area);
    }
}
