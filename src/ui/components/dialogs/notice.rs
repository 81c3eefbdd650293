//! Notice dialog component
//!
//! Centered modal used for the camera permission notice. Any key dismisses it.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Default)]
pub struct NoticeDialog {
    message: Option<String>,
}

impl NoticeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Component for NoticeDialog {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        if self.is_visible() {
            Action::DismissNotice
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(message) = &self.message else {
            return;
        };

        let notice_area = LayoutManager::centered_rect(60, 20, rect);
        f.render_widget(Clear, notice_area);
        let notice = Paragraph::new(message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Notice")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(notice, notice_area);
    }
}
