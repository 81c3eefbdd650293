//! Task list with row selection.
//!
//! Rows show the 1-based position, the title, the fixed-width due date, and
//! the removal hint. `d` removes the selected row, the terminal stand-in for
//! the original long-press gesture.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;

const EMPTY_PLACEHOLDER: &str = "No tasks yet. Type a title and press Enter.";
const REMOVE_HINT: &str = "press d to remove";

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    date_format: String,
    focused: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            date_format: datetime::DATE_FORMAT.to_string(),
            focused: false,
        }
    }

    pub fn set_date_format(&mut self, format: String) {
        self.date_format = format;
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn create_task_items(&self) -> Vec<ListItem<'_>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{}. ", index + 1),
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(task.title.clone(), Style::default().fg(Color::White)),
                    Span::raw("  "),
                    Span::styled(
                        datetime::format_with(task.due_date, &self.date_format),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        REMOVE_HINT,
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect()
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.tasks.get(self.selected_index) {
                    Action::RemoveTask(task.id)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Tasks")
            .border_style(border_style);

        if self.tasks.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items = self.create_task_items();
            let mut list_state = self.list_state.clone();

            let tasks_list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(tasks_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
