//! Reusable UI components

pub mod dialogs;
pub mod input_row;
pub mod photo_panel;
pub mod status_bar;
pub mod task_list;

pub use dialogs::{DatePickerDialog, NoticeDialog};
pub use input_row::InputComponent;
pub use photo_panel::PhotoPanel;
pub use status_bar::StatusBar;
pub use task_list::TaskListComponent;
