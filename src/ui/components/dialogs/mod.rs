//! Modal dialogs

pub mod date_picker;
pub mod notice;

pub use date_picker::DatePickerDialog;
pub use notice::NoticeDialog;
