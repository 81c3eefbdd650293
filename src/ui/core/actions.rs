use std::path::PathBuf;

use chrono::NaiveDate;

use crate::model::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // List navigation
    NextTask,
    PreviousTask,

    // List mutations
    AddTask { title: String },
    RemoveTask(TaskId),

    // Date selection
    ShowDatePicker,
    CancelDatePicker,
    DateSelected(NaiveDate),

    // Capture flow
    StartCapture,
    CaptureDenied(String),
    CaptureCancelled,
    PhotoCaptured(PathBuf),

    // UI operations
    FocusInput,
    FocusList,
    ShowNotice(String),
    DismissNotice,

    // App control
    Quit,
    None,
}
