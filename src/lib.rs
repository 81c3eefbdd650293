//! tasklens - a single-screen terminal todo list
//!
//! Users add a task with a due date, optionally attach a photo taken through
//! an external capture command, view tasks newest-first, and remove the
//! selected row. Everything lives in memory for the lifetime of the screen;
//! nothing persists across restarts.
//!
//! # Modules
//!
//! * [`capture`] - Camera capability binding and the command-based provider
//! * [`config`] - Application configuration management
//! * [`model`] - The in-memory task list
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date helpers

/// Camera capture capability binding
pub mod capture;

/// Configuration module for managing application settings
pub mod config;

/// File logging setup
pub mod logger;

/// Task entity and list state
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use model::{Task, TaskId, TaskList};
