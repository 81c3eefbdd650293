//! Core UI functionality for tasklens.
//!
//! The building blocks the components are assembled from:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`jobs`] - Background job management for the capture flow
//!
//! Components implement the [`Component`] trait, translate input into
//! [`Action`]s, and the app component applies those actions to the single
//! in-memory state. The only asynchronous work is the capture flow, spawned
//! through the [`JobManager`] and reported back over an action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod jobs;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use jobs::{JobId, JobManager, JobResult};
