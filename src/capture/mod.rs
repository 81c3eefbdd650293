//! Camera capability binding.
//!
//! This module defines the interface the application uses to talk to a camera
//! capture provider, along with the outcome types the capture flow produces.
//! The core never implements capture itself; it only calls the binding and
//! reacts to its results.

use std::path::PathBuf;

use async_trait::async_trait;

pub mod command;

pub use command::CommandCamera;

/// Errors from the capture provider itself (spawn failures, missing output).
///
/// Permission denial and user cancellation are not errors; they are ordinary
/// outcomes of the flow.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to start capture command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("capture finished but produced no image at {0}")]
    MissingOutput(String),

    #[error("capture error: {0}")]
    Other(String),
}

/// Launch request parameters, mirroring the capture UI's knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    pub allows_editing: bool,
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            quality: 0.8,
        }
    }
}

/// Result of asking the platform for camera access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    /// Denied, with a human-readable reason for the user-facing notice.
    Denied(String),
}

/// Result of launching the capture UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The capture succeeded; the image lives at this location.
    Captured(PathBuf),
    /// The user backed out of the capture UI. Benign, silent.
    Cancelled,
}

/// Camera capture provider.
///
/// Implementations request access, launch the capture UI, and report either
/// an image location or a cancellation. Both calls are suspension points; the
/// rest of the interface stays responsive while they resolve.
#[async_trait]
pub trait CameraBinding: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus, CaptureError>;

    async fn launch_capture(&self, options: CaptureOptions) -> Result<CaptureOutcome, CaptureError>;
}
