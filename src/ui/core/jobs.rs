//! Background job management.
//!
//! The capture flow is the application's one suspension point: it awaits the
//! permission request and then the capture launch while the event loop keeps
//! serving input. Jobs run on the tokio runtime and report back by sending
//! actions over an unbounded channel that the app drains on tick.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::Action;
use crate::capture::{CameraBinding, CaptureOptions, CaptureOutcome, PermissionStatus};

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<JobResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobResult {
    CaptureFinished(CaptureOutcome),
    PermissionDenied(String),
    Aborted(String),
}

pub struct JobManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl JobManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the capture flow: request permission, then launch the capture UI.
    ///
    /// Denial produces a [`Action::CaptureDenied`] (the user-visible notice);
    /// cancellation is a silent [`Action::CaptureCancelled`]; success delivers
    /// the image location via [`Action::PhotoCaptured`]. No retries.
    pub fn spawn_capture(&mut self, camera: Arc<dyn CameraBinding>, options: CaptureOptions) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Camera capture".to_string();

        let handle = tokio::spawn(async move {
            match camera.request_permission().await {
                Ok(PermissionStatus::Denied(reason)) => {
                    let _ = action_sender.send(Action::CaptureDenied(reason.clone()));
                    JobResult::PermissionDenied(reason)
                }
                Ok(PermissionStatus::Granted) => match camera.launch_capture(options).await {
                    Ok(CaptureOutcome::Captured(path)) => {
                        let _ = action_sender.send(Action::PhotoCaptured(path.clone()));
                        JobResult::CaptureFinished(CaptureOutcome::Captured(path))
                    }
                    Ok(CaptureOutcome::Cancelled) => {
                        let _ = action_sender.send(Action::CaptureCancelled);
                        JobResult::CaptureFinished(CaptureOutcome::Cancelled)
                    }
                    Err(e) => {
                        let message = format!("Capture failed: {e}");
                        let _ = action_sender.send(Action::ShowNotice(message.clone()));
                        JobResult::Aborted(message)
                    }
                },
                Err(e) => {
                    // A failing permission request reads as a denial to the user.
                    let reason = e.to_string();
                    let _ = action_sender.send(Action::CaptureDenied(reason.clone()));
                    JobResult::PermissionDenied(reason)
                }
            }
        });

        let job = BackgroundJob {
            id: job_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.jobs.insert(job_id, job);
        job_id
    }

    /// Drop finished jobs, returning their ids. Results were already sent via
    /// the action channel.
    pub fn cleanup_finished_jobs(&mut self) -> Vec<JobId> {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for job_id in &finished {
            if let Some(job) = self.jobs.remove(job_id) {
                log::debug!(
                    "job {}: '{}' finished after {:?}",
                    job.id,
                    job.description,
                    job.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running jobs
    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    /// Get the number of active jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for JobManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_jobs();
    }
}
