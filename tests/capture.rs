use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use tasklens::capture::{
    CameraBinding, CaptureError, CaptureOptions, CaptureOutcome, CommandCamera, PermissionStatus,
};
use tasklens::config::Config;
use tasklens::ui::core::{actions::Action, JobManager};
use tasklens::ui::AppComponent;

/// Scripted camera for exercising the capture flow without a device.
struct MockCamera {
    permission: PermissionStatus,
    outcome: CaptureOutcome,
}

impl MockCamera {
    fn granted(outcome: CaptureOutcome) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            outcome,
        }
    }

    fn denied(reason: &str) -> Self {
        Self {
            permission: PermissionStatus::Denied(reason.to_string()),
            outcome: CaptureOutcome::Cancelled,
        }
    }
}

#[async_trait]
impl CameraBinding for MockCamera {
    async fn request_permission(&self) -> Result<PermissionStatus, CaptureError> {
        Ok(self.permission.clone())
    }

    async fn launch_capture(&self, _options: CaptureOptions) -> Result<CaptureOutcome, CaptureError> {
        Ok(self.outcome.clone())
    }
}

/// Drive the app until the background capture result has been applied.
async fn settle_capture(app: &mut AppComponent) {
    for _ in 0..100 {
        sleep(Duration::from_millis(5)).await;
        let actions = app.process_background_actions();
        if !actions.is_empty() {
            for action in actions {
                app.apply_background_action(action);
            }
            return;
        }
    }
    panic!("capture job never reported back");
}

#[tokio::test]
async fn test_capture_denied_shows_notice_and_leaves_state_untouched() {
    let camera = Arc::new(MockCamera::denied("camera unavailable"));
    let mut app = AppComponent::new(camera, &Config::default());

    app.handle_app_action(Action::AddTask {
        title: "buy milk".to_string(),
    });

    app.handle_app_action(Action::StartCapture);
    assert!(app.is_capturing());
    settle_capture(&mut app).await;

    assert!(!app.is_capturing());
    assert!(app.state().pending_photo.is_none());
    let notice = app.notice_message().expect("denial must surface a notice");
    assert!(notice.contains("camera unavailable"));
    // List state untouched
    assert_eq!(app.state().tasks.len(), 1);
}

#[tokio::test]
async fn test_capture_cancelled_is_silent() {
    let camera = Arc::new(MockCamera::granted(CaptureOutcome::Cancelled));
    let mut app = AppComponent::new(camera, &Config::default());

    app.handle_app_action(Action::StartCapture);
    settle_capture(&mut app).await;

    assert!(!app.is_capturing());
    assert!(app.state().pending_photo.is_none());
    assert!(app.notice_message().is_none());
}

#[tokio::test]
async fn test_capture_success_replaces_pending_photo() {
    let first = PathBuf::from("/tmp/photo-1.jpg");
    let camera = Arc::new(MockCamera::granted(CaptureOutcome::Captured(first.clone())));
    let mut app = AppComponent::new(camera, &Config::default());

    app.handle_app_action(Action::StartCapture);
    settle_capture(&mut app).await;
    assert_eq!(app.state().pending_photo.as_deref(), Some(first.as_path()));
    assert!(app.notice_message().is_none());

    // A later capture replaces the slot wholesale
    let second = PathBuf::from("/tmp/photo-2.jpg");
    app.handle_app_action(Action::PhotoCaptured(second.clone()));
    assert_eq!(app.state().pending_photo.as_deref(), Some(second.as_path()));
}

#[tokio::test]
async fn test_second_capture_while_active_is_ignored() {
    let camera = Arc::new(MockCamera::granted(CaptureOutcome::Cancelled));
    let mut app = AppComponent::new(camera, &Config::default());

    app.handle_app_action(Action::StartCapture);
    app.handle_app_action(Action::StartCapture);
    settle_capture(&mut app).await;

    // Only one job's worth of results; nothing left queued
    assert!(app.process_background_actions().is_empty());
    assert!(!app.is_capturing());
}

#[tokio::test]
async fn test_job_manager_sends_capture_actions() {
    let (mut jobs, mut rx) = JobManager::new();
    let path = PathBuf::from("/tmp/photo.jpg");
    let camera: Arc<dyn CameraBinding> = Arc::new(MockCamera::granted(CaptureOutcome::Captured(path.clone())));

    jobs.spawn_capture(camera, CaptureOptions::default());
    assert_eq!(jobs.job_count(), 1);

    let action = rx.recv().await.expect("job must send an action");
    assert_eq!(action, Action::PhotoCaptured(path));

    // The finished job is reaped on the next cleanup pass
    for _ in 0..100 {
        if !jobs.cleanup_finished_jobs().is_empty() {
            break;
        }
        sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(jobs.job_count(), 0);
}

#[tokio::test]
async fn test_job_manager_denied_action() {
    let (mut jobs, mut rx) = JobManager::new();
    let camera: Arc<dyn CameraBinding> = Arc::new(MockCamera::denied("nope"));

    jobs.spawn_capture(camera, CaptureOptions::default());

    let action = rx.recv().await.expect("job must send an action");
    assert_eq!(action, Action::CaptureDenied("nope".to_string()));
}

#[tokio::test]
async fn test_command_camera_permission_denied_without_command() {
    let camera = CommandCamera::new("", Vec::new());
    match camera.request_permission().await.unwrap() {
        PermissionStatus::Denied(reason) => assert!(reason.contains("no capture command")),
        PermissionStatus::Granted => panic!("empty command must not be granted"),
    }
}

#[tokio::test]
async fn test_command_camera_permission_denied_for_missing_program() {
    let camera = CommandCamera::new("tasklens-no-such-capture-tool", Vec::new());
    match camera.request_permission().await.unwrap() {
        PermissionStatus::Denied(reason) => assert!(reason.contains("not found")),
        PermissionStatus::Granted => panic!("unresolvable command must not be granted"),
    }
}

#[tokio::test]
async fn test_command_camera_nonzero_exit_is_cancellation() {
    let camera = CommandCamera::new("false", Vec::new());
    let outcome = camera.launch_capture(CaptureOptions::default()).await.unwrap();
    assert_eq!(outcome, CaptureOutcome::Cancelled);
}

#[tokio::test]
async fn test_command_camera_missing_output_is_error() {
    // Exits zero but never writes the output file
    let camera = CommandCamera::new("true", Vec::new());
    let result = camera.launch_capture(CaptureOptions::default()).await;
    assert!(matches!(result, Err(CaptureError::MissingOutput(_))));
}
