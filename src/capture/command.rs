//! Capture via a user-configured external command.
//!
//! The command receives the destination path through an `{output}` placeholder
//! and the requested quality through `{quality}` (0-100 scale, the convention
//! most capture tools use). Exit code zero with the output file present counts
//! as a capture; any nonzero exit is treated as the user backing out.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use super::{CameraBinding, CaptureError, CaptureOptions, CaptureOutcome, PermissionStatus};
use crate::config::CaptureConfig;

/// Camera binding that shells out to a configured capture command.
#[derive(Debug, Clone)]
pub struct CommandCamera {
    program: String,
    args: Vec<String>,
}

impl CommandCamera {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    fn output_path(&self) -> PathBuf {
        std::env::temp_dir().join(format!("tasklens-{}.jpg", Uuid::new_v4()))
    }

    /// Resolve the configured program against PATH (or accept it verbatim when
    /// it is already a path to an executable file).
    fn resolve_program(&self) -> Option<PathBuf> {
        let candidate = Path::new(&self.program);
        if candidate.components().count() > 1 {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }

        let paths = std::env::var_os("PATH")?;
        std::env::split_paths(&paths)
            .map(|dir| dir.join(&self.program))
            .find(|path| path.is_file())
    }

    fn expand_arg(arg: &str, output: &Path, options: CaptureOptions) -> String {
        let quality = ((options.quality.clamp(0.0, 1.0)) * 100.0).round() as u32;
        arg.replace("{output}", &output.to_string_lossy())
            .replace("{quality}", &quality.to_string())
    }
}

#[async_trait]
impl CameraBinding for CommandCamera {
    async fn request_permission(&self) -> Result<PermissionStatus, CaptureError> {
        if self.program.is_empty() {
            return Ok(PermissionStatus::Denied(
                "no capture command configured (set [capture] command in the config file)".to_string(),
            ));
        }

        match self.resolve_program() {
            Some(_) => Ok(PermissionStatus::Granted),
            None => Ok(PermissionStatus::Denied(format!(
                "capture command '{}' not found",
                self.program
            ))),
        }
    }

    async fn launch_capture(&self, options: CaptureOptions) -> Result<CaptureOutcome, CaptureError> {
        let output = self.output_path();

        let mut command = Command::new(&self.program);
        for arg in &self.args {
            command.arg(Self::expand_arg(arg, &output, options));
        }

        log::debug!("launching capture command '{}' -> {}", self.program, output.display());
        let status = command.status().await?;

        if !status.success() {
            // The capture tool exits nonzero when the user backs out.
            log::debug!("capture command exited with {status}, treating as cancellation");
            return Ok(CaptureOutcome::Cancelled);
        }

        if !output.is_file() {
            return Err(CaptureError::MissingOutput(output.display().to_string()));
        }

        Ok(CaptureOutcome::Captured(output))
    }
}
