//! Root application component.
//!
//! Owns the screen state (task list, selected due date, pending photo),
//! routes events dialog-first then to the focused component, and applies
//! actions as explicit `(state, action) -> state` transitions. The capture
//! flow runs as a background job; its results arrive as actions over the
//! job manager's channel and are drained on tick.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::capture::{CameraBinding, CaptureOptions};
use crate::config::Config;
use crate::model::TaskList;
use crate::ui::components::{DatePickerDialog, InputComponent, NoticeDialog, PhotoPanel, StatusBar, TaskListComponent};
use crate::ui::core::{actions::Action, event_handler::EventType, Component, JobId, JobManager};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

/// Which pane keyboard input is routed to when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// Screen state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskList,
    pub selected_date: NaiveDate,
    pub pending_photo: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: TaskList::new(),
            selected_date: datetime::today(),
            pending_photo: None,
        }
    }
}

pub struct AppComponent {
    // Component composition
    input: InputComponent,
    task_list: TaskListComponent,
    date_picker: DatePickerDialog,
    notice: NoticeDialog,
    photo_panel: PhotoPanel,

    // Screen state
    state: AppState,

    // Capability binding and background jobs
    camera: Arc<dyn CameraBinding>,
    capture_options: CaptureOptions,
    jobs: JobManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    focus: Focus,
    show_photo_panel: bool,
    should_quit: bool,
    active_capture: Option<JobId>,
}

impl AppComponent {
    pub fn new(camera: Arc<dyn CameraBinding>, config: &Config) -> Self {
        let (jobs, background_action_rx) = JobManager::new();

        let mut input = InputComponent::new();
        let mut task_list = TaskListComponent::new();
        input.set_date_format(config.display.date_format.clone());
        task_list.set_date_format(config.display.date_format.clone());

        let focus = if config.ui.initial_focus == "list" { Focus::List } else { Focus::Input };
        match focus {
            Focus::Input => input.on_focus(),
            Focus::List => task_list.on_focus(),
        }

        let mut app = Self {
            input,
            task_list,
            date_picker: DatePickerDialog::new(),
            notice: NoticeDialog::new(),
            photo_panel: PhotoPanel::new(),
            state: AppState::default(),
            camera,
            capture_options: config.capture_options(),
            jobs,
            background_action_rx,
            focus,
            show_photo_panel: config.display.show_photo_panel,
            should_quit: false,
            active_capture: None,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_capturing(&self) -> bool {
        self.active_capture.is_some()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn notice_message(&self) -> Option<&str> {
        self.notice.message()
    }

    pub fn date_picker_visible(&self) -> bool {
        self.date_picker.is_visible()
    }

    /// Push the current state into the display components
    fn sync_component_data(&mut self) {
        self.task_list.update_data(self.state.tasks.tasks().to_vec());
        self.input.set_date(self.state.selected_date);
        self.photo_panel.update_data(self.state.pending_photo.clone());
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        match self.focus {
            Focus::Input => self.input.on_blur(),
            Focus::List => self.task_list.on_blur(),
        }
        match focus {
            Focus::Input => self.input.on_focus(),
            Focus::List => self.task_list.on_focus(),
        }
        self.focus = focus;
    }

    /// Handle keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("global key: Ctrl+C, quitting");
                Action::Quit
            }
            KeyCode::Esc => {
                log::info!("global key: Esc, quitting");
                Action::Quit
            }
            KeyCode::Tab => match self.focus {
                Focus::Input => Action::FocusList,
                Focus::List => Action::FocusInput,
            },
            KeyCode::F(2) => Action::ShowDatePicker,
            KeyCode::F(3) => Action::StartCapture,
            _ => Action::None,
        }
    }

    /// Apply an app-level action to the screen state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::AddTask { title } => {
                match self.state.tasks.add(&title, self.state.selected_date) {
                    Some(id) => log::info!(
                        "task: added '{}' due {} (id {id})",
                        title.trim(),
                        datetime::format_ymd(self.state.selected_date)
                    ),
                    None => log::debug!("task: empty title, nothing added"),
                }
                self.sync_component_data();
                Action::None
            }
            Action::RemoveTask(id) => {
                match self.state.tasks.get(id) {
                    Some(task) => log::info!("task: removing '{}' (id {id})", task.title),
                    None => log::debug!("task: remove of unknown id {id}, no-op"),
                }
                self.state.tasks.remove(id);
                self.sync_component_data();
                Action::None
            }
            Action::ShowDatePicker => {
                self.date_picker.open(self.state.selected_date);
                Action::None
            }
            Action::DateSelected(date) => {
                log::info!("date: selected {}", datetime::format_ymd(date));
                self.state.selected_date = date;
                self.date_picker.close();
                self.sync_component_data();
                Action::None
            }
            Action::CancelDatePicker => {
                // Previously selected value stays untouched.
                self.date_picker.close();
                Action::None
            }
            Action::StartCapture => {
                if self.active_capture.is_none() {
                    log::info!("capture: starting background capture");
                    let job_id = self.jobs.spawn_capture(self.camera.clone(), self.capture_options);
                    self.active_capture = Some(job_id);
                } else {
                    log::debug!("capture: already in progress, ignoring");
                }
                Action::None
            }
            Action::CaptureDenied(reason) => {
                log::warn!("capture: permission denied: {reason}");
                self.active_capture = None;
                self.notice.show(format!("Camera permission is required. {reason}"));
                Action::None
            }
            Action::CaptureCancelled => {
                // Benign abort, no notice, no state change.
                log::debug!("capture: cancelled by user");
                self.active_capture = None;
                Action::None
            }
            Action::PhotoCaptured(path) => {
                log::info!("capture: photo stored at {}", path.display());
                self.active_capture = None;
                self.state.pending_photo = Some(path);
                self.sync_component_data();
                Action::None
            }
            Action::ShowNotice(message) => {
                self.active_capture = None;
                self.notice.show(message);
                Action::None
            }
            Action::DismissNotice => {
                self.notice.hide();
                Action::None
            }
            Action::FocusInput => {
                self.set_focus(Focus::Input);
                Action::None
            }
            Action::FocusList => {
                self.set_focus(Focus::List);
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // Dialogs have priority when visible
                if self.notice.is_visible() {
                    self.notice.handle_key_events(key)
                } else if self.date_picker.is_visible() {
                    self.date_picker.handle_key_events(key)
                } else {
                    let focused_action = match self.focus {
                        Focus::Input => self.input.handle_key_events(key),
                        Focus::List => self.task_list.handle_key_events(key),
                    };

                    if !matches!(focused_action, Action::None) {
                        focused_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Route an action through the components, then apply it at app level
    fn dispatch(&mut self, action: Action) {
        let action = self.task_list.update(action);
        let _final_action = self.handle_app_action(action);
    }

    /// Drain background actions from the job manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("background: received action {action:?}");
            actions.push(action);
        }

        let finished = self.jobs.cleanup_finished_jobs();
        if !finished.is_empty() {
            log::debug!("background: cleaned up {} finished jobs", finished.len());
        }

        actions
    }

    /// Apply a background action (used by the event loop on tick)
    pub fn apply_background_action(&mut self, action: Action) {
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let show_photo = self.show_photo_panel && self.photo_panel.has_photo();
        let chunks = LayoutManager::main_layout(rect, show_photo);

        self.input.render(f, chunks[0]);
        self.task_list.render(f, chunks[1]);
        if show_photo {
            self.photo_panel.render(f, chunks[2]);
        }
        StatusBar::render(f, chunks[3], self.is_capturing());

        // Dialogs on top
        if self.date_picker.is_visible() {
            self.date_picker.render(f, rect);
        }
        if self.notice.is_visible() {
            self.notice.render(f, rect);
        }
    }
}
