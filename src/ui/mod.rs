//! Terminal user interface.
//!
//! Terminal setup/teardown and the event loop: draw on demand, poll for
//! input, and drain background capture actions on tick.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;

pub use app_component::{AppComponent, AppState, Focus};
pub use layout::LayoutManager;

use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::capture::CameraBinding;
use crate::config::Config;
use crate::ui::core::{Component, EventHandler, EventType};

/// Run the application until the user quits.
pub async fn run_app(camera: Arc<dyn CameraBinding>, config: &Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(camera, config);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                // Capture results surface here, between input events
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    for action in background_actions {
                        app.apply_background_action(action);
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
