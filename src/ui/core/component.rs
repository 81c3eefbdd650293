use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Base trait for everything that draws to a region and reacts to keys.
pub trait Component {
    /// Translate a key press into an action. Components that don't consume a
    /// key return [`Action::None`] so routing can fall through.
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Apply an action to local state, passing through whatever this
    /// component doesn't handle.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Focus lifecycle
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
