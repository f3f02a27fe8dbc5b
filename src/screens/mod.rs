pub mod helicopter;
pub mod menu;
pub mod pong;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenId {
    Menu,
    Helicopter,
    Pong,
}

/// What a screen asks the shell to do after handling a key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Switch(ScreenId),
    Quit,
}

pub trait Screen {
    /// Called once each time the screen becomes active: allocate art
    /// resources and reset to the initial state.
    fn enter(&mut self);

    /// Advance the simulation by `dt` seconds (non-negative, once per frame).
    fn tick(&mut self, dt: f32);

    fn handle_key(&mut self, key: KeyEvent) -> Option<Transition>;

    fn handle_mouse(&mut self, _mouse: MouseEvent) {}

    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Called once when the screen stops being active. Releases nothing.
    fn exit(&mut self) {}

    /// Release art resources. Idempotent: safe on a screen that was never
    /// entered or is already torn down.
    fn teardown(&mut self);
}
