use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::screens::helicopter::HelicopterScreen;
use crate::screens::menu::MenuScreen;
use crate::screens::pong::PongScreen;
use crate::screens::{Screen, ScreenId, Transition};

/// The screen-lifecycle shell: owns the three screens and the active id,
/// and forwards ticks and input to whichever screen is active.
pub struct App {
    pub should_quit: bool,
    current: ScreenId,
    menu: MenuScreen,
    helicopter: HelicopterScreen,
    pong: PongScreen,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            should_quit: false,
            current: ScreenId::Menu,
            menu: MenuScreen::new(),
            helicopter: HelicopterScreen::new(),
            pong: PongScreen::new(),
        };
        app.menu.enter();
        app
    }

    pub fn active_mut(&mut self) -> &mut dyn Screen {
        match self.current {
            ScreenId::Menu => &mut self.menu,
            ScreenId::Helicopter => &mut self.helicopter,
            ScreenId::Pong => &mut self.pong,
        }
    }

    /// Exit the active screen, then enter the new one.
    fn set_screen(&mut self, id: ScreenId) {
        self.active_mut().exit();
        self.current = id;
        self.active_mut().enter();
    }

    pub fn on_tick(&mut self, dt: f32) {
        self.active_mut().tick(dt);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.active_mut().handle_key(key) {
            Some(Transition::Switch(id)) => self.set_screen(id),
            Some(Transition::Quit) => self.should_quit = true,
            None => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        self.active_mut().handle_mouse(mouse);
    }

    /// Tear every screen down, active or not. Teardown is idempotent, so a
    /// screen that never ran doesn't mind.
    pub fn shutdown(&mut self) {
        self.menu.teardown();
        self.helicopter.teardown();
        self.pong.teardown();
    }
}
