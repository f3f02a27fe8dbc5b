use crossterm::event::{KeyCode, KeyEvent};

use heli_arcade::screens::helicopter::HelicopterScreen;
use heli_arcade::screens::menu::MenuScreen;
use heli_arcade::screens::pong::PongScreen;
use heli_arcade::screens::{Screen, ScreenId, Transition};

// ── lifecycle ────────────────────────────────────────────────────────────────

#[test]
fn teardown_is_idempotent_on_every_screen() {
    let mut menu = MenuScreen::new();
    let mut heli = HelicopterScreen::new();
    let mut pong = PongScreen::new();

    // Never entered, then torn down twice: must not panic.
    for screen in [&mut menu as &mut dyn Screen, &mut heli, &mut pong] {
        screen.teardown();
        screen.teardown();
    }
}

#[test]
fn screens_survive_reentry_after_teardown() {
    let mut heli = HelicopterScreen::new();
    heli.enter();
    heli.tick(0.016);
    heli.exit();
    heli.teardown();
    heli.enter();
    heli.tick(0.016);
    heli.teardown();
}

#[test]
fn ticking_a_torn_down_screen_is_harmless() {
    let mut heli = HelicopterScreen::new();
    heli.enter();
    heli.teardown();
    heli.tick(0.016);
}

// ── menu navigation ──────────────────────────────────────────────────────────

#[test]
fn menu_enter_selects_the_highlighted_option() {
    let mut menu = MenuScreen::new();
    menu.enter();
    let t = menu.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(t, Some(Transition::Switch(ScreenId::Helicopter)));
}

#[test]
fn menu_arrows_move_the_selection_with_wrap() {
    let mut menu = MenuScreen::new();
    menu.enter();
    assert_eq!(menu.handle_key(KeyEvent::from(KeyCode::Down)), None);
    let t = menu.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(t, Some(Transition::Switch(ScreenId::Pong)));

    // Wrap upward from the top lands on Exit.
    let mut menu = MenuScreen::new();
    menu.enter();
    menu.handle_key(KeyEvent::from(KeyCode::Up));
    assert_eq!(
        menu.handle_key(KeyEvent::from(KeyCode::Enter)),
        Some(Transition::Quit)
    );
}

#[test]
fn menu_digit_shortcuts_jump_straight_in() {
    let mut menu = MenuScreen::new();
    menu.enter();
    assert_eq!(
        menu.handle_key(KeyEvent::from(KeyCode::Char('2'))),
        Some(Transition::Switch(ScreenId::Pong))
    );
    assert_eq!(
        menu.handle_key(KeyEvent::from(KeyCode::Char('3'))),
        Some(Transition::Quit)
    );
}

// ── in-game keys ─────────────────────────────────────────────────────────────

#[test]
fn escape_returns_to_the_menu_from_either_game() {
    let mut heli = HelicopterScreen::new();
    heli.enter();
    assert_eq!(
        heli.handle_key(KeyEvent::from(KeyCode::Esc)),
        Some(Transition::Switch(ScreenId::Menu))
    );

    let mut pong = PongScreen::new();
    pong.enter();
    assert_eq!(
        pong.handle_key(KeyEvent::from(KeyCode::Esc)),
        Some(Transition::Switch(ScreenId::Menu))
    );
}

#[test]
fn restart_key_stays_on_screen() {
    let mut pong = PongScreen::new();
    pong.enter();
    assert_eq!(pong.handle_key(KeyEvent::from(KeyCode::Char('r'))), None);

    let mut heli = HelicopterScreen::new();
    heli.enter();
    assert_eq!(heli.handle_key(KeyEvent::from(KeyCode::Char('r'))), None);
}
