//! Integration tests for the keyboard module.
//!
//! These tests run `Keyboard` end-to-end over the headless backend, the way
//! a `KeyboardSession` wires it up.

use std::sync::Arc;

use keybridge_core::{Key, Scancode, TextInputRegion};
use keybridge_host::application::keyboard::Keyboard;
use keybridge_host::infrastructure::input_backend::headless::HeadlessBackend;
use keybridge_host::infrastructure::session::KeyboardSession;
use keybridge_host::infrastructure::storage::config::{KeybridgeConfig, RemapEntry};

fn headless_keyboard() -> (Arc<HeadlessBackend>, Keyboard) {
    let backend = Arc::new(HeadlessBackend::new());
    let keyboard = Keyboard::new(backend.clone());
    (backend, keyboard)
}

fn assert_translation_is_stable(keyboard: &Keyboard) {
    for key in Key::ALL {
        let scancode = keyboard.scancode_from_key(key);
        let back = keyboard.key_from_scancode(scancode);
        assert_eq!(
            keyboard.scancode_from_key(back),
            scancode,
            "translation of {key} is not stable (scancode {scancode}, key {back})"
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_translation_is_stable_for_every_key() {
    let (_, keyboard) = headless_keyboard();
    assert_translation_is_stable(&keyboard);
}

#[test]
fn test_translation_is_stable_under_a_remapped_layout() {
    let mut cfg = KeybridgeConfig::default();
    for (scancode, key) in [
        (Scancode::Q, Key::A),
        (Scancode::A, Key::Q),
        (Scancode::W, Key::Z),
        (Scancode::Z, Key::W),
        (Scancode::CapsLock, Key::Escape),
    ] {
        cfg.layout.remap.push(RemapEntry { scancode, key });
    }
    let session = KeyboardSession::from_config(&cfg);

    assert_translation_is_stable(session.keyboard());
}

#[test]
fn test_unknown_scancode_translates_to_unknown_key() {
    let (_, keyboard) = headless_keyboard();
    assert_eq!(keyboard.key_from_scancode(Scancode::Unknown), Key::Unknown);
}

#[test]
fn test_held_unknown_scancode_makes_nothing_down() {
    // Arrange
    let (backend, keyboard) = headless_keyboard();

    // Act
    backend.press(Scancode::Unknown);

    // Assert: keys no scancode produces resolve to the unknown position
    assert!(!keyboard.is_down(&[Key::Exclaim]));
    assert!(!keyboard.is_down(&[Key::Unknown]));
    assert!(!keyboard.is_scancode_down(&[Scancode::Unknown]));
}

#[test]
fn test_empty_queries_are_false_even_with_keys_held() {
    let (backend, keyboard) = headless_keyboard();
    for sc in [Scancode::A, Scancode::Space, Scancode::LCtrl] {
        backend.press(sc);
    }

    assert!(!keyboard.is_down(&[]));
    assert!(!keyboard.is_scancode_down(&[]));
}

#[test]
fn test_text_input_reflects_last_toggle() {
    let (_, keyboard) = headless_keyboard();

    keyboard.set_text_input(false);
    keyboard.set_text_input(true);
    assert!(keyboard.has_text_input());

    keyboard.set_text_input_region(false, TextInputRegion::new(0.0, 0.0, 10.0, 10.0));
    assert!(!keyboard.has_text_input());
}

#[test]
fn test_press_release_cycle_is_visible_through_both_queries() {
    let (backend, keyboard) = headless_keyboard();

    backend.press(Scancode::Return);
    assert!(keyboard.is_down(&[Key::Return]));
    assert!(keyboard.is_scancode_down(&[Scancode::Return]));

    backend.release(Scancode::Return);
    assert!(!keyboard.is_down(&[Key::Return]));
    assert!(!keyboard.is_scancode_down(&[Scancode::Return]));
}

#[test]
fn test_every_mapped_scancode_reports_its_own_position() {
    let (backend, keyboard) = headless_keyboard();

    for sc in Scancode::ALL.into_iter().filter(|&sc| sc != Scancode::Unknown) {
        backend.press(sc);
        assert!(keyboard.is_scancode_down(&[sc]), "{sc} should be down");
        backend.release_all();
    }
}

#[test]
fn test_config_file_drives_a_session() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[keyboard]\nkey_repeat = true\n\n[[layout.remap]]\nscancode = \"capslock\"\nkey = \"escape\"\n",
    )
    .expect("write config");

    // Act
    let cfg = keybridge_host::infrastructure::storage::config::load_config_from(&path)
        .expect("load config");
    let session = KeyboardSession::from_config(&cfg);
    session.backend().press(Scancode::CapsLock);

    // Assert
    assert!(session.keyboard().has_key_repeat());
    assert_eq!(session.keyboard().key_from_scancode(Scancode::CapsLock), Key::Escape);
    assert!(session.keyboard().is_scancode_down(&[Scancode::CapsLock]));
    // Escape resolves to its own, lower position, which is not held
    assert_eq!(session.keyboard().scancode_from_key(Key::Escape), Scancode::Escape);
    assert!(!session.keyboard().is_down(&[Key::Escape]));
}
