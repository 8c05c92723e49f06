//! Integration tests for the public translation-table API.

use keybridge_core::{
    ConstantError, Key, NativeKeycode, NativeScancode, Scancode, KEY_MAP, SCANCODE_MAP,
};

#[test]
fn test_letters_map_to_lowercase_ascii_and_hid_positions() {
    let letters = "abcdefghijklmnopqrstuvwxyz";
    for (i, ch) in letters.chars().enumerate() {
        // Arrange
        let name = ch.to_string();
        let key: Key = name.parse().expect("letter key must exist");
        let sc: Scancode = name.parse().expect("letter scancode must exist");

        // Act / Assert
        assert_eq!(KEY_MAP.native(key), NativeKeycode::from_char(ch));
        assert_eq!(SCANCODE_MAP.native(sc), NativeScancode(4 + i as u16));
    }
}

#[test]
fn test_key_and_scancode_names_overlap_where_the_key_is_positional() {
    for name in ["return", "escape", "space", "f1", "lctrl", "kp0", "up"] {
        assert!(Key::from_name(name).is_some(), "key {name} missing");
        assert!(Scancode::from_name(name).is_some(), "scancode {name} missing");
    }
}

#[test]
fn test_scancode_only_names_are_not_keys() {
    for name in ["nonus#", "nonusbackslash", "international1", "lang9", "kpxor", "app1"] {
        assert!(Key::from_name(name).is_none(), "{name} should not be a key");
        assert!(Scancode::from_name(name).is_some(), "{name} should be a scancode");
    }
}

#[test]
fn test_parse_errors_name_the_offending_constant() {
    assert_eq!(
        "meta".parse::<Key>(),
        Err(ConstantError::InvalidKey("meta".to_string()))
    );
    assert_eq!(
        "meta".parse::<Scancode>(),
        Err(ConstantError::InvalidScancode("meta".to_string()))
    );
}

#[test]
fn test_scancode_lookup_never_partially_matches() {
    // Every native value maps to exactly zero or one scancode, and mapped
    // values round-trip exactly.
    for raw in 0..NativeScancode::COUNT as u16 {
        let native = NativeScancode(raw);
        if let Some(sc) = SCANCODE_MAP.scancode(native) {
            assert_eq!(SCANCODE_MAP.native(sc), native);
        }
    }
}
