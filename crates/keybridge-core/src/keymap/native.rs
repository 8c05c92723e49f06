//! Native key identifiers of the host input library.
//!
//! The host library numbers its scancodes after the USB HID keyboard page
//! (`A` is 4, `Return` is 40, `LCtrl` is 224, ...) and keeps them below
//! [`NativeScancode::COUNT`].  Its keycodes are the produced character for
//! printable keys (`'a'`, `'1'`, `'\r'`) and the scancode with bit 30 set for
//! everything else.
//!
//! | Key              | Native keycode | Native scancode |
//! |------------------|----------------|-----------------|
//! | letter A         | `0x61` (`'a'`) | 4               |
//! | Return           | `0x0D`         | 40              |
//! | Delete           | `0x7F`         | 76              |
//! | Caps Lock        | `0x40000039`   | 57              |
//!
//! Both types are plain newtypes: a value outside the known tables is still
//! representable, it just translates to the unknown sentinel.

use serde::{Deserialize, Serialize};

/// A host-library keycode (layout-dependent key identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeKeycode(pub i32);

impl NativeKeycode {
    /// The host's "no key" value.
    pub const UNKNOWN: NativeKeycode = NativeKeycode(0);

    /// Bit set on keycodes that are derived from a scancode instead of a character.
    pub const SCANCODE_MASK: i32 = 1 << 30;

    /// Keycode of a printable key: its character value.
    pub const fn from_char(c: char) -> Self {
        NativeKeycode(c as i32)
    }

    /// Keycode of a non-printable key: its scancode with [`Self::SCANCODE_MASK`] set.
    pub const fn from_scancode(scancode: NativeScancode) -> Self {
        NativeKeycode(scancode.0 as i32 | Self::SCANCODE_MASK)
    }

    /// Returns `true` if this keycode was derived from a scancode.
    pub const fn is_scancode_derived(self) -> bool {
        self.0 & Self::SCANCODE_MASK != 0
    }

    /// Returns the raw host value.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// A host-library scancode (physical key position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeScancode(pub u16);

impl NativeScancode {
    /// The host's "no scancode" value.
    pub const UNKNOWN: NativeScancode = NativeScancode(0);

    /// Size of the host's keyboard-state array; every valid scancode is below it.
    pub const COUNT: usize = 512;

    /// Returns the index into a keyboard-state array.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this value fits in a keyboard-state array.
    pub const fn is_in_range(self) -> bool {
        (self.0 as usize) < Self::COUNT
    }

    /// Returns the raw host value.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_keycodes_are_their_characters() {
        assert_eq!(NativeKeycode::from_char('a').raw(), 0x61);
        assert_eq!(NativeKeycode::from_char('\r').raw(), 0x0D);
        assert!(!NativeKeycode::from_char('a').is_scancode_derived());
    }

    #[test]
    fn test_scancode_derived_keycodes_carry_the_mask() {
        // Arrange
        let caps = NativeScancode(57);

        // Act
        let code = NativeKeycode::from_scancode(caps);

        // Assert
        assert_eq!(code.raw(), 0x4000_0039);
        assert!(code.is_scancode_derived());
    }

    #[test]
    fn test_scancode_range_check() {
        assert!(NativeScancode(0).is_in_range());
        assert!(NativeScancode(511).is_in_range());
        assert!(!NativeScancode(512).is_in_range());
    }

    #[test]
    fn test_unknown_values_are_zero() {
        assert_eq!(NativeKeycode::UNKNOWN, NativeKeycode::default());
        assert_eq!(NativeScancode::UNKNOWN, NativeScancode::default());
    }
}
