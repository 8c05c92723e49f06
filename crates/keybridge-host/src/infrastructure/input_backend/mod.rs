//! Host input-library seam.
//!
//! The keyboard module never talks to the host windowing/input library
//! directly.  Everything it needs is behind [`InputBackend`]:
//!
//! - a live keyboard-state snapshot indexed by native scancode,
//! - keycode <-> scancode conversion under the current layout,
//! - text-input start/stop and the candidate-region hint,
//! - the screen-keyboard presence query.
//!
//! # Testability
//!
//! [`headless::HeadlessBackend`] is a complete in-memory host used by the
//! `keybridge` binary and integration tests; unit tests mock the trait with
//! `mockall`.

use keybridge_core::{NativeKeycode, NativeScancode, WindowRect};

pub mod headless;

/// Snapshot of which native scancodes are held down.
///
/// One bit per possible native scancode.  [`NativeScancode::UNKNOWN`] and
/// values outside [`NativeScancode::COUNT`] are never pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    bits: [u64; NativeScancode::COUNT / 64],
}

impl KeyboardState {
    /// Returns a snapshot with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `scancode` is held down in this snapshot.
    pub fn is_pressed(&self, scancode: NativeScancode) -> bool {
        if !Self::is_trackable(scancode) {
            return false;
        }
        let i = scancode.index();
        self.bits[i / 64] & (1u64 << (i % 64)) != 0
    }

    /// Marks `scancode` as pressed or released.  The unknown scancode and
    /// out-of-range values are ignored.
    pub fn set(&mut self, scancode: NativeScancode, pressed: bool) {
        if !Self::is_trackable(scancode) {
            return;
        }
        let i = scancode.index();
        if pressed {
            self.bits[i / 64] |= 1u64 << (i % 64);
        } else {
            self.bits[i / 64] &= !(1u64 << (i % 64));
        }
    }

    /// Returns the number of pressed scancodes.
    pub fn pressed_count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn is_trackable(scancode: NativeScancode) -> bool {
        scancode != NativeScancode::UNKNOWN && scancode.is_in_range()
    }
}

/// Trait abstracting the host windowing/input library.
///
/// All calls are synchronous and read live host state.
#[cfg_attr(test, mockall::automock)]
pub trait InputBackend: Send + Sync {
    /// Returns the current keyboard state.
    fn keyboard_state(&self) -> KeyboardState;

    /// Returns the scancode that produces `key` under the current layout,
    /// or [`NativeScancode::UNKNOWN`].
    fn scancode_from_key(&self, key: NativeKeycode) -> NativeScancode;

    /// Returns the keycode `scancode` produces under the current layout,
    /// or [`NativeKeycode::UNKNOWN`].
    fn key_from_scancode(&self, scancode: NativeScancode) -> NativeKeycode;

    /// Starts delivering text-input events (and shows an IME if applicable).
    fn start_text_input(&self);

    /// Stops delivering text-input events.
    fn stop_text_input(&self);

    /// Hints where text is being entered, in window coordinates.
    fn set_text_input_rect(&self, rect: WindowRect);

    /// Returns `true` while text input is active.
    fn is_text_input_active(&self) -> bool;

    /// Returns `true` if the platform offers an on-screen keyboard.
    fn has_screen_keyboard_support(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_nothing_pressed() {
        let state = KeyboardState::new();
        assert_eq!(state.pressed_count(), 0);
        assert!(!state.is_pressed(NativeScancode(4)));
    }

    #[test]
    fn test_set_and_clear_across_word_boundaries() {
        // Arrange
        let mut state = KeyboardState::new();
        let edges = [1u16, 63, 64, 127, 128, 511];

        // Act
        for &raw in &edges {
            state.set(NativeScancode(raw), true);
        }

        // Assert
        assert_eq!(state.pressed_count(), edges.len());
        for &raw in &edges {
            assert!(state.is_pressed(NativeScancode(raw)), "{raw} should be pressed");
        }

        state.set(NativeScancode(64), false);
        assert!(!state.is_pressed(NativeScancode(64)));
        assert!(state.is_pressed(NativeScancode(63)));
    }

    #[test]
    fn test_unknown_scancode_is_never_pressed() {
        // Arrange
        let mut state = KeyboardState::new();

        // Act
        state.set(NativeScancode::UNKNOWN, true);

        // Assert
        assert_eq!(state.pressed_count(), 0);
        assert!(!state.is_pressed(NativeScancode::UNKNOWN));
    }

    #[test]
    fn test_out_of_range_scancodes_are_ignored() {
        let mut state = KeyboardState::new();
        state.set(NativeScancode(512), true);
        assert_eq!(state.pressed_count(), 0);
        assert!(!state.is_pressed(NativeScancode(512)));
    }
}
