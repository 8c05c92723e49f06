//! Keyboard use case: translates between the engine's [`Key`]/[`Scancode`]
//! enumerations and the host input library, and answers press-state queries.
//!
//! Every lookup degrades to the unknown sentinel; nothing here returns an
//! error.

use std::sync::Arc;

use keybridge_core::{
    CoordinateScaler, Key, NativeScancode, Scancode, TextInputRegion, KEY_MAP, SCANCODE_MAP,
};
use tracing::{debug, trace};

use crate::infrastructure::input_backend::InputBackend;

/// The keyboard module.
///
/// Holds the host backend, an optional window scaler for text-input regions,
/// and the engine-side key-repeat flag.
pub struct Keyboard {
    backend: Arc<dyn InputBackend>,
    scaler: Option<Arc<dyn CoordinateScaler>>,
    key_repeat: bool,
}

impl Keyboard {
    /// Module identifier.
    pub const NAME: &'static str = "keybridge.keyboard";

    /// Creates a keyboard module with no window attached and key repeat off.
    pub fn new(backend: Arc<dyn InputBackend>) -> Self {
        Self {
            backend,
            scaler: None,
            key_repeat: false,
        }
    }

    /// Attaches a window used to convert text-input regions.
    pub fn with_scaler(mut self, scaler: Arc<dyn CoordinateScaler>) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Replaces (or detaches) the window used for text-input regions.
    pub fn set_scaler(&mut self, scaler: Option<Arc<dyn CoordinateScaler>>) {
        self.scaler = scaler;
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn set_key_repeat(&mut self, enable: bool) {
        self.key_repeat = enable;
    }

    pub fn has_key_repeat(&self) -> bool {
        self.key_repeat
    }

    /// Returns `true` if any of `keys` is held down under the current layout.
    pub fn is_down(&self, keys: &[Key]) -> bool {
        if keys.is_empty() {
            return false;
        }

        let state = self.backend.keyboard_state();
        keys.iter().any(|&key| {
            let scancode = self.backend.scancode_from_key(KEY_MAP.native(key));
            let down = state.is_pressed(scancode);
            trace!(key = %key, scancode = scancode.raw(), down, "is_down");
            down
        })
    }

    /// Returns `true` if any of `scancodes` is held down.
    pub fn is_scancode_down(&self, scancodes: &[Scancode]) -> bool {
        if scancodes.is_empty() {
            return false;
        }

        let state = self.backend.keyboard_state();
        scancodes
            .iter()
            .any(|&sc| state.is_pressed(SCANCODE_MAP.native(sc)))
    }

    /// Returns the key the physical position `scancode` produces, or
    /// [`Key::Unknown`].
    pub fn key_from_scancode(&self, scancode: Scancode) -> Key {
        let code = self.backend.key_from_scancode(SCANCODE_MAP.native(scancode));
        KEY_MAP.key(code)
    }

    /// Returns the physical position that produces `key`, or
    /// [`Scancode::Unknown`].
    pub fn scancode_from_key(&self, key: Key) -> Scancode {
        let native = self.backend.scancode_from_key(KEY_MAP.native(key));
        SCANCODE_MAP.scancode_or_unknown(native)
    }

    /// Starts or stops text input.
    pub fn set_text_input(&self, enable: bool) {
        debug!(enable, "set text input");
        if enable {
            self.backend.start_text_input();
        } else {
            self.backend.stop_text_input();
        }
    }

    /// Hints the text-entry region, then starts or stops text input.
    ///
    /// The region is in pixels; it is converted to window coordinates when a
    /// window is attached and passed through unchanged otherwise.
    pub fn set_text_input_region(&self, enable: bool, region: TextInputRegion) {
        let rect = region.to_window_rect(self.scaler.as_deref());
        debug!(?region, ?rect, "text input region");
        self.backend.set_text_input_rect(rect);
        self.set_text_input(enable);
    }

    pub fn has_text_input(&self) -> bool {
        self.backend.is_text_input_active()
    }

    pub fn has_screen_keyboard(&self) -> bool {
        self.backend.has_screen_keyboard_support()
    }

    /// Native value for `scancode` from the static table.
    pub fn native_scancode(&self, scancode: Scancode) -> NativeScancode {
        SCANCODE_MAP.native(scancode)
    }

    /// Scancode for a native value from the static table, if one maps to it.
    pub fn scancode_for_native(&self, native: NativeScancode) -> Option<Scancode> {
        SCANCODE_MAP.scancode(native)
    }
}

impl std::fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard")
            .field("has_scaler", &self.scaler.is_some())
            .field("key_repeat", &self.key_repeat)
            .finish_non_exhaustive()
    }
}
