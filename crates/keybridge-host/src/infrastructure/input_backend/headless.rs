//! In-memory host input library.
//!
//! Behaves like the real host for everything the keyboard module asks of it,
//! without a window or a display:
//!
//! - The layout starts as the host's default US layout and can be overridden
//!   per scancode (see [`HeadlessBackend::with_remap`]).
//! - Key state is driven explicitly with [`HeadlessBackend::press`] and
//!   [`HeadlessBackend::release`].
//! - Text-input toggles and the last region hint are recorded so they can be
//!   inspected afterwards.

use std::sync::{Mutex, MutexGuard, PoisonError};

use keybridge_core::{Key, NativeKeycode, NativeScancode, Scancode, WindowRect, KEY_MAP, SCANCODE_MAP};
use tracing::{debug, trace};

use super::{InputBackend, KeyboardState};

/// Mutable host state.
#[derive(Debug, Default)]
struct HostState {
    pressed: KeyboardState,
    text_input: bool,
    text_rect: Option<WindowRect>,
}

/// A headless [`InputBackend`].
#[derive(Debug)]
pub struct HeadlessBackend {
    /// Keycode produced by each native scancode.
    layout: Vec<NativeKeycode>,
    screen_keyboard: bool,
    state: Mutex<HostState>,
}

impl HeadlessBackend {
    /// Creates a backend with the default US layout, nothing pressed and
    /// text input off.
    pub fn new() -> Self {
        let layout = (0..NativeScancode::COUNT as u16)
            .map(|raw| us_layout_keycode(NativeScancode(raw)))
            .collect();

        Self {
            layout,
            screen_keyboard: false,
            state: Mutex::new(HostState::default()),
        }
    }

    /// Makes `scancode` produce `key` instead of its default keycode.
    pub fn with_remap(mut self, scancode: Scancode, key: Key) -> Self {
        let native = SCANCODE_MAP.native(scancode);
        let code = KEY_MAP.native(key);
        debug!(scancode = %scancode, key = %key, "remapping headless layout");
        self.layout[native.index()] = code;
        self
    }

    /// Sets whether the backend reports on-screen keyboard support.
    pub fn with_screen_keyboard(mut self, supported: bool) -> Self {
        self.screen_keyboard = supported;
        self
    }

    /// Marks `scancode` as held down.
    pub fn press(&self, scancode: Scancode) {
        self.lock().pressed.set(SCANCODE_MAP.native(scancode), true);
    }

    /// Marks `scancode` as released.
    pub fn release(&self, scancode: Scancode) {
        self.lock().pressed.set(SCANCODE_MAP.native(scancode), false);
    }

    /// Releases every key.
    pub fn release_all(&self) {
        self.lock().pressed = KeyboardState::new();
    }

    /// Returns the last text-input region hint, if any was given.
    pub fn text_input_rect(&self) -> Option<WindowRect> {
        self.lock().text_rect
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        // Plain data: a poisoned lock still holds a usable state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBackend for HeadlessBackend {
    fn keyboard_state(&self) -> KeyboardState {
        self.lock().pressed
    }

    fn scancode_from_key(&self, key: NativeKeycode) -> NativeScancode {
        // Lowest scancode wins when several produce the same key.
        self.layout
            .iter()
            .position(|&code| code == key)
            .map(|i| NativeScancode(i as u16))
            .unwrap_or(NativeScancode::UNKNOWN)
    }

    fn key_from_scancode(&self, scancode: NativeScancode) -> NativeKeycode {
        self.layout
            .get(scancode.index())
            .copied()
            .unwrap_or(NativeKeycode::UNKNOWN)
    }

    fn start_text_input(&self) {
        trace!("headless text input started");
        self.lock().text_input = true;
    }

    fn stop_text_input(&self) {
        trace!("headless text input stopped");
        self.lock().text_input = false;
    }

    fn set_text_input_rect(&self, rect: WindowRect) {
        self.lock().text_rect = Some(rect);
    }

    fn is_text_input_active(&self) -> bool {
        self.lock().text_input
    }

    fn has_screen_keyboard_support(&self) -> bool {
        self.screen_keyboard
    }
}

/// Keycode a native scancode produces on the host's default US layout.
///
/// Letters, digits and the main punctuation block produce their characters;
/// Delete produces 0x7F.  Non-US, international and language keys produce
/// nothing.  Every other mapped scancode produces its scancode-derived code.
fn us_layout_keycode(scancode: NativeScancode) -> NativeKeycode {
    let raw = scancode.raw();
    let ch = |c: char| NativeKeycode::from_char(c);

    match raw {
        4..=29 => ch((b'a' + (raw - 4) as u8) as char),
        30..=38 => ch((b'1' + (raw - 30) as u8) as char),
        39 => ch('0'),
        40 => ch('\r'),
        41 => NativeKeycode(0x1B),
        42 => NativeKeycode(0x08),
        43 => ch('\t'),
        44 => ch(' '),
        45 => ch('-'),
        46 => ch('='),
        47 => ch('['),
        48 => ch(']'),
        49 => ch('\\'),
        50 => ch('#'),
        51 => ch(';'),
        52 => ch('\''),
        53 => ch('`'),
        54 => ch(','),
        55 => ch('.'),
        56 => ch('/'),
        76 => NativeKeycode(0x7F),
        100 | 135..=152 => NativeKeycode::UNKNOWN,
        _ => match SCANCODE_MAP.scancode(scancode) {
            Some(sc) if sc != Scancode::Unknown => NativeKeycode::from_scancode(scancode),
            _ => NativeKeycode::UNKNOWN,
        },
    }
}
