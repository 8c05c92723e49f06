//! Wires a [`Keyboard`] to a [`HeadlessBackend`] from a [`KeybridgeConfig`].

use std::sync::Arc;

use keybridge_core::Key;
use tracing::{debug, info, warn};

use crate::application::keyboard::Keyboard;
use crate::infrastructure::input_backend::headless::HeadlessBackend;
use crate::infrastructure::storage::config::KeybridgeConfig;
use crate::infrastructure::window::FixedScaleWindow;

/// A keyboard module running on the headless backend.
///
/// The backend handle is kept so callers can drive key state directly.
#[derive(Debug)]
pub struct KeyboardSession {
    backend: Arc<HeadlessBackend>,
    keyboard: Keyboard,
}

impl KeyboardSession {
    /// Builds a session with the layout overrides, window density and
    /// initial keyboard state from `config`.
    pub fn from_config(config: &KeybridgeConfig) -> Self {
        let mut backend =
            HeadlessBackend::new().with_screen_keyboard(config.keyboard.screen_keyboard);

        for entry in &config.layout.remap {
            if entry.key == Key::Unknown {
                warn!(scancode = %entry.scancode, "remap to unknown key; position will produce nothing");
            }
            backend = backend.with_remap(entry.scancode, entry.key);
        }

        let density = config.window.pixel_density;
        let window = FixedScaleWindow::new(density);
        if window.pixel_density() != density {
            warn!(density, "invalid pixel density, using 1.0");
        }

        let backend = Arc::new(backend);
        let mut keyboard = Keyboard::new(backend.clone()).with_scaler(Arc::new(window));
        keyboard.set_key_repeat(config.keyboard.key_repeat);
        if config.keyboard.text_input {
            keyboard.set_text_input(true);
        }

        info!(
            remaps = config.layout.remap.len(),
            pixel_density = window.pixel_density(),
            "keyboard session ready"
        );
        debug!(?keyboard, "session keyboard");

        Self { backend, keyboard }
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn backend(&self) -> &HeadlessBackend {
        &self.backend
    }
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::from_config(&KeybridgeConfig::default())
    }
}
