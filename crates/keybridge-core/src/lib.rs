//! # keybridge-core
//!
//! Key identity types and translation tables shared by the keyboard module
//! and its scripting bridge.
//!
//! The engine talks about keys in two vocabularies:
//!
//! - **[`Key`]**: what a key *means* under the active layout ("the key that
//!   types `a`").
//! - **[`Scancode`]**: where a key *is* on the board ("the key left of `S`").
//!
//! The host input library has its own numbering for both
//! ([`NativeKeycode`], [`NativeScancode`]).  The [`keymap`] module holds the
//! fixed tables that translate between the two worlds; [`domain`] holds the
//! text-input region type and the coordinate conversion seam the keyboard
//! needs from the window system.
//!
//! This crate has no dependency on the host input library, the window system
//! or the scripting runtime.

pub mod domain;
pub mod keymap;

pub use domain::text_input::{CoordinateScaler, TextInputRegion, WindowRect};
pub use keymap::{
    ConstantError, Key, KeyMap, NativeKeycode, NativeScancode, Scancode, ScancodeMap, KEY_MAP,
    SCANCODE_MAP,
};
