/// Argument checking helpers for native functions.
pub mod args;

/// JSON request dispatch over a keyboard session.
pub mod script_session;

/// The `keyboard` script module.
pub mod wrap_keyboard;
