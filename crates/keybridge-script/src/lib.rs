//! keybridge-script library crate.
//!
//! Exposes the keyboard module to a scripting layer.
//!
//! ```text
//! [keybridge-script]
//!   ├── compat           set_funcs: version-aware function registration
//!   ├── domain/          ScriptValue, JSON Request / Reply
//!   ├── application/
//!   │     ├── wrap_keyboard   the `keyboard` module's functions
//!   │     └── script_session  request dispatch
//!   └── error            ScriptError
//! ```

/// Pure types: script values and JSON messages.
pub mod domain;

/// Keyboard bindings and request dispatch.
pub mod application;

/// Function registration across scripting API levels.
pub mod compat;

pub mod error;

pub use compat::{set_funcs, ApiVersion, FunctionReg, ModuleTable, NativeFn, MAX_UPVALUES};
pub use domain::{Reply, Request, ScriptValue};
pub use error::ScriptError;
