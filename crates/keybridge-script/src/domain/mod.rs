//! Pure script-side types: values and the JSON request/reply messages.

pub mod messages;
pub mod value;

pub use messages::{Reply, Request};
pub use value::ScriptValue;
