//! Infrastructure adapters for the keyboard module.
//!
//! - [`input_backend`]: the host input-library seam and its headless implementation.
//! - [`window`]: pixel-to-window coordinate scaling.
//! - [`storage`]: TOML configuration on disk.
//! - [`session`]: wires a configured keyboard over the headless backend.

pub mod input_backend;
pub mod session;
pub mod storage;
pub mod window;
