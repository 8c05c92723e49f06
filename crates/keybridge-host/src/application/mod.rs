//! Application layer for the keyboard module.

pub mod keyboard;
