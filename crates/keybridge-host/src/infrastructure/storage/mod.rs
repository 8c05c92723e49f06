//! Persistent storage for keyboard module settings.

pub mod config;
