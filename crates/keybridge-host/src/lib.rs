//! keybridge-host library entry point.
//!
//! - [`application`] holds the [`Keyboard`](application::keyboard::Keyboard)
//!   translator, which answers press-state queries and drives text input.
//! - [`infrastructure`] holds the host input-library seam, the headless
//!   backend, the window scaler and configuration persistence.

pub mod application;
pub mod infrastructure;
