//! Domain types for the keyboard module.
//!
//! Nothing here touches the host input library or the window system; the
//! collaborators the domain needs are expressed as traits that the host
//! crate implements.

/// Text-input region and the window coordinate conversion it depends on.
pub mod text_input;
