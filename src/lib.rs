//! dist-sanitize library exports.
//!
//! Strips development-only files from a staged meson distribution tree,
//! regenerates the autotools build system inside it, and removes the
//! autotools cache. The binary is a thin CLI over [`sanitize::sanitize`].

pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod preflight;
pub mod process;
pub mod sanitize;
pub mod timing;

pub use config::{Config, Mode};
pub use error::SanitizeError;
pub use sanitize::{sanitize, sanitize_from_config};
