//! wamsort Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings};
pub use error::{SettingsError, SettingsResult};
