//! Configuration module for FINA
//!
//! This module provides configuration management including:
//! - Platform config path resolution
//! - User settings persistence (the only cross-session state)

pub mod paths;
pub mod settings;

pub use paths::FinaPaths;
pub use settings::Settings;
