//! Configuration module for Runway
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RunwayPaths;
pub use settings::Settings;
