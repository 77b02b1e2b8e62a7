//! Configuration module for Horizon
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Projection defaults (baseline window, default horizon)

pub mod paths;
pub mod settings;

pub use paths::HorizonPaths;
pub use settings::Settings;
