//! Configuration module for NexTrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::NexTrackPaths;
pub use settings::Settings;
