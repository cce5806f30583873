//! Configuration module for FinSmart
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinsmartPaths;
pub use settings::{ProjectionSettings, Settings};
