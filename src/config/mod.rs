//! Configuration loading and management for the hours engine.
//!
//! This module provides the [`OvertimePolicy`] that drives every threshold
//! and multiplier in the pipeline, and a loader for YAML policy files.
//!
//! # Example
//!
//! ```no_run
//! use hours_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HourRounding, OvertimePolicy, PolicyConfig, PolicyMetadata};
