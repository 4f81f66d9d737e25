//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an overtime
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{OvertimePolicy, PolicyConfig, PolicyMetadata};

/// Loads and provides access to the overtime policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Policy metadata and overtime thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Daily threshold: {}h", loader.policy().daily_threshold_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, or
    /// holds a policy that fails [`OvertimePolicy::validate`].
    ///
    /// ```no_run
    /// use hours_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), hours_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let config = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        config.overtime.validate()?;

        debug!(
            path = %policy_path.display(),
            policy = %config.metadata.name,
            version = %config.metadata.version,
            "Loaded overtime policy"
        );

        Ok(Self { config })
    }

    /// Builds a loader around an in-memory policy, skipping the filesystem.
    pub fn from_policy(metadata: PolicyMetadata, policy: OvertimePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self {
            config: PolicyConfig {
                metadata,
                overtime: policy,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.config.metadata
    }

    /// Returns the overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.config.overtime
    }
}
