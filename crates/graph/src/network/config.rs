//! Configuration for random network generation.

use std::path::Path;

use geonet_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`Network::build`](super::Network::build).
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```toml
/// node_count = 250
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of nodes to place.
    #[serde(default = "default_node_count")]
    pub node_count: usize,

    /// Side length of the square placement area.
    #[serde(default = "default_side")]
    pub side: f64,

    /// Nodes closer than or exactly this far apart are linked.
    #[serde(default = "default_link_radius")]
    pub link_radius: f64,

    /// Seed for reproducible placement; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: default_node_count(),
            side: default_side(),
            link_radius: default_link_radius(),
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Create a new network config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    #[must_use]
    pub const fn with_side(mut self, side: f64) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub const fn with_link_radius(mut self, link_radius: f64) -> Self {
        self.link_radius = link_radius;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `TomlParseFailed` on malformed input and `InvalidConfig` if the
    /// parsed values fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::toml_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FileReadFailed` if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the side is not a positive finite number or
    /// the link radius is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.side.is_finite() || self.side <= 0.0 {
            return Err(Error::invalid_config(format!(
                "side must be a positive number, got {}",
                self.side
            )));
        }

        if !self.link_radius.is_finite() || self.link_radius < 0.0 {
            return Err(Error::invalid_config(format!(
                "link_radius must be a non-negative number, got {}",
                self.link_radius
            )));
        }

        Ok(())
    }
}

const fn default_node_count() -> usize {
    1000
}

const fn default_side() -> f64 {
    200.0
}

fn default_link_radius() -> f64 {
    20.0 * std::f64::consts::SQRT_2
}
