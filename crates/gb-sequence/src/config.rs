//! Configuration types for the calculator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of dimensions in the canonical sequence.
pub const DEFAULT_DIMENSIONS: usize = 11;

/// Calculator configuration.
///
/// Loaded from JSON at runtime; every field has a default so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Total number of dimensions labelled by the sequence
    #[serde(default = "default_dimensions")]
    pub n_dims: usize,
}

fn default_dimensions() -> usize {
    DEFAULT_DIMENSIONS
}

impl CalculatorConfig {
    /// Configuration with the given dimension count.
    pub fn with_dimensions(n_dims: usize) -> Self {
        Self { n_dims }
    }

    /// Check that the configuration describes a non-empty sequence.
    pub fn validate(&self) -> Result<()> {
        if self.n_dims == 0 {
            return Err(Error::InvalidArgument(
                "dimension count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            n_dims: DEFAULT_DIMENSIONS,
        }
    }
}
