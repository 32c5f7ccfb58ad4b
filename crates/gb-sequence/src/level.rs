//! Perceptual levels: which dimensions a being inhabits and which it lives as time.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest perceptual level (three-dimensional beings such as humans).
pub const MIN_LEVEL: u32 = 2;

/// Highest perceptual level accepted.
///
/// Level properties list every inhabited dimension and the metric is a dense
/// `(2L+2) x (2L+2)` matrix, so the level is capped to keep both bounded.
pub const MAX_LEVEL: u32 = 1024;

/// Derived properties of a perceptual level.
///
/// For level `L` the inhabitant occupies dimensions `1..=2L+1` and experiences
/// dimension `2L+2` as time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProperties {
    pub level: u32,
    /// Human-readable name, e.g. "3D being"
    pub name: String,
    /// Number of inhabited spatial dimensions (`2L + 1`)
    pub spatial_dims: usize,
    /// Dimension experienced as time (`spatial_dims + 1`)
    pub temporal_dim: usize,
    /// Total dimensions the level perceives (`spatial_dims + 1`)
    pub total_dims: usize,
    /// Inhabited dimensions, `1..=spatial_dims`
    pub inhabited_dims: Vec<usize>,
    /// Experiential time; always equal to `temporal_dim`
    pub experiential_time: usize,
}

impl LevelProperties {
    /// Compute the properties of `level`.
    ///
    /// Fails with [`Error::InvalidArgument`] when `level < MIN_LEVEL` or
    /// `level > MAX_LEVEL`.
    pub fn for_level(level: u32) -> Result<Self> {
        if level < MIN_LEVEL {
            return Err(Error::InvalidArgument(format!(
                "minimum level is {} (3D beings), got {}",
                MIN_LEVEL, level
            )));
        }
        if level > MAX_LEVEL {
            return Err(Error::InvalidArgument(format!(
                "maximum level is {}, got {}",
                MAX_LEVEL, level
            )));
        }

        let spatial_dims = 2 * level as usize + 1;
        let temporal_dim = spatial_dims + 1;

        Ok(Self {
            level,
            name: level_name(level),
            spatial_dims,
            temporal_dim,
            total_dims: spatial_dims + 1,
            inhabited_dims: (1..=spatial_dims).collect(),
            experiential_time: temporal_dim,
        })
    }

    /// Whether `dimension` is one this level inhabits.
    pub fn inhabits(&self, dimension: usize) -> bool {
        (1..=self.spatial_dims).contains(&dimension)
    }

    /// Whether the level's time dimension lies past the end of a sequence of
    /// `n_dims` dimensions.
    pub fn exceeds_sequence(&self, n_dims: usize) -> bool {
        self.temporal_dim > n_dims
    }
}

/// Descriptive name for a level.
///
/// The names follow the narrative of the theory and do not match the
/// `2L + 1` formula (level 2 is called "3D being" but inhabits five
/// dimensions); both are kept as they are.
pub fn level_name(level: u32) -> String {
    match level {
        2 => "3D being".to_string(),
        3 => "5D being".to_string(),
        4 => "7D being".to_string(),
        5 => "9D being".to_string(),
        6 => "11D being".to_string(),
        other => format!("level-{} being", other),
    }
}
