//! Levels whose experiential time falls outside the sequence.
//!
//! With the canonical eleven dimensions, level 6 inhabits D1-D13 and would
//! live D14 as time, neither of which the sequence contains.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::LevelProperties;

/// A level whose time dimension does not exist in the configured sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalParadox {
    pub level: u32,
    pub name: String,
    pub spatial_dims: usize,
    pub temporal_dim: usize,
    /// Length of the sequence the level was checked against
    pub n_dims: usize,
}

impl TemporalParadox {
    /// Detect the paradox for `props` against a sequence of `n_dims` dimensions.
    pub fn detect(props: &LevelProperties, n_dims: usize) -> Option<Self> {
        if !props.exceeds_sequence(n_dims) {
            return None;
        }
        Some(Self {
            level: props.level,
            name: props.name.clone(),
            spatial_dims: props.spatial_dims,
            temporal_dim: props.temporal_dim,
            n_dims,
        })
    }

    /// Candidate resolutions for this level, in the order they are usually
    /// presented.
    pub fn resolutions(&self) -> [String; 3] {
        [
            format!(
                "Extend the sequence to D{} as the time of level {}",
                self.temporal_dim, self.level
            ),
            format!("Reinterpret D{} as emergent time", self.n_dims),
            format!("Accept that the {} is atemporal", self.name),
        ]
    }
}

impl fmt::Display for TemporalParadox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "D{} > {}: the time of level {} does not exist in the sequence",
            self.temporal_dim, self.n_dims, self.level
        )
    }
}
