//! How the time of one level relates to the space of another.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::LevelProperties;

/// Outcome of comparing a lower level's time with an upper level's space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeSpaceRelation {
    /// The lower level's time dimension is inhabited as space by the upper level.
    Related {
        dimension: usize,
        lower_level: u32,
        upper_level: u32,
    },
    /// The upper level does not inhabit the lower level's time dimension.
    Unrelated { lower_level: u32, upper_level: u32 },
}

impl TimeSpaceRelation {
    /// Check whether `upper` inhabits the time dimension of `lower`.
    ///
    /// No ordering is assumed between the two levels; the membership test
    /// alone decides the outcome.
    pub fn between(lower: &LevelProperties, upper: &LevelProperties) -> Self {
        let time = lower.experiential_time;
        if upper.inhabits(time) {
            TimeSpaceRelation::Related {
                dimension: time,
                lower_level: lower.level,
                upper_level: upper.level,
            }
        } else {
            TimeSpaceRelation::Unrelated {
                lower_level: lower.level,
                upper_level: upper.level,
            }
        }
    }

    pub fn is_related(&self) -> bool {
        matches!(self, TimeSpaceRelation::Related { .. })
    }

    /// The shared dimension, if any.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            TimeSpaceRelation::Related { dimension, .. } => Some(*dimension),
            TimeSpaceRelation::Unrelated { .. } => None,
        }
    }

    pub fn levels(&self) -> (u32, u32) {
        match *self {
            TimeSpaceRelation::Related {
                lower_level,
                upper_level,
                ..
            }
            | TimeSpaceRelation::Unrelated {
                lower_level,
                upper_level,
            } => (lower_level, upper_level),
        }
    }
}

impl fmt::Display for TimeSpaceRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpaceRelation::Related {
                dimension,
                lower_level,
                upper_level,
            } => write!(
                f,
                "D{} (time of level {}) = space for level {}",
                dimension, lower_level, upper_level
            ),
            TimeSpaceRelation::Unrelated {
                lower_level,
                upper_level,
            } => write!(
                f,
                "No direct relation between levels {} and {}",
                lower_level, upper_level
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(level: u32) -> LevelProperties {
        LevelProperties::for_level(level).unwrap()
    }

    #[test]
    fn test_consecutive_levels_related() {
        let relation = TimeSpaceRelation::between(&props(2), &props(3));
        assert_eq!(
            relation,
            TimeSpaceRelation::Related {
                dimension: 6,
                lower_level: 2,
                upper_level: 3,
            }
        );
        assert_eq!(relation.to_string(), "D6 (time of level 2) = space for level 3");
    }

    #[test]
    fn test_descending_levels_unrelated() {
        let relation = TimeSpaceRelation::between(&props(3), &props(2));
        assert!(!relation.is_related());
        assert_eq!(relation.dimension(), None);
        assert_eq!(relation.levels(), (3, 2));
        assert_eq!(relation.to_string(), "No direct relation between levels 3 and 2");
    }

    #[test]
    fn test_same_level_unrelated() {
        // a level never inhabits its own time
        assert!(!TimeSpaceRelation::between(&props(4), &props(4)).is_related());
    }

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_value(TimeSpaceRelation::between(&props(2), &props(3))).unwrap();
        assert_eq!(json["kind"], "related");
        assert_eq!(json["dimension"], 6);
    }
}
