//! García-Barbosa sequence: alternating space/time dimensions and perceptual levels.
//!
//! This crate labels a fixed run of abstract dimensions as space or time and
//! derives, for each perceptual level, the dimensions its inhabitants occupy,
//! the one they experience as time, and the diagonal metric that goes with it.
//!
//! Every operation is a pure function of its integer inputs and the configured
//! dimension count, so a [`SequenceCalculator`] can be shared freely.
//!
//! ```
//! use gb_sequence::{DimensionLabel, SequenceCalculator};
//!
//! let calculator = SequenceCalculator::default();
//! let sequence = calculator.generate_sequence();
//! assert_eq!(sequence.label_of(4), Some(DimensionLabel::Time));
//!
//! let humans = calculator.level_properties(2).unwrap();
//! assert_eq!(humans.spatial_dims, 5);
//! assert_eq!(humans.temporal_dim, 6);
//! ```

pub mod calculator;
pub mod config;
pub mod dimension;
pub mod error;
pub mod level;
pub mod metric;
pub mod paradox;
pub mod relation;

pub use calculator::SequenceCalculator;
pub use config::{CalculatorConfig, DEFAULT_DIMENSIONS};
pub use dimension::{Dimension, DimensionLabel, Sequence, SPACE_INDICES};
pub use error::{Error, Result};
pub use level::{level_name, LevelProperties, MAX_LEVEL, MIN_LEVEL};
pub use metric::{LevelMetric, Signature};
pub use paradox::TemporalParadox;
pub use relation::TimeSpaceRelation;
