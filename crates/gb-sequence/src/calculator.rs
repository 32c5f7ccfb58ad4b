//! The sequence calculator: entry point for every derivation.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::config::CalculatorConfig;
use crate::dimension::Sequence;
use crate::error::Result;
use crate::level::LevelProperties;
use crate::metric::LevelMetric;
use crate::paradox::TemporalParadox;
use crate::relation::TimeSpaceRelation;

/// Calculator over a fixed-length García-Barbosa sequence.
///
/// The only state is the configured dimension count and the sequence derived
/// from it at construction. All operations are pure, so the calculator is
/// `Send + Sync` and needs no coordination when shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCalculator {
    config: CalculatorConfig,
    sequence: Sequence,
}

impl SequenceCalculator {
    /// Create a calculator for the given configuration.
    ///
    /// Fails with `InvalidArgument` if the configuration has no dimensions.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let sequence = Sequence::generate(config.n_dims);
        debug!(n_dims = config.n_dims, "Sequence calculator ready");
        Ok(Self { config, sequence })
    }

    /// Create a calculator labelling `n_dims` dimensions.
    pub fn with_dimensions(n_dims: usize) -> Result<Self> {
        Self::new(CalculatorConfig::with_dimensions(n_dims))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn n_dims(&self) -> usize {
        self.config.n_dims
    }

    /// The sequence built at construction.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Derive the space/time labelling of dimensions `1..=n_dims`.
    pub fn generate_sequence(&self) -> Sequence {
        Sequence::generate(self.config.n_dims)
    }

    /// Properties of a perceptual level. Requires `level >= 2`.
    pub fn level_properties(&self, level: u32) -> Result<LevelProperties> {
        let props = LevelProperties::for_level(level)?;
        trace!(
            level = level,
            spatial_dims = props.spatial_dims,
            temporal_dim = props.temporal_dim,
            "Computed level properties"
        );
        Ok(props)
    }

    /// Diagonal metric of a perceptual level. Requires `level >= 2`.
    pub fn level_metric(&self, level: u32) -> Result<LevelMetric> {
        let props = self.level_properties(level)?;
        Ok(LevelMetric::from_properties(&props))
    }

    /// Whether the time of `lower_level` is space for `upper_level`.
    ///
    /// The membership check is evaluated for any pair, including descending
    /// or equal levels.
    pub fn time_space_relation(
        &self,
        lower_level: u32,
        upper_level: u32,
    ) -> Result<TimeSpaceRelation> {
        let lower = self.level_properties(lower_level)?;
        let upper = self.level_properties(upper_level)?;
        let relation = TimeSpaceRelation::between(&lower, &upper);
        trace!(
            lower_level = lower_level,
            upper_level = upper_level,
            related = relation.is_related(),
            "Evaluated time/space relation"
        );
        Ok(relation)
    }

    /// Properties of every level in `levels`.
    pub fn levels(&self, levels: RangeInclusive<u32>) -> Result<Vec<LevelProperties>> {
        levels.map(|level| self.level_properties(level)).collect()
    }

    /// Metrics of every level in `levels`.
    pub fn metrics(&self, levels: RangeInclusive<u32>) -> Result<Vec<LevelMetric>> {
        levels.map(|level| self.level_metric(level)).collect()
    }

    /// Relation of each level in `levels` with the level directly below it.
    ///
    /// The first level of the range has no predecessor in the range and is
    /// skipped.
    pub fn hierarchy(&self, levels: RangeInclusive<u32>) -> Result<Vec<TimeSpaceRelation>> {
        let (start, end) = levels.into_inner();
        let Some(first_upper) = start.checked_add(1) else {
            return Ok(Vec::new());
        };
        (first_upper..=end)
            .map(|upper| self.time_space_relation(upper - 1, upper))
            .collect()
    }

    /// The temporal paradox of `level`, if its time lies outside the sequence.
    pub fn temporal_paradox(&self, level: u32) -> Result<Option<TemporalParadox>> {
        let props = self.level_properties(level)?;
        let paradox = TemporalParadox::detect(&props, self.config.n_dims);
        if paradox.is_some() {
            debug!(
                level = level,
                temporal_dim = props.temporal_dim,
                n_dims = self.config.n_dims,
                "Level time lies outside the sequence"
            );
        }
        Ok(paradox)
    }

    /// Every paradox among `levels`.
    pub fn paradoxes(&self, levels: RangeInclusive<u32>) -> Result<Vec<TemporalParadox>> {
        let mut found = Vec::new();
        for level in levels {
            if let Some(paradox) = self.temporal_paradox(level)? {
                found.push(paradox);
            }
        }
        Ok(found)
    }
}

impl Default for SequenceCalculator {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        Self {
            sequence: Sequence::generate(config.n_dims),
            config,
        }
    }
}
