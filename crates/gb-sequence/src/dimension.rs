//! Dimension labels and the space/time sequence.
//!
//! The sequence opens with three space dimensions and then alternates
//! time/space: `1S-2S-3S-4T-5S-6T-7S-8T-9S-10T-11S`. The space positions are a
//! fixed list rather than a closed-form rule, so for sequences longer than 11
//! every dimension past the list is labelled time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Indices labelled as space. Anything else is time.
pub const SPACE_INDICES: [usize; 7] = [1, 2, 3, 5, 7, 9, 11];

/// Whether a dimension is perceived as space or as time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionLabel {
    Space,
    Time,
}

impl DimensionLabel {
    /// Label for a 1-based dimension index.
    pub fn for_index(index: usize) -> Self {
        if SPACE_INDICES.contains(&index) {
            DimensionLabel::Space
        } else {
            DimensionLabel::Time
        }
    }

    /// Single-letter form used in compact renderings.
    pub fn short(self) -> char {
        match self {
            DimensionLabel::Space => 'S',
            DimensionLabel::Time => 'T',
        }
    }
}

impl fmt::Display for DimensionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionLabel::Space => write!(f, "SPACE"),
            DimensionLabel::Time => write!(f, "TIME"),
        }
    }
}

/// One labelled slot of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// 1-based position in the sequence
    pub index: usize,
    pub label: DimensionLabel,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.index)
    }
}

/// The ordered, immutable labelling of dimensions `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    dimensions: Vec<Dimension>,
}

impl Sequence {
    /// Label dimensions `1..=n_dims`.
    pub fn generate(n_dims: usize) -> Self {
        let dimensions = (1..=n_dims)
            .map(|index| Dimension {
                index,
                label: DimensionLabel::for_index(index),
            })
            .collect();
        Self { dimensions }
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dimension> {
        self.dimensions.iter()
    }

    /// Label of the 1-based `index`, or `None` if it lies outside the sequence.
    pub fn label_of(&self, index: usize) -> Option<DimensionLabel> {
        index
            .checked_sub(1)
            .and_then(|i| self.dimensions.get(i))
            .map(|d| d.label)
    }

    /// Indices labelled space, in order.
    pub fn space_indices(&self) -> Vec<usize> {
        self.indices_with(DimensionLabel::Space)
    }

    /// Indices labelled time, in order.
    pub fn time_indices(&self) -> Vec<usize> {
        self.indices_with(DimensionLabel::Time)
    }

    fn indices_with(&self, label: DimensionLabel) -> Vec<usize> {
        self.dimensions
            .iter()
            .filter(|d| d.label == label)
            .map(|d| d.index)
            .collect()
    }

    /// Compact pattern, e.g. `1S-2S-3S-4T-5S`.
    pub fn pattern(&self) -> String {
        self.dimensions
            .iter()
            .map(|d| format!("{}{}", d.index, d.label.short()))
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.dimensions.iter()
    }
}
