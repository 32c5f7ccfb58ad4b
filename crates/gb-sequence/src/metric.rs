//! Diagonal metric tensors for perceptual levels.

use std::fmt;
use std::iter;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::level::LevelProperties;

/// Count of positive and negative diagonal entries, written `(p, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub positive: usize,
    pub negative: usize,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.positive, self.negative)
    }
}

/// The metric a being of a given level lives in.
///
/// `spatial_dims` entries of `+1` followed by a single `-1` for the
/// experiential time dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelMetric {
    pub level: u32,
    /// Side length of the metric (total dimensions of the level)
    pub dimensions: usize,
    pub metric: Array2<i32>,
    pub signature: Signature,
}

impl LevelMetric {
    /// Build the metric for already computed level properties.
    pub fn from_properties(props: &LevelProperties) -> Self {
        let k = props.spatial_dims;
        let diagonal: Array1<i32> = iter::repeat(1).take(k).chain(iter::once(-1)).collect();

        Self {
            level: props.level,
            dimensions: k + 1,
            metric: Array2::from_diag(&diagonal),
            signature: Signature {
                positive: k,
                negative: 1,
            },
        }
    }

    /// Diagonal entries in order.
    pub fn diagonal(&self) -> Vec<i32> {
        self.metric.diag().to_vec()
    }

    /// Signature as `"(p, q)"`.
    pub fn signature_string(&self) -> String {
        self.signature.to_string()
    }

    /// Squared interval `v^T g v` of a displacement in this metric.
    ///
    /// Returns `None` when `v` does not have one component per dimension or
    /// the sum overflows `i64`.
    pub fn interval(&self, v: &[i32]) -> Option<i64> {
        if v.len() != self.dimensions {
            return None;
        }
        // g is diagonal, so v^T g v = sum of g_ii * v_i^2
        self.metric
            .diag()
            .iter()
            .zip(v)
            .try_fold(0i64, |acc, (&g, &x)| {
                let x = i64::from(x);
                let term = x.checked_mul(x)?.checked_mul(i64::from(g))?;
                acc.checked_add(term)
            })
    }
}
