//! Flat data-parallel sweeps over axes or vertices.

use crate::math::{Point, Real};
use crate::transform::RigidTransform;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the per-element results of a batch are combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// The batch succeeds if at least one element succeeds.
    Any,
    /// The batch succeeds if it is not empty and every element succeeds.
    All,
}

impl Reduction {
    /// Combines the per-element results.
    ///
    /// Both reductions fail on an empty slice.
    pub fn reduce(self, results: &[bool]) -> bool {
        match self {
            Reduction::Any => results.iter().any(|r| *r),
            Reduction::All => !results.is_empty() && results.iter().all(|r| *r),
        }
    }
}

/// Tuning of the batch evaluation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Batches with fewer elements than this run on the calling thread.
    ///
    /// Ignored if the `parallel` feature is disabled: every batch then runs on the calling
    /// thread.
    pub parallel_threshold: usize,
    /// The minimum number of elements evaluated by one parallel work unit.
    pub min_len: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            min_len: 1,
        }
    }
}

/// Evaluates a predicate on every element of a batch, then reduces the results.
///
/// The elements are independent: each one writes its own slot of a result buffer, and the
/// reduction only starts once every slot is written. The buffer lives for the duration of
/// one call to [`BatchEvaluator::evaluate`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchEvaluator {
    /// The tuning of this evaluator.
    pub options: BatchOptions,
}

impl BatchEvaluator {
    /// Creates an evaluator with the given options.
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// An evaluator running every batch on the calling thread.
    pub fn sequential() -> Self {
        Self::new(BatchOptions {
            parallel_threshold: usize::MAX,
            min_len: 1,
        })
    }

    #[cfg(feature = "parallel")]
    fn runs_in_parallel(&self, len: usize) -> bool {
        len >= self.options.parallel_threshold
    }

    /// Evaluates `predicate(i)` for every `i` in `0..len` and combines the results.
    ///
    /// An empty batch fails, whatever the reduction.
    pub fn evaluate<F>(&self, len: usize, reduction: Reduction, predicate: F) -> bool
    where
        F: Fn(usize) -> bool + Sync,
    {
        if len == 0 {
            return false;
        }

        let mut results = vec![false; len];

        #[cfg(feature = "parallel")]
        if self.runs_in_parallel(len) {
            results
                .par_iter_mut()
                .with_min_len(self.options.min_len.max(1))
                .enumerate()
                .for_each(|(i, slot)| *slot = predicate(i));
            return reduction.reduce(&results);
        }

        for (i, slot) in results.iter_mut().enumerate() {
            *slot = predicate(i);
        }

        reduction.reduce(&results)
    }

    /// Maps every point of `points` to world-space with `transform`.
    pub fn transform_points(
        &self,
        points: &[Point<Real>],
        transform: &RigidTransform,
    ) -> Vec<Point<Real>> {
        #[cfg(feature = "parallel")]
        if self.runs_in_parallel(points.len()) {
            return points
                .par_iter()
                .with_min_len(self.options.min_len.max(1))
                .map(|pt| transform.transform_point(pt))
                .collect();
        }

        points
            .iter()
            .map(|pt| transform.transform_point(pt))
            .collect()
    }
}
