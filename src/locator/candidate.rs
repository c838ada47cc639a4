// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`WeightedCandidate`]s and their ranking.

use std::cmp::Ordering;

use itertools::Itertools as _;

use crate::step::StepDefinition;

/// Step definition found as a possible completion of a step line.
#[derive(Debug)]
pub struct WeightedCandidate<'c, S: ?Sized> {
    /// Found step definition.
    pub step: &'c S,

    /// Relevance of the [`step`](WeightedCandidate::step), higher is better.
    ///
    /// Only comparable with weights found by the same search.
    pub weight: f32,
}

// Implemented manually to omit redundant `S: Clone` trait bound, imposed by
// `#[derive(Clone)]`.
impl<S: ?Sized> Clone for WeightedCandidate<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for WeightedCandidate<'_, S> {}

impl<'c, S: StepDefinition + ?Sized> WeightedCandidate<'c, S> {
    /// Creates a new [`WeightedCandidate`].
    #[must_use]
    pub const fn new(step: &'c S, weight: f32) -> Self {
        Self { step, weight }
    }

    /// Returns documentation of the [`step`](WeightedCandidate::step).
    #[must_use]
    pub fn documentation(&self) -> &'c str {
        self.step.documentation()
    }

    /// Compares [`WeightedCandidate`]s by relevance: a heavier one is
    /// [`Ordering::Less`], so it comes first when sorted.
    #[must_use]
    pub fn by_relevance(&self, other: &Self) -> Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

/// Sorts the given `candidates` from the most relevant to the least one.
///
/// Equally weighted candidates keep their original (traversal) order.
#[must_use]
pub fn rank<'c, S>(
    candidates: impl IntoIterator<Item = WeightedCandidate<'c, S>>,
) -> Vec<WeightedCandidate<'c, S>>
where
    S: StepDefinition + ?Sized + 'c,
{
    candidates
        .into_iter()
        .sorted_by(WeightedCandidate::by_relevance)
        .collect()
}
