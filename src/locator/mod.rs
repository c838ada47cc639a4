// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepLocator`] searching a [`Catalog`] for step definitions.
//!
//! Two kinds of searches are supported:
//! - [`StepLocator::find_candidates_starting_with()`] lists step definitions
//!   that may complete a partially typed line, with their weights;
//! - [`StepLocator::find_first_step()`] resolves a fully typed line to the
//!   single step definition implementing it.

mod candidate;
mod score;

use itertools::Itertools as _;

use crate::{
    catalog::Catalog,
    cli::Options,
    error::SearchError,
    line::ParsedLine,
    step::StepDefinition,
};

pub use self::{
    candidate::{rank, WeightedCandidate},
    score::{score, BLANK_BODY_WEIGHT},
};

/// Locator of step definitions in a [`Catalog`].
///
/// Holds no state besides the [`Catalog`] and [`Options`], so every search
/// sees the [`Catalog`] as it is at the moment of the call.
#[derive(Clone, Debug)]
pub struct StepLocator<C> {
    /// [`Catalog`] to search in.
    catalog: C,

    /// Search [`Options`].
    opts: Options,
}

impl<C: Catalog> StepLocator<C> {
    /// Creates a new [`StepLocator`] over the given `catalog` with default
    /// [`Options`].
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self { catalog, opts: Options::default() }
    }

    /// Replaces [`Options`] of this [`StepLocator`].
    #[must_use]
    pub fn with_options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    /// Returns [`Options`] of this [`StepLocator`].
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.opts
    }

    /// Returns the [`Catalog`] of this [`StepLocator`].
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Finds all the step definitions that may complete the given, possibly
    /// partially typed, step `line`.
    ///
    /// Candidates are returned in [`Catalog`] traversal order, use [`rank()`]
    /// to sort them by relevance.
    ///
    /// # Errors
    ///
    /// If the [`Catalog`] cannot be traversed. No partial result is returned
    /// then.
    pub fn find_candidates_starting_with(
        &self,
        line: &str,
    ) -> Result<Vec<WeightedCandidate<'_, C::Step>>, SearchError> {
        let parsed = ParsedLine::parse(line);

        let mut found = Vec::new();
        self.catalog
            .traverse(&mut |step| match score(&parsed, step, &self.opts) {
                Some(weight) => found.push(WeightedCandidate::new(step, weight)),
                None => tracing::trace!(
                    line,
                    step = ?step.handle(),
                    "step candidate rejected",
                ),
            })
            .map_err(|e| {
                tracing::error!(line, error = %e, "failed to find candidates");
                SearchError::new(line, e)
            })?;

        tracing::debug!(
            line,
            keyword = ?parsed.keyword,
            candidates = found.len(),
            "found step candidates",
        );
        Ok(found)
    }

    /// Finds the step definition matching the given full step `line`.
    ///
    /// If several step definitions match, the one with the highest
    /// [`StepDefinition::priority()`] wins, and among equal priorities the
    /// first one in [`Catalog`] traversal order.
    ///
    /// # Errors
    ///
    /// If the [`Catalog`] cannot be traversed.
    pub fn find_first_step(
        &self,
        line: &str,
    ) -> Result<Option<&C::Step>, SearchError> {
        let mut matching = Vec::new();
        self.catalog
            .traverse(&mut |step| {
                if step.matches(line) {
                    matching.push(step);
                }
            })
            .map_err(|e| {
                tracing::error!(line, error = %e, "failed to resolve step");
                SearchError::new(line, e)
            })?;

        if matching.len() > 1 {
            tracing::debug!(line, matches = matching.len(), "ambiguous step line");
        }
        Ok(first_with_highest_priority(matching))
    }

    /// Returns the [`StepDefinition::Handle`] of the step definition the given
    /// full step `line` resolves to, if any.
    ///
    /// # Errors
    ///
    /// If the [`Catalog`] cannot be traversed.
    pub fn resolve_handle(
        &self,
        line: &str,
    ) -> Result<Option<&<C::Step as StepDefinition>::Handle>, SearchError> {
        Ok(self.find_first_step(line)?.map(StepDefinition::handle))
    }
}

/// Returns the first of the given `steps` having the highest
/// [`StepDefinition::priority()`].
#[must_use]
pub fn first_with_highest_priority<'c, S>(
    steps: impl IntoIterator<Item = &'c S>,
) -> Option<&'c S>
where
    S: StepDefinition + ?Sized + 'c,
{
    steps.into_iter().max_set_by_key(|s| s.priority()).into_iter().next()
}
