// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Catalog`]s of step definitions and the in-memory [`Collection`].

use std::sync::Arc;

use derive_more::with_trait::{Deref, From};
use gherkin::StepType;

use crate::{
    error::{TemplateError, TraversalError},
    step::{Location, PatternStep, StepDefinition},
};

/// Source of all the step definitions available in a project.
///
/// A [`Catalog`] is owned by a project model, the matcher only walks it.
/// Rebuilding a [`Catalog`] while it's being traversed is up to its owner to
/// prevent.
pub trait Catalog {
    /// Step definitions of this [`Catalog`].
    type Step: StepDefinition;

    /// Calls the `visitor` once for every step definition, in a stable order.
    ///
    /// # Errors
    ///
    /// If the underlying project model is inconsistent and cannot be walked.
    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c Self::Step),
    ) -> Result<(), TraversalError>;
}

impl<S: StepDefinition> Catalog for [S] {
    type Step = S;

    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c S),
    ) -> Result<(), TraversalError> {
        self.iter().for_each(visitor);
        Ok(())
    }
}

impl<S: StepDefinition> Catalog for Vec<S> {
    type Step = S;

    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c S),
    ) -> Result<(), TraversalError> {
        self.as_slice().traverse(visitor)
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    type Step = C::Step;

    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c C::Step),
    ) -> Result<(), TraversalError> {
        (**self).traverse(visitor)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    type Step = C::Step;

    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c C::Step),
    ) -> Result<(), TraversalError> {
        (**self).traverse(visitor)
    }
}

/// In-memory [`Catalog`] of [`PatternStep`]s.
///
/// Traversal follows the insertion order and never fails.
#[derive(Clone, Debug, Default, Deref, From)]
pub struct Collection {
    /// Registered [`PatternStep`]s.
    steps: Vec<PatternStep>,
}

impl Collection {
    /// Creates a new empty [`Collection`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given [`PatternStep`].
    #[must_use]
    pub fn step(mut self, step: PatternStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Adds a [Given] step with the given `pattern`.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid [`Template`].
    ///
    /// [`Template`]: crate::step::Template
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    pub fn given(
        self,
        loc: Location,
        pattern: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        self.add(StepType::Given, loc, pattern)
    }

    /// Adds a [When] step with the given `pattern`.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid [`Template`].
    ///
    /// [`Template`]: crate::step::Template
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    pub fn when(
        self,
        loc: Location,
        pattern: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        self.add(StepType::When, loc, pattern)
    }

    /// Adds a [Then] step with the given `pattern`.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid [`Template`].
    ///
    /// [`Template`]: crate::step::Template
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    pub fn then(
        self,
        loc: Location,
        pattern: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        self.add(StepType::Then, loc, pattern)
    }

    /// Adds a step of the given type.
    fn add(
        self,
        ty: StepType,
        loc: Location,
        pattern: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        Ok(self.step(PatternStep::new(ty, pattern, loc)?))
    }
}

impl FromIterator<PatternStep> for Collection {
    fn from_iter<I: IntoIterator<Item = PatternStep>>(iter: I) -> Self {
        Self { steps: iter.into_iter().collect() }
    }
}

impl Catalog for Collection {
    type Step = PatternStep;

    fn traverse<'c>(
        &'c self,
        visitor: &mut dyn FnMut(&'c PatternStep),
    ) -> Result<(), TraversalError> {
        self.steps.traverse(visitor)
    }
}
