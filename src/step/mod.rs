// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step definitions a [`StepLocator`] matches step lines against.
//!
//! - [`StepDefinition`]: capabilities the matcher requires from a step
//!   definition
//! - [`pattern`]: [`PatternStep`], a ready [`StepDefinition`] over a
//!   [`Template`]
//! - [`template`]: `$name` parametrized step patterns and their weighting
//! - [`doc`]: lazily resolved documentation
//! - [`location`]: where a step definition lives
//!
//! [`StepLocator`]: crate::StepLocator

pub mod doc;
pub mod location;
pub mod pattern;
pub mod template;

use std::{fmt, sync::Arc};

use gherkin::StepType;

use crate::line::StepKeyword;

pub use self::{
    doc::{DocSource, LazyDoc, SharedDocSource, NO_DOCUMENTATION},
    location::Location,
    pattern::PatternStep,
    template::{Segment, Template, MIN_WEIGHT},
};

/// Step definition stored in a [`Catalog`].
///
/// The matcher only ever reads step definitions.
///
/// [`Catalog`]: crate::Catalog
pub trait StepDefinition {
    /// Identifier of the code implementing this step definition.
    type Handle: fmt::Debug;

    /// Returns the [`StepType`] of this step definition.
    fn step_type(&self) -> StepType;

    /// Indicates whether a line introduced by the given `keyword` (or by no
    /// keyword at all) may be of this step definition's type.
    fn is_type_equal_to(&self, keyword: Option<StepKeyword>) -> bool;

    /// Weighs the given step `body` (a line without its keyword) as a
    /// completion candidate.
    ///
    /// Anything not greater than `0.0` means the `body` can't be completed
    /// into this step definition.
    fn weight_of(&self, body: &str) -> f32;

    /// Indicates whether this step definition matches the given full `line`,
    /// keyword included.
    fn matches(&self, line: &str) -> bool;

    /// Priority breaking ties between several step definitions matching the
    /// same line. Higher wins.
    fn priority(&self) -> i32 {
        0
    }

    /// Returns the [`Handle`] of this step definition.
    ///
    /// [`Handle`]: StepDefinition::Handle
    fn handle(&self) -> &Self::Handle;

    /// Returns the documentation of this step definition.
    ///
    /// Never fails, falling back to some placeholder text instead.
    fn documentation(&self) -> &str;
}

impl<S: StepDefinition + ?Sized> StepDefinition for Arc<S> {
    type Handle = S::Handle;

    fn step_type(&self) -> StepType {
        (**self).step_type()
    }

    fn is_type_equal_to(&self, keyword: Option<StepKeyword>) -> bool {
        (**self).is_type_equal_to(keyword)
    }

    fn weight_of(&self, body: &str) -> f32 {
        (**self).weight_of(body)
    }

    fn matches(&self, line: &str) -> bool {
        (**self).matches(line)
    }

    fn priority(&self) -> i32 {
        (**self).priority()
    }

    fn handle(&self) -> &Self::Handle {
        (**self).handle()
    }

    fn documentation(&self) -> &str {
        (**self).documentation()
    }
}
