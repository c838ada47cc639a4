// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepDefinition`] backed by a [`Template`].

use derive_more::with_trait::Debug;
use gherkin::StepType;

use super::{
    doc::{LazyDoc, SharedDocSource},
    location::Location,
    template::Template,
    StepDefinition,
};
use crate::{
    error::TemplateError,
    line::{ParsedLine, StepKeyword},
};

/// Step definition of a [`StepType`] with a [`Template`], located somewhere in
/// a project.
#[derive(Clone, Debug)]
#[debug("PatternStep({ty:?} {template} --> {location}, priority: {priority})")]
pub struct PatternStep {
    /// Type of the step.
    ty: StepType,

    /// Pattern of the step.
    template: Template,

    /// Tie-breaking priority among exact matches.
    priority: i32,

    /// Where the step is defined.
    location: Location,

    /// Documentation of the step.
    doc: LazyDoc,
}

impl PatternStep {
    /// Creates a new [`PatternStep`] of the given type and pattern.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid [`Template`].
    pub fn new(
        ty: StepType,
        pattern: impl Into<String>,
        location: Location,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            ty,
            template: Template::new(pattern)?,
            priority: 0,
            location,
            doc: LazyDoc::default(),
        })
    }

    /// Sets the tie-breaking priority of this [`PatternStep`].
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Makes this [`PatternStep`] resolve its documentation from the given
    /// `source`.
    #[must_use]
    pub fn with_doc_source(mut self, source: SharedDocSource) -> Self {
        self.doc = LazyDoc::new(source);
        self
    }

    /// Sets already known documentation of this [`PatternStep`].
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = LazyDoc::resolved(doc);
        self
    }

    /// Returns the [`Template`] of this [`PatternStep`].
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the [`Location`] of this [`PatternStep`].
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns `(name, value)` pairs of the [`Template`] parameters, if the
    /// given full `line` matches this [`PatternStep`].
    #[must_use]
    pub fn arguments<'l>(&self, line: &'l str) -> Option<Vec<(&str, &'l str)>> {
        let parsed = ParsedLine::parse(line);
        if !self.is_type_equal_to(parsed.keyword) {
            return None;
        }
        self.template.arguments(parsed.body)
    }
}

impl StepDefinition for PatternStep {
    type Handle = Location;

    fn step_type(&self) -> StepType {
        self.ty
    }

    /// [`And`] and [`But`] are compatible with any type, as the type of the
    /// step they continue is unknown here. A line without a keyword is
    /// compatible with none.
    ///
    /// [`And`]: StepKeyword::And
    /// [`But`]: StepKeyword::But
    fn is_type_equal_to(&self, keyword: Option<StepKeyword>) -> bool {
        keyword.is_some_and(|kw| kw.step_type().map_or(true, |ty| ty == self.ty))
    }

    fn weight_of(&self, body: &str) -> f32 {
        self.template.weight_of(body)
    }

    fn matches(&self, line: &str) -> bool {
        let parsed = ParsedLine::parse(line);
        self.is_type_equal_to(parsed.keyword) && self.template.matches(parsed.body)
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn handle(&self) -> &Location {
        &self.location
    }

    fn documentation(&self) -> &str {
        self.doc.get(&self.location)
    }
}
