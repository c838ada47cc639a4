// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splitting of a raw step line into its [`StepKeyword`] and free-text body.
//!
//! Keywords are case-sensitive and are recognized only when followed by
//! whitespace or the end of the line, so `Whenever` is a plain body while
//! `When` alone is a keyword with an empty body. Surrounding whitespace of the
//! line is ignored.

use derive_more::with_trait::Display;
use gherkin::StepType;

/// Leading keyword of a step line.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum StepKeyword {
    /// [Given] keyword.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    Given,

    /// [When] keyword.
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    When,

    /// [Then] keyword.
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    Then,

    /// [And] keyword, continuing the previous step's type.
    ///
    /// [And]: https://cucumber.io/docs/gherkin/reference#and-but
    And,

    /// [But] keyword, continuing the previous step's type.
    ///
    /// [But]: https://cucumber.io/docs/gherkin/reference#and-but
    But,
}

impl StepKeyword {
    /// All the recognized keywords.
    pub const ALL: [Self; 5] =
        [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Returns the exact text of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Returns the [`StepType`] this keyword introduces.
    ///
    /// [`And`] and [`But`] have no type of their own, so [`None`] is returned
    /// for them.
    ///
    /// [`And`]: StepKeyword::And
    /// [`But`]: StepKeyword::But
    #[must_use]
    pub const fn step_type(self) -> Option<StepType> {
        match self {
            Self::Given => Some(StepType::Given),
            Self::When => Some(StepType::When),
            Self::Then => Some(StepType::Then),
            Self::And | Self::But => None,
        }
    }
}

/// Step line split into its [`StepKeyword`] and body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParsedLine<'a> {
    /// Recognized leading keyword, if any.
    pub keyword: Option<StepKeyword>,

    /// Trimmed remainder of the line after the [`keyword`].
    ///
    /// [`keyword`]: ParsedLine::keyword
    pub body: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Parses the given `line`.
    ///
    /// Never fails: a line without a recognized keyword becomes a body as a
    /// whole.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        StepKeyword::ALL
            .into_iter()
            .find_map(|kw| {
                let rest = line.strip_prefix(kw.as_str())?;
                (rest.is_empty() || rest.starts_with(char::is_whitespace))
                    .then(|| Self { keyword: Some(kw), body: rest.trim() })
            })
            .unwrap_or(Self { keyword: None, body: line })
    }

    /// Indicates whether the [`body`] has nothing but whitespace.
    ///
    /// [`body`]: ParsedLine::body
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Returns the leading [`StepKeyword`] of the given `line`, if any.
#[must_use]
pub fn step_type(line: &str) -> Option<StepKeyword> {
    ParsedLine::parse(line).keyword
}

/// Returns the given `line` without its leading [`StepKeyword`], trimmed.
#[must_use]
pub fn extract_step_sentence(line: &str) -> &str {
    ParsedLine::parse(line).body
}
