// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Source location of a step definition.
//!
//! A [`Location`] is the handle a resolved [`PatternStep`] hands back to an
//! editor for navigation.
//!
//! [`PatternStep`]: super::PatternStep

use derive_more::with_trait::{Debug, Display};

/// Location of a step definition inside a project.
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{path}:{line}:{column}")]
pub struct Location {
    /// Path to the file where the step definition is located.
    pub path: String,

    /// Line of the file where the step definition is located.
    pub line: u32,

    /// Column of the file where the step definition is located.
    pub column: u32,
}

impl Location {
    /// Creates a new [`Location`] with the given path, line, and column.
    #[must_use]
    pub fn new(path: impl Into<String>, line: u32, column: u32) -> Self {
        Self { path: path.into(), line, column }
    }

    /// Returns the file name part of the [`path`].
    ///
    /// Both `/` and `\` are treated as separators.
    ///
    /// [`path`]: Location::path
    #[must_use]
    pub fn filename(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// Returns a short `filename:line:column` representation.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}:{}:{}", self.filename(), self.line, self.column)
    }
}
