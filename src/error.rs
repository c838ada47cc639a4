// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of step searching.
//!
//! Not finding any step is never an error: searches return an empty result or
//! [`None`] instead. Only a [`Catalog`] that cannot be walked makes a search
//! fail.
//!
//! [`Catalog`]: crate::Catalog

use std::error::Error as StdError;

use derive_more::with_trait::{Display, Error, From};

/// Error of a [`Catalog`] being unable to traverse its step definitions.
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Display, Error)]
pub enum TraversalError {
    /// Underlying project model is in an inconsistent state.
    #[display("step catalog is inconsistent: {reason}")]
    Inconsistent {
        /// Description of the inconsistency.
        #[error(not(source))]
        reason: String,
    },

    /// Underlying project model failed with its own error.
    #[display("step catalog is unavailable: {source}")]
    Source {
        /// Error of the underlying project model.
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

impl TraversalError {
    /// Creates a new [`TraversalError::Inconsistent`] with the given `reason`.
    #[must_use]
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent { reason: reason.into() }
    }

    /// Wraps an error of the underlying project model.
    #[must_use]
    pub fn wrap(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Source { source: Box::new(err) }
    }
}

/// Error of a search operation, tagged with the searched step line.
#[derive(Debug, Display, Error)]
#[display("step search failed for <{line}>: {source}")]
pub struct SearchError {
    /// Step line the search was performed for.
    #[error(not(source))]
    pub line: String,

    /// Cause of the failure.
    pub source: TraversalError,
}

impl SearchError {
    /// Creates a new [`SearchError`] for the given `line`.
    #[must_use]
    pub fn new(line: impl Into<String>, source: TraversalError) -> Self {
        Self { line: line.into(), source }
    }
}

/// Error of compiling a step pattern.
#[derive(Debug, Display, Error, From)]
pub enum TemplateError {
    /// Pattern could not be turned into its matching [`Regex`].
    ///
    /// [`Regex`]: regex::Regex
    #[display("failed to compile step pattern: {_0}")]
    Regex(regex::Error),
}

/// Error of looking up documentation of a step definition.
#[derive(Debug, Display, Error)]
pub enum DocError {
    /// No documentation exists at the given location.
    #[display("no documentation found at {location}")]
    NotFound {
        /// Location the documentation was looked up at.
        #[error(not(source))]
        location: String,
    },

    /// Documentation source failed to be read.
    #[display("failed to read documentation: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
