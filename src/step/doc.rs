// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazily resolved documentation of step definitions.

use std::{fmt, sync::Arc};

use once_cell::sync::OnceCell;

use super::location::Location;
use crate::error::DocError;

/// Documentation shown when none can be resolved.
pub const NO_DOCUMENTATION: &str = "No documentation found";

/// Source of step definitions' documentation, usually a project model able to
/// read doc comments at a [`Location`].
pub trait DocSource {
    /// Looks up documentation of the step definition at the given `location`.
    ///
    /// # Errors
    ///
    /// If there is no documentation or it cannot be read.
    fn documentation_of(&self, location: &Location) -> Result<String, DocError>;
}

impl<F> DocSource for F
where
    F: Fn(&Location) -> Result<String, DocError>,
{
    fn documentation_of(&self, location: &Location) -> Result<String, DocError> {
        self(location)
    }
}

/// Shared [`DocSource`].
pub type SharedDocSource = Arc<dyn DocSource + Send + Sync>;

/// Cache slot for documentation, resolved on the first read.
///
/// Concurrent first reads may resolve the documentation more than once. The
/// first stored value wins, and resolution never holds a lock.
#[derive(Clone, Default)]
pub struct LazyDoc {
    /// Resolved documentation, once read.
    cached: OnceCell<String>,

    /// Where to resolve documentation from.
    source: Option<SharedDocSource>,
}

impl fmt::Debug for LazyDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDoc")
            .field("cached", &self.cached.get())
            .field("source", &self.source.as_ref().map(|_| ".."))
            .finish()
    }
}

impl LazyDoc {
    /// Creates a new [`LazyDoc`] resolving from the given `source`.
    #[must_use]
    pub fn new(source: SharedDocSource) -> Self {
        Self { cached: OnceCell::new(), source: Some(source) }
    }

    /// Creates a new [`LazyDoc`] already holding the given documentation.
    #[must_use]
    pub fn resolved(doc: impl Into<String>) -> Self {
        Self { cached: OnceCell::with_value(doc.into()), source: None }
    }

    /// Returns the documentation of the step definition at `location`,
    /// resolving it on the first call.
    ///
    /// Falls back to [`NO_DOCUMENTATION`] if there is no [`DocSource`] or it
    /// fails.
    pub fn get(&self, location: &Location) -> &str {
        if let Some(doc) = self.cached.get() {
            return doc;
        }

        let doc = match &self.source {
            Some(src) => src.documentation_of(location).unwrap_or_else(|e| {
                tracing::warn!(%location, error = %e, "step documentation lookup failed");
                NO_DOCUMENTATION.to_owned()
            }),
            None => NO_DOCUMENTATION.to_owned(),
        };
        // First stored value wins.
        _ = self.cached.set(doc);
        self.cached.get().map_or(NO_DOCUMENTATION, String::as_str)
    }

    /// Indicates whether the documentation has been resolved already.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cached.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;

    fn loc() -> Location {
        Location::new("LoginSteps.java", 12, 5)
    }

    #[test]
    fn resolves_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let doc = LazyDoc::new(Arc::new(move |l: &Location| -> Result<String, DocError> {
            _ = counter.fetch_add(1, Ordering::SeqCst);
            Ok(format!("Clicks a button, defined at {l}"))
        }));

        assert!(!doc.is_resolved());
        assert_eq!(doc.get(&loc()), "Clicks a button, defined at LoginSteps.java:12:5");
        assert_eq!(doc.get(&loc()), "Clicks a button, defined at LoginSteps.java:12:5");
        assert!(doc.is_resolved());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn falls_back_on_lookup_error() {
        let doc = LazyDoc::new(Arc::new(|l: &Location| -> Result<String, DocError> {
            Err(DocError::NotFound { location: l.to_string() })
        }));

        assert_eq!(doc.get(&loc()), NO_DOCUMENTATION);
        assert!(doc.is_resolved());
    }

    #[test]
    fn falls_back_without_source() {
        assert_eq!(LazyDoc::default().get(&loc()), NO_DOCUMENTATION);
    }

    #[test]
    fn pre_resolved_skips_lookup() {
        assert_eq!(LazyDoc::resolved("Logs in").get(&loc()), "Logs in");
    }

    #[test]
    fn concurrent_reads_agree() {
        let doc = LazyDoc::new(Arc::new(|_: &Location| -> Result<String, DocError> {
            Ok("same".to_owned())
        }));

        thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| doc.get(&loc()).to_owned()))
                .collect::<Vec<_>>();
            for h in handles {
                assert_eq!(h.join().unwrap(), "same");
            }
        });
    }
}
