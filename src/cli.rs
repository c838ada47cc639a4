// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options of a [`StepLocator`].
//!
//! [`Options`] is a [`clap::Args`], so an editor or language server embedding
//! a [`StepLocator`] may flatten it into its own CLI:
//!
//! ```rust
//! # use step_locator::cli;
//! #
//! #[derive(clap::Parser)]
//! struct ServerCli {
//!     /// Port to listen on.
//!     #[arg(long, default_value_t = 9000)]
//!     port: u16,
//!
//!     #[command(flatten)]
//!     locator: cli::Options,
//! }
//!
//! let cli = <ServerCli as clap::Parser>::parse_from(["server", "--any-step-type"]);
//! assert!(!cli.locator.enforce_type_match);
//! ```
//!
//! [`StepLocator`]: crate::StepLocator

use smart_default::SmartDefault;

pub use clap::{Args, Parser};

/// Options of a [`StepLocator`].
///
/// [`StepLocator`]: crate::StepLocator
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Options {
    /// Whether candidates of a step type other than the one of the searched
    /// line are excluded.
    ///
    /// `--any-step-type` turns this off, widening candidate search across all
    /// step types.
    #[arg(
        id = "any-step-type",
        long = "any-step-type",
        action = clap::ArgAction::SetFalse,
        global = true
    )]
    #[default(true)]
    pub enforce_type_match: bool,
}

impl Options {
    /// Creates [`Options`] searching across all step types.
    #[must_use]
    pub const fn any_step_type() -> Self {
        Self { enforce_type_match: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[command(flatten)]
        locator: Options,
    }

    #[test]
    fn enforces_type_match_by_default() {
        assert!(Options::default().enforce_type_match);
        assert!(!Options::any_step_type().enforce_type_match);
    }

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["editor"]);

        assert_eq!(cli.locator, Options::default());
    }

    #[test]
    fn flag_widens_search() {
        let cli = Cli::parse_from(["editor", "--any-step-type"]);

        assert_eq!(cli.locator, Options::any_step_type());
    }
}
