// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(nonstandard_style, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_results
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

pub mod catalog;
pub mod cli;
pub mod error;
pub mod line;
pub mod locator;
pub mod step;

#[doc(inline)]
pub use self::{
    catalog::{Catalog, Collection},
    cli::Options,
    error::{DocError, SearchError, TemplateError, TraversalError},
    line::{extract_step_sentence, step_type, ParsedLine, StepKeyword},
    locator::{
        first_with_highest_priority, rank, score, StepLocator,
        WeightedCandidate, BLANK_BODY_WEIGHT,
    },
    step::{Location, PatternStep, StepDefinition, Template},
};

pub use gherkin::StepType;
