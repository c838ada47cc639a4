// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inclusion and weighting of a single candidate step definition.

use crate::{cli::Options, line::ParsedLine, step::StepDefinition};

/// Weight of a type-matching candidate for a line with a blank body.
///
/// Lower than any weight a [`PatternStep`] gives to a non-blank body (see
/// [`MIN_WEIGHT`]), so such candidates surface at the bottom of the ranking.
///
/// [`MIN_WEIGHT`]: crate::step::MIN_WEIGHT
/// [`PatternStep`]: crate::step::PatternStep
pub const BLANK_BODY_WEIGHT: f32 = 0.1;

/// Scores the given `step` against the `parsed` line.
///
/// Returns [`None`] if the `step` is excluded: its type doesn't match while
/// [`Options::enforce_type_match`] is on, or its own weighting rejects the
/// body.
#[must_use]
pub fn score<S>(parsed: &ParsedLine<'_>, step: &S, opts: &Options) -> Option<f32>
where
    S: StepDefinition + ?Sized,
{
    let same_type = step.is_type_equal_to(parsed.keyword);
    if opts.enforce_type_match && !same_type {
        return None;
    }

    if parsed.is_blank() && same_type {
        return Some(BLANK_BODY_WEIGHT);
    }

    let weight = step.weight_of(parsed.body);
    (weight > 0.0).then_some(weight)
}
