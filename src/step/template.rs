// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step patterns with `$name` parameters.
//!
//! A [`Template`] such as `'$who' clicks on the '$button_id' button` is split
//! into literal text and parameters. It serves two purposes:
//! - exact matching of a complete step body, where every parameter matches
//!   any text;
//! - weighting of a partially typed body as a completion candidate.

use derive_more::with_trait::Display;
use lazy_regex::regex;
use regex::Regex;

use crate::error::TemplateError;

/// Lowest weight a plausible completion gets.
///
/// Any body consistent with a [`Template`] weighs at least this much, so it
/// always outranks [`BLANK_BODY_WEIGHT`].
///
/// [`BLANK_BODY_WEIGHT`]: crate::locator::BLANK_BODY_WEIGHT
pub const MIN_WEIGHT: f32 = 0.25;

/// Part of a [`Template`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// Text to be typed verbatim.
    Literal(String),

    /// Named placeholder for arbitrary text.
    Parameter(String),
}

/// Parsed step pattern.
#[derive(Clone, Debug, Display)]
#[display("{pattern}")]
pub struct Template {
    /// Original pattern text.
    pattern: String,

    /// [`Segment`]s of the [`pattern`](Template::pattern), in order.
    segments: Vec<Segment>,

    /// Anchored [`Regex`] matching complete bodies.
    regex: Regex,
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Template {}

impl Template {
    /// Parses the given `pattern`.
    ///
    /// # Errors
    ///
    /// If the pattern cannot be compiled into its matching [`Regex`].
    pub fn new(pattern: impl Into<String>) -> Result<Self, TemplateError> {
        let pattern = pattern.into();

        let mut segments = Vec::new();
        let mut last = 0;
        for caps in regex!(r"\$([A-Za-z_][A-Za-z0-9_]*)").captures_iter(&pattern)
        {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(
                    pattern[last..whole.start()].to_owned(),
                ));
            }
            segments.push(Segment::Parameter(name.as_str().to_owned()));
            last = whole.end();
        }
        if last < pattern.len() {
            segments.push(Segment::Literal(pattern[last..].to_owned()));
        }

        let body = segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => regex::escape(lit),
                Segment::Parameter(_) => "(.*?)".to_owned(),
            })
            .collect::<String>();
        let regex = Regex::new(&format!("^{body}$"))?;

        Ok(Self { pattern, segments, regex })
    }

    /// Returns the original pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the [`Segment`]s of this [`Template`].
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns names of the parameters, in order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Parameter(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Indicates whether the given complete `body` matches this [`Template`].
    #[must_use]
    pub fn matches(&self, body: &str) -> bool {
        self.regex.is_match(body)
    }

    /// Returns `(name, value)` pairs of the parameters, if the given complete
    /// `body` matches this [`Template`].
    #[must_use]
    pub fn arguments<'b>(&self, body: &'b str) -> Option<Vec<(&str, &'b str)>> {
        let caps = self.regex.captures(body)?;
        Some(
            self.parameters()
                .zip(caps.iter().skip(1))
                .map(|(name, m)| (name, m.map_or("", |m| m.as_str())))
                .collect(),
        )
    }

    /// Weighs the given, possibly partially typed, `body` as a completion
    /// candidate for this [`Template`].
    ///
    /// Returns `0.0` if the `body` is blank or cannot be completed into this
    /// [`Template`], `1.0` if it [`matches`] already, otherwise a weight in
    /// `MIN_WEIGHT..1.0` growing with the covered share of the [`Template`].
    ///
    /// [`matches`]: Template::matches
    #[must_use]
    pub fn weight_of(&self, body: &str) -> f32 {
        if body.trim().is_empty() {
            return 0.0;
        }
        if self.matches(body) {
            return 1.0;
        }

        let Some(covered) = cover(&self.segments, body) else {
            return 0.0;
        };
        let total = self.units();

        #[allow(clippy::cast_precision_loss)] // patterns are short
        let coverage = covered as f32 / total as f32;
        MIN_WEIGHT + (1.0 - MIN_WEIGHT) * coverage
    }

    /// Number of units a body may cover: every literal char and every
    /// parameter.
    fn units(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => lit.chars().count(),
                Segment::Parameter(_) => 1,
            })
            .sum()
    }
}

/// Returns the most units of `segments` the `body` covers, if the `body` is a
/// prefix of some text matching them.
///
/// A parameter value may contain the literal following it, so every split
/// point of a parameter is tried.
fn cover(segments: &[Segment], body: &str) -> Option<usize> {
    if body.is_empty() {
        return Some(0);
    }
    let (segment, tail) = segments.split_first()?;
    match segment {
        Segment::Literal(lit) => match body.strip_prefix(lit.as_str()) {
            Some(after) => Some(lit.chars().count() + cover(tail, after)?),
            None => lit.starts_with(body).then(|| body.chars().count()),
        },
        Segment::Parameter(_) => body
            .char_indices()
            .map(|(i, _)| i)
            .chain([body.len()])
            .filter_map(|i| {
                let filled = usize::from(i > 0);
                cover(tail, &body[i..]).map(|n| n + filled)
            })
            .max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Template {
        Template::new("'$who' clicks on the '$button_id' button").unwrap()
    }

    #[test]
    fn splits_literals_and_parameters() {
        assert_eq!(
            button().segments(),
            [
                Segment::Literal("'".into()),
                Segment::Parameter("who".into()),
                Segment::Literal("' clicks on the '".into()),
                Segment::Parameter("button_id".into()),
                Segment::Literal("' button".into()),
            ],
        );
        assert_eq!(button().parameters().collect::<Vec<_>>(), ["who", "button_id"]);
    }

    #[test]
    fn dollar_without_name_is_literal() {
        let t = Template::new("I pay $ 5").unwrap();

        assert_eq!(t.segments(), [Segment::Literal("I pay $ 5".into())]);
        assert!(t.matches("I pay $ 5"));
    }

    #[test]
    fn matches_complete_bodies_only() {
        let t = button();

        assert!(t.matches("'Bob' clicks on the 'login' button"));
        assert!(!t.matches("'Bob' clicks on the 'login'"));
        assert!(!t.matches("'Bob' clicks on the 'login' button twice"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let t = Template::new("a (total) of $n.* items?").unwrap();

        assert!(t.matches("a (total) of 3.* items?"));
        assert!(!t.matches("a total of 3 items"));
    }

    #[test]
    fn extracts_arguments() {
        let t = button();

        assert_eq!(
            t.arguments("'Bob' clicks on the 'login' button"),
            Some(vec![("who", "Bob"), ("button_id", "login")]),
        );
        assert_eq!(t.arguments("Bob clicks"), None);
    }

    #[test]
    fn complete_body_weighs_one() {
        assert_eq!(button().weight_of("'Bob' clicks on the 'login' button"), 1.0);
    }

    #[test]
    fn every_matching_body_weighs_one() {
        for (pattern, bodies) in [
            (
                "'$who' clicks on the '$button_id' button",
                &[
                    "'Bob' clicks on the 'login' button",
                    "'' clicks on the '' button",
                    "'a' clicks on the 'b' button' clicks on the 'c' button",
                ][..],
            ),
            ("I enter '$text'", &["I enter 'don't'", "I enter ''", "I enter '''"][..]),
            ("the total is $amount.", &["the total is 3.50.", "the total is ."][..]),
            ("'$who'", &["''", "'a'b'"][..]),
            ("$a$b", &["x", "xy"][..]),
        ] {
            let t = Template::new(pattern).unwrap();
            for body in bodies {
                assert!(t.matches(body), "{pattern:?} must match {body:?}");
                assert_eq!(t.weight_of(body), 1.0, "{pattern:?} / {body:?}");
            }
        }
    }

    #[test]
    fn parameter_value_may_contain_next_literal() {
        let t = Template::new("I enter '$text' twice").unwrap();

        let partial = t.weight_of("I enter 'don't");
        assert!(partial >= MIN_WEIGHT, "{partial}");
        assert!(partial < t.weight_of("I enter 'don't' tw"));
        assert!(t.weight_of("I enter 'don't' tw") < 1.0);
    }

    #[test]
    fn trailing_text_may_still_belong_to_a_parameter() {
        let w = button().weight_of("'Bob' clicks on the 'login' button and");

        assert!(w >= MIN_WEIGHT, "{w}");
        assert!(w < 1.0, "{w}");
    }

    #[test]
    fn partial_bodies_weigh_by_coverage() {
        let t = button();
        let w1 = t.weight_of("'Bo");
        let w2 = t.weight_of("'Bob' clicks on the ...".trim_end_matches('.'));
        let w3 = t.weight_of("'Bob' clicks on the 'login' but");

        assert!(w1 >= MIN_WEIGHT, "{w1}");
        assert!(w1 < w2, "{w1} < {w2}");
        assert!(w2 < w3, "{w2} < {w3}");
        assert!(w3 < 1.0, "{w3}");
    }

    #[test]
    fn parameter_followed_by_partially_typed_literal() {
        let t = Template::new("$who clicks login").unwrap();

        assert!(t.weight_of("Bob cl") > t.weight_of("Bob"));
    }

    #[test]
    fn diverging_bodies_weigh_zero() {
        let t = button();

        assert_eq!(t.weight_of("Bob clicks"), 0.0);
        assert_eq!(t.weight_of("\"Bob\" clicks"), 0.0);
        assert_eq!(Template::new("it works").unwrap().weight_of("it worked"), 0.0);
    }

    #[test]
    fn blank_bodies_weigh_zero() {
        assert_eq!(button().weight_of(""), 0.0);
        assert_eq!(button().weight_of("   "), 0.0);
    }

    #[test]
    fn empty_template_weighs_nothing() {
        let t = Template::new("").unwrap();

        assert_eq!(t.weight_of("anything"), 0.0);
        assert!(t.matches(""));
    }

    #[test]
    fn displays_pattern() {
        assert_eq!(button().to_string(), "'$who' clicks on the '$button_id' button");
    }
}
