// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Caller-supplied policies.
//!
//! The routing core knows nothing about particular programs or course codes. Anything
//! curriculum-specific (which edges get a highlight colour, which resolved matches a program
//! hides) is injected through these traits.

use std::collections::BTreeSet;

use crate::model::CourseNode;

/// Decides the `special` flag of a routed edge from the two course codes.
pub trait HighlightPolicy: Sync {
    fn is_special(&self, source_code: &str, destination_code: &str) -> bool;
}

impl<F> HighlightPolicy for F
where
    F: Fn(&str, &str) -> bool + Sync,
{
    fn is_special(&self, source_code: &str, destination_code: &str) -> bool {
        self(source_code, destination_code)
    }
}

/// Filters resolved prerequisite matches before ports are assigned.
pub trait MatchPolicy: Sync {
    fn accept(&self, source: &CourseNode, destination: &CourseNode) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHighlight;

impl HighlightPolicy for NoHighlight {
    fn is_special(&self, _source_code: &str, _destination_code: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl MatchPolicy for AcceptAll {
    fn accept(&self, _source: &CourseNode, _destination: &CourseNode) -> bool {
        true
    }
}

/// Wraps a closure as a [`MatchPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct MatchFn<F>(pub F);

impl<F> MatchPolicy for MatchFn<F>
where
    F: Fn(&CourseNode, &CourseNode) -> bool + Sync,
{
    fn accept(&self, source: &CourseNode, destination: &CourseNode) -> bool {
        (self.0)(source, destination)
    }
}

/// Highlights an explicit set of `(source code, destination code)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightPairs {
    pairs: BTreeSet<(String, String)>,
}

impl HighlightPairs {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(source, destination)| {
                (source.into().trim().to_owned(), destination.into().trim().to_owned())
            })
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl HighlightPolicy for HighlightPairs {
    fn is_special(&self, source_code: &str, destination_code: &str) -> bool {
        // Tuple keys cannot be probed with borrowed halves; the sets stay tiny.
        self.pairs.iter().any(|(source, destination)| {
            source == source_code && destination == destination_code
        })
    }
}

/// The policies consulted by one diagram build.
#[derive(Clone, Copy)]
pub struct DiagramPolicies<'a> {
    pub highlight: &'a dyn HighlightPolicy,
    pub matches: &'a dyn MatchPolicy,
}

impl<'a> DiagramPolicies<'a> {
    pub fn new(highlight: &'a dyn HighlightPolicy, matches: &'a dyn MatchPolicy) -> Self {
        Self { highlight, matches }
    }

    pub fn with_highlight(highlight: &'a dyn HighlightPolicy) -> Self {
        Self { highlight, matches: &AcceptAll }
    }
}

impl Default for DiagramPolicies<'_> {
    fn default() -> Self {
        Self { highlight: &NoHighlight, matches: &AcceptAll }
    }
}

impl std::fmt::Debug for DiagramPolicies<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagramPolicies").finish_non_exhaustive()
    }
}
