// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turns textual prerequisite references into concrete node pairs.

use std::collections::BTreeMap;

use crate::model::{CourseNode, Curriculum};

/// A prerequisite reference matched to a course on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEdge<'a> {
    pub source: &'a CourseNode,
    pub destination: &'a CourseNode,
}

/// Strips a scheme prefix such as `IT-` or `MATH:` and returns the bare course id.
///
/// Everything up to and including the first separator (`-`, `:`, `/` or whitespace) is dropped;
/// codes without a separator are returned as-is.
pub fn bare_course_id(code: &str) -> &str {
    let code = code.trim();
    match code.find(is_scheme_separator) {
        Some(idx) => {
            let separator_len = code[idx..].chars().next().map_or(1, char::len_utf8);
            code[idx + separator_len..].trim()
        }
        None => code,
    }
}

fn is_scheme_separator(c: char) -> bool {
    matches!(c, '-' | ':' | '/') || c.is_whitespace()
}

/// True for the administrative "approved by the department" placeholder.
pub fn is_sentinel(code: &str, sentinel: &str) -> bool {
    let sentinel = sentinel.trim();
    !sentinel.is_empty() && code.contains(sentinel)
}

/// Resolves the prerequisites of every course, in column-major, row-major destination order.
///
/// For each destination, references are visited in their listed order and matches in grid
/// order. Sentinel entries, entries with an empty bare id, self references and repeated
/// `(source, destination)` pairs never produce an edge. References that match nothing are
/// silently dropped; curricula routinely cite courses outside the displayed grid.
pub fn resolve_prerequisites<'a>(
    curriculum: &'a Curriculum,
    sentinel: &str,
) -> Vec<ResolvedEdge<'a>> {
    let mut by_bare_id = BTreeMap::<&str, Vec<&CourseNode>>::new();
    for node in curriculum.nodes() {
        let bare = bare_course_id(node.code());
        if !bare.is_empty() {
            by_bare_id.entry(bare).or_default().push(node);
        }
    }

    let mut edges = Vec::new();
    for destination in curriculum.nodes() {
        let first_for_destination = edges.len();
        for raw in destination.prerequisite_codes() {
            if is_sentinel(raw, sentinel) {
                continue;
            }
            let bare = bare_course_id(raw);
            if bare.is_empty() {
                continue;
            }
            let Some(sources) = by_bare_id.get(bare) else {
                tracing::trace!(
                    destination = %destination.id(),
                    code = %raw,
                    "unresolved prerequisite"
                );
                continue;
            };
            for &source in sources {
                if source.id() == destination.id() {
                    continue;
                }
                // Edge ids are `<source>-><destination>`, so a pair cited twice (`100` and
                // `IT-100`) must still yield a single edge.
                let already = edges[first_for_destination..]
                    .iter()
                    .any(|edge: &ResolvedEdge<'_>| edge.source.id() == source.id());
                if already {
                    continue;
                }
                edges.push(ResolvedEdge { source, destination });
            }
        }
    }

    edges
}
