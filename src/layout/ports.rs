// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::geometry::PortName;
use super::resolve::ResolvedEdge;
use crate::model::NodeId;

/// Chooses the destination port of every edge, in the same order as `edges`.
///
/// Needs the whole edge list: a lone incoming edge lands on `leftCenter`, a pair is split over
/// `leftUpper`/`leftLower` in build order, and any third or later edge shares `leftCenter`.
pub fn assign_destination_ports(edges: &[ResolvedEdge<'_>]) -> Vec<PortName> {
    let mut fan_in = BTreeMap::<&NodeId, usize>::new();
    for edge in edges {
        *fan_in.entry(edge.destination.id()).or_default() += 1;
    }

    let mut seen = BTreeMap::<&NodeId, usize>::new();
    edges
        .iter()
        .map(|edge| {
            let id = edge.destination.id();
            let total = fan_in.get(id).copied().unwrap_or(1);
            let slot = seen.entry(id).or_default();
            let ordinal = *slot;
            *slot += 1;

            match (total, ordinal) {
                (1, _) => PortName::LeftCenter,
                (_, 0) => PortName::LeftUpper,
                (_, 1) => PortName::LeftLower,
                _ => PortName::LeftCenter,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::assign_destination_ports;
    use crate::config::DEFAULT_SENTINEL;
    use crate::layout::geometry::PortName;
    use crate::layout::resolve::resolve_prerequisites;
    use crate::model::{CourseDescriptor, Curriculum};

    fn ports_for(prereqs_of_last: &[&str], sources: usize) -> Vec<PortName> {
        let mut first = Vec::new();
        for idx in 0..sources {
            first.push(CourseDescriptor::new(format!("s{idx}"), format!("IT-{}", 100 + idx)));
        }
        let curriculum = Curriculum::from_columns(vec![
            first,
            vec![CourseDescriptor::new("d", "IT-900").with_prerequisites(prereqs_of_last.to_vec())],
        ])
        .unwrap();
        let edges = resolve_prerequisites(&curriculum, DEFAULT_SENTINEL);
        assign_destination_ports(&edges)
    }

    #[test]
    fn single_edge_lands_centered() {
        assert_eq!(ports_for(&["100"], 1), vec![PortName::LeftCenter]);
    }

    #[test]
    fn two_edges_split_upper_then_lower() {
        assert_eq!(ports_for(&["100", "101"], 2), vec![PortName::LeftUpper, PortName::LeftLower]);
    }

    #[test]
    fn extra_edges_share_the_center() {
        assert_eq!(
            ports_for(&["100", "101", "102", "103"], 4),
            vec![
                PortName::LeftUpper,
                PortName::LeftLower,
                PortName::LeftCenter,
                PortName::LeftCenter,
            ]
        );
    }

    #[test]
    fn fan_in_is_counted_per_destination() {
        let curriculum = Curriculum::from_columns(vec![
            vec![CourseDescriptor::new("a", "IT-100"), CourseDescriptor::new("b", "IT-101")],
            vec![
                CourseDescriptor::new("c", "IT-200").with_prerequisites(["100"]),
                CourseDescriptor::new("d", "IT-201").with_prerequisites(["100", "101"]),
            ],
        ])
        .unwrap();
        let edges = resolve_prerequisites(&curriculum, DEFAULT_SENTINEL);

        assert_eq!(
            assign_destination_ports(&edges),
            vec![PortName::LeftCenter, PortName::LeftUpper, PortName::LeftLower]
        );
    }
}
