// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rayon::prelude::*;
use serde::Serialize;

use super::geometry::{rect_for, PortName, Rect};
use super::lanes::{Lane, LaneSet};
use super::obstacles::ObstacleIndex;
use super::ports::assign_destination_ports;
use super::resolve::resolve_prerequisites;
use super::router::{simplify_path, EdgePath, RouteCase, Router};
use crate::config::RoutingConfig;
use crate::model::{Curriculum, EdgeId, GridPosition, NodeId};
use crate::policy::DiagramPolicies;

/// One routed prerequisite arrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source_node_id: NodeId,
    pub destination_node_id: NodeId,
    pub destination_port: PortName,
    pub route_case: RouteCase,
    pub path: EdgePath,
    pub special: bool,
}

impl Edge {
    /// `path` with zero-length segments and collinear bends removed.
    pub fn simplified_path(&self) -> EdgePath {
        simplify_path(&self.path)
    }
}

/// A node box as the renderer must draw it so arrows meet its ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRect {
    pub node_id: NodeId,
    pub code: String,
    pub position: GridPosition,
    pub rect: Rect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrerequisiteDiagram {
    pub edges: Vec<Edge>,
    pub nodes: Vec<NodeRect>,
    /// Lanes claimed while routing, in ascending y.
    pub lanes: Vec<Lane>,
}

impl PrerequisiteDiagram {
    pub fn edges_into<'a>(&'a self, node_id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| &edge.destination_node_id == node_id)
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&NodeRect> {
        self.nodes.iter().find(|node| &node.node_id == node_id)
    }
}

/// Routes every prerequisite edge of `curriculum` with no highlighting and no match filter.
pub fn orchestrate(curriculum: &Curriculum, config: &RoutingConfig) -> PrerequisiteDiagram {
    orchestrate_with(curriculum, config, DiagramPolicies::default())
}

/// Routes every prerequisite edge of `curriculum`.
///
/// Steps, in order: resolve references for every course, drop matches the match policy
/// rejects, assign destination ports over the complete edge list, then route each edge in
/// destination column-major, row-major order. A single [`LaneSet`] owned by this call is
/// threaded through the routing step, so later edges see the lanes earlier ones claimed and
/// nothing leaks into other builds. Identical input always yields identical output.
pub fn orchestrate_with(
    curriculum: &Curriculum,
    config: &RoutingConfig,
    policies: DiagramPolicies<'_>,
) -> PrerequisiteDiagram {
    let nodes = curriculum
        .nodes()
        .iter()
        .map(|node| NodeRect {
            node_id: node.id().clone(),
            code: node.code().to_owned(),
            position: node.position(),
            rect: rect_for(&config.metrics, node.position()),
        })
        .collect::<Vec<_>>();

    let mut resolved = resolve_prerequisites(curriculum, &config.sentinel);
    resolved.retain(|edge| policies.matches.accept(edge.source, edge.destination));
    if resolved.is_empty() {
        return PrerequisiteDiagram { edges: Vec::new(), nodes, lanes: Vec::new() };
    }

    let ports = assign_destination_ports(&resolved);
    let obstacles = ObstacleIndex::new(curriculum, &config.metrics, config.clearance);
    let router = Router::new(config, &obstacles);
    let mut lanes = LaneSet::new();

    let mut edges = Vec::with_capacity(resolved.len());
    for (edge, port) in resolved.iter().zip(ports) {
        let routed = router.route(edge.source, edge.destination, port, &mut lanes);
        tracing::trace!(
            source = %edge.source.id(),
            destination = %edge.destination.id(),
            ?port,
            case = ?routed.case,
            points = routed.points.len(),
            "routed prerequisite edge"
        );
        edges.push(Edge {
            id: EdgeId::between(edge.source.id(), edge.destination.id()),
            source_node_id: edge.source.id().clone(),
            destination_node_id: edge.destination.id().clone(),
            destination_port: port,
            route_case: routed.case,
            path: routed.points,
            special: policies.highlight.is_special(edge.source.code(), edge.destination.code()),
        });
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        lanes = lanes.len(),
        "prerequisite diagram routed"
    );

    PrerequisiteDiagram { edges, nodes, lanes: lanes.lanes().copied().collect() }
}

/// Routes several curricula in parallel. Output order matches input order.
///
/// Each build owns its own lane set; nothing is shared between them.
pub fn orchestrate_batch(
    curricula: &[Curriculum],
    config: &RoutingConfig,
    policies: DiagramPolicies<'_>,
) -> Vec<PrerequisiteDiagram> {
    curricula
        .par_iter()
        .map(|curriculum| orchestrate_with(curriculum, config, policies))
        .collect()
}
