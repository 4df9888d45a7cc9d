// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use super::geometry::{gutter_after, gutter_before, rect_for, Point, PortName, Rect};
use super::lanes::{claim_first_free, find_horizontal_lane, LaneOrientation, LaneSet};
use super::obstacles::ObstacleIndex;
use crate::config::RoutingConfig;
use crate::model::{CourseNode, NodeId};

/// Polyline of one edge. Routes never need more than six points.
pub type EdgePath = SmallVec<[Point; 6]>;

/// How many row gutters outward a detour may search on one side.
const DETOUR_RINGS: i32 = 3;

/// Which branch of the router produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteCase {
    /// Source and destination share a column; straight connector.
    SameColumn,
    /// Level ports with nothing in between.
    Direct,
    /// Unobstructed jump, bending only inside column gutters.
    Jog,
    /// Something is in the way; the edge travels along a row gutter above or below.
    Detour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedPath {
    pub case: RouteCase,
    pub points: EdgePath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetourSide {
    Above,
    Below,
}

/// Routes prerequisite edges over one curriculum grid.
///
/// The router itself is immutable; all per-build state lives in the [`LaneSet`] the caller
/// threads through [`Router::route`].
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    config: &'a RoutingConfig,
    obstacles: &'a ObstacleIndex,
}

impl<'a> Router<'a> {
    pub fn new(config: &'a RoutingConfig, obstacles: &'a ObstacleIndex) -> Self {
        Self { config, obstacles }
    }

    /// Routes `source.rightCenter` to `destination_port` on `destination`.
    ///
    /// The first point is always the source's right centre and the last the requested
    /// destination port, exactly. Every other segment is axis-aligned and stays clear of foreign
    /// node boxes, except in the [`RouteCase::SameColumn`] fallback.
    pub fn route(
        &self,
        source: &CourseNode,
        destination: &CourseNode,
        destination_port: PortName,
        lanes: &mut LaneSet,
    ) -> RoutedPath {
        let metrics = &self.config.metrics;
        let source_rect = rect_for(metrics, source.position());
        let destination_rect = rect_for(metrics, destination.position());
        let start = source_rect.ports(self.config.port_offset).right_center;
        let goal = destination_rect.ports(self.config.port_offset).get(destination_port);

        let source_column = source.position().column();
        let destination_column = destination.position().column();
        if source_column == destination_column {
            return RoutedPath { case: RouteCase::SameColumn, points: smallvec![start, goal] };
        }

        let exclude = [source.id(), destination.id()];
        let gx1 = gutter_after(metrics, source_column);
        let gx2 = gutter_before(metrics, destination_column);

        if source_column < destination_column
            && !self.obstacles.horizontal_blocked(start.y(), start.x(), gx2, &exclude)
        {
            if start.y() == goal.y() {
                return RoutedPath { case: RouteCase::Direct, points: smallvec![start, goal] };
            }

            // Neighbouring columns share one gutter; there is no run between them to claim.
            let lane_y = if destination_column == source_column + 1 {
                start.y()
            } else {
                find_horizontal_lane(
                    &source_rect,
                    &destination_rect,
                    gx2,
                    lanes,
                    self.obstacles,
                    &exclude,
                    self.config.lane_step,
                )
                .y
            };

            let points = if lane_y == start.y() {
                smallvec![start, Point::new(gx2, start.y()), Point::new(gx2, goal.y()), goal]
            } else {
                gutter_path(start, goal, gx1, gx2, lane_y)
            };
            return RoutedPath { case: RouteCase::Jog, points };
        }

        let half_gutter = metrics.gutter_height / 2;
        let side =
            detour_side(&source_rect, &destination_rect, start.y(), destination_port, half_gutter);
        let lane_y =
            self.detour_lane(&source_rect, &destination_rect, side, gx1, gx2, lanes, &exclude);
        tracing::trace!(
            source = %source.id(),
            destination = %destination.id(),
            ?side,
            lane_y,
            "detouring around blocked span"
        );
        RoutedPath { case: RouteCase::Detour, points: gutter_path(start, goal, gx1, gx2, lane_y) }
    }

    /// Claims a row-gutter lane on `side` of the two boxes, trying the far side next and
    /// falling back to the nearest gutter middle when everything is taken.
    #[allow(clippy::too_many_arguments)]
    fn detour_lane(
        &self,
        source_rect: &Rect,
        destination_rect: &Rect,
        side: DetourSide,
        gx1: i32,
        gx2: i32,
        lanes: &mut LaneSet,
        exclude: &[&NodeId],
    ) -> i32 {
        let preferred = self.detour_candidates(source_rect, destination_rect, side);
        if let Some(y) = claim_first_free(&preferred, gx1, gx2, lanes, self.obstacles, exclude) {
            return y;
        }

        let other = match side {
            DetourSide::Above => DetourSide::Below,
            DetourSide::Below => DetourSide::Above,
        };
        let alternate = self.detour_candidates(source_rect, destination_rect, other);
        if let Some(y) = claim_first_free(&alternate, gx1, gx2, lanes, self.obstacles, exclude) {
            return y;
        }

        let y = preferred[0];
        tracing::debug!(y, "detour lanes exhausted; sharing the nearest gutter");
        lanes.claim(LaneOrientation::Horizontal, y, gx1, gx2);
        y
    }

    fn detour_candidates(
        &self,
        source_rect: &Rect,
        destination_rect: &Rect,
        side: DetourSide,
    ) -> SmallVec<[i32; 12]> {
        let metrics = &self.config.metrics;
        let half_gutter = metrics.gutter_height / 2;
        let nudge = self.config.lane_step / 2;
        let (base, direction) = match side {
            DetourSide::Above => (source_rect.top.min(destination_rect.top) - half_gutter, -1),
            DetourSide::Below => {
                (source_rect.bottom.max(destination_rect.bottom) + half_gutter, 1)
            }
        };

        let mut out = SmallVec::new();
        for ring in 0..DETOUR_RINGS {
            let mid = base + direction * ring * metrics.row_pitch();
            for y in [mid, mid - nudge, mid + nudge] {
                out.push(y.max(self.config.min_lane_y));
            }
        }
        out
    }
}

fn detour_side(
    source_rect: &Rect,
    destination_rect: &Rect,
    source_y: i32,
    destination_port: PortName,
    half_gutter: i32,
) -> DetourSide {
    match destination_port {
        PortName::LeftUpper => DetourSide::Above,
        PortName::LeftLower => DetourSide::Below,
        _ => {
            let above = source_rect.top.min(destination_rect.top) - half_gutter;
            let below = source_rect.bottom.max(destination_rect.bottom) + half_gutter;
            if above.abs_diff(source_y) <= below.abs_diff(source_y) {
                DetourSide::Above
            } else {
                DetourSide::Below
            }
        }
    }
}

/// Out into the source gutter, along the lane, down the destination gutter, into the port.
fn gutter_path(start: Point, goal: Point, gx1: i32, gx2: i32, lane_y: i32) -> EdgePath {
    let mut points: EdgePath = smallvec![
        start,
        Point::new(gx1, start.y()),
        Point::new(gx1, lane_y),
        Point::new(gx2, lane_y),
    ];
    if goal.y() != lane_y {
        points.push(Point::new(gx2, goal.y()));
    }
    points.push(goal);
    points
}

/// Drops zero-length segments and merges collinear runs.
///
/// Routed paths keep their raw shape (a renderer must tolerate zero-length segments); this is
/// for consumers that prefer the minimal polyline.
pub fn simplify_path(path: &[Point]) -> EdgePath {
    let mut points = EdgePath::new();
    for &point in path {
        if points.last() == Some(&point) {
            continue;
        }
        if points.len() >= 2 {
            let a = points[points.len() - 2];
            let b = points[points.len() - 1];
            let collinear = (a.x() == b.x() && b.x() == point.x())
                || (a.y() == b.y() && b.y() == point.y());
            if collinear {
                points.pop();
            }
        }
        points.push(point);
    }
    points
}
