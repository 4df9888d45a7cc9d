// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing lanes claimed during one build.
//!
//! A lane is a horizontal coordinate that at most one routed edge owns. The [`LaneSet`] is a
//! plain value owned by the build that creates it and threaded through every routing call, so
//! two builds never observe each other's lanes.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;
use smallvec::SmallVec;

use super::geometry::Rect;
use super::obstacles::ObstacleIndex;
use crate::model::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LaneOrientation {
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct LaneKey {
    orientation: LaneOrientation,
    y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub orientation: LaneOrientation,
    pub y: i32,
    /// Union of the x ranges of every edge routed along this lane.
    pub claimed_x_range: (i32, i32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneSet {
    lanes: BTreeMap<LaneKey, Lane>,
}

impl LaneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn is_claimed(&self, orientation: LaneOrientation, y: i32) -> bool {
        self.lanes.contains_key(&LaneKey { orientation, y })
    }

    /// Claims the lane at `y` for the run `x0..x1`.
    ///
    /// Returns false if the lane was already claimed; its x range is widened instead.
    pub fn claim(&mut self, orientation: LaneOrientation, y: i32, x0: i32, x1: i32) -> bool {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        match self.lanes.entry(LaneKey { orientation, y }) {
            Entry::Vacant(slot) => {
                slot.insert(Lane { orientation, y, claimed_x_range: (lo, hi) });
                true
            }
            Entry::Occupied(mut slot) => {
                let range = &mut slot.get_mut().claimed_x_range;
                range.0 = range.0.min(lo);
                range.1 = range.1.max(hi);
                false
            }
        }
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.values()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneChoice {
    pub y: i32,
    /// Set when no candidate was both free and unobstructed.
    pub fallback: bool,
}

/// Claims the first candidate lane that is unclaimed and whose run `x0..x1` avoids every node
/// not in `exclude`.
///
/// Candidates are tried in order; duplicates are skipped. Returns `None` without claiming
/// anything when no candidate qualifies.
pub(crate) fn claim_first_free(
    candidates: &[i32],
    x0: i32,
    x1: i32,
    lanes: &mut LaneSet,
    obstacles: &ObstacleIndex,
    exclude: &[&NodeId],
) -> Option<i32> {
    let mut seen = SmallVec::<[i32; 12]>::new();
    for &y in candidates {
        if seen.contains(&y) {
            continue;
        }
        seen.push(y);

        if lanes.is_claimed(LaneOrientation::Horizontal, y) {
            continue;
        }
        if obstacles.horizontal_blocked(y, x0, x1, exclude) {
            continue;
        }
        lanes.claim(LaneOrientation::Horizontal, y, x0, x1);
        return Some(y);
    }
    None
}

/// Picks the horizontal lane for a run leaving `start` towards `end`.
///
/// The run is checked from `start.right` to `span_end_x` (the gutter just before the end
/// column). Candidates, in priority order:
/// 1. the start's centre line,
/// 2. `lane_step` and `2 * lane_step` above/below that centre (above first),
/// 3. just outside the top/bottom edges of the start box, then of the end box.
///
/// If nothing qualifies the centre line is reused (and re-claimed), never an error.
pub fn find_horizontal_lane(
    start: &Rect,
    end: &Rect,
    span_end_x: i32,
    lanes: &mut LaneSet,
    obstacles: &ObstacleIndex,
    exclude: &[&NodeId],
    lane_step: i32,
) -> LaneChoice {
    let clearance = obstacles.clearance();
    let direct = start.center_y;
    let candidates = [
        direct,
        direct - lane_step,
        direct + lane_step,
        direct - 2 * lane_step,
        direct + 2 * lane_step,
        start.top - clearance,
        start.bottom + clearance,
        end.top - clearance,
        end.bottom + clearance,
    ];

    if let Some(y) =
        claim_first_free(&candidates, start.right, span_end_x, lanes, obstacles, exclude)
    {
        return LaneChoice { y, fallback: false };
    }

    tracing::trace!(y = direct, "no free lane; reusing the direct lane");
    lanes.claim(LaneOrientation::Horizontal, direct, start.right, span_end_x);
    LaneChoice { y: direct, fallback: true }
}
