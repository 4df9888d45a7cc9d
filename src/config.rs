// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing configuration.
//!
//! Every field has a default, and the JSON form uses `#[serde(default)]` so a curriculum document
//! only needs to spell out the values it overrides.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_WIDTH: i32 = 160;
pub const DEFAULT_NODE_HEIGHT: i32 = 64;
pub const DEFAULT_GUTTER_WIDTH: i32 = 56;
pub const DEFAULT_GUTTER_HEIGHT: i32 = 24;
pub const DEFAULT_HEADER_OFFSET: i32 = 40;

pub const DEFAULT_CLEARANCE: i32 = 6;
pub const DEFAULT_PORT_OFFSET: i32 = 12;
pub const DEFAULT_LANE_STEP: i32 = 8;
pub const DEFAULT_MIN_LANE_Y: i32 = 8;

/// Upper bound for every size and offset; keeps grid coordinates far inside `i32`.
pub const MAX_METRIC: i32 = 10_000;

/// Placeholder used by registrars for "by departmental approval" prerequisites.
pub const DEFAULT_SENTINEL: &str = "Departmental approval";

/// Fixed box and gutter sizes of the semester grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GridMetrics {
    pub node_width: i32,
    pub node_height: i32,
    /// Horizontal space between two semester columns.
    pub gutter_width: i32,
    /// Vertical space between two course rows.
    pub gutter_height: i32,
    /// Space reserved above the first row for semester headers.
    pub header_offset: i32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
            gutter_width: DEFAULT_GUTTER_WIDTH,
            gutter_height: DEFAULT_GUTTER_HEIGHT,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

impl GridMetrics {
    pub fn column_pitch(&self) -> i32 {
        self.node_width + self.gutter_width
    }

    pub fn row_pitch(&self) -> i32 {
        self.node_height + self.gutter_height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingConfig {
    pub metrics: GridMetrics,
    /// Margin kept between a routed stroke and any foreign node box.
    pub clearance: i32,
    /// Distance of `leftUpper`/`leftLower` from `leftCenter`.
    pub port_offset: i32,
    /// Spacing between neighbouring candidate lanes.
    pub lane_step: i32,
    /// Smallest y a detour lane may use.
    pub min_lane_y: i32,
    /// Prerequisite entries equal to or containing this text never produce an edge.
    pub sentinel: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            metrics: GridMetrics::default(),
            clearance: DEFAULT_CLEARANCE,
            port_offset: DEFAULT_PORT_OFFSET,
            lane_step: DEFAULT_LANE_STEP,
            min_lane_y: DEFAULT_MIN_LANE_Y,
            sentinel: DEFAULT_SENTINEL.to_owned(),
        }
    }
}

/// A configuration value outside the range routing can work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {}, got {}",
            self.field, self.min, self.max, self.value
        )
    }
}

impl std::error::Error for ConfigError {}

fn check(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError { field, value, min, max })
    }
}

impl RoutingConfig {
    /// Rejects values that would overflow grid coordinates or break routing geometry.
    ///
    /// Sizes must be positive and at most [`MAX_METRIC`]. Gutters need at least two units so
    /// their middle lies strictly between two boxes, the clearance may not exceed half of either
    /// gutter, and the offset ports must stay on the box's left edge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.metrics;
        check("metrics.nodeWidth", m.node_width, 1, MAX_METRIC)?;
        check("metrics.nodeHeight", m.node_height, 1, MAX_METRIC)?;
        check("metrics.gutterWidth", m.gutter_width, 2, MAX_METRIC)?;
        check("metrics.gutterHeight", m.gutter_height, 2, MAX_METRIC)?;
        check("metrics.headerOffset", m.header_offset, 0, MAX_METRIC)?;
        let half_gutter = m.gutter_width.min(m.gutter_height) / 2;
        check("clearance", self.clearance, 0, half_gutter)?;
        check("portOffset", self.port_offset, 0, m.node_height / 2)?;
        check("laneStep", self.lane_step, 1, MAX_METRIC)?;
        check("minLaneY", self.min_lane_y, 0, MAX_METRIC)?;
        Ok(())
    }
}
