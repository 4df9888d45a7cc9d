// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::config::GridMetrics;
use crate::model::GridPosition;

/// Integer point in diagram space.
///
/// Every coordinate the engine emits is already rounded to whole units, so renderers never see
/// sub-pixel seams and endpoints compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub center_x: i32,
    pub center_y: i32,
}

impl Rect {
    pub fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            center_x: left + width / 2,
            center_y: top + height / 2,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Strict overlap test; rectangles that merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    pub fn expand(&self, margin: i32) -> Self {
        Self::from_origin(
            self.left - margin,
            self.top - margin,
            self.width() + 2 * margin,
            self.height() + 2 * margin,
        )
    }

    pub fn ports(&self, port_offset: i32) -> Ports {
        Ports {
            top_center: Point::new(self.center_x, self.top),
            bottom_center: Point::new(self.center_x, self.bottom),
            left_center: Point::new(self.left, self.center_y),
            right_center: Point::new(self.right, self.center_y),
            left_upper: Point::new(self.left, self.center_y - port_offset),
            left_lower: Point::new(self.left, self.center_y + port_offset),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PortName {
    TopCenter,
    BottomCenter,
    LeftCenter,
    RightCenter,
    LeftUpper,
    LeftLower,
}

/// The named anchors of one node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ports {
    pub top_center: Point,
    pub bottom_center: Point,
    pub left_center: Point,
    pub right_center: Point,
    pub left_upper: Point,
    pub left_lower: Point,
}

impl Ports {
    pub fn get(&self, name: PortName) -> Point {
        match name {
            PortName::TopCenter => self.top_center,
            PortName::BottomCenter => self.bottom_center,
            PortName::LeftCenter => self.left_center,
            PortName::RightCenter => self.right_center,
            PortName::LeftUpper => self.left_upper,
            PortName::LeftLower => self.left_lower,
        }
    }
}

/// Box of the course at `position`.
pub fn rect_for(metrics: &GridMetrics, position: GridPosition) -> Rect {
    let left = position.column() as i32 * metrics.column_pitch();
    let top = position.row() as i32 * metrics.row_pitch() + metrics.header_offset;
    Rect::from_origin(left, top, metrics.node_width, metrics.node_height)
}

/// x of the middle of the gutter right of `column`.
pub(crate) fn gutter_after(metrics: &GridMetrics, column: usize) -> i32 {
    column as i32 * metrics.column_pitch() + metrics.node_width + metrics.gutter_width / 2
}

/// x of the middle of the gutter left of `column`.
pub(crate) fn gutter_before(metrics: &GridMetrics, column: usize) -> i32 {
    column as i32 * metrics.column_pitch() - metrics.gutter_width / 2
}
