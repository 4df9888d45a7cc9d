// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::{rect_for, Point, Rect};
use crate::config::GridMetrics;
use crate::model::{Curriculum, NodeId};

/// Node boxes of one build, used to reject strokes that would cross a foreign course.
#[derive(Debug, Clone)]
pub struct ObstacleIndex {
    entries: Vec<(NodeId, Rect)>,
    clearance: i32,
}

impl ObstacleIndex {
    pub fn new(curriculum: &Curriculum, metrics: &GridMetrics, clearance: i32) -> Self {
        let entries = curriculum
            .nodes()
            .iter()
            .map(|node| (node.id().clone(), rect_for(metrics, node.position())))
            .collect();
        Self { entries, clearance }
    }

    pub fn clearance(&self) -> i32 {
        self.clearance
    }

    pub fn rect(&self, node_id: &NodeId) -> Option<Rect> {
        self.entries.iter().find(|(id, _)| id == node_id).map(|(_, rect)| *rect)
    }

    /// Returns true if the `w` x `h` box at (`x`, `y`), grown by the clearance on every side,
    /// overlaps a node box whose id is not in `exclude`.
    pub fn overlaps(&self, x: i32, y: i32, w: i32, h: i32, exclude: &[&NodeId]) -> bool {
        let query = Rect::from_origin(x, y, w, h).expand(self.clearance);
        self.entries
            .iter()
            .any(|(id, rect)| !exclude.contains(&id) && query.intersects(rect))
    }

    /// Axis-aligned segment variant of [`Self::overlaps`].
    pub fn segment_blocked(&self, a: Point, b: Point, exclude: &[&NodeId]) -> bool {
        let x = a.x().min(b.x());
        let y = a.y().min(b.y());
        let w = a.x().abs_diff(b.x()) as i32;
        let h = a.y().abs_diff(b.y()) as i32;
        self.overlaps(x, y, w, h, exclude)
    }

    /// Horizontal run at `y` between `x0` and `x1` (either order).
    pub fn horizontal_blocked(&self, y: i32, x0: i32, x1: i32, exclude: &[&NodeId]) -> bool {
        self.segment_blocked(Point::new(x0, y), Point::new(x1, y), exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::ObstacleIndex;
    use crate::config::GridMetrics;
    use crate::layout::geometry::Point;
    use crate::model::{CourseDescriptor, Curriculum, NodeId};

    fn three_in_a_row() -> Curriculum {
        Curriculum::from_columns(vec![
            vec![CourseDescriptor::new("a", "IT-100")],
            vec![CourseDescriptor::new("b", "IT-200")],
            vec![CourseDescriptor::new("c", "IT-300")],
        ])
        .unwrap()
    }

    #[test]
    fn detects_a_blocking_node_between_columns() {
        let curriculum = three_in_a_row();
        let index = ObstacleIndex::new(&curriculum, &GridMetrics::default(), 6);
        let a = NodeId::new("a").unwrap();
        let b = NodeId::new("b").unwrap();
        let c = NodeId::new("c").unwrap();

        // Row 0 centre line from A's right edge to the gutter before C.
        assert!(index.horizontal_blocked(72, 160, 404, &[&a, &c]));
        assert!(!index.horizontal_blocked(72, 160, 404, &[&a, &b, &c]));
    }

    #[test]
    fn clearance_extends_the_query() {
        let curriculum = three_in_a_row();
        let index = ObstacleIndex::new(&curriculum, &GridMetrics::default(), 6);
        let a = NodeId::new("a").unwrap();

        // B spans y 40..104; a line at y=36 is within clearance of its top edge.
        assert!(index.horizontal_blocked(36, 188, 404, &[&a]));
        // y=30 is far enough above.
        assert!(!index.horizontal_blocked(30, 188, 404, &[&a]));
    }

    #[test]
    fn gutter_verticals_are_clear() {
        let curriculum = three_in_a_row();
        let index = ObstacleIndex::new(&curriculum, &GridMetrics::default(), 6);

        assert!(!index.segment_blocked(Point::new(188, 0), Point::new(188, 400), &[]));
        assert!(index.segment_blocked(Point::new(300, 0), Point::new(300, 400), &[]));
    }

    #[test]
    fn looks_up_rects_by_id() {
        let curriculum = three_in_a_row();
        let index = ObstacleIndex::new(&curriculum, &GridMetrics::default(), 6);
        let rect = index.rect(&NodeId::new("c").unwrap()).unwrap();
        assert_eq!(rect.left, 432);
        assert!(index.rect(&NodeId::new("zz").unwrap()).is_none());
        assert_eq!(index.clearance(), 6);
    }
}
