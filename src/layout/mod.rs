// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prerequisite edge routing over the semester grid.
//!
//! Leaves first: [`geometry`] maps grid slots to rectangles and ports, [`obstacles`] answers
//! intersection queries, [`lanes`] tracks horizontal lanes claimed during one build, [`router`]
//! produces one axis-aligned path, [`resolve`] and [`ports`] turn prerequisite codes into edges
//! with destination ports, and [`diagram`] composes all of it over a whole curriculum.

pub mod diagram;
pub mod geometry;
pub mod lanes;
pub mod obstacles;
pub mod ports;
pub mod resolve;
pub mod router;

pub use diagram::{
    orchestrate, orchestrate_batch, orchestrate_with, Edge, NodeRect, PrerequisiteDiagram,
};
pub use geometry::{rect_for, Point, PortName, Ports, Rect};
pub use lanes::{find_horizontal_lane, Lane, LaneChoice, LaneOrientation, LaneSet};
pub use obstacles::ObstacleIndex;
pub use ports::assign_destination_ports;
pub use resolve::{bare_course_id, is_sentinel, resolve_prerequisites, ResolvedEdge};
pub use router::{simplify_path, EdgePath, RouteCase, RoutedPath, Router};
