// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use curriflow::layout::PrerequisiteDiagram;
use curriflow::model::{CourseDescriptor, Curriculum};

pub fn checksum_diagram(diagram: &PrerequisiteDiagram) -> u64 {
    let mut acc = 0u64;
    for edge in &diagram.edges {
        acc = acc.wrapping_mul(131).wrapping_add(edge.id.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(edge.path.len() as u64);
        for point in &edge.path {
            acc = acc.wrapping_add(point.x().unsigned_abs() as u64);
            acc = acc.wrapping_add(point.y().unsigned_abs() as u64);
        }
    }
    acc.wrapping_add(diagram.lanes.len() as u64)
}

pub mod curriculum {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridParams {
        pub semesters: usize,
        pub courses_per_semester: usize,
        /// References into the previous semester per course.
        pub fanout: usize,
        /// References that skip at least one semester per course.
        pub long_references: usize,
        /// Every n-th course also carries the departmental approval sentinel (0 = never).
        pub sentinel_every: usize,
    }

    impl GridParams {
        pub const fn new(
            semesters: usize,
            courses_per_semester: usize,
            fanout: usize,
            long_references: usize,
            sentinel_every: usize,
        ) -> Self {
            Self { semesters, courses_per_semester, fanout, long_references, sentinel_every }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Typical,
        DenseLong,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Typical => "typical",
                Self::DenseLong => "dense_long",
            }
        }

        pub const fn params(self) -> GridParams {
            match self {
                Self::Small => GridParams::new(4, 5, 1, 0, 4),
                Self::Typical => GridParams::new(10, 7, 2, 1, 5),
                Self::DenseLong => GridParams::new(16, 12, 3, 3, 3),
            }
        }
    }

    fn course_code(semester: usize, idx: usize) -> String {
        let scheme = if idx % 2 == 0 { "IT" } else { "MATH" };
        format!("{scheme}-{}{idx:02}", semester + 1)
    }

    fn bare_code(semester: usize, idx: usize) -> String {
        format!("{}{idx:02}", semester + 1)
    }

    pub fn grid(params: GridParams) -> Curriculum {
        assert!(params.semesters >= 1, "semesters must be >= 1");
        assert!(params.courses_per_semester >= 1, "courses_per_semester must be >= 1");

        let per = params.courses_per_semester;
        let mut columns = Vec::<Vec<CourseDescriptor>>::with_capacity(params.semesters);
        for semester in 0..params.semesters {
            let mut column = Vec::<CourseDescriptor>::with_capacity(per);
            for idx in 0..per {
                let mut prerequisites = Vec::<String>::new();
                if semester >= 1 {
                    for k in 0..params.fanout.min(per) {
                        prerequisites.push(course_code(semester - 1, (idx + k) % per));
                    }
                }
                if semester >= 2 {
                    for k in 0..params.long_references {
                        let target = semester - 2 - (k % (semester - 1));
                        prerequisites.push(bare_code(target, (idx + 1 + k * 3) % per));
                    }
                }
                if params.sentinel_every > 0 && (semester * per + idx) % params.sentinel_every == 0
                {
                    prerequisites.push("Departmental approval".to_owned());
                }

                column.push(
                    CourseDescriptor::new(
                        format!("s{semester:02}_c{idx:02}"),
                        course_code(semester, idx),
                    )
                    .with_prerequisites(prerequisites),
                );
            }
            columns.push(column);
        }

        Curriculum::from_columns(columns).expect("valid bench curriculum")
    }

    pub fn fixture(case: Case) -> Curriculum {
        grid(case.params())
    }
}
