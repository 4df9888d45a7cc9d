// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::curriculum::{CourseDescriptor, Curriculum};
use crate::config::DEFAULT_SENTINEL;

fn course(id: &str, code: &str, prerequisites: &[&str]) -> CourseDescriptor {
    CourseDescriptor::new(id, code).with_prerequisites(prerequisites.iter().copied())
}

/// `a` (IT-100) in the first semester, `b` (IT-200, requires 100) in the second.
pub(crate) fn two_semesters() -> Curriculum {
    Curriculum::from_columns(vec![
        vec![course("a", "IT-100", &[])],
        vec![course("b", "IT-200", &["100"])],
    ])
    .expect("fixture curriculum")
}

/// `d` at (2, 0) requires `a` at (0, 0) and `b` at (1, 1); `x` fills (1, 0).
pub(crate) fn fan_in_pair() -> Curriculum {
    Curriculum::from_columns(vec![
        vec![course("a", "IT-100", &[])],
        vec![course("x", "IT-210", &[]), course("b", "IT-200", &[])],
        vec![course("d", "IT-300", &["100", "200"])],
    ])
    .expect("fixture curriculum")
}

fn dense_code(column: usize, row: usize) -> String {
    format!("C-{}", 100 * (column + 1) + row)
}

/// Fully populated `columns` x `rows` grid with a deterministic mix of neighbouring,
/// column-skipping and diagonal prerequisites plus a sentinel on every first-row course.
pub(crate) fn dense_grid(columns: usize, rows: usize) -> Curriculum {
    let columns = (0..columns)
        .map(|column| {
            (0..rows)
                .map(|row| {
                    let mut prerequisites = Vec::<String>::new();
                    if column >= 1 {
                        prerequisites.push(dense_code(column - 1, row));
                        if (column + row) % 3 == 0 {
                            prerequisites.push(dense_code(column - 1, (row + rows - 1) % rows));
                        }
                    }
                    if column >= 2 {
                        prerequisites.push(dense_code(column - 2, (row + 1) % rows));
                    }
                    if row == 0 {
                        prerequisites.push(DEFAULT_SENTINEL.to_owned());
                    }
                    CourseDescriptor::new(format!("n{column}_{row}"), dense_code(column, row))
                        .with_prerequisites(prerequisites)
                })
                .collect()
        })
        .collect();
    Curriculum::from_columns(columns).expect("fixture curriculum")
}
