// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::{IdError, NodeId};

/// Cell of the semester grid.
///
/// `column` is the semester ordinal across the whole timeline and `row` the index within that
/// semester's display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    column: usize,
    row: usize,
}

impl GridPosition {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

/// Course as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDescriptor {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub prerequisite_codes: Vec<String>,
}

impl CourseDescriptor {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self { id: id.into(), code: code.into(), ..Self::default() }
    }

    pub fn with_prerequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisite_codes = codes.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNode {
    id: NodeId,
    code: SmolStr,
    name: String,
    credits: u32,
    position: GridPosition,
    prerequisite_codes: Vec<SmolStr>,
}

impl CourseNode {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn prerequisite_codes(&self) -> &[SmolStr] {
        &self.prerequisite_codes
    }
}

/// Validated semester grid.
///
/// Nodes are kept in column-major, row-major order, which is also the order every build walks
/// them in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Curriculum {
    nodes: Vec<CourseNode>,
    column_count: usize,
    by_position: BTreeMap<GridPosition, usize>,
    by_id: BTreeMap<NodeId, usize>,
}

impl Curriculum {
    pub fn from_columns(columns: Vec<Vec<CourseDescriptor>>) -> Result<Self, CurriculumError> {
        let column_count = columns.len();
        let mut nodes = Vec::<CourseNode>::new();
        let mut by_position = BTreeMap::<GridPosition, usize>::new();
        let mut by_id = BTreeMap::<NodeId, usize>::new();

        for (column, courses) in columns.into_iter().enumerate() {
            for (row, course) in courses.into_iter().enumerate() {
                let position = GridPosition::new(column, row);
                let id = NodeId::new(course.id.clone()).map_err(|source| {
                    CurriculumError::InvalidId { position, value: course.id.clone(), source }
                })?;
                if let Some(&existing) = by_id.get(&id) {
                    return Err(CurriculumError::DuplicateNodeId {
                        node_id: id,
                        first: nodes[existing].position,
                        second: position,
                    });
                }

                let idx = nodes.len();
                by_position.insert(position, idx);
                by_id.insert(id.clone(), idx);
                nodes.push(CourseNode {
                    id,
                    code: SmolStr::new(course.code.trim()),
                    name: course.name,
                    credits: course.credits,
                    position,
                    prerequisite_codes: course
                        .prerequisite_codes
                        .iter()
                        .map(|code| SmolStr::new(code.trim()))
                        .collect(),
                });
            }
        }

        Ok(Self { nodes, column_count, by_position, by_id })
    }

    pub fn nodes(&self) -> &[CourseNode] {
        &self.nodes
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&CourseNode> {
        self.by_id.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn node_at(&self, position: GridPosition) -> Option<&CourseNode> {
        self.by_position.get(&position).map(|&idx| &self.nodes[idx])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurriculumError {
    InvalidId { position: GridPosition, value: String, source: IdError },
    DuplicateNodeId { node_id: NodeId, first: GridPosition, second: GridPosition },
}

impl fmt::Display for CurriculumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { position, value, source } => write!(
                f,
                "course at column {} row {} has invalid id {value:?}: {source}",
                position.column, position.row
            ),
            Self::DuplicateNodeId { node_id, first, second } => write!(
                f,
                "course id {node_id} appears twice (column {} row {}, column {} row {})",
                first.column, first.row, second.column, second.row
            ),
        }
    }
}

impl std::error::Error for CurriculumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId { source, .. } => Some(source),
            Self::DuplicateNodeId { .. } => None,
        }
    }
}
