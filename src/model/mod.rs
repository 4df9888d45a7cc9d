// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A curriculum is a grid of course nodes: columns are semesters in chronological order, rows
//! the course slots within a semester.

pub mod curriculum;
pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;

pub use curriculum::{CourseDescriptor, CourseNode, Curriculum, CurriculumError, GridPosition};
pub use document::{
    document_schema, load_document, parse_document, CurriculumDocument, DocumentError,
    LoadedCurriculum,
};
pub use ids::{EdgeId, Id, IdError, NodeId};
