// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::curriculum::{CourseDescriptor, Curriculum, CurriculumError};
use crate::config::{ConfigError, RoutingConfig};
use crate::policy::HighlightPairs;

/// On-disk curriculum document consumed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDocument {
    /// Semester columns in chronological order; each lists its courses top to bottom.
    pub columns: Vec<Vec<CourseDescriptor>>,
    #[serde(default)]
    pub config: Option<RoutingConfig>,
    /// `[sourceCode, destinationCode]` pairs whose edges are flagged `special`.
    #[serde(default)]
    pub highlight: Vec<[String; 2]>,
}

/// Validated pieces of a [`CurriculumDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCurriculum {
    pub curriculum: Curriculum,
    pub config: RoutingConfig,
    pub highlight: HighlightPairs,
}

impl CurriculumDocument {
    /// Validates the config block and the course grid; `path` only labels errors.
    pub fn into_loaded(self, path: &Path) -> Result<LoadedCurriculum, DocumentError> {
        let config = self.config.unwrap_or_default();
        config
            .validate()
            .map_err(|source| DocumentError::Config { path: path.to_path_buf(), source })?;
        let curriculum = Curriculum::from_columns(self.columns)
            .map_err(|source| DocumentError::Curriculum { path: path.to_path_buf(), source })?;
        let highlight = self.highlight.into_iter().map(|[source, destination]| (source, destination));
        Ok(LoadedCurriculum {
            curriculum,
            config,
            highlight: HighlightPairs::from_pairs(highlight),
        })
    }
}

#[derive(Debug)]
pub enum DocumentError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Config { path: PathBuf, source: ConfigError },
    Curriculum { path: PathBuf, source: CurriculumError },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid curriculum JSON in {}: {source}", path.display())
            }
            Self::Config { path, source } => {
                write!(f, "invalid routing config in {}: {source}", path.display())
            }
            Self::Curriculum { path, source } => {
                write!(f, "invalid curriculum in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Config { source, .. } => Some(source),
            Self::Curriculum { source, .. } => Some(source),
        }
    }
}

pub fn parse_document(path: &Path, text: &str) -> Result<LoadedCurriculum, DocumentError> {
    let document: CurriculumDocument = serde_json::from_str(text)
        .map_err(|source| DocumentError::Json { path: path.to_path_buf(), source })?;
    document.into_loaded(path)
}

pub fn load_document(path: impl AsRef<Path>) -> Result<LoadedCurriculum, DocumentError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
    parse_document(path, &text)
}

/// JSON Schema describing [`CurriculumDocument`].
pub fn document_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(CurriculumDocument);
    schema.as_value().clone()
}
