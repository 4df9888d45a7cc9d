// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Curriflow: orthogonal prerequisite arrows for curriculum semester grids.
//!
//! Courses sit on a grid of semester columns. Given a [`model::Curriculum`] and a
//! [`config::RoutingConfig`], [`layout::orchestrate`] resolves every prerequisite reference to a
//! concrete pair of courses and routes an axis-aligned arrow between them that stays clear of
//! every other course box.

pub mod config;
pub mod layout;
pub mod model;
pub mod policy;
