// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A parsed benchmark report (typed at the JSON boundary) and the plot-ready series derived
//! from it.

pub mod report;
pub mod series;

pub use report::{BenchmarkRecord, BenchmarkReport, RealTime};
pub use series::{GroupKey, Series, SeriesTable};
