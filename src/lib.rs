// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Benchplot — time-versus-parameter charts for Google Benchmark JSON reports.
//!
//! Reports are parsed into typed records ([`model`]), turned into plot-ready series
//! ([`extract`]), laid out as a chart ([`plot`], [`variant`]) and shown in the terminal ([`tui`]).

pub mod extract;
pub mod model;
pub mod plot;
pub mod store;
pub mod tui;
pub mod variant;
