// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::BenchmarkReport;

/// Reads the whole file at `path` and parses it as a benchmark report.
pub fn load_report(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReportError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_report_at(&text, Some(path))?;
    tracing::debug!(path = %path.display(), records = report.len(), "loaded benchmark report");
    Ok(report)
}

/// Parses an in-memory report. Errors carry no path.
pub fn parse_report(text: &str) -> Result<BenchmarkReport, ReportError> {
    parse_report_at(text, None)
}

fn parse_report_at(text: &str, path: Option<&Path>) -> Result<BenchmarkReport, ReportError> {
    serde_json::from_str(text).map_err(|source| ReportError::Json {
        path: path.map(Path::to_path_buf),
        source,
    })
}

#[derive(Debug)]
pub enum ReportError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Malformed JSON, or JSON that does not have the report shape.
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

impl ReportError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Json { path, .. } => path.as_deref(),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read report {path:?}: {source}"),
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid report {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "invalid report: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
