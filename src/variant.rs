// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plot variants: which files are read and how their series are laid out on the chart.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::extract::{extract_grouped_series, extract_single_series, ExtractError};
use crate::plot::{PlotLine, PlotSpec, SeriesStyle};
use crate::store::{load_report, ReportError};

/// Line styles of the compare variant, by file position.
const COMPARE_STYLES: [&str; 2] = ["r-", "b-"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// One line: x from name segment 1.
    Single,
    /// One line per distinct name segment 1, x from segment 2.
    Grouped,
    /// One single-series line per file, overlaid.
    #[default]
    Compare,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "grouped" => Some(Self::Grouped),
            "compare" => Some(Self::Compare),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Grouped => "grouped",
            Self::Compare => "compare",
        }
    }

    /// Report files read when none are given on the command line.
    pub fn default_files(self) -> &'static [&'static str] {
        match self {
            Self::Single | Self::Grouped => &["benchmark.json"],
            Self::Compare => &["benchmark-solve.json", "benchmark-no-solve.json"],
        }
    }

    /// `None` means any number of files.
    pub fn max_files(self) -> Option<usize> {
        match self {
            Self::Single | Self::Grouped => Some(1),
            Self::Compare => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loads `files` (or the variant's defaults when empty) and lays them out as one chart.
pub fn build_spec(variant: Variant, files: &[PathBuf]) -> Result<PlotSpec, VariantError> {
    let files: Vec<PathBuf> = if files.is_empty() {
        variant.default_files().iter().map(PathBuf::from).collect()
    } else {
        files.to_vec()
    };

    if let Some(max) = variant.max_files() {
        if files.len() > max {
            return Err(VariantError::TooManyFiles {
                variant,
                max,
                found: files.len(),
            });
        }
    }

    let title = files.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ");
    tracing::debug!(%variant, files = %title, "building plot");

    match variant {
        Variant::Single => {
            let path = &files[0];
            let report = load_report(path)?;
            let series = extract_single_series(&report).map_err(extract_error(path))?;
            Ok(PlotSpec::single(title, &series, SeriesStyle::default()))
        }
        Variant::Grouped => {
            let path = &files[0];
            let report = load_report(path)?;
            let table = extract_grouped_series(&report).map_err(extract_error(path))?;
            Ok(PlotSpec::grouped(title, &table))
        }
        Variant::Compare => {
            let mut spec = PlotSpec::new(title);
            for (idx, path) in files.iter().enumerate() {
                let report = load_report(path)?;
                let series = extract_single_series(&report).map_err(extract_error(path))?;
                spec.push_line(PlotLine::from_series(
                    Some(line_label(path)),
                    &series,
                    compare_style(idx),
                ));
            }
            Ok(spec)
        }
    }
}

fn compare_style(idx: usize) -> SeriesStyle {
    COMPARE_STYLES
        .get(idx)
        .and_then(|spec| SeriesStyle::parse(spec).ok())
        .unwrap_or_default()
}

/// `benchmark-no-solve.json` -> `benchmark-no-solve`.
fn line_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn extract_error(path: &Path) -> impl FnOnce(ExtractError) -> VariantError + '_ {
    move |source| VariantError::Extract {
        path: path.to_path_buf(),
        source,
    }
}

#[derive(Debug)]
pub enum VariantError {
    Report(ReportError),
    Extract { path: PathBuf, source: ExtractError },
    TooManyFiles { variant: Variant, max: usize, found: usize },
}

impl From<ReportError> for VariantError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(source) => write!(f, "{source}"),
            Self::Extract { path, source } => write!(f, "cannot plot {path:?}: {source}"),
            Self::TooManyFiles {
                variant,
                max,
                found,
            } => write!(f, "{variant} plots take at most {max} report file(s), got {found}"),
        }
    }
}

impl std::error::Error for VariantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Report(source) => Some(source),
            Self::Extract { source, .. } => Some(source),
            Self::TooManyFiles { .. } => None,
        }
    }
}
