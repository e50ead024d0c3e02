// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Series extraction.
//!
//! Turns a [`BenchmarkReport`] into plot-ready series by reading integer parameters out of the
//! slash-delimited benchmark names. Extraction is all-or-nothing: the first malformed record
//! aborts the whole pass and no partial series is returned.

use std::fmt;

use crate::model::{BenchmarkRecord, BenchmarkReport, Series, SeriesTable};

const SINGLE_MIN_SEGMENTS: usize = 2;
const GROUPED_MIN_SEGMENTS: usize = 3;

/// Builds one series: x from name segment 1, y from `real_time`.
pub fn extract_single_series(report: &BenchmarkReport) -> Result<Series, ExtractError> {
    let mut series = Series::with_capacity(report.len());

    for (index, record) in report.benchmarks.iter().enumerate() {
        let segments = NameSegments::split(&record.name);
        segments.require(index, record, SINGLE_MIN_SEGMENTS)?;

        let x = parse_parameter(index, record, &segments, 1)?;
        let y = parse_real_time(index, record)?;
        series.push(x, y);
    }

    tracing::debug!(records = report.len(), "extracted single series");
    Ok(series)
}

/// Builds one series per distinct name segment 1, with x from segment 2.
///
/// Groups appear in the order their first record appears in the report.
pub fn extract_grouped_series(report: &BenchmarkReport) -> Result<SeriesTable, ExtractError> {
    let mut table = SeriesTable::new();

    for (index, record) in report.benchmarks.iter().enumerate() {
        let segments = NameSegments::split(&record.name);
        segments.require(index, record, GROUPED_MIN_SEGMENTS)?;

        let x = parse_parameter(index, record, &segments, 2)?;
        let y = parse_real_time(index, record)?;
        table.series_mut_or_insert(segments.get(1)).push(x, y);
    }

    tracing::debug!(records = report.len(), groups = table.len(), "extracted grouped series");
    Ok(table)
}

/// Borrowed view of a benchmark name split on `/`.
struct NameSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> NameSegments<'a> {
    fn split(name: &'a str) -> Self {
        let mut segments = Vec::with_capacity(4);
        let mut start = 0;
        for slash in memchr::memchr_iter(b'/', name.as_bytes()) {
            segments.push(&name[start..slash]);
            start = slash + 1;
        }
        segments.push(&name[start..]);
        Self { segments }
    }

    fn len(&self) -> usize {
        self.segments.len()
    }

    fn get(&self, position: usize) -> &'a str {
        self.segments[position]
    }

    fn require(
        &self,
        index: usize,
        record: &BenchmarkRecord,
        expected: usize,
    ) -> Result<(), ExtractError> {
        if self.len() < expected {
            return Err(ExtractError::TooFewSegments {
                index,
                name: record.name.clone(),
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }
}

fn parse_parameter(
    index: usize,
    record: &BenchmarkRecord,
    segments: &NameSegments<'_>,
    position: usize,
) -> Result<i64, ExtractError> {
    let raw = segments.get(position);
    raw.trim().parse::<i64>().map_err(|_| ExtractError::InvalidParameter {
        index,
        name: record.name.clone(),
        segment: position,
        value: raw.to_owned(),
    })
}

fn parse_real_time(index: usize, record: &BenchmarkRecord) -> Result<f64, ExtractError> {
    record.real_time.as_f64().ok_or_else(|| ExtractError::InvalidRealTime {
        index,
        name: record.name.clone(),
        value: record.real_time.to_string(),
    })
}

/// A record that cannot be turned into a point.
///
/// `index` is the zero-based position of the record in the report's `benchmarks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    TooFewSegments {
        index: usize,
        name: String,
        expected: usize,
        found: usize,
    },
    InvalidParameter {
        index: usize,
        name: String,
        segment: usize,
        value: String,
    },
    InvalidRealTime {
        index: usize,
        name: String,
        value: String,
    },
}

impl ExtractError {
    pub fn index(&self) -> usize {
        match self {
            Self::TooFewSegments { index, .. }
            | Self::InvalidParameter { index, .. }
            | Self::InvalidRealTime { index, .. } => *index,
        }
    }

    /// The record field the error refers to (`"name"` or `"real_time"`).
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooFewSegments { .. } | Self::InvalidParameter { .. } => "name",
            Self::InvalidRealTime { .. } => "real_time",
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments {
                index,
                name,
                expected,
                found,
            } => write!(
                f,
                "benchmarks[{index}].name {name:?}: expected at least {expected} '/'-separated segments, found {found}"
            ),
            Self::InvalidParameter {
                index,
                name,
                segment,
                value,
            } => write!(
                f,
                "benchmarks[{index}].name {name:?}: segment {segment} is not an integer: {value:?}"
            ),
            Self::InvalidRealTime { index, name, value } => write!(
                f,
                "benchmarks[{index}].real_time for {name:?} is not a number: {value:?}"
            ),
        }
    }
}

impl std::error::Error for ExtractError {}

#[cfg(test)]
mod tests;
