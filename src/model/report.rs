// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A benchmark report as written by Google Benchmark's JSON reporter.
///
/// Only the `benchmarks` array is recognized; `context` and any other top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl BenchmarkReport {
    pub fn new(benchmarks: Vec<BenchmarkRecord>) -> Self {
        Self { benchmarks }
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

/// One measured run.
///
/// `name` is a slash-delimited path like `BM_Solve/2/5`: a group label followed by the
/// integer-valued parameters of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub real_time: RealTime,
}

impl BenchmarkRecord {
    pub fn new(name: impl Into<String>, real_time: impl Into<RealTime>) -> Self {
        Self {
            name: name.into(),
            real_time: real_time.into(),
        }
    }
}

/// Elapsed time in microseconds, kept as it appeared in the report.
///
/// Reporters disagree on whether this is a JSON number or a string, so both are accepted and the
/// conversion to `f64` happens at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RealTime {
    Number(f64),
    Text(String),
}

impl RealTime {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for RealTime {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RealTime {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RealTime {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
