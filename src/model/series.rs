// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// The name segment that partitions records into series (e.g. `"2"` in `BM_Solve/2/5`).
pub type GroupKey = SmolStr;

/// An index-aligned pair of x (parameter) and y (time in microseconds) sequences.
///
/// Points are kept in insertion order; `x` is not sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    x: Vec<i64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Appends one point. This is the only mutator, so `x().len() == y().len()` always holds.
    pub fn push(&mut self, x: i64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn x(&self) -> &[i64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = (i64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Series keyed by group, iterated in the order each key was first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    series: IndexMap<GroupKey, Series>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the series for `key`, appending an empty one at the end if the key is new.
    pub fn series_mut_or_insert(&mut self, key: &str) -> &mut Series {
        // Avoid allocating a key on the hot path where the group already exists.
        if let Some(idx) = self.series.get_index_of(key) {
            return &mut self.series[idx];
        }
        self.series.entry(GroupKey::new(key)).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Series> {
        self.series.get(key)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &GroupKey> + '_ {
        self.series.keys()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&GroupKey, &Series)> + '_ {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<'a> IntoIterator for &'a SeriesTable {
    type Item = (&'a GroupKey, &'a Series);
    type IntoIter = indexmap::map::Iter<'a, GroupKey, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
