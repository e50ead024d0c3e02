// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chart model and rendering.
//!
//! A [`PlotSpec`] is the renderer-agnostic description of one chart (title, axis labels, lines).
//! [`chart`] turns it into a ratatui [`Chart`] widget, which is drawn either by the terminal
//! window in [`crate::tui`] or off-screen by [`render_text`].

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use crate::model::{Series, SeriesTable};

pub mod style;
pub mod theme;

pub use style::{LineKind, SeriesStyle, StyleError};
pub use theme::{Theme, ThemeError, PALETTE_ENV};

pub const X_LABEL: &str = "spaces";
pub const Y_LABEL: &str = "time in us";

/// One drawable line. Points are `(parameter, microseconds)` in insertion order; points whose
/// time is not finite are left out, so the line has a gap there.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl PlotLine {
    pub fn from_series(label: Option<String>, series: &Series, style: SeriesStyle) -> Self {
        Self {
            label,
            points: series
                .points()
                .filter(|(_, y)| y.is_finite())
                .map(|(x, y)| (x as f64, y))
                .collect(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<PlotLine>,
}

impl PlotSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: X_LABEL.to_owned(),
            y_label: Y_LABEL.to_owned(),
            lines: Vec::new(),
        }
    }

    /// A chart with one unlabeled line.
    pub fn single(title: impl Into<String>, series: &Series, style: SeriesStyle) -> Self {
        let mut spec = Self::new(title);
        spec.push_line(PlotLine::from_series(None, series, style));
        spec
    }

    /// A chart with one labeled line per group, in the table's first-seen order.
    pub fn grouped(title: impl Into<String>, table: &SeriesTable) -> Self {
        let mut spec = Self::new(title);
        for (key, series) in table {
            spec.push_line(PlotLine::from_series(
                Some(key.to_string()),
                series,
                SeriesStyle::default(),
            ));
        }
        spec
    }

    pub fn push_line(&mut self, line: PlotLine) {
        self.lines.push(line);
    }

    pub fn has_legend(&self) -> bool {
        self.lines.iter().any(|line| line.label.is_some())
    }

    /// Legend entries in draw order.
    pub fn legend(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().filter_map(|line| line.label.as_deref())
    }

    /// Axis ranges covering every finite point.
    pub fn bounds(&self) -> Bounds {
        let mut x = Range::default();
        let mut y = Range::default();
        for &(px, py) in self.lines.iter().flat_map(|line| line.points.iter()) {
            if px.is_finite() && py.is_finite() {
                x.include(px);
                y.include(py);
            }
        }
        Bounds {
            x: x.finish(),
            y: y.finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Default)]
struct Range {
    span: Option<(f64, f64)>,
}

impl Range {
    fn include(&mut self, value: f64) {
        self.span = Some(match self.span {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    fn finish(&self) -> [f64; 2] {
        match self.span {
            None => [0.0, 1.0],
            Some((lo, hi)) if lo == hi => [lo - 1.0, hi + 1.0],
            Some((lo, hi)) => [lo, hi],
        }
    }
}

/// Min, mid and max of the x range, as integers. The mid label is dropped when it rounds onto
/// an end label.
pub fn x_axis_labels(bounds: &Bounds) -> Vec<String> {
    let mut buf = itoa::Buffer::new();
    let mut labels: Vec<String> = axis_stops(bounds.x)
        .into_iter()
        .map(|value| buf.format(value.round() as i64).to_owned())
        .collect();
    if labels[1] == labels[0] || labels[1] == labels[2] {
        labels.remove(1);
    }
    labels
}

/// Min, mid and max of the y range, with two decimals.
pub fn y_axis_labels(bounds: &Bounds) -> Vec<String> {
    axis_stops(bounds.y).into_iter().map(|value| format!("{value:.2}")).collect()
}

fn axis_stops([lo, hi]: [f64; 2]) -> [f64; 3] {
    [lo, (lo + hi) / 2.0, hi]
}

/// Builds the chart widget for `spec`. Unlabeled lines get no legend entry.
pub fn chart<'a>(spec: &'a PlotSpec, theme: &Theme, show_legend: bool) -> Chart<'a> {
    let bounds = spec.bounds();

    let datasets = spec
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let color = line.style.color.unwrap_or_else(|| theme.series_color(idx));
            let graph_type = match line.style.kind {
                LineKind::Line => GraphType::Line,
                LineKind::Scatter => GraphType::Scatter,
            };
            let dataset = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(theme.base_style().fg(color))
                .data(&line.points);
            match &line.label {
                Some(label) => dataset.name(label.as_str()),
                None => dataset,
            }
        })
        .collect::<Vec<_>>();

    let legend_position =
        if show_legend && spec.has_legend() { Some(LegendPosition::TopRight) } else { None };

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(spec.title.as_str(), theme.title_style())),
        )
        .x_axis(
            Axis::default()
                .title(spec.x_label.as_str())
                .style(theme.axis_style())
                .bounds(bounds.x)
                .labels(x_axis_labels(&bounds).into_iter().map(Span::raw).collect()),
        )
        .y_axis(
            Axis::default()
                .title(spec.y_label.as_str())
                .style(theme.axis_style())
                .bounds(bounds.y)
                .labels(y_axis_labels(&bounds).into_iter().map(Span::raw).collect()),
        )
        .legend_position(legend_position)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
}

/// Draws the chart into an off-screen buffer and returns it as plain text, one line per row,
/// with trailing blanks trimmed.
pub fn render_text(spec: &PlotSpec, theme: &Theme, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    chart(spec, theme, true).render(area, &mut buffer);
    tracing::info!(width, height, lines = spec.lines.len(), "rendered chart as text");
    buffer_to_text(&buffer)
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((usize::from(area.width) + 1) * usize::from(area.height));
    let mut row = String::with_capacity(usize::from(area.width));

    for y in area.top()..area.bottom() {
        row.clear();
        for x in area.left()..area.right() {
            row.push_str(buffer.get(x, y).symbol());
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}
