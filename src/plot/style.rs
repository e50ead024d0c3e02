// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

/// How a line is drawn: an optional fixed color and a line kind.
///
/// Parsed from short format strings such as `r-` (red line) or `b.` (blue points). A missing
/// color means "next color of the theme's cycle".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: Option<Color>,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineKind {
    #[default]
    Line,
    Scatter,
}

impl SeriesStyle {
    pub fn parse(spec: &str) -> Result<Self, StyleError> {
        let mut style = Self::default();
        let mut chars = spec.chars().peekable();

        if let Some(color) = chars.peek().copied().and_then(color_for_letter) {
            style.color = Some(color);
            chars.next();
        }

        match chars.next() {
            None | Some('-') => {}
            Some('.') | Some('o') => style.kind = LineKind::Scatter,
            Some(_) => return Err(StyleError::Unrecognized(spec.to_owned())),
        }

        if chars.next().is_some() {
            return Err(StyleError::Unrecognized(spec.to_owned()));
        }

        Ok(style)
    }
}

impl FromStr for SeriesStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn color_for_letter(letter: char) -> Option<Color> {
    match letter {
        'b' => Some(Color::Blue),
        'g' => Some(Color::Green),
        'r' => Some(Color::Red),
        'c' => Some(Color::Cyan),
        'm' => Some(Color::Magenta),
        'y' => Some(Color::Yellow),
        'k' => Some(Color::DarkGray),
        'w' => Some(Color::White),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    Unrecognized(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(spec) => write!(
                f,
                "unrecognized line style {spec:?} (expected [bgrcmykw][-.o], e.g. \"r-\")"
            ),
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;
    use rstest::rstest;

    use super::{LineKind, SeriesStyle, StyleError};

    #[rstest]
    #[case("r-", Some(Color::Red), LineKind::Line)]
    #[case("b-", Some(Color::Blue), LineKind::Line)]
    #[case("g.", Some(Color::Green), LineKind::Scatter)]
    #[case("mo", Some(Color::Magenta), LineKind::Scatter)]
    #[case("y", Some(Color::Yellow), LineKind::Line)]
    #[case("-", None, LineKind::Line)]
    #[case(".", None, LineKind::Scatter)]
    #[case("", None, LineKind::Line)]
    fn parses_format_strings(
        #[case] spec: &str,
        #[case] color: Option<Color>,
        #[case] kind: LineKind,
    ) {
        assert_eq!(SeriesStyle::parse(spec), Ok(SeriesStyle { color, kind }));
    }

    #[rstest]
    #[case("z-")]
    #[case("r--")]
    #[case("rb")]
    #[case("red")]
    fn rejects_unknown_format_strings(#[case] spec: &str) {
        assert_eq!(SeriesStyle::parse(spec), Err(StyleError::Unrecognized(spec.to_owned())));
    }
}
