// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub const PALETTE_ENV: &str = "BENCHPLOT_PALETTE";

const DEFAULT_SERIES_COLORS: [Color; 6] = [
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightYellow,
];

/// Colors used by the chart, in the terminal window and in text output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    series: Option<Vec<Color>>,
}

impl Theme {
    /// Reads the series color cycle from `BENCHPLOT_PALETTE`, if set.
    pub fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var(PALETTE_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        Self::from_palette_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })
    }

    /// Parses a comma-separated series color cycle (`#RRGGBB`, `rgb:RR/GG/BB` or a color name).
    pub fn from_palette_csv(value: &str) -> Result<Self, String> {
        let series = value
            .split(',')
            .map(parse_palette_color)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            series: Some(series),
        })
    }

    /// Color of the `idx`-th line; the cycle wraps around.
    pub fn series_color(&self, idx: usize) -> Color {
        match &self.series {
            Some(series) if !series.is_empty() => series[idx % series.len()],
            _ => DEFAULT_SERIES_COLORS[idx % DEFAULT_SERIES_COLORS.len()],
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default()
    }

    pub fn axis_style(&self) -> Style {
        self.base_style().fg(Color::Gray)
    }

    pub fn title_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        self.base_style().fg(Color::Cyan)
    }

    pub fn footer_label_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    if let Some(rest) = trimmed.to_ascii_lowercase().strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        return Ok(Color::Rgb(
            parse_hex_channel(parts[0])?,
            parse_hex_channel(parts[1])?,
            parse_hex_channel(parts[2])?,
        ));
    }

    let hex = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X"));
    if let Some(hex) = hex {
        return format!("#{hex}")
            .parse::<Color>()
            .map_err(|_| format!("invalid hex color: {trimmed}"));
    }

    trimmed.parse::<Color>().map_err(|_| format!("invalid color: {trimmed}"))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        // 16-bit X11 channel; keep the high byte.
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
