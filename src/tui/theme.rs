// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub(crate) const PALETTE_ENV: &str = "MAPCHECK_PALETTE";

const DEFAULT_ATTENTION: Color = Color::Rgb(0xff, 0xa5, 0x00);
const DEFAULT_ACCENT: Color = Color::LightGreen;

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = match env::var(PALETTE_ENV) {
            Ok(value) => palette_from_value(&value)?,
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        };
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn attention_color(&self) -> Color {
        self.palette.as_ref().map_or(DEFAULT_ATTENTION, |palette| palette.attention)
    }

    fn accent_color(&self) -> Color {
        self.palette.as_ref().map_or(DEFAULT_ACCENT, |palette| palette.accent)
    }

    pub(crate) fn border_style(&self) -> Style {
        self.base_style().fg(self.accent_color())
    }

    pub(crate) fn title_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    /// Marked cells and headers of parcels that contain one.
    pub(crate) fn attention_style(&self) -> Style {
        self.base_style()
            .fg(Color::Black)
            .bg(self.attention_color())
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn cursor_style(&self, attention: bool) -> Style {
        let base = if attention {
            self.attention_style()
        } else {
            self.base_style()
        };
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(Color::Cyan)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(Color::Gray)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(Color::Red)
    }
}

/// Four comma-separated colors: `fg,bg,attention,accent`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    attention: Color,
    accent: Color,
}

impl TuiPalette {
    const FIELDS: [&'static str; 4] = ["fg", "bg", "attention", "accent"];

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts = value.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != Self::FIELDS.len() {
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                Self::FIELDS.len(),
                Self::FIELDS.join(","),
                parts.len()
            ));
        }

        let mut colors = [Color::Reset; 4];
        for (slot, (part, field)) in colors.iter_mut().zip(parts.iter().zip(Self::FIELDS)) {
            *slot = parse_palette_color(part).map_err(|err| format!("{field}: {err}"))?;
        }
        let [fg, bg, attention, accent] = colors;
        Ok(Self {
            fg,
            bg,
            attention,
            accent,
        })
    }
}

fn palette_from_value(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_owned(),
            value: format!("{trimmed} ({error})"),
        })
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` or `rgb:RR/GG/BB` (2 or 4 hex digits per channel).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels.as_slice() else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(*r, *g, *b));
    }

    let hex = ["#", "0x"]
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
        .unwrap_or(lower.as_str());
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok(Color::Rgb(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let invalid = || format!("invalid rgb: component {value}");
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| invalid()),
        4 => u16::from_str_radix(value, 16)
            .map(|wide| wide.to_be_bytes()[0])
            .map_err(|_| invalid()),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
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
