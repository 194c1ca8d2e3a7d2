//! Colour themes for the sky backdrop and cloud tint.
//!
//! The catalog is static: themes are grouped into named categories for the
//! picker, and selection is an index into the flattened list returned by
//! [`all_themes`].

use crate::constants::{DEFAULT_THEME_INDEX, HUE_DRIFT_MAX_DEG, HUE_DRIFT_PERIOD_SEC};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 6 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| ColorError::BadDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// sRGB components in 0..1.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Linear-light components for shader uniforms.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_unit().map(srgb_to_linear)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A named three-stop gradient plus the tint applied to clouds.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// from, via, to
    pub colors: [&'static str; 3],
    pub cloud_tint: &'static str,
}

impl Theme {
    pub fn gradient(&self) -> Result<[Rgb; 3], ColorError> {
        Ok([
            Rgb::from_hex(self.colors[0])?,
            Rgb::from_hex(self.colors[1])?,
            Rgb::from_hex(self.colors[2])?,
        ])
    }

    pub fn tint(&self) -> Result<Rgb, ColorError> {
        Rgb::from_hex(self.cloud_tint)
    }

    /// CSS value for a top-to-bottom background, as used by swatches.
    pub fn css_gradient(&self) -> String {
        format!(
            "linear-gradient(to bottom, {}, {}, {})",
            self.colors[0], self.colors[1], self.colors[2]
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeCategory {
    pub name: &'static str,
    pub themes: &'static [Theme],
}

const fn theme(name: &'static str, colors: [&'static str; 3], cloud_tint: &'static str) -> Theme {
    Theme {
        name,
        colors,
        cloud_tint,
    }
}

pub static THEME_CATEGORIES: &[ThemeCategory] = &[
    ThemeCategory {
        name: "Sunset/Twilight",
        themes: &[
            theme("Peach Dust", ["#fdf2f8", "#fed7aa", "#fdf2f8"], "#fecaca"),
            theme("Lilac Blush", ["#e0f2fe", "#fbcfe8", "#fff7ed"], "#f5d0fe"),
            theme("Mint Apricot", ["#fafaf9", "#ffedd5", "#ecfdf5"], "#dbeafe"),
        ],
    },
    ThemeCategory {
        name: "Dreamy Pastels",
        themes: &[
            theme("Cotton Candy", ["#dbeafe", "#fce7f3", "#fef9c3"], "#e0f2fe"),
            theme("Seafoam Aqua", ["#f0fdf4", "#fce7f3", "#ecfeff"], "#ccfbf1"),
            theme("Rose Butter", ["#f5f3ff", "#fef3c7", "#fdf2f8"], "#fafaf9"),
        ],
    },
    ThemeCategory {
        name: "Cool & Calming",
        themes: &[
            theme("Silver Sage", ["#f0f9ff", "#f1f5f9", "#fdf2f8"], "#cbd5e1"),
            theme("Turquoise Coral", ["#f0fdff", "#f5f3ff", "#fff1f2"], "#ccfbf1"),
            theme("Soft Taupe", ["#eff6ff", "#f5f5f4", "#fff1f2"], "#f1f5f9"),
        ],
    },
    ThemeCategory {
        name: "Warm & Gentle",
        themes: &[
            theme("Gold Peachy", ["#fff7ed", "#fafaf9", "#fdf2f8"], "#fef3c7"),
            theme("Terra Coral", ["#fff1f2", "#fef2f2", "#fff7ed"], "#ffedd5"),
            theme("Champagne Nude", ["#fff7ed", "#f5f5f4", "#fdf2f8"], "#fafaf9"),
        ],
    },
    ThemeCategory {
        name: "Nature-Inspired",
        themes: &[
            theme("Sage White", ["#f0fdf4", "#fdf2f8", "#f5f5f4"], "#dcfce7"),
            theme("Eucalyptus", ["#effdf5", "#fdf2f8", "#f8fafc"], "#ecfdf5"),
            theme("Teal Moss", ["#f0fdfa", "#fdf2f8", "#fefce8"], "#f1f5f9"),
        ],
    },
    ThemeCategory {
        name: "Ethereal/Cloudy",
        themes: &[
            theme("Pearl Fog", ["#fafafa", "#fdf2f8", "#f0f9ff"], "#ffffff"),
            theme("Quartz Fog", ["#f8fafc", "#fdf2f8", "#f5f3ff"], "#f5f3ff"),
            theme("Milky Lilac", ["#ffffff", "#f5f3ff", "#fff7ed"], "#ffffff"),
        ],
    },
];

/// Every theme, in category order.
pub fn all_themes() -> impl Iterator<Item = &'static Theme> {
    THEME_CATEGORIES.iter().flat_map(|c| c.themes.iter())
}

pub fn theme_count() -> usize {
    THEME_CATEGORIES.iter().map(|c| c.themes.len()).sum()
}

/// Flattened index of the theme named `name`.
pub fn theme_index_of(name: &str) -> Option<usize> {
    all_themes().position(|t| t.name == name)
}

/// The user's current theme choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    index: usize,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            index: DEFAULT_THEME_INDEX,
        }
    }
}

impl ThemeState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Theme {
        // index is kept in range by `select`
        all_themes()
            .nth(self.index)
            .unwrap_or(&THEME_CATEGORIES[0].themes[0])
    }

    /// Returns false (and keeps the selection) when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= theme_count() {
            return false;
        }
        self.index = index;
        true
    }

    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % theme_count();
    }
}

/// Background hue rotation in degrees after `elapsed_sec`.
#[inline]
pub fn hue_drift_deg(elapsed_sec: f32) -> f32 {
    (elapsed_sec * (std::f32::consts::TAU / HUE_DRIFT_PERIOD_SEC)).sin() * HUE_DRIFT_MAX_DEG
}
