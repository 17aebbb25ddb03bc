//! WCAG 2.x contrast grading for theme colors.
//!
//! Grades a foreground/background pair the way accessibility checkers do:
//!
//! - Relative luminance: sRGB channels linearized, then weighted
//!   `0.2126 R + 0.7152 G + 0.0722 B`
//! - Contrast ratio: `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21]
//! - Rating: AAA (>= 7), AA (>= 4.5), AA Large (>= 3), otherwise Fail
//!
//! The linearization threshold is the WCAG 2.x constant 0.03928 rather
//! than the 0.04045 of the sRGB standard, so ratios match what WCAG
//! tooling reports.

use std::fmt;

use serde::Serialize;

use crate::codec;

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of an 8-bit sRGB color per WCAG 2.x.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio between two relative luminances.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn luminance_ratio(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the WCAG contrast ratio between two color strings.
///
/// Returns `None` if either string is not a parseable color; callers
/// treat that as "nothing to grade" rather than an error.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let a = codec::parse(a)?;
    let b = codec::parse(b)?;
    Some(luminance_ratio(
        relative_luminance(a.r, a.g, a.b),
        relative_luminance(b.r, b.g, b.b),
    ))
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// WCAG rating band for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    /// Below 3:1.
    Fail,
    /// At least 3:1, large text only.
    #[serde(rename = "AA Large")]
    AaLarge,
    /// At least 4.5:1.
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1.
    #[serde(rename = "AAA")]
    Aaa,
}

impl Rating {
    /// Band a ratio. Lower bounds are inclusive.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A graded color pair. Observational only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub rating: Rating,
}

impl ContrastResult {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self { ratio, rating: Rating::from_ratio(ratio) }
    }

    /// Grade two color strings. `None` if either is unparseable.
    #[must_use]
    pub fn between(a: &str, b: &str) -> Option<Self> {
        contrast_ratio(a, b).map(Self::from_ratio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
