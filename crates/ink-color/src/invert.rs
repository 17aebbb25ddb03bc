// SPDX-License-Identifier: MIT
//
// Photometric color inversion.
//
// Each channel c becomes 255 - c. The grammar family never changes: hex
// stays hex, functional stays functional, so a theme file keeps its own
// notation after inversion. Strings that are not a color in either grammar
// come back unchanged.
//
// Alpha handling for functional colors is a policy choice (see
// `AlphaPolicy`). The default keeps the alpha argument exactly as written.
// The integer-run policy re-emits the fourth integer run of the string,
// which turns fractional alpha such as `0.5` into `0`. Whenever a fourth
// run exists the output stays `rgba(...)`, whatever the run count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{ColorFormat, alpha_token, format_functional, integer_runs};

// ─── AlphaPolicy ─────────────────────────────────────────────────────────────

/// How the alpha component of an `rgba(...)` color survives inversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlphaPolicy {
    /// Echo the fourth argument verbatim (`0.5` stays `0.5`).
    #[default]
    Verbatim,
    /// Re-emit the fourth integer run as a plain integer (`0.5` becomes `0`).
    IntegerRun,
}

impl AlphaPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::IntegerRun => "integer-run",
        }
    }
}

impl fmt::Display for AlphaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlphaPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verbatim" => Ok(Self::Verbatim),
            "integer-run" => Ok(Self::IntegerRun),
            other => Err(format!(
                "unknown alpha policy '{other}' (expected 'verbatim' or 'integer-run')"
            )),
        }
    }
}

// ─── Inverter ────────────────────────────────────────────────────────────────

/// Color inverter configured with an [`AlphaPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inverter {
    alpha: AlphaPolicy,
}

impl Inverter {
    #[must_use]
    pub const fn new(alpha: AlphaPolicy) -> Self {
        Self { alpha }
    }

    #[must_use]
    pub const fn alpha_policy(&self) -> AlphaPolicy {
        self.alpha
    }

    /// Invert a color string, keeping its grammar family.
    ///
    /// - `#rrggbb` → `#` + six lowercase digits of `0xffffff - rrggbb`
    /// - `rgb(...)` with at least three integer runs → `255 - c` for the
    ///   first three runs, re-emitted as `rgb(...)` or `rgba(...)`
    /// - anything else, including malformed hex → returned unchanged
    ///
    /// Functional channels are not clamped: they are assumed to already lie
    /// in 0–255, and out-of-range input produces out-of-range output.
    #[must_use]
    pub fn invert(&self, text: &str) -> String {
        let inverted = match ColorFormat::detect(text) {
            Some(ColorFormat::Hex) => invert_hex(text),
            Some(ColorFormat::Functional) => self.invert_functional(text),
            None => None,
        };
        inverted.unwrap_or_else(|| text.to_owned())
    }

    fn invert_functional(&self, text: &str) -> Option<String> {
        let runs = integer_runs(text);
        if runs.len() < 3 {
            return None;
        }
        let channel = |run: &str| run.parse::<i64>().ok().map(|v| 255 - v);
        let r = channel(runs[0])?;
        let g = channel(runs[1])?;
        let b = channel(runs[2])?;

        let alpha = match self.alpha {
            AlphaPolicy::Verbatim => alpha_token(text).map(str::to_owned),
            AlphaPolicy::IntegerRun => runs.get(3).copied().map(integer_digits),
        };
        Some(format_functional(r, g, b, alpha.as_deref()))
    }
}

/// Invert a color string with the default (verbatim alpha) policy.
#[must_use]
pub fn invert(text: &str) -> String {
    Inverter::default().invert(text)
}

/// A digit run as a plain integer, without leading zeros. Never overflows.
fn integer_digits(run: &str) -> String {
    match run.trim_start_matches('0') {
        "" => "0".to_owned(),
        digits => digits.to_owned(),
    }
}

fn invert_hex(text: &str) -> Option<String> {
    let digits = text.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let num = u32::from_str_radix(digits, 16).ok()?;
    Some(format!("#{:06x}", 0x00FF_FFFF - num))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
