// SPDX-License-Identifier: MIT
//
// ink-color: textual color handling for e-ink.
//
// Theme files carry colors as strings, so everything here works on the
// text forms an editor theme actually contains: `#rrggbb` hex and the
// CSS functional `rgb(...)` / `rgba(...)` notation. Strings that fit
// neither grammar are inert: they are never rewritten and never graded.
//
//   codec     → parse / serialize the two grammars
//   invert    → photometric inverse that keeps the grammar family
//   contrast  → WCAG 2.x relative luminance, contrast ratio, rating bands

// Single-character variable names (r, g, b) are the standard convention
// in color code.
#![allow(clippy::many_single_char_names)]

pub mod codec;
pub mod contrast;
pub mod invert;

pub use codec::{ColorFormat, ParsedColor};
pub use contrast::{ContrastResult, Rating, contrast_ratio, relative_luminance};
pub use invert::{AlphaPolicy, Inverter, invert};
