// SPDX-License-Identifier: MIT
//
// Color codec: the two textual grammars a theme file may use.
//
//   Hex:         #rrggbb            exactly six hex digits after `#`
//   Functional:  rgb(r, g, b)       any word starting with `rgb`, followed
//                rgba(r, g, b, a)   by a delimited argument list
//
// Functional channels are read as the first three integer runs of the
// string, so `rgb(10,20,30)`, `rgb(10 20 30)` and `rgba(10, 20, 30, 0.5)`
// all parse. The alpha argument is opaque text: it is echoed back exactly
// as written and never reinterpreted as a number.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ─── ColorFormat ─────────────────────────────────────────────────────────────

/// The grammar family a color string belongs to.
///
/// Detection looks only at the prefix. A string can be classified as a
/// color and still fail to [`parse`]; such values are left untouched by
/// the inverter and skipped by contrast analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#rrggbb`.
    Hex,
    /// `rgb(...)` / `rgba(...)`.
    Functional,
}

impl ColorFormat {
    /// Classify a string by its prefix: `#` is hex, `rgb` is functional.
    ///
    /// Returns `None` for every other string (named colors, `transparent`,
    /// `hsl(...)`, non-color values).
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        if text.starts_with('#') {
            Some(Self::Hex)
        } else if text.starts_with("rgb") {
            Some(Self::Functional)
        } else {
            None
        }
    }
}

// ─── ParsedColor ─────────────────────────────────────────────────────────────

/// A color parsed from one of the two grammars.
///
/// Remembers the grammar it came from so that serializing it again
/// produces the same representation family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha argument of a functional color, verbatim. Always `None` for hex.
    pub alpha: Option<String>,
    pub format: ColorFormat,
}

impl ParsedColor {
    /// Build an opaque hex color.
    #[must_use]
    pub const fn hex(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None, format: ColorFormat::Hex }
    }

    /// Build a functional color with an optional alpha token.
    #[must_use]
    pub fn functional(r: u8, g: u8, b: u8, alpha: Option<&str>) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.map(str::to_owned),
            format: ColorFormat::Functional,
        }
    }

    /// The 8-bit channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn rgb8(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Re-emit the color in the grammar it was parsed from.
    #[must_use]
    pub fn serialize(&self) -> String {
        match self.format {
            ColorFormat::Hex => format_hex(self.r, self.g, self.b),
            ColorFormat::Functional => {
                format_functional(self.r, self.g, self.b, self.alpha.as_deref())
            }
        }
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a color string in either grammar.
///
/// Returns `None` for anything else, including malformed hex (wrong
/// length, non-hex digits), functional colors with fewer than three
/// integer runs, and functional channels above 255. Never panics.
#[must_use]
pub fn parse(text: &str) -> Option<ParsedColor> {
    match ColorFormat::detect(text)? {
        ColorFormat::Hex => parse_hex(text),
        ColorFormat::Functional => parse_functional(text),
    }
}

fn parse_hex(text: &str) -> Option<ParsedColor> {
    let digits = text.strip_prefix('#')?.as_bytes();
    if digits.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(ParsedColor::hex(r, g, b))
}

fn parse_functional(text: &str) -> Option<ParsedColor> {
    let runs = integer_runs(text);
    if runs.len() < 3 {
        return None;
    }
    let r = runs[0].parse::<u8>().ok()?;
    let g = runs[1].parse::<u8>().ok()?;
    let b = runs[2].parse::<u8>().ok()?;
    Some(ParsedColor::functional(r, g, b, alpha_token(text)))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

static INTEGER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer-run pattern is valid"));

/// Every maximal run of ASCII digits in `text`, in order.
///
/// Signs and decimal points are not part of a run: `-5` yields `5` and
/// `0.5` yields `0` and `5`.
#[must_use]
pub fn integer_runs(text: &str) -> Vec<&str> {
    INTEGER_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// The fourth argument of a functional color, exactly as written.
///
/// Arguments are separated by commas, slashes or whitespace, so both
/// `rgba(1, 2, 3, 0.5)` and `rgb(1 2 3 / 50%)` yield an alpha token.
#[must_use]
pub fn alpha_token(text: &str) -> Option<&str> {
    let args = text.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim();
    let args = args.strip_prefix('(').unwrap_or(args).trim_end();
    let args = args.strip_suffix(')').unwrap_or(args);
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .nth(3)
}

// ─── Serialization ───────────────────────────────────────────────────────────

/// `#rrggbb`, lowercase, two digits per channel.
#[must_use]
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `rgba(r, g, b, alpha)` when an alpha token is given, else `rgb(r, g, b)`.
///
/// Channels are generic so the inverter can emit its unclamped arithmetic.
#[must_use]
pub fn format_functional<C: fmt::Display>(r: C, g: C, b: C, alpha: Option<&str>) -> String {
    match alpha {
        Some(a) => format!("rgba({r}, {g}, {b}, {a})"),
        None => format!("rgb({r}, {g}, {b})"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Detection ────────────────────────────────────────────────────────

    #[test]
    fn detect_by_prefix() {
        assert_eq!(ColorFormat::detect("#ffffff"), Some(ColorFormat::Hex));
        assert_eq!(ColorFormat::detect("#nope"), Some(ColorFormat::Hex));
        assert_eq!(ColorFormat::detect("rgb(1, 2, 3)"), Some(ColorFormat::Functional));
        assert_eq!(ColorFormat::detect("rgba(1, 2, 3, 1)"), Some(ColorFormat::Functional));
        assert_eq!(ColorFormat::detect("solid"), None);
        assert_eq!(ColorFormat::detect("RGB(1, 2, 3)"), None);
        assert_eq!(ColorFormat::detect(""), None);
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = parse("#336699").unwrap();
        assert_eq!(color.rgb8(), (0x33, 0x66, 0x99));
        assert_eq!(color.format, ColorFormat::Hex);
        assert_eq!(color.alpha, None);
    }

    #[test]
    fn hex_parsing_uppercase() {
        assert_eq!(parse("#FF8000").unwrap().rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(parse("#fff").is_none());
        assert!(parse("#12345").is_none());
        assert!(parse("#1234567").is_none());
        assert!(parse("#ff000080").is_none());
        assert!(parse("#gggggg").is_none());
        assert!(parse("#").is_none());
        assert!(parse("ffffff").is_none());
    }

    #[test]
    fn hex_parsing_multibyte_does_not_panic() {
        // Six bytes, three chars.
        assert!(parse("#ééé").is_none());
    }

    #[test]
    fn hex_serializes_lowercase_padded() {
        assert_eq!(format_hex(0, 10, 255), "#000aff");
        assert_eq!(parse("#ABCDEF").unwrap().serialize(), "#abcdef");
    }

    // ── Functional ───────────────────────────────────────────────────────

    #[test]
    fn functional_rgb() {
        let color = parse("rgb(10, 20, 30)").unwrap();
        assert_eq!(color, ParsedColor::functional(10, 20, 30, None));
        assert_eq!(color.serialize(), "rgb(10, 20, 30)");
    }

    #[test]
    fn functional_rgba_keeps_alpha_text() {
        let color = parse("rgba(10,20,30,0.5)").unwrap();
        assert_eq!(color.alpha.as_deref(), Some("0.5"));
        assert_eq!(color.serialize(), "rgba(10, 20, 30, 0.5)");
    }

    #[test]
    fn functional_space_separated_with_slash_alpha() {
        let color = parse("rgb(10 20 30 / 50%)").unwrap();
        assert_eq!(color.rgb8(), (10, 20, 30));
        assert_eq!(color.alpha.as_deref(), Some("50%"));
    }

    #[test]
    fn functional_too_few_runs() {
        assert!(parse("rgb(10, 20)").is_none());
        assert!(parse("rgb()").is_none());
        assert!(parse("rgb").is_none());
    }

    #[test]
    fn functional_out_of_range_is_unparseable() {
        assert!(parse("rgb(300, 0, 0)").is_none());
    }

    #[test]
    fn unknown_formats_are_none() {
        assert!(parse("red").is_none());
        assert!(parse("hsl(10, 20%, 30%)").is_none());
        assert!(parse("transparent").is_none());
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    #[test]
    fn integer_runs_split_on_non_digits() {
        assert_eq!(integer_runs("rgba(-5, 20,30, 0.75)"), vec!["5", "20", "30", "0", "75"]);
        assert!(integer_runs("none").is_empty());
    }

    #[test]
    fn alpha_token_positions() {
        assert_eq!(alpha_token("rgba(1, 2, 3, 0.25)"), Some("0.25"));
        assert_eq!(alpha_token("rgba( 1 , 2 , 3 , 1 ) "), Some("1"));
        assert_eq!(alpha_token("rgb(1, 2, 3)"), None);
    }

    #[test]
    fn display_matches_serialize() {
        let color = ParsedColor::functional(1, 2, 3, Some("0.1"));
        assert_eq!(color.to_string(), color.serialize());
    }
}
