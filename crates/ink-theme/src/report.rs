//! Contrast report. Grades a variant's UI roles and syntax colors.
//!
//! Every role color is compared against the variant's `background`.
//! The fixed UI roles come first, in declaration order, followed by every
//! `syntax.<rule>` that carries a `color`, in the style tree's own order.
//! Missing or unparseable colors are simply left out; a missing background
//! leaves the whole report empty with a note explaining why.

use std::fmt::{self, Write as _};

use ink_color::{ContrastResult, Rating, codec};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::tree::StyleTree;
use crate::variant::{Appearance, ThemeFamily, ThemeVariant};

/// Display width the role labels are padded to.
const LABEL_WIDTH: usize = 30;

const RULE: &str = "----------------------------------------";

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// A named UI role and where its color lives in the style tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub label: &'static str,
    /// Dotted key. Looked up as a literal key first, then as a nested path.
    pub path: &'static str,
}

/// The UI roles graded against the background, in report order.
pub const ROLES: &[Role] = &[
    Role { label: "Text", path: "text" },
    Role { label: "Border", path: "border" },
    Role { label: "Element", path: "element" },
    Role { label: "Line Numbers", path: "editor.line_number" },
    Role { label: "Editor Foreground", path: "editor.foreground" },
    Role { label: "Error", path: "error" },
    Role { label: "Warning", path: "warning" },
    Role { label: "Info", path: "info" },
    Role { label: "Modified", path: "modified" },
    Role { label: "Link Hover", path: "link_text.hover" },
    Role { label: "Element Selected", path: "element.selected" },
    Role { label: "Element Hover", path: "element.hover" },
];

/// Resolve a dotted path to a non-empty string value.
///
/// Zed style trees use flat dotted keys (`"editor.foreground"`), so the
/// literal key wins; nested objects are the fallback.
#[must_use]
pub fn lookup<'a>(tree: &'a StyleTree, path: &str) -> Option<&'a str> {
    let value = tree.get(path).or_else(|| {
        let mut segments = path.split('.');
        let first = tree.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.get(segment))
    })?;
    value.as_str().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// One graded color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub color: String,
    pub ratio: f64,
    pub rating: Rating,
}

impl ReportEntry {
    fn grade(label: impl Into<String>, color: &str, background: &str) -> Option<Self> {
        let ContrastResult { ratio, rating } = ContrastResult::between(background, color)?;
        Some(Self {
            label: label.into(),
            color: color.to_owned(),
            ratio,
            rating,
        })
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = LABEL_WIDTH.saturating_sub(self.label.width());
        write!(
            f,
            "{}{:pad$} {:.2}:1 ({})",
            self.label, "", self.ratio, self.rating
        )
    }
}

/// Contrast results for one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantReport {
    pub name: String,
    pub appearance: Appearance,
    pub background: Option<String>,
    /// Why the report is empty, when it is empty for a reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub ui: Vec<ReportEntry>,
    pub syntax: Vec<ReportEntry>,
}

impl VariantReport {
    fn empty(variant: &ThemeVariant) -> Self {
        Self {
            name: variant.name.clone(),
            appearance: variant.appearance,
            background: None,
            note: None,
            ui: Vec::new(),
            syntax: Vec::new(),
        }
    }

    /// All entries in report order: UI roles, then syntax rules.
    pub fn entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.ui.iter().chain(&self.syntax)
    }

    /// Number of entries rated below AA.
    #[must_use]
    pub fn below_aa(&self) -> usize {
        self.entries().filter(|e| e.rating < Rating::Aa).count()
    }
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nAnalyzing contrast ratios for {} ({}):", self.name, self.appearance)?;
        writeln!(f, "{RULE}")?;

        if let Some(note) = &self.note {
            return writeln!(f, "Warning: {note}");
        }

        for entry in &self.ui {
            writeln!(f, "{entry}")?;
        }

        writeln!(f, "\nSyntax Colors:")?;
        writeln!(f, "{RULE}")?;
        for entry in &self.syntax {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Grade one variant against its background.
#[must_use]
pub fn report(variant: &ThemeVariant) -> VariantReport {
    let style = &variant.style;
    let mut out = VariantReport::empty(variant);

    let Some(background) = lookup(style, "background") else {
        warn!(variant = %variant.name, "no background color found");
        out.note = Some("No background color found".to_owned());
        return out;
    };
    out.background = Some(background.to_owned());

    if codec::parse(background).is_none() {
        warn!(variant = %variant.name, background, "background color is not parseable");
        out.note = Some(format!("Background color '{background}' is not a parseable color"));
        return out;
    }

    out.ui = ROLES
        .iter()
        .filter_map(|role| {
            let color = lookup(style, role.path)?;
            ReportEntry::grade(role.label, color, background)
        })
        .collect();

    if let Some(Value::Object(rules)) = style.get("syntax") {
        out.syntax = rules
            .iter()
            .filter_map(|(name, rule)| {
                let color = rule.get("color")?.as_str().filter(|c| !c.is_empty())?;
                ReportEntry::grade(format!("syntax.{name}"), color, background)
            })
            .collect();
    }

    debug!(
        variant = %variant.name,
        ui = out.ui.len(),
        syntax = out.syntax.len(),
        "contrast report generated"
    );
    out
}

/// Grade every variant of a family, in family order.
#[must_use]
pub fn family_report(family: &ThemeFamily) -> Vec<VariantReport> {
    family.themes.iter().map(report).collect()
}

/// Render reports as the human-readable console listing.
#[must_use]
pub fn render_text(reports: &[VariantReport]) -> String {
    let mut out = String::from("\nContrast Analysis Report\n=======================\n");
    for report in reports {
        // Writing into a String cannot fail.
        let _ = write!(out, "{report}");
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
