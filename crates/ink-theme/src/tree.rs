//! Style tree inversion: the walk that turns a light theme into a dark one.
//!
//! A style tree is an ordered JSON object. The transformer visits every
//! key depth-first in document order and rewrites string leaves that look
//! like colors (`#...` or `rgb...`) through an [`Inverter`]. Keys whose
//! lowercase form starts with an ignore prefix keep their whole subtree
//! untouched, so semantically fixed alert colors (errors, warnings) keep
//! their meaning in the inverted variant.
//!
//! Only leaf values change. Keys are never added, removed, renamed or
//! reordered, at any depth.

use ink_color::{ColorFormat, Inverter};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// An ordered mapping from keys to scalars or nested trees.
///
/// Key order is the source document's order (`serde_json` is built with
/// `preserve_order`).
pub type StyleTree = Map<String, Value>;

// ---------------------------------------------------------------------------
// IgnoreRules
// ---------------------------------------------------------------------------

/// Key prefixes whose subtrees are never inverted.
///
/// Matching is case-insensitive: `errorColor`, `ERROR_COLOR` and
/// `error.background` all match the prefix `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    /// Stored lowercase.
    prefixes: Vec<String>,
}

impl IgnoreRules {
    /// Prefixes applied when no configuration overrides them.
    pub const DEFAULT_PREFIXES: &'static [&'static str] = &["error", "warning"];

    /// Build a rule set from arbitrary prefixes.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether `key`'s subtree must be left alone.
    #[must_use]
    pub fn is_ignored(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIXES)
    }
}

// ---------------------------------------------------------------------------
// TreeTransformer
// ---------------------------------------------------------------------------

/// Inverts every color leaf of a style tree outside ignored keys.
#[derive(Debug, Clone, Default)]
pub struct TreeTransformer {
    rules: IgnoreRules,
    inverter: Inverter,
}

impl TreeTransformer {
    #[must_use]
    pub const fn new(rules: IgnoreRules, inverter: Inverter) -> Self {
        Self { rules, inverter }
    }

    #[must_use]
    pub const fn rules(&self) -> &IgnoreRules {
        &self.rules
    }

    #[must_use]
    pub const fn inverter(&self) -> &Inverter {
        &self.inverter
    }

    /// Invert `tree` in place. Returns the number of leaves rewritten.
    ///
    /// Callers that still need the original must copy it first, or use
    /// [`inverted`](Self::inverted).
    pub fn transform(&self, tree: &mut StyleTree) -> usize {
        let count = self.transform_map(tree);
        debug!(inverted = count, "style tree transformed");
        count
    }

    /// Deep-copy `tree` and invert the copy.
    #[must_use]
    pub fn inverted(&self, tree: &StyleTree) -> StyleTree {
        let mut copy = tree.clone();
        self.transform(&mut copy);
        copy
    }

    fn transform_map(&self, map: &mut StyleTree) -> usize {
        let mut count = 0;
        for (key, value) in map.iter_mut() {
            if self.rules.is_ignored(key) {
                trace!(key = %key, "ignored key, subtree kept");
                continue;
            }
            count += self.transform_value(value);
        }
        count
    }

    fn transform_value(&self, value: &mut Value) -> usize {
        match value {
            Value::Object(map) => self.transform_map(map),
            // Array elements have no key of their own, so nothing in them
            // can match an ignore prefix.
            Value::Array(items) => items.iter_mut().map(|v| self.transform_value(v)).sum(),
            Value::String(text) if ColorFormat::detect(text.as_str()).is_some() => {
                let inverted = self.inverter.invert(text);
                if inverted == *text {
                    return 0;
                }
                *text = inverted;
                1
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ink_color::AlphaPolicy;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(value: Value) -> StyleTree {
        match value {
            Value::Object(map) => map,
            other => panic!("test tree must be an object, got {other}"),
        }
    }

    /// Every key path in document order, for shape comparisons.
    fn key_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = format!("{prefix}/{k}");
                    out.push(path.clone());
                    key_paths(v, &path, out);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter().enumerate() {
                    key_paths(v, &format!("{prefix}[{i}]"), out);
                }
            }
            _ => {}
        }
    }

    // ── IgnoreRules ─────────────────────────────────────────────────

    #[test]
    fn default_rules_match_error_and_warning() {
        let rules = IgnoreRules::default();
        assert!(rules.is_ignored("error"));
        assert!(rules.is_ignored("errorColor"));
        assert!(rules.is_ignored("ERROR_COLOR"));
        assert!(rules.is_ignored("warning.background"));
        assert!(!rules.is_ignored("text"));
        assert!(!rules.is_ignored("my_error"));
    }

    #[test]
    fn rules_are_case_insensitive_on_both_sides() {
        let rules = IgnoreRules::new(["Hint"]);
        assert!(rules.is_ignored("hint.border"));
        assert!(rules.is_ignored("HINT"));
    }

    #[test]
    fn empty_rules_ignore_nothing() {
        let rules = IgnoreRules::new(Vec::<String>::new());
        assert!(rules.prefixes().is_empty());
        assert!(!rules.is_ignored("error"));
    }

    // ── Leaves ──────────────────────────────────────────────────────

    #[test]
    fn inverts_color_leaves() {
        let mut t = tree(json!({
            "background": "#ffffff",
            "text": "rgb(10, 20, 30)",
        }));
        let count = TreeTransformer::default().transform(&mut t);
        assert_eq!(count, 2);
        assert_eq!(t["background"], "#000000");
        assert_eq!(t["text"], "rgb(245, 235, 225)");
    }

    #[test]
    fn ignored_keys_keep_their_colors() {
        let mut t = tree(json!({
            "errorColor": "#ff0000",
            "ERROR_COLOR": "#ff0000",
            "warning": { "background": "#ffcc00" },
            "info": "#0000ff",
        }));
        TreeTransformer::default().transform(&mut t);
        assert_eq!(t["errorColor"], "#ff0000");
        assert_eq!(t["ERROR_COLOR"], "#ff0000");
        assert_eq!(t["warning"]["background"], "#ffcc00");
        assert_eq!(t["info"], "#ffff00");
    }

    #[test]
    fn non_colors_pass_through() {
        let original = tree(json!({
            "border_style": "solid",
            "font_weight": 700,
            "italic": true,
            "accent": null,
            "bad_hex": "#fff",
            "named": "red",
        }));
        let mut t = original.clone();
        let count = TreeTransformer::default().transform(&mut t);
        assert_eq!(count, 0);
        assert_eq!(t, original);
    }

    // ── Nesting ─────────────────────────────────────────────────────

    #[test]
    fn recurses_into_maps_and_arrays() {
        let mut t = tree(json!({
            "syntax": {
                "keyword": { "color": "#000000", "font_weight": 700 },
                "error": { "color": "#cc0000" },
            },
            "players": [
                { "cursor": "#336699", "selection": "rgba(51, 102, 153, 0.25)" },
            ],
        }));
        TreeTransformer::default().transform(&mut t);
        assert_eq!(t["syntax"]["keyword"]["color"], "#ffffff");
        assert_eq!(t["syntax"]["keyword"]["font_weight"], 700);
        // Nested keys are matched too.
        assert_eq!(t["syntax"]["error"]["color"], "#cc0000");
        assert_eq!(t["players"][0]["cursor"], "#cc9966");
        assert_eq!(t["players"][0]["selection"], "rgba(204, 153, 102, 0.25)");
    }

    #[test]
    fn shape_is_preserved() {
        let original = tree(json!({
            "z": "#123456",
            "a": { "nested": { "deep": "rgb(1, 2, 3)", "list": ["#000000", 1, {"k": "#ffffff"}] } },
            "error": { "inner": "#ff0000" },
            "m": "text",
        }));
        let inverted = TreeTransformer::default().inverted(&original);

        let mut before = Vec::new();
        let mut after = Vec::new();
        key_paths(&Value::Object(original), "", &mut before);
        key_paths(&Value::Object(inverted), "", &mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn inverted_leaves_source_untouched() {
        let original = tree(json!({ "background": "#ffffff" }));
        let inverted = TreeTransformer::default().inverted(&original);
        assert_eq!(original["background"], "#ffffff");
        assert_eq!(inverted["background"], "#000000");
    }

    #[test]
    fn alpha_policy_flows_through() {
        let transformer =
            TreeTransformer::new(IgnoreRules::default(), Inverter::new(AlphaPolicy::IntegerRun));
        let mut t = tree(json!({ "shadow": "rgba(0, 0, 0, 0.5)" }));
        transformer.transform(&mut t);
        assert_eq!(t["shadow"], "rgba(255, 255, 255, 0)");
    }
}
