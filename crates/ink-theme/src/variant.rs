//! Theme variants and the family document that pairs them.
//!
//! The output document is a Zed-style theme family:
//!
//! ```json
//! {
//!   "$schema": "https://zed.dev/schema/themes/v0.2.0.json",
//!   "name": "e-ink",
//!   "author": "Nish Tahir",
//!   "themes": [
//!     { "name": "E-Ink Light", "appearance": "light", "style": { ... } },
//!     { "name": "E-Ink Dark", "appearance": "dark", "style": { ... } }
//!   ]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tree::{StyleTree, TreeTransformer};

/// Light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named theme with its own, independently owned style tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeVariant {
    pub name: String,
    pub appearance: Appearance,
    pub style: StyleTree,
}

/// Names written into the family document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyMeta {
    pub schema: String,
    pub name: String,
    pub author: String,
    pub light_name: String,
    pub dark_name: String,
}

impl FamilyMeta {
    pub const ZED_SCHEMA: &'static str = "https://zed.dev/schema/themes/v0.2.0.json";
}

impl Default for FamilyMeta {
    fn default() -> Self {
        Self {
            schema: Self::ZED_SCHEMA.to_owned(),
            name: "e-ink".to_owned(),
            author: "Nish Tahir".to_owned(),
            light_name: "E-Ink Light".to_owned(),
            dark_name: "E-Ink Dark".to_owned(),
        }
    }
}

/// The serialized theme family: metadata plus its variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ThemeVariant>,
}

impl ThemeFamily {
    /// Derive a light/dark pair from a base style tree.
    ///
    /// `base` becomes the light variant as-is. The dark variant gets a deep
    /// copy of `base`, inverted by `transformer`; the two trees share
    /// nothing afterwards.
    #[must_use]
    pub fn derive(meta: &FamilyMeta, base: StyleTree, transformer: &TreeTransformer) -> Self {
        let dark_style = transformer.inverted(&base);
        debug!(light = %meta.light_name, dark = %meta.dark_name, "derived theme variants");

        Self {
            schema: meta.schema.clone(),
            name: meta.name.clone(),
            author: meta.author.clone(),
            themes: vec![
                ThemeVariant {
                    name: meta.light_name.clone(),
                    appearance: Appearance::Light,
                    style: base,
                },
                ThemeVariant {
                    name: meta.dark_name.clone(),
                    appearance: Appearance::Dark,
                    style: dark_style,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
