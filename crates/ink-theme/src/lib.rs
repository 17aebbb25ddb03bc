//! # ink-theme: light/dark theme families from one style tree
//!
//! Takes a single base style tree (the light theme), derives its dark
//! counterpart by photometric color inversion, and grades both variants'
//! readability against their background.
//!
//! # Architecture
//!
//! ```text
//! style.json
//!     │
//!     ▼
//! store.rs:   load the style tree (ordered JSON object)
//!     │
//!     ▼
//! tree.rs:    invert color leaves on a deep copy, skipping ignored keys
//!     │
//!     ▼
//! variant.rs: wrap both trees into a ThemeFamily (light + dark)
//!     │
//!     ├──▶ store.rs:  write the family document
//!     ▼
//! report.rs:  WCAG contrast of fixed UI roles + syntax colors vs background
//! ```
//!
//! Color parsing, inversion and contrast math live in `ink-color`.

pub mod error;
pub mod report;
pub mod store;
pub mod tree;
pub mod variant;

pub use error::ThemeError;
pub use report::{ReportEntry, VariantReport, report};
pub use tree::{IgnoreRules, StyleTree, TreeTransformer};
pub use variant::{Appearance, FamilyMeta, ThemeFamily, ThemeVariant};
