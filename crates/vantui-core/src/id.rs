//! Per-instance element identifiers
//!
//! SVG gradient definitions are referenced by document-wide id, so each
//! widget instance needs its own. Ids are either supplied by the caller or
//! generated from a ULID; there is no shared counter.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A unique DOM id scoped to one widget instance
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh id under `prefix`, e.g. `vt-circle-01hx...`
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Ulid::new().to_string().to_lowercase()))
    }

    /// Use a caller-supplied id
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
