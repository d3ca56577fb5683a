use serde::{Deserialize, Serialize};

/// One entry of the tenant's skip size/type catalog. Read-only reference
/// data for the import pipeline; list order is significant (it is the
/// tie-break for substring matches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// How a free-text size label resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Normalized label equals a normalized catalog name.
    Exact,
    /// One normalized string contains the other; first catalog entry wins.
    Contains,
    /// No catalog entry matched.
    None,
}

/// A row's resolved catalog mapping. `entry_id` is present iff the method
/// is not `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMatch {
    pub entry_id: Option<String>,
    pub matched_name: Option<String>,
    pub method: MatchMethod,
}

impl CatalogMatch {
    pub fn exact(entry: &CatalogEntry) -> Self {
        Self {
            entry_id: Some(entry.id.clone()),
            matched_name: Some(entry.name.clone()),
            method: MatchMethod::Exact,
        }
    }

    pub fn contains(entry: &CatalogEntry) -> Self {
        Self {
            entry_id: Some(entry.id.clone()),
            matched_name: Some(entry.name.clone()),
            method: MatchMethod::Contains,
        }
    }

    pub fn none() -> Self {
        Self {
            entry_id: None,
            matched_name: None,
            method: MatchMethod::None,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.method != MatchMethod::None
    }
}
