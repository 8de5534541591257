use serde::{Deserialize, Serialize};

/// Read-only reference data from `GET /countries`.
///
/// The collection may contain duplicate names differing only in case or
/// surrounding whitespace; deduplication happens in the normalization
/// layer, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
