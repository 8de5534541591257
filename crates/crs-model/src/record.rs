use serde::{Deserialize, Serialize};

/// One customer/tax entry as returned by `GET /taxes`.
///
/// `name` and `country` are the only fields this application mutates;
/// everything else is server-owned. Country and gender arrive with
/// inconsistent casing and whitespace, so display code normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRecord {
    /// Unique, stable identifier.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Free text; "male" and "female" are the known values, may be empty.
    #[serde(default)]
    pub gender: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl TaxRecord {
    /// Applies a server-confirmed update in place.
    ///
    /// Fields present in the response override the local values; fields
    /// the server omitted keep their local values. The identifier never
    /// changes.
    pub fn merge(&mut self, update: UpdatedRecord) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(created_at) = update.created_at {
            self.created_at = created_at;
        }
    }
}

/// Request body for `PUT /taxes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPatch {
    pub name: String,
    pub country: String,
}

/// The server's representation of an updated record.
///
/// Every field except `id` is optional so that a sparse response merges
/// cleanly: absent fields leave the local record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
