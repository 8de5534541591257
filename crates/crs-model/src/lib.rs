//! Data model for the customer records API.
//!
//! Wire types for the three remote endpoints plus the typed merge logic
//! used when a server-confirmed update is applied to the local list.

pub mod country;
pub mod record;

pub use country::Country;
pub use record::{RecordPatch, TaxRecord, UpdatedRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_with_camel_case_timestamp() {
        let json = r#"{
            "id": "7",
            "name": "anna",
            "country": " Peru ",
            "gender": "female",
            "createdAt": "2024-01-05T00:00:00Z"
        }"#;
        let record: TaxRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.id, "7");
        assert_eq!(record.country, " Peru ");
        assert_eq!(record.created_at, "2024-01-05T00:00:00Z");

        let back = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(back["createdAt"], "2024-01-05T00:00:00Z");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let record: TaxRecord =
            serde_json::from_str(r#"{"id": "3", "name": "bob"}"#).expect("deserialize record");
        assert_eq!(record.name, "bob");
        assert_eq!(record.country, "");
        assert_eq!(record.gender, "");
        assert_eq!(record.created_at, "");
    }

    #[test]
    fn patch_serializes_only_editable_fields() {
        let patch = RecordPatch {
            name: "Anna".to_string(),
            country: "Peru".to_string(),
        };
        let json = serde_json::to_value(&patch).expect("serialize patch");
        assert_eq!(
            json,
            serde_json::json!({"name": "Anna", "country": "Peru"})
        );
    }
}
