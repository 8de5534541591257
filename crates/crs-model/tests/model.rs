//! Tests for crs-model types.

use crs_model::{Country, TaxRecord, UpdatedRecord};

fn sample_record() -> TaxRecord {
    TaxRecord {
        id: "1".to_string(),
        name: "anna".to_string(),
        country: " Peru ".to_string(),
        gender: "female".to_string(),
        created_at: "2024-01-05T00:00:00Z".to_string(),
    }
}

#[test]
fn merge_overrides_fields_present_in_response() {
    let mut record = sample_record();
    record.merge(UpdatedRecord {
        id: "1".to_string(),
        name: Some("Anna".to_string()),
        country: Some("Chile".to_string()),
        gender: None,
        created_at: None,
    });
    assert_eq!(record.name, "Anna");
    assert_eq!(record.country, "Chile");
    // Absent fields keep their local values.
    assert_eq!(record.gender, "female");
    assert_eq!(record.created_at, "2024-01-05T00:00:00Z");
}

#[test]
fn merge_never_changes_the_identifier() {
    let mut record = sample_record();
    record.merge(UpdatedRecord {
        id: "1".to_string(),
        name: Some("Bea".to_string()),
        country: None,
        gender: None,
        created_at: None,
    });
    assert_eq!(record.id, "1");
}

#[test]
fn updated_record_tolerates_sparse_json() {
    let updated: UpdatedRecord =
        serde_json::from_str(r#"{"id": "9", "name": "Nina"}"#).expect("deserialize update");
    assert_eq!(updated.name.as_deref(), Some("Nina"));
    assert_eq!(updated.country, None);
    assert_eq!(updated.created_at, None);
}

#[test]
fn country_list_deserializes() {
    let countries: Vec<Country> =
        serde_json::from_str(r#"[{"id": "1", "name": "peru"}, {"id": "2", "name": " Peru"}]"#)
            .expect("deserialize countries");
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[1].name, " Peru");
}
