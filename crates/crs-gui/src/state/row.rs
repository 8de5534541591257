//! Display-ready table rows.

use crs_model::TaxRecord;
use crs_normalize::{display_label, format_date};

/// One table row derived from a raw record.
///
/// All cells are produced by the normalization layer, so filter option
/// values built from these fields always match the filter predicate's
/// keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: String,
    pub name: String,
    pub date: String,
    pub country: String,
    pub gender: String,
}

impl RecordRow {
    pub fn from_record(record: &TaxRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: display_label(&record.name),
            date: format_date(&record.created_at),
            country: display_label(&record.country),
            gender: display_label(&record.gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_renders_normalized_cells() {
        let record = TaxRecord {
            id: "1".to_string(),
            name: "anna".to_string(),
            country: " Peru ".to_string(),
            gender: "female".to_string(),
            created_at: "2024-01-05T00:00:00Z".to_string(),
        };
        let row = RecordRow::from_record(&record);
        assert_eq!(row.name, "Anna");
        assert_eq!(row.country, "Peru");
        assert_eq!(row.date, "Jan 5, 2024");
        assert_eq!(row.gender, "Female");
    }

    #[test]
    fn empty_fields_stay_empty_until_cell_rendering() {
        let record = TaxRecord {
            id: "2".to_string(),
            name: "bob".to_string(),
            country: String::new(),
            gender: String::new(),
            created_at: String::new(),
        };
        let row = RecordRow::from_record(&record);
        assert_eq!(row.country, "");
        assert_eq!(row.gender, "");
        // The dash placeholder is applied by the view via cell_label.
        assert_eq!(crs_normalize::cell_label(&row.gender), "-");
    }
}
