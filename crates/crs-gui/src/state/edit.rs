//! Local state of the edit form modal.

use crs_model::{Country, RecordPatch};
use crs_normalize::{dedup_countries, display_label};

use super::row::RecordRow;

/// Draft edits for one record.
///
/// The country field follows the searchable-select contract: typing in
/// the search box only narrows the option list; the submitted country
/// value changes when an option is picked. Both start out as the
/// record's capitalized country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    record_id: String,
    pub name: String,
    pub country_search: String,
    country: String,
    pub show_country_list: bool,
    pub saving: bool,
}

impl EditState {
    /// Open the form pre-populated from a display row.
    pub fn for_row(row: &RecordRow) -> Self {
        Self {
            record_id: row.id.clone(),
            name: row.name.clone(),
            country_search: row.country.clone(),
            country: row.country.clone(),
            show_country_list: false,
            saving: false,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Typing filters the list and reveals it; the submitted value is
    /// untouched until a selection is made.
    pub fn set_country_search(&mut self, text: String) {
        self.country_search = text;
        self.show_country_list = true;
    }

    /// Picking an option sets both the visible text and the submitted
    /// value, and hides the list.
    pub fn select_country(&mut self, label: String) {
        self.country_search = label.clone();
        self.country = label;
        self.show_country_list = false;
    }

    /// Submission gate: blocked while a request is in flight or while
    /// the name or country text is empty.
    pub fn can_submit(&self) -> bool {
        !self.saving
            && !self.name.trim().is_empty()
            && !self.country_search.trim().is_empty()
    }

    /// The PUT body for this draft.
    pub fn patch(&self) -> RecordPatch {
        RecordPatch {
            name: self.name.clone(),
            country: self.country.clone(),
        }
    }

    /// Deduplicated country labels matching the current search text
    /// (case-insensitive substring on the capitalized label).
    pub fn filtered_country_labels(&self, countries: &[Country]) -> Vec<String> {
        let needle = self.country_search.to_lowercase();
        dedup_countries(countries)
            .iter()
            .map(|country| display_label(&country.name))
            .filter(|label| label.to_lowercase().contains(&needle))
            .collect()
    }
}
