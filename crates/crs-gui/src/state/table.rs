//! Filter state for the records table.

use std::collections::{BTreeMap, BTreeSet};

use crs_normalize::{FilterOption, date_options, keyed_options, name_options, normalize_key};

use super::row::RecordRow;

/// Filterable columns of the records table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    Name,
    Date,
    Country,
    Gender,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Name,
        FilterColumn::Date,
        FilterColumn::Country,
        FilterColumn::Gender,
    ];

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            FilterColumn::Name => "Names",
            FilterColumn::Date => "Research Date",
            FilterColumn::Country => "Country",
            FilterColumn::Gender => "Gender",
        }
    }

    /// Position among the table's columns, for anchoring the panel.
    pub fn index(self) -> usize {
        match self {
            FilterColumn::Name => 0,
            FilterColumn::Date => 1,
            FilterColumn::Country => 2,
            FilterColumn::Gender => 3,
        }
    }
}

/// UI state of the filterable table: which panel is open, its search
/// text, and the per-column selections.
///
/// A column absent from `filters` has no active filter (all rows pass).
/// At most one panel is open at a time.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    open_panel: Option<FilterColumn>,
    panel_search: String,
    filters: BTreeMap<FilterColumn, BTreeSet<String>>,
}

impl TableState {
    pub fn open_panel(&self) -> Option<FilterColumn> {
        self.open_panel
    }

    pub fn panel_search(&self) -> &str {
        &self.panel_search
    }

    pub fn selection(&self, column: FilterColumn) -> Option<&BTreeSet<String>> {
        self.filters.get(&column)
    }

    pub fn selected_count(&self, column: FilterColumn) -> usize {
        self.filters.get(&column).map_or(0, BTreeSet::len)
    }

    /// Open a column's panel, closing any other; clicking the open
    /// column's control closes it instead.
    pub fn toggle_panel(&mut self, column: FilterColumn) {
        if self.open_panel == Some(column) {
            self.close_panel();
        } else {
            self.open_panel = Some(column);
            self.panel_search.clear();
        }
    }

    pub fn close_panel(&mut self) {
        self.open_panel = None;
        self.panel_search.clear();
    }

    pub fn set_search(&mut self, text: String) {
        self.panel_search = text;
    }

    /// Toggle one value's membership in a column's selection. The filter
    /// collapses back to unset when the set empties.
    pub fn toggle_value(&mut self, column: FilterColumn, value: String) {
        let set = self.filters.entry(column).or_default();
        if !set.remove(&value) {
            set.insert(value);
        }
        if set.is_empty() {
            self.filters.remove(&column);
        }
    }

    /// Set a column's filter to the full current option-value set.
    pub fn select_all(&mut self, column: FilterColumn, options: &[FilterOption]) {
        let set: BTreeSet<String> = options.iter().map(|o| o.value.clone()).collect();
        if set.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, set);
        }
    }

    /// Remove a column's filter and reset the panel's search text.
    pub fn clear_all(&mut self, column: FilterColumn) {
        self.filters.remove(&column);
        self.panel_search.clear();
    }

    /// Row visibility rule: every column with an active filter must
    /// match; columns without a filter impose no constraint.
    ///
    /// Name compares the displayed value verbatim; date, country, and
    /// gender compare normalized keys. This matches how each column's
    /// options are built: name options carry the displayed values, with
    /// case variants already collapsed by row derivation, while the
    /// other columns carry keys.
    pub fn is_visible(&self, row: &RecordRow) -> bool {
        self.filters.iter().all(|(column, selected)| match column {
            FilterColumn::Name => selected.contains(&row.name),
            FilterColumn::Date => selected.contains(&normalize_key(&row.date)),
            FilterColumn::Country => selected.contains(&normalize_key(&row.country)),
            FilterColumn::Gender => selected.contains(&normalize_key(&row.gender)),
        })
    }

    /// The subset of rows passing every active filter.
    pub fn visible_rows<'a>(&self, rows: &'a [RecordRow]) -> Vec<&'a RecordRow> {
        rows.iter().filter(|row| self.is_visible(row)).collect()
    }

    /// Build the option set for one column from the current rows.
    pub fn options_for(column: FilterColumn, rows: &[RecordRow]) -> Vec<FilterOption> {
        match column {
            FilterColumn::Name => name_options(rows.iter().map(|r| r.name.as_str())),
            FilterColumn::Date => date_options(rows.iter().map(|r| r.date.as_str())),
            FilterColumn::Country => keyed_options(rows.iter().map(|r| r.country.as_str())),
            FilterColumn::Gender => keyed_options(rows.iter().map(|r| r.gender.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, date: &str, country: &str, gender: &str) -> RecordRow {
        RecordRow {
            id: id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            country: country.to_string(),
            gender: gender.to_string(),
        }
    }

    fn sample_rows() -> Vec<RecordRow> {
        vec![
            row("1", "Anna", "Jan 5, 2024", "Peru", "Female"),
            row("2", "Bob", "Feb 1, 2024", "Chile", "Male"),
            row("3", "Cara", "Jan 5, 2024", "Peru", "Female"),
        ]
    }

    #[test]
    fn no_filters_means_all_rows_visible() {
        let state = TableState::default();
        assert_eq!(state.visible_rows(&sample_rows()).len(), 3);
    }

    #[test]
    fn country_filter_matches_normalized_keys() {
        let mut state = TableState::default();
        state.toggle_value(FilterColumn::Country, "peru".to_string());
        let rows = sample_rows();
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.country == "Peru"));
    }

    #[test]
    fn name_filter_matches_exact_displayed_value() {
        let mut state = TableState::default();
        // A lower-cased key does not match: name matching is verbatim.
        state.toggle_value(FilterColumn::Name, "anna".to_string());
        assert_eq!(state.visible_rows(&sample_rows()).len(), 0);

        state.clear_all(FilterColumn::Name);
        state.toggle_value(FilterColumn::Name, "Anna".to_string());
        assert_eq!(state.visible_rows(&sample_rows()).len(), 1);
    }

    #[test]
    fn filters_on_different_columns_intersect() {
        let mut state = TableState::default();
        state.toggle_value(FilterColumn::Country, "peru".to_string());
        state.toggle_value(FilterColumn::Name, "Anna".to_string());
        let rows = sample_rows();
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn toggling_the_last_value_unsets_the_filter() {
        let mut state = TableState::default();
        state.toggle_value(FilterColumn::Gender, "male".to_string());
        assert_eq!(state.selected_count(FilterColumn::Gender), 1);
        state.toggle_value(FilterColumn::Gender, "male".to_string());
        assert!(state.selection(FilterColumn::Gender).is_none());
        assert_eq!(state.visible_rows(&sample_rows()).len(), 3);
    }

    #[test]
    fn select_all_then_clear_all_restores_the_unfiltered_set() {
        let rows = sample_rows();
        let mut state = TableState::default();
        let options = TableState::options_for(FilterColumn::Country, &rows);

        state.select_all(FilterColumn::Country, &options);
        assert_eq!(state.visible_rows(&rows).len(), 3);

        state.clear_all(FilterColumn::Country);
        assert!(state.selection(FilterColumn::Country).is_none());
        assert_eq!(state.visible_rows(&rows).len(), 3);
        assert_eq!(state.panel_search(), "");
    }

    #[test]
    fn single_open_panel_invariant() {
        let mut state = TableState::default();
        state.toggle_panel(FilterColumn::Name);
        assert_eq!(state.open_panel(), Some(FilterColumn::Name));

        state.toggle_panel(FilterColumn::Country);
        assert_eq!(state.open_panel(), Some(FilterColumn::Country));

        state.toggle_panel(FilterColumn::Country);
        assert_eq!(state.open_panel(), None);
    }

    #[test]
    fn opening_a_panel_resets_its_search() {
        let mut state = TableState::default();
        state.toggle_panel(FilterColumn::Name);
        state.set_search("an".to_string());
        state.toggle_panel(FilterColumn::Country);
        assert_eq!(state.panel_search(), "");
    }

    #[test]
    fn option_sets_reflect_current_rows() {
        let rows = sample_rows();
        let countries = TableState::options_for(FilterColumn::Country, &rows);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].label, "Chile");

        let dates = TableState::options_for(FilterColumn::Date, &rows);
        // First-seen order, deduplicated.
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].label, "Jan 5, 2024");
    }
}
