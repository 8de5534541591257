//! Normalization layer for customer records.
//!
//! Raw record data arrives with inconsistent casing and whitespace. This
//! crate owns every derivation from raw text: the normalization key used
//! for deduplication and filter matching, the display labels shown in
//! table cells and form fields, the date formatting, and the construction
//! of filter option sets.
//!
//! The invariant the table view depends on: displayed values and filter
//! options are derived through the same functions, so a filter value's
//! key always equals the key computable from any row's raw cell. Keep
//! `normalize_key` the single source of both.

use std::collections::HashSet;

use crs_model::Country;

/// A selectable choice in a column filter or the country picker.
///
/// `value` is the match key, `label` the display form. Options for a
/// column are unique by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Trimmed, lower-cased form of a text value.
///
/// Used as the deduplication and filter-matching key. Empty or
/// whitespace-only input maps to the empty key, which option builders
/// exclude.
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Display form of a raw text value: first character upper-cased, the
/// remainder lower-cased. Empty input yields the empty string, which is
/// what form fields show.
pub fn display_label(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Display form for table cells: like [`display_label`] but empty input
/// renders as a placeholder dash.
pub fn cell_label(text: &str) -> String {
    let label = display_label(text);
    if label.is_empty() { "-".to_string() } else { label }
}

/// Renders an ISO-8601 timestamp as `Mon D, YYYY` with a capitalized
/// month abbreviation. Unparseable input passes through unchanged.
pub fn format_date(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso.trim()) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Filter options for the name column.
///
/// Distinct non-empty raw values, sorted, each paired with its
/// capitalized label. Names are deliberately not collapsed by
/// normalization key: two names differing only by case stay separate
/// options, and the name filter matches the raw value verbatim.
pub fn name_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut names: Vec<&str> = values.into_iter().filter(|v| !v.is_empty()).collect();
    names.sort_unstable();
    names.dedup();
    names
        .into_iter()
        .map(|name| FilterOption {
            value: name.to_string(),
            label: display_label(name),
        })
        .collect()
}

/// Filter options for free-text columns with casing variance (country,
/// gender).
///
/// Values are grouped by [`normalize_key`]; the first-seen raw value per
/// key supplies the display label. Sorted by label.
pub fn keyed_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for raw in values {
        let key = normalize_key(raw);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        options.push(FilterOption {
            value: key,
            label: display_label(raw),
        });
    }
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Filter options for the date column.
///
/// The label keeps the already-formatted raw string; the value is its
/// trimmed lower-cased key. First-seen order, no sort.
pub fn date_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for raw in values {
        let trimmed = raw.trim();
        let key = trimmed.to_lowercase();
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        options.push(FilterOption {
            value: key,
            label: trimmed.to_string(),
        });
    }
    options
}

/// Deduplicates the country reference list by normalization key.
///
/// The first occurrence per key wins; its name is kept trimmed. Entries
/// with empty names are dropped.
pub fn dedup_countries(countries: &[Country]) -> Vec<Country> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for country in countries {
        let key = normalize_key(&country.name);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        unique.push(Country {
            id: country.id.clone(),
            name: country.name.trim().to_string(),
        });
    }
    unique
}
