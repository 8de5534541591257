//! End-to-end state flows exercised without the widget layer.

use crs_gui::settings::Settings;
use crs_gui::state::{AppState, EditState, FilterColumn, LoadPhase};
use crs_model::{Country, TaxRecord, UpdatedRecord};

fn record(id: &str, name: &str, country: &str, gender: &str, created_at: &str) -> TaxRecord {
    TaxRecord {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        gender: gender.to_string(),
        created_at: created_at.to_string(),
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(Settings::default());
    state.records.begin_loading();
    state.countries.begin_loading();
    state.records.resolve(Ok(vec![
        record("1", "anna", " Peru ", "female", "2024-01-05T10:30:00Z"),
        record("2", "Bob", "chile", "male", "2024-02-01T08:00:00Z"),
        record("3", "cara", "PERU", "female", "2024-01-05T23:00:00Z"),
    ]));
    state.countries.resolve(Ok(vec![
        Country {
            id: "1".to_string(),
            name: "peru".to_string(),
        },
        Country {
            id: "2".to_string(),
            name: "chile".to_string(),
        },
    ]));
    state
}

#[test]
fn rows_are_display_ready_after_load() {
    let state = loaded_state();
    let rows = state.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Anna");
    assert_eq!(rows[0].country, "Peru");
    assert_eq!(rows[0].date, "Jan 5, 2024");
}

#[test]
fn country_filter_collapses_case_variants() {
    let state = loaded_state();
    let rows = state.rows();

    let options =
        crs_gui::state::TableState::options_for(FilterColumn::Country, &rows);
    // " Peru " and "PERU" share the key "peru".
    assert_eq!(options.len(), 2);

    let mut table = state.table.clone();
    table.toggle_value(FilterColumn::Country, "peru".to_string());
    let visible = table.visible_rows(&rows);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|r| r.country == "Peru"));
}

#[test]
fn confirmed_save_merges_into_the_store() {
    let mut state = loaded_state();
    let rows = state.rows();
    let row = rows.iter().find(|r| r.id == "1").unwrap();

    let mut edit = EditState::for_row(row);
    edit.name = "Annabel".to_string();
    edit.select_country("Chile".to_string());
    assert!(edit.can_submit());
    let patch = edit.patch();
    assert_eq!(patch.name, "Annabel");
    assert_eq!(patch.country, "Chile");

    // List stays untouched until the server confirms.
    assert_eq!(state.rows()[0].name, "Anna");

    edit.saving = true;
    state.edit = Some(edit);
    state.resolve_save(Ok(UpdatedRecord {
        id: "1".to_string(),
        name: Some("Annabel".to_string()),
        country: Some("Chile".to_string()),
        gender: None,
        created_at: None,
    }));

    // The form closes and discards its draft.
    assert!(state.edit.is_none());
    assert!(state.edit_error.is_none());

    let rows = state.rows();
    assert_eq!(rows[0].name, "Annabel");
    assert_eq!(rows[0].country, "Chile");
    // Untouched fields survive the merge.
    assert_eq!(rows[0].gender, "Female");
    assert_eq!(rows[0].date, "Jan 5, 2024");
}

#[test]
fn failed_save_keeps_the_form_open_and_the_list_unchanged() {
    let mut state = loaded_state();
    let before = state.rows();

    let mut edit = EditState::for_row(&before[0]);
    edit.name = "Annabel".to_string();
    edit.saving = true;
    state.edit = Some(edit);

    state.resolve_save(Err(
        "Failed to update record. Please try again.".to_string()
    ));

    // The form stays open with its draft, unlocked for another attempt.
    let edit = state.edit.as_ref().expect("form still open");
    assert!(!edit.saving);
    assert_eq!(edit.name, "Annabel");
    assert!(edit.can_submit());
    assert_eq!(
        state.edit_error.as_deref(),
        Some("Failed to update record. Please try again.")
    );
    assert_eq!(state.rows(), before);

    state.edit_error = None;
    assert_eq!(state.rows(), before);
}

#[test]
fn retry_resets_the_whole_view() {
    let mut state = loaded_state();
    state.table.toggle_value(FilterColumn::Gender, "female".to_string());
    state.edit = Some(EditState::for_row(&state.rows()[0]));

    state.reset_for_reload();
    assert_eq!(*state.records.phase(), LoadPhase::Idle);
    assert_eq!(*state.countries.phase(), LoadPhase::Idle);
    assert!(state.rows().is_empty());
    assert!(state.edit.is_none());
    assert!(state.table.selection(FilterColumn::Gender).is_none());
}
