//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through these
//! types into [`crate::app::App::update`].

use crs_model::{Country, TaxRecord, UpdatedRecord};

use crate::state::table::FilterColumn;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Records fetch completed.
    RecordsLoaded(Result<Vec<TaxRecord>, String>),

    /// Countries fetch completed.
    CountriesLoaded(Result<Vec<Country>, String>),

    /// Full-page retry after an initial load failure. Resets the whole
    /// view, not just the failed fetch.
    RetryClicked,

    /// Table view messages.
    Table(TableMessage),

    /// Edit form messages.
    Edit(EditMessage),
}

/// Messages from the filterable records table.
#[derive(Debug, Clone)]
pub enum TableMessage {
    /// A column's funnel icon was clicked: open its panel, or close it
    /// if it was already open.
    FilterClicked(FilterColumn),

    /// Pointer press outside the open filter panel.
    PanelClosed,

    /// Search text inside the open panel changed.
    SearchChanged(String),

    /// "Select All" inside a column's panel.
    SelectAll(FilterColumn),

    /// "Clear All" inside a column's panel.
    ClearAll(FilterColumn),

    /// One option checkbox toggled.
    OptionToggled(FilterColumn, String),

    /// A row's Edit button was clicked.
    EditClicked(String),
}

/// Messages from the edit form modal.
#[derive(Debug, Clone)]
pub enum EditMessage {
    NameChanged(String),

    /// The country search text changed; filters the option list without
    /// touching the submitted country value.
    CountrySearchChanged(String),

    /// A country option was picked; sets both the search text and the
    /// submitted value.
    CountrySelected(String),

    SubmitClicked,

    CancelClicked,

    /// Update request completed.
    Saved(Result<UpdatedRecord, String>),

    /// The update-failure alert was acknowledged.
    ErrorDismissed,
}
