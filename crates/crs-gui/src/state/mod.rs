//! Application state management.
//!
//! - [`AppState`]: root state owning the two stores and all UI state
//! - [`store`]: generic remote-collection store with a load state machine
//! - [`row`]: display-ready rows derived from raw records
//! - [`table`]: filter state for the records table
//! - [`edit`]: local state of the edit form modal

pub mod edit;
pub mod row;
pub mod store;
pub mod table;

use crs_api::ApiClient;
use crs_model::{Country, TaxRecord, UpdatedRecord};

pub use edit::EditState;
pub use row::RecordRow;
pub use store::{LoadPhase, RemoteStore};
pub use table::{FilterColumn, TableState};

use crate::settings::Settings;

/// Top-level application state.
pub struct AppState {
    /// Persisted settings (API base URL).
    pub settings: Settings,
    /// Gateway shared by value into async tasks.
    pub client: ApiClient,
    /// Record store: sole owner and mutator of the record list.
    pub records: RemoteStore<TaxRecord>,
    /// Country store: read-only reference data for the country picker.
    pub countries: RemoteStore<Country>,
    /// Filter state of the table view.
    pub table: TableState,
    /// Open edit form, if any.
    pub edit: Option<EditState>,
    /// Pending update-failure alert, if any.
    pub edit_error: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let client = ApiClient::new(&settings.api_base_url);
        Self {
            settings,
            client,
            records: RemoteStore::default(),
            countries: RemoteStore::default(),
            table: TableState::default(),
            edit: None,
            edit_error: None,
        }
    }

    /// Display-ready rows derived from the record store.
    pub fn rows(&self) -> Vec<RecordRow> {
        self.records.items().iter().map(RecordRow::from_record).collect()
    }

    /// Apply the outcome of an edit submission.
    ///
    /// Success merges the server-confirmed update into the record store
    /// and closes the form. Failure unlocks the form, keeps it open for
    /// retry, and raises the alert; the record list stays untouched.
    pub fn resolve_save(&mut self, result: Result<UpdatedRecord, String>) {
        match result {
            Ok(update) => {
                self.records.apply_update(update);
                self.edit = None;
            }
            Err(message) => {
                if let Some(edit) = &mut self.edit {
                    edit.saving = false;
                }
                self.edit_error = Some(message);
            }
        }
    }

    /// Full view reset for the Retry affordance: both stores are
    /// replaced and all transient UI state is discarded.
    pub fn reset_for_reload(&mut self) {
        self.records = RemoteStore::default();
        self.countries = RemoteStore::default();
        self.table = TableState::default();
        self.edit = None;
        self.edit_error = None;
    }
}
