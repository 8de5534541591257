//! Application root: Elm-style `new`/`update`/`view`.

use iced::{Element, Task, Theme};
use tracing::{error, info};

use crate::message::{EditMessage, Message, TableMessage};
use crate::service;
use crate::settings::Settings;
use crate::state::{AppState, EditState, TableState};
use crate::view;

pub struct App {
    state: AppState,
}

impl App {
    /// Load persisted settings and kick off both fetches.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut state = AppState::new(settings);
        state.records.begin_loading();
        state.countries.begin_loading();
        let startup = Task::batch([
            service::load_records(state.client.clone()),
            service::load_countries(state.client.clone()),
        ]);
        (Self { state }, startup)
    }

    pub fn title(&self) -> String {
        "Customer Records Studio".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.state)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RecordsLoaded(result) => {
                if let Err(message) = &result {
                    error!(%message, "records fetch failed");
                } else {
                    info!(
                        count = result.as_ref().map_or(0, Vec::len),
                        "records loaded"
                    );
                }
                self.state.records.resolve(result);
                Task::none()
            }
            Message::CountriesLoaded(result) => {
                if let Err(message) = &result {
                    error!(%message, "countries fetch failed");
                }
                self.state.countries.resolve(result);
                Task::none()
            }
            Message::RetryClicked => {
                self.state.reset_for_reload();
                self.state.records.begin_loading();
                self.state.countries.begin_loading();
                Task::batch([
                    service::load_records(self.state.client.clone()),
                    service::load_countries(self.state.client.clone()),
                ])
            }
            Message::Table(message) => self.update_table(message),
            Message::Edit(message) => self.update_edit(message),
        }
    }

    fn update_table(&mut self, message: TableMessage) -> Task<Message> {
        match message {
            TableMessage::FilterClicked(column) => self.state.table.toggle_panel(column),
            TableMessage::PanelClosed => self.state.table.close_panel(),
            TableMessage::SearchChanged(text) => self.state.table.set_search(text),
            TableMessage::SelectAll(column) => {
                let options = TableState::options_for(column, &self.state.rows());
                self.state.table.select_all(column, &options);
            }
            TableMessage::ClearAll(column) => self.state.table.clear_all(column),
            TableMessage::OptionToggled(column, value) => {
                self.state.table.toggle_value(column, value);
            }
            TableMessage::EditClicked(id) => {
                if let Some(row) = self.state.rows().iter().find(|row| row.id == id) {
                    self.state.edit = Some(EditState::for_row(row));
                }
            }
        }
        Task::none()
    }

    fn update_edit(&mut self, message: EditMessage) -> Task<Message> {
        match message {
            EditMessage::NameChanged(value) => {
                if let Some(edit) = &mut self.state.edit {
                    edit.name = value;
                }
            }
            EditMessage::CountrySearchChanged(value) => {
                if let Some(edit) = &mut self.state.edit {
                    edit.set_country_search(value);
                }
            }
            EditMessage::CountrySelected(label) => {
                if let Some(edit) = &mut self.state.edit {
                    edit.select_country(label);
                }
            }
            EditMessage::SubmitClicked => {
                if let Some(edit) = &mut self.state.edit {
                    if edit.can_submit() {
                        edit.saving = true;
                        let id = edit.record_id().to_string();
                        let patch = edit.patch();
                        return service::save_record(self.state.client.clone(), id, patch);
                    }
                }
            }
            EditMessage::CancelClicked => {
                // Locked while a save is in flight.
                let saving = self.state.edit.as_ref().is_some_and(|edit| edit.saving);
                if !saving {
                    self.state.edit = None;
                }
            }
            EditMessage::Saved(result) => {
                match &result {
                    Ok(update) => info!(id = %update.id, "record updated"),
                    Err(message) => error!(%message, "record update failed"),
                }
                self.state.resolve_save(result);
            }
            EditMessage::ErrorDismissed => {
                self.state.edit_error = None;
            }
        }
        Task::none()
    }
}
