//! Background task wrappers.
//!
//! Async functions bridged into the update loop with Iced's
//! `Task::perform`. Errors are flattened to their user-facing message
//! here so that messages stay `Clone`.

use crs_api::ApiClient;
use crs_model::RecordPatch;
use iced::Task;

use crate::error::GuiError;
use crate::message::{EditMessage, Message};

/// Fetch the record collection.
///
/// Returns a Task that will produce a `RecordsLoaded` message.
pub fn load_records(client: ApiClient) -> Task<Message> {
    Task::perform(
        async move {
            client
                .list_records()
                .await
                .map_err(GuiError::RecordsFetch)
                .map_err(|e| e.user_message().to_string())
        },
        Message::RecordsLoaded,
    )
}

/// Fetch the country reference list.
///
/// Returns a Task that will produce a `CountriesLoaded` message.
pub fn load_countries(client: ApiClient) -> Task<Message> {
    Task::perform(
        async move {
            client
                .list_countries()
                .await
                .map_err(GuiError::CountriesFetch)
                .map_err(|e| e.user_message().to_string())
        },
        Message::CountriesLoaded,
    )
}

/// Submit an edit for one record.
///
/// Returns a Task that will produce an `Edit(Saved)` message.
pub fn save_record(client: ApiClient, id: String, patch: RecordPatch) -> Task<Message> {
    Task::perform(
        async move {
            client
                .update_record(&id, &patch)
                .await
                .map_err(GuiError::RecordUpdate)
                .map_err(|e| e.user_message().to_string())
        },
        |result| Message::Edit(EditMessage::Saved(result)),
    )
}
