//! Customer Records Studio - GUI Library
//!
//! Desktop viewer/editor for customer tax records: fetches records and
//! countries from a remote HTTP API, renders the records in a filterable
//! table, and edits a record's name and country through a modal form.
//!
//! Built with Iced 0.14 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
