//! Reusable UI components.

pub mod filter_panel;
pub mod modal;

pub use filter_panel::filter_panel;
pub use modal::{alert_modal, modal};
