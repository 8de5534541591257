//! View composition.
//!
//! The root view picks a body from the record store's load phase and
//! layers the overlays on top: the filter panel lives inside
//! [`table::records_table`], the edit modal and the update-failure
//! alert are stacked here.

pub mod edit;
pub mod table;

use iced::widget::{button, center, column, container, text};
use iced::{Alignment, Element, Length};

use crate::component::alert_modal;
use crate::message::{EditMessage, Message};
use crate::state::{AppState, LoadPhase};
use crate::theme::{
    GRAY_50, GRAY_600, GRAY_900, SPACING_LG, SPACING_MD, SPACING_XL, WHITE, button_primary,
};

/// Root view: header bar, phase-dependent body, and overlays.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.records.phase() {
        LoadPhase::Idle | LoadPhase::Loading => loading(),
        LoadPhase::Failed(message) => load_error(message),
        LoadPhase::Ready => table::records_table(state),
    };

    let mut screen: Element<'_, Message> = column![
        header_bar(),
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(GRAY_50.into()),
                ..Default::default()
            }),
    ]
    .into();

    if let Some(edit_state) = &state.edit {
        screen = edit::edit_modal(screen, edit_state, state.countries.items());
    }

    if let Some(message) = &state.edit_error {
        screen = alert_modal(
            screen,
            "Update Failed",
            message,
            Message::Edit(EditMessage::ErrorDismissed),
        );
    }

    screen
}

fn header_bar() -> Element<'static, Message> {
    container(text("Customer Management").size(22).color(GRAY_900))
        .width(Length::Fill)
        .padding([SPACING_LG, SPACING_XL])
        .style(|_theme| container::Style {
            background: Some(WHITE.into()),
            ..Default::default()
        })
        .into()
}

fn loading() -> Element<'static, Message> {
    center(text("Loading records...").size(16).color(GRAY_600)).into()
}

fn load_error(message: &str) -> Element<'_, Message> {
    center(
        column![
            text("Error Loading Data").size(20).color(GRAY_900),
            text(message).size(14).color(GRAY_600),
            button(text("Retry"))
                .on_press(Message::RetryClicked)
                .padding([10.0, 20.0])
                .style(button_primary),
        ]
        .spacing(SPACING_MD)
        .align_x(Alignment::Center),
    )
    .into()
}
