//! The edit form modal.
//!
//! Name is a plain text input; country is a searchable select. The
//! option list appears while the user is typing and a pick both fills
//! the search box and sets the submitted value.

use iced::widget::{button, column, container, scrollable, text, text_input};
use iced::{Element, Length};

use crs_model::Country;

use crate::component::modal;
use crate::message::{EditMessage, Message};
use crate::state::EditState;
use crate::theme::{
    GRAY_500, GRAY_600, GRAY_800, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
    button_primary, button_secondary, panel_container, text_input_default,
};

pub fn edit_modal<'a>(
    base: Element<'a, Message>,
    edit: &'a EditState,
    countries: &'a [Country],
) -> Element<'a, Message> {
    let name_field = column![
        text("Name").size(12).color(GRAY_600),
        text_input("Customer name", &edit.name)
            .on_input(|value| Message::Edit(EditMessage::NameChanged(value)))
            .padding([8.0, 10.0])
            .size(14)
            .style(text_input_default),
    ]
    .spacing(SPACING_XS);

    let country_input = text_input("Search or select a country", &edit.country_search)
        .on_input(|value| Message::Edit(EditMessage::CountrySearchChanged(value)))
        .padding([8.0, 10.0])
        .size(14)
        .style(text_input_default);

    let mut country_field = column![
        text("Country").size(12).color(GRAY_600),
        country_input,
    ]
    .spacing(SPACING_XS);

    if edit.show_country_list {
        country_field = country_field.push(
            container(country_list(edit, countries))
                .width(Length::Fill)
                .style(panel_container),
        );
    }

    let content = column![name_field, country_field]
        .spacing(SPACING_MD)
        .into();

    let saving = edit.saving;
    let cancel: Element<'a, Message> = button(text("Cancel"))
        .on_press_maybe((!saving).then_some(Message::Edit(EditMessage::CancelClicked)))
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();
    let save_label = if saving { "Saving..." } else { "Save Changes" };
    let save: Element<'a, Message> = button(text(save_label))
        .on_press_maybe(
            edit.can_submit()
                .then_some(Message::Edit(EditMessage::SubmitClicked)),
        )
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(
        base,
        "Edit Customer",
        content,
        (!saving).then_some(Message::Edit(EditMessage::CancelClicked)),
        vec![cancel, save],
    )
}

fn country_list<'a>(edit: &EditState, countries: &[Country]) -> Element<'a, Message> {
    let labels = edit.filtered_country_labels(countries);
    if labels.is_empty() {
        return container(text("No countries found").size(12).color(GRAY_500))
            .padding(SPACING_SM)
            .into();
    }

    let mut options = column![];
    for label in labels {
        let pick = Message::Edit(EditMessage::CountrySelected(label.clone()));
        options = options.push(
            button(text(label).size(13).color(GRAY_800))
                .on_press(pick)
                .width(Length::Fill)
                .padding([6.0, 10.0])
                .style(button_ghost),
        );
    }
    scrollable(options).height(Length::Fixed(140.0)).into()
}
