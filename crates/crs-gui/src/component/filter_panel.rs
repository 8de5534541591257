//! Multi-select filter dropdown panel.
//!
//! One column's filter editor: a search box narrowing the options by
//! case-insensitive substring match on the label, Select All / Clear All
//! actions, the option checkboxes, and a selected-count footer.

use std::collections::BTreeSet;

use iced::widget::{Space, button, checkbox, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crs_normalize::FilterOption;

use crate::theme::{
    FILTER_PANEL_LIST_HEIGHT, FILTER_PANEL_WIDTH, GRAY_500, GRAY_800, SPACING_SM, SPACING_XS,
    button_secondary, panel_container, text_input_default,
};

/// Builds the dropdown panel for one column.
///
/// Options are taken by value: they are derived fresh from the current
/// rows on every view pass and the widgets own their labels.
pub fn filter_panel<'a, M: Clone + 'a>(
    options: Vec<FilterOption>,
    selected: Option<&'a BTreeSet<String>>,
    search: &'a str,
    on_search: impl Fn(String) -> M + 'a,
    on_select_all: M,
    on_clear_all: M,
    on_toggle: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let search_input = text_input("Search...", search)
        .on_input(on_search)
        .padding([6.0, 8.0])
        .size(13)
        .style(text_input_default);

    let actions = row![
        button(text("Select All").size(12))
            .on_press(on_select_all)
            .padding([4.0, 8.0])
            .style(button_secondary),
        button(text("Clear All").size(12))
            .on_press(on_clear_all)
            .padding([4.0, 8.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_XS);

    let needle = search.to_lowercase();
    let visible: Vec<FilterOption> = options
        .into_iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .collect();

    let option_list: Element<'a, M> = if visible.is_empty() {
        container(text("No options found").size(12).color(GRAY_500))
            .padding(SPACING_XS)
            .into()
    } else {
        let mut list = column![].spacing(SPACING_XS);
        for option in visible {
            let checked = selected.is_some_and(|set| set.contains(&option.value));
            let toggle_msg = on_toggle(option.value);
            list = list.push(
                row![
                    checkbox(checked).on_toggle(move |_| toggle_msg.clone()),
                    Space::new().width(SPACING_XS),
                    text(option.label).size(13).color(GRAY_800),
                ]
                .align_y(Alignment::Center),
            );
        }
        scrollable(list)
            .height(Length::Fixed(FILTER_PANEL_LIST_HEIGHT))
            .into()
    };

    let mut panel = column![search_input, actions, option_list].spacing(SPACING_SM);

    let selected_count = selected.map_or(0, BTreeSet::len);
    if selected_count > 0 {
        panel = panel.push(
            text(format!("{selected_count} selected"))
                .size(11)
                .color(GRAY_500),
        );
    }

    container(panel)
        .width(Length::Fixed(FILTER_PANEL_WIDTH))
        .padding(SPACING_SM)
        .style(panel_container)
        .into()
}
