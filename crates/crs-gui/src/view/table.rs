//! The filterable records table.
//!
//! Five equal-width columns: the four filterable ones plus the editor
//! column. Each filterable header carries a funnel button that toggles
//! that column's dropdown panel; the open panel is stacked over the
//! table and anchored under its column with portioned spacers.

use iced::widget::{
    Space, button, column, container, mouse_area, opaque, row, scrollable, space, stack, text,
};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crs_normalize::{cell_label, normalize_key};

use crate::component::filter_panel;
use crate::message::{Message, TableMessage};
use crate::state::{AppState, FilterColumn, RecordRow, TableState};
use crate::theme::{
    BORDER_RADIUS_MD, FEMALE_DOT, GRAY_50, GRAY_200, GRAY_500, GRAY_600, GRAY_800, GRAY_900,
    MALE_DOT, PRIMARY_600, SPACING_SM, SPACING_XL, SPACING_XS, TABLE_CELL_PADDING_X,
    TABLE_CELL_PADDING_Y, TABLE_HEADER_HEIGHT, UNKNOWN_DOT, WHITE, button_ghost, button_secondary,
    header_cell,
};

/// Four filterable columns plus the editor column.
const COLUMN_COUNT: u16 = 5;

pub fn records_table(state: &AppState) -> Element<'_, Message> {
    let rows = state.rows();
    let visible = state.table.visible_rows(&rows);

    let body: Element<'_, Message> = if visible.is_empty() {
        container(
            text("No records found matching your filters.")
                .size(14)
                .color(GRAY_500),
        )
        .width(Length::Fill)
        .padding(SPACING_XL)
        .align_x(Alignment::Center)
        .into()
    } else {
        let mut list = column![];
        for (i, record) in visible.iter().enumerate() {
            list = list.push(record_row(record, i % 2 == 1));
        }
        scrollable(list).height(Length::Fill).into()
    };

    let footer = container(
        text(format!(
            "Showing {} of {} records",
            visible.len(),
            rows.len()
        ))
        .size(12)
        .color(GRAY_500),
    )
    .padding([SPACING_SM, TABLE_CELL_PADDING_X]);

    let table = container(column![header_row(state), body, footer])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(card);

    let base: Element<'_, Message> = container(table)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_XL)
        .into();

    match state.table.open_panel() {
        None => base,
        Some(column_id) => with_panel_overlay(state, base, column_id, &rows),
    }
}

fn header_row(state: &AppState) -> Element<'_, Message> {
    let mut header = row![].align_y(Alignment::Center);
    for column_id in FilterColumn::ALL {
        header = header.push(filter_header(state, column_id));
    }
    header = header.push(
        container(text("Editor").size(12).color(GRAY_600))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
            .style(header_cell),
    );
    container(header)
        .height(Length::Fixed(TABLE_HEADER_HEIGHT))
        .into()
}

/// One filterable column header: title, funnel button, selection badge.
fn filter_header(state: &AppState, column_id: FilterColumn) -> Element<'_, Message> {
    let count = state.table.selected_count(column_id);
    let is_open = state.table.open_panel() == Some(column_id);
    let icon_color = if count > 0 || is_open {
        PRIMARY_600
    } else {
        GRAY_500
    };

    let mut control = row![lucide::funnel().size(13).color(icon_color)].align_y(Alignment::Center);
    if count > 0 {
        control = control.push(Space::new().width(2.0));
        control = control.push(text(count.to_string()).size(10).color(PRIMARY_600));
    }

    let cell = row![
        text(column_id.title()).size(12).color(GRAY_600),
        space::horizontal(),
        button(control)
            .on_press(Message::Table(TableMessage::FilterClicked(column_id)))
            .padding([2.0, 4.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    container(cell)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(header_cell)
        .into()
}

fn record_row(record: &RecordRow, shaded: bool) -> Element<'static, Message> {
    let dot = match normalize_key(&record.gender).as_str() {
        "male" => MALE_DOT,
        "female" => FEMALE_DOT,
        _ => UNKNOWN_DOT,
    };

    let gender_cell = row![
        lucide::circle().size(8).color(dot),
        Space::new().width(SPACING_XS),
        text(cell_label(&record.gender)).size(13).color(GRAY_800),
    ]
    .align_y(Alignment::Center);

    let edit_button = button(
        row![
            lucide::pencil().size(12),
            Space::new().width(SPACING_XS),
            text("Edit").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Table(TableMessage::EditClicked(record.id.clone())))
    .padding([4.0, 10.0])
    .style(button_secondary);

    let cells = row![
        data_cell(text(cell_label(&record.name)).size(13).color(GRAY_900).into()),
        data_cell(text(cell_label(&record.date)).size(13).color(GRAY_800).into()),
        data_cell(
            text(cell_label(&record.country))
                .size(13)
                .color(GRAY_800)
                .into()
        ),
        data_cell(gender_cell.into()),
        data_cell(edit_button.into()),
    ]
    .align_y(Alignment::Center);

    container(cells)
        .style(move |_theme: &Theme| container::Style {
            background: Some(if shaded { GRAY_50 } else { WHITE }.into()),
            ..Default::default()
        })
        .into()
}

fn data_cell(content: Element<'static, Message>) -> Element<'static, Message> {
    container(content)
        .width(Length::FillPortion(1))
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .into()
}

/// Stack the open filter panel over the table.
///
/// A press anywhere outside the panel closes it; the panel itself is
/// opaque so its own widgets keep receiving events.
fn with_panel_overlay<'a>(
    state: &'a AppState,
    base: Element<'a, Message>,
    column_id: FilterColumn,
    rows: &[RecordRow],
) -> Element<'a, Message> {
    let options = TableState::options_for(column_id, rows);
    let panel = filter_panel(
        options,
        state.table.selection(column_id),
        state.table.panel_search(),
        |search| Message::Table(TableMessage::SearchChanged(search)),
        Message::Table(TableMessage::SelectAll(column_id)),
        Message::Table(TableMessage::ClearAll(column_id)),
        move |value| Message::Table(TableMessage::OptionToggled(column_id, value)),
    );

    // Anchor the fixed-width panel under its column with portioned
    // spacers on either side.
    let index = column_id.index() as u16;
    let mut anchor = row![];
    if index > 0 {
        anchor = anchor.push(Space::new().width(Length::FillPortion(index)));
    }
    anchor = anchor.push(opaque(panel));
    anchor = anchor.push(Space::new().width(Length::FillPortion(COLUMN_COUNT - index)));

    let positioned = column![
        Space::new().height(SPACING_XL + TABLE_HEADER_HEIGHT),
        anchor,
    ]
    .padding([0.0, SPACING_XL]);

    stack![
        base,
        opaque(
            mouse_area(
                container(positioned)
                    .width(Length::Fill)
                    .height(Length::Fill)
            )
            .on_press(Message::Table(TableMessage::PanelClosed))
        )
    ]
    .into()
}

fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_200,
        },
        ..Default::default()
    }
}
