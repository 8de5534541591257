//! Modal dialog overlay component.
//!
//! Modal dialogs with backdrop, title, content, and action buttons.
//! Clicking the backdrop does NOT close the modal - use the close button
//! or an action.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BACKDROP, BORDER_RADIUS_LG, GRAY_200, GRAY_500, GRAY_900, MODAL_WIDTH_MD, SHADOW_STRONG,
    SPACING_LG, SPACING_MD, SPACING_SM, WHITE, button_ghost, button_primary,
};

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a
/// semi-transparent backdrop.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message for the close button; `None` disables it
/// * `actions` - Action buttons for the footer
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: Option<M>,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    // Backdrop overlay
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    // Header with title and close button
    let header = row![
        text(title).size(18).color(GRAY_900),
        space::horizontal(),
        button(lucide::x().size(20).color(GRAY_500))
            .on_press_maybe(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    // Action buttons row
    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    // Modal dialog box
    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(|_theme| container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a blocking alert modal with a single OK button.
pub fn alert_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: &'a str,
    on_close: M,
) -> Element<'a, M> {
    let content = text(message).into();

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(base, title, content, Some(on_close), vec![ok_btn])
}
