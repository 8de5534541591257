//! Visual constants and widget styles.
//!
//! A single flat module: color and spacing constants plus the style
//! functions the views pass to `.style(...)`. The application runs on
//! the stock light theme; everything here layers on top of it.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;

pub const GRAY_50: Color = Color { r: 0.976, g: 0.980, b: 0.984, a: 1.0 };
pub const GRAY_100: Color = Color { r: 0.945, g: 0.953, b: 0.961, a: 1.0 };
pub const GRAY_200: Color = Color { r: 0.898, g: 0.906, b: 0.922, a: 1.0 };
pub const GRAY_400: Color = Color { r: 0.580, g: 0.639, b: 0.722, a: 1.0 };
pub const GRAY_500: Color = Color { r: 0.420, g: 0.447, b: 0.502, a: 1.0 };
pub const GRAY_600: Color = Color { r: 0.294, g: 0.333, b: 0.388, a: 1.0 };
pub const GRAY_800: Color = Color { r: 0.122, g: 0.161, b: 0.216, a: 1.0 };
pub const GRAY_900: Color = Color { r: 0.067, g: 0.094, b: 0.153, a: 1.0 };

pub const PRIMARY_100: Color = Color { r: 0.859, g: 0.914, b: 0.996, a: 1.0 };
pub const PRIMARY_500: Color = Color { r: 0.231, g: 0.510, b: 0.965, a: 1.0 };
pub const PRIMARY_600: Color = Color { r: 0.145, g: 0.388, b: 0.922, a: 1.0 };
pub const PRIMARY_700: Color = Color { r: 0.114, g: 0.306, b: 0.847, a: 1.0 };

pub const DANGER: Color = Color { r: 0.863, g: 0.149, b: 0.149, a: 1.0 };

/// Gender dot colors.
pub const MALE_DOT: Color = Color { r: 0.231, g: 0.510, b: 0.965, a: 1.0 };
pub const FEMALE_DOT: Color = Color { r: 0.925, g: 0.282, b: 0.600, a: 1.0 };
pub const UNKNOWN_DOT: Color = GRAY_400;

/// Semi-transparent modal/backdrop overlay.
pub const BACKDROP: Color = Color { r: 0.067, g: 0.094, b: 0.153, a: 0.45 };

pub const SHADOW_SOFT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.08 };
pub const SHADOW_STRONG: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.20 };

// =============================================================================
// SPACING & SIZING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 12.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 6.0;
pub const BORDER_RADIUS_LG: f32 = 10.0;

pub const MODAL_WIDTH_MD: f32 = 440.0;
pub const FILTER_PANEL_WIDTH: f32 = 230.0;
pub const FILTER_PANEL_LIST_HEIGHT: f32 = 160.0;
/// Vertical offset placing an open filter panel just below the header row.
pub const TABLE_HEADER_HEIGHT: f32 = 46.0;

pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 10.0;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => PRIMARY_600,
        button::Status::Hovered => PRIMARY_500,
        button::Status::Pressed => PRIMARY_700,
        button::Status::Disabled => GRAY_200,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_500,
        _ => WHITE,
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: match status {
            button::Status::Hovered => Shadow {
                color: SHADOW_STRONG,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            _ => Shadow::default(),
        },
        ..Default::default()
    }
}

/// Secondary button style - bordered, neutral.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => GRAY_100,
        _ => WHITE,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_400,
        _ => GRAY_800,
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_200,
        },
        ..Default::default()
    }
}

/// Ghost button style - no chrome until hovered.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(GRAY_100.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: GRAY_600,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => PRIMARY_500,
        text_input::Status::Hovered => GRAY_400,
        _ => GRAY_200,
    };
    text_input::Style {
        background: WHITE.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: GRAY_500,
        placeholder: GRAY_400,
        value: GRAY_900,
        selection: PRIMARY_100,
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Elevated white panel with a border and drop shadow (dropdowns, modals).
pub fn panel_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Table header cell background.
pub fn header_cell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(GRAY_50.into()),
        ..Default::default()
    }
}
