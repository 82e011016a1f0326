use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const HEADER_HEIGHT: u16 = 2;
/// Rows taken by one request panel, borders included.
pub const PANEL_HEIGHT: u16 = 9;
pub(super) const LABEL_WIDTH: usize = 10;
pub(super) const APP_BG_RGB: (u8, u8, u8) = (0x03, 0x07, 0x12);
pub(super) const PANEL_BG_RGB: (u8, u8, u8) = (0x1f, 0x29, 0x37);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0x37, 0x41, 0x51);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_SELECTED_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_GREEN_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_AMBER_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
pub(super) const ACCENT_RED_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(APP_BG_RGB))
    }
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(PANEL_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool, selected: bool) -> Style {
    match (no_color, selected) {
        (true, true) => Style::default().add_modifier(Modifier::BOLD),
        (true, false) => Style::default(),
        (false, true) => Style::default()
            .fg(rgb(ACCENT_SELECTED_RGB))
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(rgb(PANEL_BORDER_RGB)),
    }
}

pub(super) fn label_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_MUTED_RGB))
}
