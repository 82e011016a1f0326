use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::ui::model::UiRenderData;

use super::panel::render_panel;
use super::theme::{
    ACCENT_SELECTED_RGB, HEADER_HEIGHT, PANEL_HEIGHT, UI_MARGIN, app_background_style, label_style,
    rgb, style_color,
};

const KEY_HINTS: &str = "↑/↓ select · enter submit · a submit all · q quit";

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(size);

    let (header_chunk, body_chunk) = match chunks.as_ref() {
        [a, b] => (*a, *b),
        _ => return,
    };

    render_header(f, data, header_chunk);
    render_panels(f, data, body_chunk);
}

/// Panels that fit in `height` rows, scrolled so `selected` stays visible.
#[must_use]
pub fn visible_range(total: usize, selected: usize, height: u16) -> Range<usize> {
    let per_screen = usize::from(height / PANEL_HEIGHT).max(1);
    let selected = selected.min(total.saturating_sub(1));
    let start = selected.saturating_sub(per_screen.saturating_sub(1));
    let end = start.saturating_add(per_screen).min(total);
    start..end
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "cacheprobe ",
            style_color(data.no_color, rgb(ACCENT_SELECTED_RGB)),
        ),
        Span::styled(data.base_url.clone(), label_style(data.no_color)),
    ]);
    let hints = Line::from(Span::styled(KEY_HINTS, label_style(data.no_color)));
    f.render_widget(
        Paragraph::new(vec![title, hints]).style(app_background_style(data.no_color)),
        area,
    );
}

fn render_panels<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let range = visible_range(data.panels.len(), data.selected, area.height);
    let Some(visible) = data.panels.get(range.clone()) else {
        return;
    };
    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(PANEL_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for ((index, panel), row) in range.zip(visible).zip(rows.iter()) {
        render_panel(f, panel, index == data.selected, data.no_color, *row);
    }
}
