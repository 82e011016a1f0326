use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::model::{PanelStatus, PanelView};

use super::theme::{
    ACCENT_AMBER_RGB, ACCENT_GREEN_RGB, ACCENT_RED_RGB, LABEL_WIDTH, label_style,
    panel_block_style, panel_border_style, rgb, style_color,
};

pub(super) fn render_panel<B: Backend>(
    f: &mut Frame<'_, B>,
    panel: &PanelView,
    selected: bool,
    no_color: bool,
    area: Rect,
) {
    let status_style = match &panel.status {
        PanelStatus::Ok { .. } => style_color(no_color, rgb(ACCENT_GREEN_RGB)),
        PanelStatus::Unavailable { .. } | PanelStatus::InFlight => {
            style_color(no_color, rgb(ACCENT_AMBER_RGB))
        }
        PanelStatus::Failed { .. } => style_color(no_color, rgb(ACCENT_RED_RGB)),
        PanelStatus::Idle => label_style(no_color),
    };

    let mut lines = vec![
        row("Method:", panel.method.clone(), Style::default(), no_color),
        row("Request:", panel.url.clone(), Style::default(), no_color),
        row("Duration:", panel.duration_text(), status_style, no_color),
        row("Status:", panel.status_text(), status_style, no_color),
        row("Headers:", panel.headers.clone(), Style::default(), no_color),
        row("Payload:", panel.payload.clone(), Style::default(), no_color),
    ];
    if let Some(response) = panel.response.as_ref() {
        lines.push(row(
            "Response:",
            response.clone(),
            label_style(no_color),
            no_color,
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color, selected))
        .title(if selected { " submit ⏎ " } else { "" });
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(panel_block_style(no_color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn row(label: &'static str, value: String, value_style: Style, no_color: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style(no_color)),
        Span::styled(value, value_style),
    ])
}
