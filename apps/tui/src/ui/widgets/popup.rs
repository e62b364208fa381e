use heatmap_core::TooltipState;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Rectangle of `width`×`height` with its corner at `(left, top)`, pulled
/// back inside `bounds` when it would spill over an edge.
pub fn anchored_rect(left: u16, top: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect {
        x: left.clamp(bounds.x, max_x),
        y: top.clamp(bounds.y, max_y),
        width,
        height,
    }
}

pub fn render_tooltip(state: &TooltipState, f: &mut Frame<'_>, bounds: Rect) {
    let TooltipState::Shown { tooltip, left, top } = state else {
        return;
    };
    let lines = tooltip.lines();
    let text_width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(text_width + 4).unwrap_or(u16::MAX);

    let area = anchored_rect(
        left.max(0.0) as u16,
        top.max(0.0) as u16,
        width,
        4,
        bounds,
    );

    let body: Vec<Line<'_>> = lines.iter().map(|line| Line::from(*line)).collect();
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        ),
        area,
    );
}
