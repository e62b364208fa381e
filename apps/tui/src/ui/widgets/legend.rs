use heatmap_core::format::format_integer;
use heatmap_core::{Legend, LegendMode};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::terminal_color;

const SWATCH: &str = "████";
const SWATCH_WIDTH: usize = 5;
const GUTTER: usize = 12;

/// Swatch row followed by the integer label of each swatch.
pub fn legend_lines(legend: &Legend, mode: LegendMode) -> Vec<Line<'static>> {
    let mut swatches = vec![Span::styled(
        format!("{:<GUTTER$}", "Legend"),
        Style::default().fg(Color::Gray),
    )];
    let mut labels = format!("{:<GUTTER$}", format!("({mode})"));

    for swatch in &legend.swatches {
        swatches.push(Span::styled(
            SWATCH,
            Style::default().fg(terminal_color(swatch.fill)),
        ));
        swatches.push(Span::raw(" "));
        labels.push_str(&format!(
            "{:<width$}",
            format_integer(swatch.temperature),
            width = SWATCH_WIDTH
        ));
    }

    vec![
        Line::from(swatches),
        Line::styled(labels.trim_end().to_string(), Style::default().fg(Color::Gray)),
    ]
}
