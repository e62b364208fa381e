use heatmap_core::format::format_integer;
use heatmap_core::scale::ticks;
use heatmap_core::Month;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::terminal_color;
use crate::app::App;

const CELL: &str = "█";
const CURSOR: &str = "▓";
/// Roughly one year tick per this many columns.
const COLUMNS_PER_TICK: usize = 8;

pub fn month_labels() -> Vec<Line<'static>> {
    Month::ALL
        .iter()
        .map(|month| Line::from(month.label()))
        .collect()
}

/// One line per month covering the visible years. Columns the reveal has
/// not reached yet and years without a reading stay blank.
pub fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let revealed = app.revealed_columns();
    let columns = app.visible_columns();

    Month::ALL
        .iter()
        .map(|&month| {
            let spans = columns
                .clone()
                .map(|column| {
                    let cell = (column < revealed)
                        .then(|| app.cell(column, month))
                        .flatten();
                    let Some(cell) = cell else {
                        return Span::raw(" ");
                    };
                    let selected = app.tooltip.is_visible()
                        && app.cursor.column == column
                        && app.cursor.month == month;
                    if selected {
                        Span::styled(
                            CURSOR,
                            Style::default()
                                .fg(terminal_color(cell.fill))
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(CELL, Style::default().fg(terminal_color(cell.fill)))
                    }
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

/// Year tick labels positioned under their columns. `years` are the visible
/// columns in order; labels that would overlap are dropped.
pub fn axis_line(years: &[i32], width: usize) -> String {
    let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
        return String::new();
    };
    let count = (years.len() / COLUMNS_PER_TICK).max(1);
    let mut line = vec![' '; width.min(years.len())];
    let mut next_free = 0;

    for tick in ticks(f64::from(first), f64::from(last), count) {
        let year = tick as i32;
        let Ok(column) = years.binary_search(&year) else {
            continue;
        };
        let label: Vec<char> = format_integer(tick).chars().collect();
        if column < next_free || column + label.len() > line.len() {
            continue;
        }
        line[column..column + label.len()].copy_from_slice(&label);
        next_free = column + label.len() + 1;
    }

    line.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{axis_line, grid_lines, month_labels, CELL};
    use crate::app::state::tests::sample_app;

    #[test]
    fn twelve_month_rows() {
        let labels = month_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[8].to_string(), "September");
    }

    #[test]
    fn ticks_sit_under_their_year() {
        let years: Vec<i32> = (1753..=1852).collect();
        let line = axis_line(&years, 100);

        assert_eq!(line.chars().count(), 100);
        assert!(line.starts_with("       1760      1770"));
        // 1850 would run past the edge.
        assert!(line.trim_end().ends_with("1840"));
    }

    #[test]
    fn overlapping_labels_are_dropped() {
        let years: Vec<i32> = (2000..2006).collect();
        let line = axis_line(&years, 6);
        assert_eq!(line, "2000  ");
    }

    #[test]
    fn grid_reveals_left_to_right() {
        let mut app = sample_app();
        let hidden = grid_lines(&app);
        assert!(hidden.iter().all(|line| !line.to_string().contains(CELL)));

        app.reveal.tick(0.0);
        for step in 1..=5 {
            app.reveal.tick(f64::from(step) * 100.0);
        }
        let lines = grid_lines(&app);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].to_string().chars().count(), 30);
        assert_eq!(lines[0].to_string(), CELL.repeat(30));
        // 1920 July is missing.
        assert_eq!(lines[6].to_string().chars().nth(20), Some(' '));
    }
}
