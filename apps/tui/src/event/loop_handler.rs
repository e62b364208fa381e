use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use heatmap_core::format::{format_integer, to_fixed};
use heatmap_core::tooltip::DEGREES_CELSIUS;
use heatmap_core::{Dataset, HeatmapChart};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_key, handle_mouse, App};
use crate::ui;

/// Print the dataset summary instead of opening the viewer.
pub fn run_headless(dataset: &Dataset, chart: &HeatmapChart, source: &str, json: bool) -> Result<()> {
    let summary = build_summary(dataset, chart, source);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary_text(&summary));
    }
    Ok(())
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessSummary {
    title: String,
    description: String,
    source: String,
    points: usize,
    first_year: i32,
    last_year: i32,
    distinct_years: usize,
    years_ordered: bool,
    base_temperature: f64,
    min_temperature: f64,
    max_temperature: f64,
    legend_mode: &'static str,
    legend_samples: Vec<f64>,
}

fn build_summary(dataset: &Dataset, chart: &HeatmapChart, source: &str) -> HeadlessSummary {
    let (first_year, last_year) = chart.year_span;
    let (min_temperature, max_temperature) = chart.temperature_extent;
    HeadlessSummary {
        title: chart.title.clone(),
        description: chart.description.clone(),
        source: source.to_string(),
        points: chart.cells.len(),
        first_year,
        last_year,
        distinct_years: chart.years.len(),
        years_ordered: dataset.is_year_ordered(),
        base_temperature: chart.base_temperature,
        min_temperature,
        max_temperature,
        legend_mode: chart.options.legend_mode.as_str(),
        legend_samples: chart
            .legend
            .swatches
            .iter()
            .map(|swatch| swatch.temperature)
            .collect(),
    }
}

fn render_summary_text(summary: &HeadlessSummary) -> String {
    let ordering = if summary.years_ordered {
        "ordered"
    } else {
        "unordered"
    };
    let samples = summary
        .legend_samples
        .iter()
        .map(|&value| format_integer(value))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", summary.title));
    out.push_str(&format!("{}\n", "=".repeat(summary.title.chars().count())));
    out.push_str(&format!("{}\n", summary.description));
    out.push_str(&format!("Source: {}\n", summary.source));
    out.push_str(&format!("Data points: {}\n", summary.points));
    out.push_str(&format!(
        "Years: {} - {} ({} distinct, {ordering})\n",
        summary.first_year, summary.last_year, summary.distinct_years
    ));
    out.push_str(&format!(
        "Temperature range: {}{DEGREES_CELSIUS} to {}{DEGREES_CELSIUS}\n",
        to_fixed(summary.min_temperature, 1),
        to_fixed(summary.max_temperature, 1)
    ));
    out.push_str(&format!("Legend ({}): {samples}\n", summary.legend_mode));
    out
}

/// Run the interactive viewer until the user quits.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| {
            app.resize(f.area());
            ui::ui(app, f);
        }) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
                Ok(Event::FocusLost) => app.hide_tooltip(),
                // Layout is recomputed from the frame on the next draw.
                Ok(_) | Err(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build_summary, render_summary_text};
    use heatmap_core::{ChartOptions, Dataset, HeatmapChart};

    const TWO_POINTS: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -6.076},
            {"year": 2015, "month": 12, "variance": 1.775}
        ]
    }"#;

    fn summary() -> super::HeadlessSummary {
        let dataset = Dataset::from_json_str(TWO_POINTS).unwrap();
        let chart = HeatmapChart::build(&dataset, &ChartOptions::default()).unwrap();
        build_summary(&dataset, &chart, "fixture.json")
    }

    #[test]
    fn summary_covers_dataset() {
        let summary = summary();
        assert_eq!(summary.points, 2);
        assert_eq!((summary.first_year, summary.last_year), (1753, 2015));
        assert_eq!(summary.distinct_years, 2);
        assert!(summary.years_ordered);
        assert_eq!(summary.legend_samples.len(), 5);
    }

    #[test]
    fn text_summary() {
        let text = render_summary_text(&summary());
        assert!(text.contains("1753 - 2015: base temperature 8.66\u{2103}"));
        assert!(text.contains("Years: 1753 - 2015 (2 distinct, ordered)"));
        assert!(text.contains("Temperature range: 2.6\u{2103} to 10.4\u{2103}"));
        assert!(text.contains("Legend (quantiles): 3, 5, 7, 8, 10"));
    }

    #[test]
    fn json_summary_uses_snake_case_fields() {
        let value = serde_json::to_value(summary()).unwrap();
        assert_eq!(value["points"], 2);
        assert_eq!(value["legend_mode"], "quantiles");
        assert_eq!(value["source"], "fixture.json");
    }
}
