// Two-point dataset covering the first and last month of the published series.

use heatmap_core::{ChartOptions, Dataset, HeatmapChart, LegendMode, Month, Tooltip};

const JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1753, "month": 1, "variance": -6.076},
        {"year": 2015, "month": 12, "variance": 1.775}
    ]
}"#;

fn assert_close(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < 1e-9,
        "expected {expected}, got {actual}, diff {diff}"
    );
}

fn chart(mode: LegendMode) -> HeatmapChart {
    let dataset = Dataset::from_json_str(JSON).expect("dataset parses");
    let options = ChartOptions {
        legend_mode: mode,
        ..ChartOptions::default()
    };
    HeatmapChart::build(&dataset, &options).expect("chart builds")
}

#[test]
fn renders_two_cells() {
    let chart = chart(LegendMode::Quantiles);
    assert_eq!(chart.cells.len(), 2);
    assert_eq!(chart.cells[0].month_index(), 0);
    assert_eq!(chart.cells[1].month_index(), 11);
    assert_eq!(chart.cells[0].data_attributes()[1].1, "1753");
}

#[test]
fn year_axis_spans_first_to_last_year() {
    let chart = chart(LegendMode::Quantiles);
    assert_eq!(chart.year_scale.domain, (1753.0, 2015.0));
    assert_close(chart.year_scale.apply(1753.0), 0.0);
    assert_close(chart.year_scale.apply(2015.0), chart.chart_width());

    let labels: Vec<&str> = chart.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"1760"));
    assert_eq!(labels.last(), Some(&"2000"));
    assert!(labels.iter().all(|label| label.parse::<i32>().is_ok()));
}

#[test]
fn description_names_span_and_base_temperature() {
    let chart = chart(LegendMode::Quantiles);
    assert_eq!(chart.title, "Monthly Global Land-Surface Temperature");
    assert_eq!(chart.description, "1753 - 2015: base temperature 8.66\u{2103}");
}

#[test]
fn legend_spans_absolute_temperatures() {
    for mode in [LegendMode::Quantiles, LegendMode::Verbatim] {
        let chart = chart(mode);
        let swatches = &chart.legend.swatches;
        assert_eq!(swatches.len(), 5);
        assert_close(swatches[0].temperature, 2.584);
        assert_close(swatches[4].temperature, 10.435);
    }

    let chart = chart(LegendMode::Quantiles);
    let temps: Vec<f64> = chart.legend.swatches.iter().map(|s| s.temperature).collect();
    assert!(temps.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn hovering_the_last_cell() {
    let chart = chart(LegendMode::Quantiles);
    let cell = chart.cell_at(2015, Month::December).expect("cell exists");
    let tooltip = Tooltip::for_cell(cell);
    assert_eq!(tooltip.lines(), ["2015 - December", "10.4\u{2103}"]);
}
