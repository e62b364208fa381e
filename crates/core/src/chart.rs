use std::collections::HashMap;

use crate::axis::{Axis, Orientation};
use crate::color::{ColorScale, Rgb, HIGH_COLOR, LOW_COLOR};
use crate::dataset::{Dataset, DatasetError, Month};
use crate::format::{format_integer, js_number};
use crate::legend::{Legend, LegendMode};
use crate::scale::{BandScale, LinearScale};
use crate::tooltip::DEGREES_CELSIUS;
use crate::transition::{lerp, TRANSITION_DURATION_MS};

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";
/// SVG canvas width.
pub const WIDTH: f64 = 900.0;
/// SVG canvas height.
pub const HEIGHT: f64 = 500.0;

/// Margins between the canvas edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(90.0, 20.0, 10.0, 40.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub low_color: Rgb,
    pub high_color: Rgb,
    pub legend_mode: LegendMode,
    pub transition_ms: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            low_color: LOW_COLOR,
            high_color: HIGH_COLOR,
            legend_mode: LegendMode::default(),
            transition_ms: TRANSITION_DURATION_MS,
        }
    }
}

impl ChartOptions {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.left - self.insets.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.top - self.insets.bottom).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

/// One rectangle of the heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub year: i32,
    pub month: Month,
    /// Absolute temperature, base plus variance.
    pub temperature: f64,
    pub fill: Rgb,
    /// Geometry before the entry transition: the bottom-left corner, empty.
    pub start: CellRect,
    pub end: CellRect,
}

impl Cell {
    /// `data-month`, zero-based.
    pub const fn month_index(&self) -> usize {
        self.month.index()
    }

    pub fn data_attributes(&self) -> [(&'static str, String); 3] {
        [
            ("data-month", self.month_index().to_string()),
            ("data-year", self.year.to_string()),
            ("data-temp", js_number(self.temperature)),
        ]
    }

    pub fn frame(&self, progress: f64) -> CellRect {
        self.start.lerp(&self.end, progress)
    }
}

/// Everything the renderers need, computed once from a dataset.
#[derive(Clone, Debug)]
pub struct HeatmapChart {
    pub options: ChartOptions,
    pub title: String,
    pub description: String,
    pub base_temperature: f64,
    pub year_span: (i32, i32),
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    pub temperature_extent: (f64, f64),
    pub year_scale: LinearScale,
    pub month_scale: BandScale<Month>,
    pub colors: ColorScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// In dataset order.
    pub cells: Vec<Cell>,
    pub legend: Legend,
    lookup: HashMap<(i32, Month), usize>,
}

impl HeatmapChart {
    pub fn build(dataset: &Dataset, options: &ChartOptions) -> Result<Self, DatasetError> {
        dataset.validate()?;
        let year_span = dataset.year_span().ok_or(DatasetError::Empty)?;
        let temperature_extent = dataset.temperature_extent().ok_or(DatasetError::Empty)?;
        let years = dataset.years();

        let chart_width = options.plot_width();
        let chart_height = options.plot_height();

        let year_scale = LinearScale::new(
            (f64::from(year_span.0), f64::from(year_span.1)),
            (0.0, chart_width),
        );
        let month_scale = BandScale::new(Month::ALL, (0.0, chart_height));
        let colors = ColorScale::new(temperature_extent, options.low_color, options.high_color);

        let x_axis = Axis::linear(Orientation::Bottom, &year_scale, format_integer);
        let y_axis = Axis::band(Orientation::Left, &month_scale, |month| {
            month.label().to_string()
        });

        let cell_width = chart_width / years.len().max(1) as f64;
        let cell_height = month_scale.bandwidth();
        let start = CellRect {
            x: 0.0,
            y: chart_height,
            width: 0.0,
            height: 0.0,
        };

        let mut cells = Vec::with_capacity(dataset.monthly_variance.len());
        let mut lookup = HashMap::with_capacity(dataset.monthly_variance.len());
        for point in &dataset.monthly_variance {
            let Some(month) = point.month_of_year() else {
                continue;
            };
            let temperature = dataset.absolute(point);
            let end = CellRect {
                x: year_scale.apply(f64::from(point.year)),
                y: month_scale.apply(&month).unwrap_or(0.0),
                width: cell_width,
                height: cell_height,
            };
            lookup.entry((point.year, month)).or_insert(cells.len());
            cells.push(Cell {
                year: point.year,
                month,
                temperature,
                fill: colors.apply(temperature),
                start,
                end,
            });
        }

        let legend = Legend::build(options.legend_mode, &colors);
        let description = format!(
            "{} - {}: base temperature {}{DEGREES_CELSIUS}",
            year_span.0,
            year_span.1,
            js_number(dataset.base_temperature)
        );

        Ok(Self {
            options: options.clone(),
            title: TITLE.to_string(),
            description,
            base_temperature: dataset.base_temperature,
            year_span,
            years,
            temperature_extent,
            year_scale,
            month_scale,
            colors,
            x_axis,
            y_axis,
            cells,
            legend,
            lookup,
        })
    }

    pub fn chart_width(&self) -> f64 {
        self.options.plot_width()
    }

    pub fn chart_height(&self) -> f64 {
        self.options.plot_height()
    }

    /// First cell recorded for `year` and `month`.
    pub fn cell_at(&self, year: i32, month: Month) -> Option<&Cell> {
        self.lookup
            .get(&(year, month))
            .and_then(|&index| self.cells.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartOptions, HeatmapChart};
    use crate::dataset::{DataPoint, Dataset, DatasetError, Month};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    fn dataset() -> Dataset {
        let mut monthly_variance = Vec::new();
        for year in 1900..1904 {
            for month in 1..=12 {
                monthly_variance.push(DataPoint {
                    year,
                    month,
                    variance: f64::from(year - 1900) + f64::from(month) / 10.0,
                });
            }
        }
        Dataset {
            base_temperature: 8.0,
            monthly_variance,
        }
    }

    #[test]
    fn one_cell_per_point_with_zero_based_month() {
        let data = dataset();
        let chart = HeatmapChart::build(&data, &ChartOptions::default()).unwrap();

        assert_eq!(chart.cells.len(), data.monthly_variance.len());
        for (cell, point) in chart.cells.iter().zip(&data.monthly_variance) {
            assert_eq!(cell.month_index(), usize::from(point.month) - 1);
            assert!(cell.month_index() <= 11);
            assert_eq!(cell.data_attributes()[0].1, (point.month - 1).to_string());
        }
    }

    #[test]
    fn cells_grow_from_bottom_left_to_their_slot() {
        let options = ChartOptions::default();
        let chart = HeatmapChart::build(&dataset(), &options).unwrap();
        let width = options.plot_width();
        let height = options.plot_height();

        let cell = chart.cell_at(1902, Month::March).unwrap();
        assert_close(cell.start.x, 0.0);
        assert_close(cell.start.y, height);
        assert_close(cell.start.width, 0.0);
        assert_close(cell.start.height, 0.0);

        assert_close(cell.end.x, width * 2.0 / 3.0);
        assert_close(cell.end.y, height / 12.0 * 2.0);
        assert_close(cell.end.width, width / 4.0);
        assert_close(cell.end.height, height / 12.0);

        let halfway = cell.frame(0.5);
        assert_close(halfway.y, (height + cell.end.y) / 2.0);
        assert_eq!(cell.frame(1.0), cell.end);
    }

    #[test]
    fn warmer_cells_sit_further_along_the_colour_ramp() {
        let chart = HeatmapChart::build(&dataset(), &ChartOptions::default()).unwrap();
        let cold = chart.cell_at(1900, Month::January).unwrap();
        let warm = chart.cell_at(1903, Month::December).unwrap();

        assert_eq!(cold.fill, chart.options.low_color);
        assert_eq!(warm.fill, chart.options.high_color);
        assert!(chart.colors.parameter(cold.temperature) < chart.colors.parameter(warm.temperature));
    }

    #[test]
    fn axes_cover_plot_area() {
        let chart = HeatmapChart::build(&dataset(), &ChartOptions::default()).unwrap();
        assert_eq!(chart.year_scale.domain, (1900.0, 1903.0));
        assert_eq!(chart.y_axis.ticks.len(), 12);
        assert_eq!(chart.y_axis.ticks[0].label, "January");
        assert_eq!(chart.x_axis.ticks.first().map(|t| t.label.as_str()), Some("1900"));
    }

    #[test]
    fn invalid_dataset_is_rejected() {
        let empty = Dataset {
            base_temperature: 8.0,
            monthly_variance: Vec::new(),
        };
        assert!(matches!(
            HeatmapChart::build(&empty, &ChartOptions::default()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn single_point_dataset() {
        let data = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![DataPoint {
                year: 1900,
                month: 6,
                variance: 0.5,
            }],
        };
        let options = ChartOptions::default();
        let chart = HeatmapChart::build(&data, &options).unwrap();
        let cell = &chart.cells[0];

        assert_close(cell.end.x, options.plot_width() / 2.0);
        assert_close(cell.end.width, options.plot_width());
        assert_eq!(chart.description, "1900 - 1900: base temperature 8\u{2103}");
    }
}
