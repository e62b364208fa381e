use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::axis::{Axis, Orientation};
use crate::color::{ColorScale, Rgb};
use crate::format::format_integer;
use crate::scale::BandScale;

pub const LEGEND_SAMPLES: usize = 5;
pub const SWATCH_SIZE: f64 = 20.0;
/// Room under the swatch row for the legend axis.
pub const LEGEND_AXIS_HEIGHT: f64 = 20.0;
pub const LEGEND_PADDING: f64 = 10.0;

/// How the five legend temperatures are picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendMode {
    /// Minimum, the three quartiles and the maximum of the temperature range.
    #[default]
    Quantiles,
    /// Minimum and maximum with the three inner values taken as offsets
    /// from zero rather than from the minimum, as the first published
    /// chart did.
    Verbatim,
}

impl LegendMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quantiles => "quantiles",
            Self::Verbatim => "verbatim",
        }
    }

    pub fn samples(self, min: f64, max: f64) -> [f64; LEGEND_SAMPLES] {
        let span = max - min;
        match self {
            Self::Quantiles => [
                min,
                min + span / 4.0,
                min + span / 2.0,
                min + span * 3.0 / 4.0,
                max,
            ],
            Self::Verbatim => [min, span / 4.0, span / 2.0, span / 2.0 + span / 4.0, max],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown legend mode {0:?}, expected \"quantiles\" or \"verbatim\"")]
pub struct ParseLegendModeError(pub String);

impl FromStr for LegendMode {
    type Err = ParseLegendModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quantiles" | "quartiles" => Ok(Self::Quantiles),
            "verbatim" | "original" => Ok(Self::Verbatim),
            _ => Err(ParseLegendModeError(s.to_string())),
        }
    }
}

impl fmt::Display for LegendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub temperature: f64,
    pub fill: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub swatches: Vec<Swatch>,
    pub axis: Axis,
    pub width: f64,
    pub height: f64,
    /// Left padding applied to both the swatch row and the axis.
    pub padding: f64,
}

impl Legend {
    pub fn build(mode: LegendMode, colors: &ColorScale) -> Self {
        let (min, max) = colors.domain;
        let samples = mode.samples(min, max);

        let swatches = samples
            .iter()
            .enumerate()
            .map(|(i, &temperature)| Swatch {
                x: i as f64 * SWATCH_SIZE,
                temperature,
                fill: colors.apply(temperature),
            })
            .collect::<Vec<_>>();

        let row_width = SWATCH_SIZE * LEGEND_SAMPLES as f64;
        let band = BandScale::new(samples, (0.0, row_width));
        let axis = Axis::band(Orientation::Bottom, &band, |value| format_integer(*value));

        Self {
            swatches,
            axis,
            width: row_width + LEGEND_PADDING * 2.0,
            height: SWATCH_SIZE + LEGEND_AXIS_HEIGHT,
            padding: LEGEND_PADDING,
        }
    }
}
