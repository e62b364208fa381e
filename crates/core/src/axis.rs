//! Axis layout in SVG user units: the domain path, and per tick its
//! position, transform and label.

use crate::format::js_number;
use crate::scale::{BandScale, LinearScale, DEFAULT_TICK_COUNT};

const TICK_SIZE_INNER: f64 = 6.0;
const TICK_SIZE_OUTER: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift that keeps 1px lines crisp.
const PIXEL_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

impl Orientation {
    const fn direction(self) -> f64 {
        match self {
            Self::Bottom => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Attribute that carries tick length and label distance.
    pub const fn cross_attr(self) -> &'static str {
        match self {
            Self::Bottom => "y",
            Self::Left => "x",
        }
    }

    pub const fn text_anchor(self) -> &'static str {
        match self {
            Self::Bottom => "middle",
            Self::Left => "end",
        }
    }

    pub const fn label_dy(self) -> &'static str {
        match self {
            Self::Bottom => "0.71em",
            Self::Left => "0.32em",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, before the pixel offset.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Axis for a linear scale with its default tick values.
    pub fn linear(
        orientation: Orientation,
        scale: &LinearScale,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let ticks = scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                position: scale.apply(value),
                label: format(value),
            })
            .collect();
        Self {
            orientation,
            range: scale.range,
            ticks,
        }
    }

    /// Axis with one tick per band, centred in the band.
    pub fn band<T: PartialEq + Clone>(
        orientation: Orientation,
        scale: &BandScale<T>,
        format: impl Fn(&T) -> String,
    ) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|value| {
                scale.center(value, PIXEL_OFFSET).map(|position| Tick {
                    position,
                    label: format(value),
                })
            })
            .collect();
        Self {
            orientation,
            range: scale.range(),
            ticks,
        }
    }

    /// `d` attribute of the `path.domain` element.
    pub fn domain_path(&self) -> String {
        let outer = js_number(self.orientation.direction() * TICK_SIZE_OUTER);
        let offset = js_number(PIXEL_OFFSET);
        let start = js_number(self.range.0 + PIXEL_OFFSET);
        let end = js_number(self.range.1 + PIXEL_OFFSET);
        match self.orientation {
            Orientation::Bottom => format!("M{start},{outer}V{offset}H{end}V{outer}"),
            Orientation::Left => format!("M{outer},{start}H{offset}V{end}H{outer}"),
        }
    }

    pub fn tick_transform(&self, tick: &Tick) -> String {
        let at = js_number(tick.position + PIXEL_OFFSET);
        match self.orientation {
            Orientation::Bottom => format!("translate({at},0)"),
            Orientation::Left => format!("translate(0,{at})"),
        }
    }

    /// Signed length of the tick line.
    pub fn tick_line_length(&self) -> f64 {
        self.orientation.direction() * TICK_SIZE_INNER
    }

    /// Signed distance from the axis line to the label.
    pub fn label_offset(&self) -> f64 {
        self.orientation.direction() * (TICK_SIZE_INNER.max(0.0) + TICK_PADDING)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Orientation};
    use crate::format::format_integer;
    use crate::scale::{BandScale, LinearScale};

    #[test]
    fn bottom_axis_geometry() {
        let scale = LinearScale::new((1753.0, 2015.0), (0.0, 900.0));
        let axis = Axis::linear(Orientation::Bottom, &scale, format_integer);

        assert_eq!(axis.domain_path(), "M0.5,6V0.5H900.5V6");
        assert_eq!(axis.ticks.first().map(|t| t.label.as_str()), Some("1760"));
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("2000"));
        assert!(axis
            .ticks
            .iter()
            .all(|tick| tick.label.chars().all(|c| c.is_ascii_digit())));
        assert_eq!(axis.tick_line_length(), 6.0);
        assert_eq!(axis.label_offset(), 9.0);
        assert_eq!(axis.orientation.cross_attr(), "y");
    }

    #[test]
    fn left_band_axis_centres_ticks() {
        let scale = BandScale::new(["A", "B"], (0.0, 100.0));
        let axis = Axis::band(Orientation::Left, &scale, |s| (*s).to_string());

        assert_eq!(axis.domain_path(), "M-6,0.5H0.5V100.5H-6");
        assert_eq!(axis.ticks.len(), 2);
        assert_eq!(axis.ticks[0].position, 24.5);
        assert_eq!(axis.tick_transform(&axis.ticks[0]), "translate(0,25)");
        assert_eq!(axis.tick_transform(&axis.ticks[1]), "translate(0,75)");
        assert_eq!(axis.tick_line_length(), -6.0);
        assert_eq!(axis.label_offset(), -9.0);
        assert_eq!(axis.orientation.text_anchor(), "end");
    }
}
