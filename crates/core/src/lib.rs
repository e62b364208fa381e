//! Chart model for the global land-surface temperature heatmap.
//!
//! Everything here is pure: a [`Dataset`] goes in, a [`HeatmapChart`] with
//! scales, axes, cells, legend and tooltip text comes out. The browser and
//! terminal front-ends only draw what this crate has laid out.

pub mod axis;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod format;
pub mod legend;
pub mod scale;
pub mod tooltip;
pub mod transition;

pub use axis::{Axis, Orientation, Tick};
pub use chart::{Cell, CellRect, ChartOptions, HeatmapChart, Insets};
pub use color::{ColorScale, Rgb};
pub use dataset::{DataPoint, Dataset, DatasetError, Month, DATASET_URL};
pub use legend::{Legend, LegendMode};
pub use tooltip::{Tooltip, TooltipState, TOOLTIP_OFFSET_PX};
pub use transition::TransitionClock;
