use crate::chart::Cell;
use crate::format::to_fixed;

/// Distance between the pointer and the tooltip's top-left corner, in CSS px.
pub const TOOLTIP_OFFSET_PX: f64 = 10.0;
pub const DEGREES_CELSIUS: &str = "\u{2103}";

/// What the tooltip shows for one hovered cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    pub heading: String,
    pub reading: String,
}

impl Tooltip {
    pub fn for_cell(cell: &Cell) -> Self {
        Self {
            year: cell.year,
            heading: format!("{} - {}", cell.year, cell.month.label()),
            reading: format!("{}{DEGREES_CELSIUS}", to_fixed(cell.temperature, 1)),
        }
    }

    pub fn lines(&self) -> [&str; 2] {
        [&self.heading, &self.reading]
    }

    /// Top-left corner for a pointer at `(x, y)`. Callers pass client
    /// coordinates; no scroll offset is applied.
    pub fn position(pointer: (f64, f64), offset: f64) -> (f64, f64) {
        (pointer.0 + offset, pointer.1 + offset)
    }
}

/// Hover state machine for the single shared tooltip element.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown {
        tooltip: Tooltip,
        left: f64,
        top: f64,
    },
}

impl TooltipState {
    /// Pointer entered a cell. Replaces whatever was shown before.
    pub fn enter(&mut self, cell: &Cell, pointer: (f64, f64), offset: f64) {
        let (left, top) = Tooltip::position(pointer, offset);
        *self = Self::Shown {
            tooltip: Tooltip::for_cell(cell),
            left,
            top,
        };
    }

    pub fn exit(&mut self) {
        *self = Self::Hidden;
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }

    pub const fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            Self::Shown { tooltip, .. } => Some(tooltip),
            Self::Hidden => None,
        }
    }
}
