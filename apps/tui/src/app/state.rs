use std::time::Instant;

use heatmap_core::{Cell, HeatmapChart, Month, TooltipState, TransitionClock};
use ratatui::layout::Rect;

use crate::ui::layout::{follow_cursor, ViewLayout};

/// Tooltip offset from the pointer, in terminal cells.
pub const TOOLTIP_OFFSET_CELLS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    /// Index into `HeatmapChart::years`.
    pub column: usize,
    pub month: Month,
}

pub struct App {
    pub running: bool,
    pub chart: HeatmapChart,
    pub layout: ViewLayout,
    pub cursor: GridCursor,
    pub first_column: usize,
    pub tooltip: TooltipState,
    pub reveal: TransitionClock,
    started: Instant,
}

impl App {
    pub fn new(chart: HeatmapChart) -> Self {
        let reveal = TransitionClock::new(chart.options.transition_ms);
        Self {
            running: true,
            chart,
            layout: ViewLayout::default(),
            cursor: GridCursor {
                column: 0,
                month: Month::January,
            },
            first_column: 0,
            tooltip: TooltipState::Hidden,
            reveal,
            started: Instant::now(),
        }
    }

    /// Advance the entry transition.
    pub fn update(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.reveal.tick(now_ms);
    }

    pub fn resize(&mut self, area: Rect) {
        if self.layout.frame != area {
            self.layout = ViewLayout::compute(area);
            self.scroll_to_cursor();
        }
    }

    pub fn column_count(&self) -> usize {
        self.chart.years.len()
    }

    pub fn year_at(&self, column: usize) -> Option<i32> {
        self.chart.years.get(column).copied()
    }

    /// Columns drawn so far by the left-to-right reveal.
    pub fn revealed_columns(&self) -> usize {
        let total = self.column_count();
        ((self.reveal.progress() * total as f64).ceil() as usize).min(total)
    }

    pub fn visible_columns(&self) -> std::ops::Range<usize> {
        let end = (self.first_column + self.layout.visible_columns()).min(self.column_count());
        self.first_column.min(end)..end
    }

    pub fn cell(&self, column: usize, month: Month) -> Option<&Cell> {
        self.year_at(column)
            .and_then(|year| self.chart.cell_at(year, month))
    }

    pub fn selected_cell(&self) -> Option<&Cell> {
        self.cell(self.cursor.column, self.cursor.month)
    }

    /// Keyboard navigation: move, scroll into view and show the tooltip as
    /// if the pointer sat on the cursor cell.
    pub fn move_cursor(&mut self, column: usize, month: Month) {
        let last = self.column_count().saturating_sub(1);
        self.cursor = GridCursor {
            column: column.min(last),
            month,
        };
        self.scroll_to_cursor();

        let offset = self.cursor.column.saturating_sub(self.first_column);
        let pointer = self.layout.position_of(offset, month.index());
        match (self.selected_cell().cloned(), pointer) {
            (Some(cell), Some((x, y))) => {
                self.tooltip
                    .enter(&cell, (f64::from(x), f64::from(y)), TOOLTIP_OFFSET_CELLS);
            }
            _ => self.tooltip.exit(),
        }
    }

    /// Mouse movement. Leaving the grid or an empty slot hides the tooltip.
    pub fn hover(&mut self, x: u16, y: u16) {
        let target = self.layout.hit(x, y).and_then(|(offset, row)| {
            let column = self.first_column + offset;
            let month = Month::from_index(row)?;
            (column < self.column_count()).then_some((column, month))
        });

        let Some((column, month)) = target else {
            self.tooltip.exit();
            return;
        };

        self.cursor = GridCursor { column, month };
        match self.cell(column, month).cloned() {
            Some(cell) => {
                self.tooltip
                    .enter(&cell, (f64::from(x), f64::from(y)), TOOLTIP_OFFSET_CELLS);
            }
            None => self.tooltip.exit(),
        }
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip.exit();
    }

    fn scroll_to_cursor(&mut self) {
        self.first_column = follow_cursor(
            self.first_column,
            self.cursor.column,
            self.layout.visible_columns(),
            self.column_count(),
        );
    }
}
