use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the month-name gutter left of the grid.
pub const MONTH_LABEL_WIDTH: u16 = 10;
/// One terminal row per month.
pub const MONTH_ROWS: u16 = 12;

/// Screen regions of the viewer. Shared by drawing and mouse hit testing
/// so both agree on where each cell is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewLayout {
    pub frame: Rect,
    pub header: Rect,
    pub labels: Rect,
    pub grid: Rect,
    pub axis: Rect,
    pub legend: Rect,
    pub footer: Rect,
}

impl ViewLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),          // Title and description
                Constraint::Length(MONTH_ROWS), // Heatmap grid
                Constraint::Length(1),          // Year ticks
                Constraint::Length(1),
                Constraint::Length(2), // Legend
                Constraint::Min(0),
                Constraint::Length(1), // Key help
            ])
            .split(area);

        let gutter = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(MONTH_LABEL_WIDTH), Constraint::Min(0)])
                .split(row)
        };
        let grid_row = gutter(rows[1]);
        let axis_row = gutter(rows[2]);

        Self {
            frame: area,
            header: rows[0],
            labels: grid_row[0],
            grid: grid_row[1],
            axis: axis_row[1],
            legend: rows[4],
            footer: rows[6],
        }
    }

    pub const fn visible_columns(&self) -> usize {
        self.grid.width as usize
    }

    /// Grid slot under a terminal position as `(column offset, month row)`.
    pub const fn hit(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let grid = self.grid;
        if x < grid.x || y < grid.y || x >= grid.x + grid.width || y >= grid.y + grid.height {
            return None;
        }
        Some(((x - grid.x) as usize, (y - grid.y) as usize))
    }

    /// Inverse of [`ViewLayout::hit`].
    pub fn position_of(&self, column_offset: usize, row: usize) -> Option<(u16, u16)> {
        let x = u16::try_from(column_offset).ok()?;
        let y = u16::try_from(row).ok()?;
        (x < self.grid.width && y < self.grid.height).then_some((self.grid.x + x, self.grid.y + y))
    }
}

/// First visible column after moving the cursor, scrolling only as far as
/// needed to keep it on screen.
pub const fn follow_cursor(first: usize, cursor: usize, visible: usize, total: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    let mut first = if cursor < first {
        cursor
    } else if cursor >= first + visible {
        cursor + 1 - visible
    } else {
        first
    };
    let max_first = total.saturating_sub(visible);
    if first > max_first {
        first = max_first;
    }
    first
}
