pub mod heatmap;
pub mod legend;
pub mod popup;

use heatmap_core::Rgb;
use ratatui::style::Color;

pub const fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
