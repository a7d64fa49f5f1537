pub mod panels;
pub mod plot;

use eframe::egui::Color32;
use spotify_dashboard::color::Rgb;

/// Heading colour (Tailwind red-500).
pub const HEADING_RED: Color32 = Color32::from_rgb(239, 68, 68);

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
