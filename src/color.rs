use std::collections::HashMap;
use std::fmt;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb – renderer-agnostic colour
// ---------------------------------------------------------------------------

/// An 8-bit sRGB colour. Serialises as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GRAY: Rgb = Rgb::new(160, 160, 160);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Rgb::new(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category → Rgb
// ---------------------------------------------------------------------------

/// Maps every category observed at load to a fixed colour, so a category
/// keeps its colour whatever subset is on screen.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    /// Build a colour map; hues follow the order of `categories`.
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories
            .iter()
            .zip(palette)
            .map(|(c, rgb)| (c.as_ref().to_string(), rgb))
            .collect();

        ColorMap {
            mapping,
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the colour for a category; unknown categories are gray.
    pub fn color_for(&self, category: &str) -> Rgb {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
