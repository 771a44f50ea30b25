use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Single-series bar colour for the calories histogram.
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);

/// `n` visually distinct colours with evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.70, 0.55).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c * 255.0).round() as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Activity colours for the scatter plot
// ---------------------------------------------------------------------------

/// Fixed activity → colour assignment for the whole dataset, so an activity
/// keeps its colour when the filter changes.
#[derive(Debug, Clone)]
pub struct ActivityColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ActivityColors {
    pub fn new(activity_types: &BTreeSet<String>) -> Self {
        let mapping = activity_types
            .iter()
            .cloned()
            .zip(generate_palette(activity_types.len()))
            .collect();
        ActivityColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, activity: &str) -> Color32 {
        self.mapping
            .get(activity)
            .copied()
            .unwrap_or(self.default_color)
    }
}
