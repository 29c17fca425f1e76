use eframe::egui::{self, Color32, Visuals};
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Theme – the two-option light/dark mode
// ---------------------------------------------------------------------------

/// Line color for the trend chart (deep sky blue).
pub const TREND_LINE: Color32 = Color32::from_rgb(0x00, 0xBF, 0xFF);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Background and text colors per mode.
    fn colors(&self) -> (Color32, Color32) {
        match self {
            Theme::Light => (
                Color32::from_rgb(0xf4, 0xf6, 0xf9),
                Color32::from_rgb(0x0a, 0x2f, 0x5c),
            ),
            Theme::Dark => (
                Color32::from_rgb(0x63, 0x60, 0x60),
                Color32::WHITE,
            ),
        }
    }

    /// Install this theme's visuals on the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        };
        let (background, text) = self.colors();
        visuals.panel_fill = background;
        visuals.window_fill = background;
        visuals.extreme_bg_color = background;
        visuals.override_text_color = Some(text);
        ctx.set_visuals(visuals);
    }
}

// ---------------------------------------------------------------------------
// ColorScale: magnitude → Color32
// ---------------------------------------------------------------------------

/// Maps a numeric magnitude onto a red→blue hue ramp (lowest value red,
/// highest blue), used to color the demographic bar chart.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build a scale spanning the given values.  An empty or flat range maps
    /// every value to the midpoint color.
    pub fn new(values: &[f64]) -> Self {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        ColorScale { min, max }
    }

    /// Look up the color for a magnitude.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON || !range.is_finite() {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };

        // hue 0° (red) at the minimum, 240° (blue) at the maximum
        let hsl = Hsl::new(240.0 * t as f32, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_red_and_blue() {
        let scale = ColorScale::new(&[2.0, 5.0, 11.0]);
        let low = scale.color_for(2.0);
        let high = scale.color_for(11.0);
        // red dominates at the minimum, blue at the maximum
        assert!(low.r() > low.b());
        assert!(high.b() > high.r());
    }

    #[test]
    fn flat_range_is_safe() {
        let scale = ColorScale::new(&[7.0, 7.0]);
        // must not panic or divide by zero
        let _ = scale.color_for(7.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let scale = ColorScale::new(&[0.0, 10.0]);
        assert_eq!(scale.color_for(-5.0), scale.color_for(0.0));
        assert_eq!(scale.color_for(25.0), scale.color_for(10.0));
    }
}
