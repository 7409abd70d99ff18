//! Color scales for the two tweet metrics.
//!
//! This module contains the [`ColorMetric`] enum selecting what the dots are
//! colored by, and the piecewise-linear [`ColorScale`] gradients behind it.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::data::tweet::TweetPoint;

/// Sentiment ramp: red at -1, neutral gray at 0, green at +1.
pub static SENTIMENT_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    ColorScale::new(vec![
        (-1.0, Color32::from_rgb(255, 0, 0)),
        (0.0, NEUTRAL_GRAY),
        (1.0, Color32::from_rgb(0, 128, 0)),
    ])
});

/// Subjectivity ramp: neutral gray at 0, blue at 1.
pub static SUBJECTIVITY_SCALE: Lazy<ColorScale> =
    Lazy::new(|| ColorScale::new(vec![(0.0, NEUTRAL_GRAY), (1.0, Color32::from_rgb(68, 103, 196))]));

/// The gray both ramps share as their "nothing to report" end.
const NEUTRAL_GRAY: Color32 = Color32::from_rgb(236, 236, 236);

/// Which metric drives the dot colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMetric {
    #[default]
    Sentiment,
    Subjectivity,
}

impl ColorMetric {
    /// All metrics (useful for combo-box UIs).
    pub fn all() -> &'static [ColorMetric] {
        &[ColorMetric::Sentiment, ColorMetric::Subjectivity]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorMetric::Sentiment => "Sentiment",
            ColorMetric::Subjectivity => "Subjectivity",
        }
    }

    /// The built-in scale for this metric.
    pub fn scale(&self) -> &'static ColorScale {
        match self {
            ColorMetric::Sentiment => &SENTIMENT_SCALE,
            ColorMetric::Subjectivity => &SUBJECTIVITY_SCALE,
        }
    }

    /// The tweet field this metric reads.
    pub fn value_of(&self, point: &TweetPoint) -> f64 {
        match self {
            ColorMetric::Sentiment => point.sentiment,
            ColorMetric::Subjectivity => point.subjectivity,
        }
    }

    /// Fill color of `point` under this metric.
    pub fn color_for(&self, point: &TweetPoint) -> Color32 {
        self.scale().color_at(self.value_of(point))
    }
}

/// A piecewise-linear gradient over (domain value, color) stops.
///
/// Between neighboring stops each sRGB channel is interpolated linearly,
/// matching d3's default RGB interpolation. Inputs outside the domain clamp
/// to the end stops; non-finite inputs clamp to the low stop.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    stops: Vec<(f64, Color32)>,
}

impl ColorScale {
    /// Build a scale from stops sorted by ascending domain value.
    ///
    /// Panics when fewer than two stops are given or the stops are not
    /// strictly ascending; scales are constructed once, at startup.
    pub fn new(stops: Vec<(f64, Color32)>) -> Self {
        assert!(stops.len() >= 2, "a color scale needs at least two stops");
        assert!(
            stops.windows(2).all(|w| w[0].0 < w[1].0),
            "color scale stops must be strictly ascending"
        );
        Self { stops }
    }

    /// Color at domain value `v`.
    pub fn color_at(&self, v: f64) -> Color32 {
        let (lo, hi) = (self.stops[0].0, self.stops[self.stops.len() - 1].0);
        if !v.is_finite() || v <= lo {
            return self.stops[0].1;
        }
        if v >= hi {
            return self.stops[self.stops.len() - 1].1;
        }
        // v is strictly inside the domain, so a bracketing segment exists.
        for w in self.stops.windows(2) {
            let ((v0, c0), (v1, c1)) = (w[0], w[1]);
            if v <= v1 {
                let t = (v - v0) / (v1 - v0);
                return lerp_rgb(c0, c1, t);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}

/// Linear sRGB channel interpolation between two colors.
fn lerp_rgb(a: Color32, b: Color32, t: f64) -> Color32 {
    let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}
