//! Configuration for the dashboard window and its canvas.

use crate::layout::LayoutParams;

// ─────────────────────────────────────────────────────────────────────────────
// CanvasConfig – geometry of the drawing surface
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry of the fixed-size drawing surface the dots are painted on.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Canvas width in logical points.
    pub width: f32,
    /// Canvas height in logical points.
    pub height: f32,
    /// Inset kept free on every side; layout clamps dot centers into it.
    pub padding: f32,
    /// Radius of every dot.
    pub point_radius: f32,
    /// Stroke width of the outline drawn around selected dots.
    pub outline_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 20.0,
            point_radius: 8.0,
            outline_width: 2.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardConfig – everything the app reads at startup
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration consumed by [`DashboardApp`](crate::app::DashboardApp) and
/// [`run_dashboard`](crate::app::run_dashboard).
///
/// All state is ephemeral; nothing here is ever persisted.
pub struct DashboardConfig {
    /// Window title.
    pub title: String,
    /// Drawing surface geometry.
    pub canvas: CanvasConfig,
    /// Force-simulation parameters. When the app runs a layout, the canvas
    /// geometry wins for width/height/padding so the two cannot drift.
    pub layout: LayoutParams,
    /// Show the "Selected" side panel.
    pub show_selection_panel: bool,
    /// Show the bottom status strip.
    pub show_status_bar: bool,
    /// Native window options; `None` picks a default size that fits the
    /// canvas plus the side panel.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Sentiplot".to_string(),
            canvas: CanvasConfig::default(),
            layout: LayoutParams::default(),
            show_selection_panel: true,
            show_status_bar: true,
            native_options: None,
        }
    }
}

impl DashboardConfig {
    /// The layout parameters actually used for a run: `self.layout` with
    /// width/height/padding overridden by the canvas geometry.
    pub fn effective_layout(&self) -> LayoutParams {
        LayoutParams {
            width: self.canvas.width as f64,
            height: self.canvas.height as f64,
            padding: self.canvas.padding as f64,
            ..self.layout.clone()
        }
    }
}
