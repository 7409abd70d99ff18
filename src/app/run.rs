//! Top-level entry points for running the dashboard as a native window.

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::tweet::TweetPoint;

use super::DashboardApp;

/// Launch the dashboard in a native window with no data loaded; the user
/// opens a JSON file through the menu. Blocks until the window is closed.
pub fn run_dashboard(config: DashboardConfig) -> eframe::Result<()> {
    run_app(config, Vec::new())
}

/// Launch the dashboard pre-loaded with `tweets` (layout runs before the
/// first frame). Blocks until the window is closed.
pub fn run_dashboard_with_tweets(
    config: DashboardConfig,
    tweets: Vec<TweetPoint>,
) -> eframe::Result<()> {
    run_app(config, tweets)
}

fn run_app(mut config: DashboardConfig, tweets: Vec<TweetPoint>) -> eframe::Result<()> {
    let title = config.title.clone();
    let mut opts = config
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set the application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Default window size: canvas plus the side panel and chrome.
    if opts.viewport.inner_size.is_none() {
        let size = egui::vec2(
            config.canvas.width + 320.0,
            config.canvas.height + 80.0,
        );
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    let app = DashboardApp::with_tweets(config, tweets);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
