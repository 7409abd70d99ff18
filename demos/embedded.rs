//! Example: Embed the dashboard inside a parent eframe application
//!
//! What it demonstrates
//! - Constructing a `DashboardApp` directly with `DashboardApp::with_tweets`.
//! - Driving it from a host frame loop via `update_ui`, composing with the
//!   host's own panels on the same egui context.
//!
//! How to run
//! ```bash
//! cargo run --example embedded
//! ```

use eframe::egui;
use sentiplot::{load_tweets_from_path, DashboardApp, DashboardConfig};

struct Host {
    dashboard: DashboardApp,
    frames: u64,
}

impl eframe::App for Host {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Host chrome first; the dashboard's panels fill what remains.
        egui::TopBottomPanel::top("host_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Host application");
                ui.separator();
                ui.label(format!("frame {}", self.frames));
            });
        });
        self.frames += 1;

        self.dashboard.update_ui(ctx);
    }
}

fn main() -> eframe::Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/sample_tweets.json");
    let tweets = load_tweets_from_path(std::path::Path::new(path)).unwrap_or_default();

    let mut config = DashboardConfig::default();
    config.title = "Sentiplot (embedded)".to_string();
    let dashboard = DashboardApp::with_tweets(config, tweets);

    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default().with_inner_size([1200.0, 760.0]);
    eframe::run_native(
        "Embedded dashboard",
        opts,
        Box::new(|_cc| Ok(Box::new(Host { dashboard, frames: 0 }))),
    )
}
