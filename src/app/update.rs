//! Per-frame UI for [`DashboardApp`].
//!
//! * **[`update_ui`](DashboardApp::update_ui)** – the top-level entry point
//!   called every frame: menu bar, "Selected" side panel, central canvas,
//!   status strip, and deferred screenshot handling.
//!
//! Everything here is immediate-mode; the scene is rebuilt from the current
//! state each frame, so outlines and colors can never go stale.

use eframe::egui;
use image::{Rgba, RgbaImage};
use log::{error, info};

use crate::color_scale::ColorMetric;
use crate::data::export;

use super::DashboardApp;

impl DashboardApp {
    /// Render one frame. Public so host applications can drive the dashboard
    /// from their own eframe loop; panels compose with any chrome the host
    /// has already laid out on the same context.
    pub fn update_ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("sentiplot_menu").show(ctx, |ui| {
            self.render_menu(ui);
        });

        if self.config.show_status_bar {
            egui::TopBottomPanel::bottom("sentiplot_status").show(ctx, |ui| {
                self.render_status(ui);
            });
        }

        if self.config.show_selection_panel {
            egui::SidePanel::right("sentiplot_selected")
                .default_width(260.0)
                .show(ctx, |ui| {
                    let panel = &mut self.selection_panel;
                    panel.render(ui, &self.tweets, &mut self.selection);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });

        self.handle_screenshot_events(ctx);
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("🗁 Open JSON…").clicked() {
                    self.action_open();
                    ui.close();
                }
                if ui.button("Clear data").clicked() {
                    self.clear_data();
                    ui.close();
                }
            });

            ui.menu_button("🗐 Export", |ui| {
                let have_selection = !self.selection.is_empty();
                if ui
                    .add_enabled(have_selection, egui::Button::new("Selection as CSV…"))
                    .clicked()
                {
                    self.action_export_csv();
                    ui.close();
                }
                if ui
                    .add_enabled(have_selection, egui::Button::new("Selection as JSON…"))
                    .clicked()
                {
                    self.action_export_json();
                    ui.close();
                }
                ui.separator();
                if ui.button("🖼 Window screenshot (PNG)…").clicked() {
                    self.action_screenshot(ui.ctx());
                    ui.close();
                }
            });

            ui.separator();

            ui.label("Color by:");
            egui::ComboBox::from_id_salt("color_metric")
                .selected_text(self.metric.label())
                .show_ui(ui, |ui| {
                    for m in ColorMetric::all() {
                        ui.selectable_value(&mut self.metric, *m, m.label());
                    }
                });

            if let Some(err) = self.load_error.clone() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {err}"));
                });
            }
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.load_info {
                Some(info) => {
                    let name = info
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| info.path.display().to_string());
                    ui.label(format!(
                        "{name} — {} tweets, loaded {}",
                        self.tweets.len(),
                        info.at.format("%H:%M:%S")
                    ));
                }
                None if self.tweets.is_empty() => {
                    ui.label("No data loaded — File ▸ Open JSON…");
                }
                None => {
                    ui.label(format!("{} tweets", self.tweets.len()));
                }
            }
            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status.clone());
            }
        });
    }

    // ── Menu actions ─────────────────────────────────────────────────────────

    /// File picker → load. Cancelling the dialog is a no-op, as is a failed
    /// load beyond the banner (`load_from_path` already keeps old data).
    fn action_open(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = self.load_from_path(&path);
        }
    }

    fn action_export_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("selection.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            let selected = self.selected_tweets();
            match export::save_tweets_csv(&path, &selected) {
                Ok(()) => {
                    info!("exported {} tweets to {}", selected.len(), path.display());
                    self.status = Some(format!("Exported CSV: {}", path.display()));
                }
                Err(e) => {
                    error!("CSV export to {} failed: {e}", path.display());
                    self.status = Some(format!("CSV export failed: {e}"));
                }
            }
        }
    }

    fn action_export_json(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("selection.json")
            .add_filter("JSON", &["json"])
            .save_file()
        {
            let selected = self.selected_tweets();
            match export::save_tweets_json(&path, &selected) {
                Ok(()) => {
                    info!("exported {} tweets to {}", selected.len(), path.display());
                    self.status = Some(format!("Exported JSON: {}", path.display()));
                }
                Err(e) => {
                    error!("JSON export to {} failed: {e}", path.display());
                    self.status = Some(format!("JSON export failed: {e}"));
                }
            }
        }
    }

    /// Pick a destination, then ask egui for a viewport screenshot. The
    /// image arrives asynchronously as an event; see
    /// [`handle_screenshot_events`](Self::handle_screenshot_events).
    fn action_screenshot(&mut self, ctx: &egui::Context) {
        let default_name = format!("sentiplot_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter("PNG", &["png"])
            .save_file()
        {
            self.pending_screenshot = Some(path);
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
    }

    /// Save the most recent screenshot event to the pending destination.
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if self.pending_screenshot.is_none() {
            return;
        }
        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = image else { return };
        let Some(path) = self.pending_screenshot.take() else { return };

        let egui::ColorImage { size: [w, h], pixels, .. } = &*image;
        let (w, h) = (*w, *h);
        let mut out = RgbaImage::new(w as u32, h as u32);
        for (y, row) in pixels.chunks(w).enumerate() {
            for (x, p) in row.iter().enumerate() {
                out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }
        match out.save(&path) {
            Ok(()) => {
                info!("saved screenshot to {}", path.display());
                self.status = Some(format!("Saved screenshot: {}", path.display()));
            }
            Err(e) => {
                error!("screenshot save to {} failed: {e}", path.display());
                self.status = Some(format!("Screenshot failed: {e}"));
            }
        }
    }
}
