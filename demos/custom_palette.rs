//! Example: Inspect the built-in color ramps and build a custom one
//!
//! What it demonstrates
//! - Sampling `ColorScale` directly with `color_at`.
//! - Constructing a custom scale from your own stops.
//!
//! How to run
//! ```bash
//! cargo run --example custom_palette
//! ```
//! A small window draws the sentiment ramp, the subjectivity ramp, and a
//! custom purple-to-orange ramp as horizontal gradient bars.

use eframe::egui::{self, Color32};
use sentiplot::{ColorScale, SENTIMENT_SCALE, SUBJECTIVITY_SCALE};

struct PaletteDemo {
    custom: ColorScale,
}

impl PaletteDemo {
    fn gradient_bar(ui: &mut egui::Ui, scale: &ColorScale, domain: (f64, f64), label: &str) {
        ui.label(label);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 24.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let steps = 128;
        let step_w = rect.width() / steps as f32;
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            let v = domain.0 + (domain.1 - domain.0) * t;
            let x0 = rect.left() + i as f32 * step_w;
            let slice = egui::Rect::from_min_size(
                egui::pos2(x0, rect.top()),
                egui::vec2(step_w + 1.0, rect.height()),
            );
            painter.rect_filled(slice, 0.0, scale.color_at(v));
        }
        ui.add_space(8.0);
    }
}

impl eframe::App for PaletteDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Color ramps");
            ui.add_space(8.0);
            Self::gradient_bar(ui, &SENTIMENT_SCALE, (-1.0, 1.0), "Sentiment: -1 → +1");
            Self::gradient_bar(ui, &SUBJECTIVITY_SCALE, (0.0, 1.0), "Subjectivity: 0 → 1");
            Self::gradient_bar(ui, &self.custom, (0.0, 1.0), "Custom: purple → orange");
        });
    }
}

fn main() -> eframe::Result<()> {
    let custom = ColorScale::new(vec![
        (0.0, Color32::from_rgb(106, 27, 154)),
        (0.5, Color32::from_rgb(236, 236, 236)),
        (1.0, Color32::from_rgb(239, 108, 0)),
    ]);

    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default().with_inner_size([520.0, 240.0]);
    eframe::run_native(
        "Color palettes",
        opts,
        Box::new(|_cc| Ok(Box::new(PaletteDemo { custom }))),
    )
}
