//! The "Selected" side panel: the clicked tweets, newest first.

use egui::Ui;

use crate::data::selection::Selection;
use crate::data::tweet::{TweetId, TweetPoint};

/// Side panel listing the selected tweets' raw text in selection order.
///
/// Rows resolve selection ids against the loaded tweets each frame; ids left
/// over from before a reload simply do not produce a row.
#[derive(Default)]
pub struct SelectionPanel {}

impl SelectionPanel {
    pub fn render(&mut self, ui: &mut Ui, tweets: &[TweetPoint], selection: &mut Selection) {
        ui.heading("Selected");
        ui.separator();

        let mut deselect: Option<TweetId> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for id in selection.iter() {
                    let Some(tweet) = tweets.iter().find(|t| &t.id == id) else {
                        continue;
                    };
                    ui.horizontal_top(|ui| {
                        ui.vertical(|ui| {
                            ui.label(tweet.raw_text.clone());
                            let month = tweet.month_label().unwrap_or("—");
                            ui.small(format!(
                                "{month} · sentiment {:.2} · subjectivity {:.2}",
                                tweet.sentiment, tweet.subjectivity
                            ));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if ui.small_button("✕").on_hover_text("Deselect").clicked() {
                                deselect = Some(tweet.id.clone());
                            }
                        });
                    });
                    ui.separator();
                }
                if selection.is_empty() {
                    ui.weak("Click a dot to select it.");
                }
            });

        if let Some(id) = deselect {
            selection.toggle(id);
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("{} selected", selection.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!selection.is_empty(), egui::Button::new("Clear"))
                    .clicked()
                {
                    selection.clear();
                }
            });
        });
    }
}
