//! The drawing surface: paint one dot per tweet, hit-test hover and clicks.

use egui::{Color32, Pos2, Sense, Stroke, StrokeKind};

use super::DashboardApp;

impl DashboardApp {
    /// Paint the canvas into `ui` and handle dot clicks.
    ///
    /// The canvas is a fixed-size allocation (`config.canvas`), repainted in
    /// full every frame. A primary click toggles the nearest dot within
    /// `point_radius` of the pointer in the selection; clicks on empty canvas
    /// are no-ops.
    pub(crate) fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let canvas = &self.config.canvas;
        let desired = egui::vec2(canvas.width, canvas.height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);
        painter.rect_stroke(
            rect,
            2.0,
            Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
            StrokeKind::Inside,
        );

        let centers: Vec<Pos2> = self
            .tweets
            .iter()
            .map(|t| rect.min + egui::vec2(t.x as f32, t.y as f32))
            .collect();

        // Nearest dot under the pointer, if any is within the dot radius.
        let pointer = response.hover_pos();
        let hovered = pointer.and_then(|p| {
            centers
                .iter()
                .enumerate()
                .map(|(i, c)| (i, c.distance(p)))
                .filter(|(_, d)| *d <= canvas.point_radius)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i)
        });

        for (i, tweet) in self.tweets.iter().enumerate() {
            let fill = self.metric.color_for(tweet);
            painter.circle_filled(centers[i], canvas.point_radius, fill);
            if self.selection.contains(&tweet.id) {
                painter.circle_stroke(
                    centers[i],
                    canvas.point_radius,
                    Stroke::new(canvas.outline_width, Color32::BLACK),
                );
            }
        }

        if let Some(i) = hovered {
            ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
            let tweet = &self.tweets[i];
            response.clone().on_hover_ui(|ui| {
                ui.label(tweet.raw_text.clone());
                ui.small(format!(
                    "sentiment {:.2} · subjectivity {:.2}",
                    tweet.sentiment, tweet.subjectivity
                ));
            });
        }

        if response.clicked() {
            if let Some(i) = hovered {
                let id = self.tweets[i].id.clone();
                self.selection.toggle(id);
            }
        }
    }
}
