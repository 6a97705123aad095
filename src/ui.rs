use crate::renderer::batch::ScreenLabel;

/// Text overlay for body names.
pub struct Ui {
    font_size: f32,
}

impl Ui {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Paint each label with its baseline starting at the projected anchor,
    /// like a raster-positioned bitmap string.
    pub fn show(&self, ctx: &egui::Context, labels: &[ScreenLabel]) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("body_labels_painter"),
        ));
        let font_id = egui::FontId::monospace(self.font_size);
        // Labels are placed in physical pixels, egui works in points.
        let pixels_per_point = ctx.pixels_per_point();

        for label in labels {
            let pos = egui::pos2(
                label.position[0] / pixels_per_point,
                label.position[1] / pixels_per_point,
            );
            painter.text(
                pos,
                egui::Align2::LEFT_BOTTOM,
                label.text,
                font_id.clone(),
                egui::Color32::WHITE,
            );
        }
    }
}
