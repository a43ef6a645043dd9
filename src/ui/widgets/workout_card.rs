//! Card for one logged workout.

use egui::{Align, Color32, Layout, RichText, Ui};

use crate::ui::theme::{accents, intensity_colors};
use crate::workouts::format::format_date;
use crate::workouts::WorkoutRecord;

/// Renders a workout with its badges and a delete button.
pub struct WorkoutCard<'a> {
    record: &'a WorkoutRecord,
}

impl<'a> WorkoutCard<'a> {
    pub fn new(record: &'a WorkoutRecord) -> Self {
        Self { record }
    }

    /// Render the card. Returns true if delete was clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let mut delete_clicked = false;
        let record = self.record;

        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .inner_margin(16.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&record.workout_type).size(20.0).strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let delete = egui::Button::new(RichText::new("×").size(18.0))
                            .fill(accents::DELETE);
                        if ui.add(delete).on_hover_text("Delete workout").clicked() {
                            delete_clicked = true;
                        }
                    });
                });

                ui.add_space(8.0);

                ui.horizontal_wrapped(|ui| {
                    badge(ui, format!("⏱️ {} min", record.duration), None);
                    badge(
                        ui,
                        format!("{} {}", record.intensity.emoji(), record.intensity.label()),
                        Some(intensity_colors::color(record.intensity)),
                    );
                    badge(ui, format!("📅 {}", format_date(record.date)), None);
                });

                if let Some(notes) = record.notes() {
                    ui.add_space(8.0);
                    egui::Frame::new()
                        .fill(ui.visuals().extreme_bg_color)
                        .inner_margin(10.0)
                        .corner_radius(8.0)
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.label(RichText::new(notes).italics());
                        });
                }
            });

        delete_clicked
    }
}

/// Small rounded label; colored badges use dark text.
fn badge(ui: &mut Ui, text: String, fill: Option<Color32>) {
    let (fill, text_color) = match fill {
        Some(color) => (color, Color32::from_rgb(17, 24, 39)),
        None => (ui.visuals().extreme_bg_color, ui.visuals().text_color()),
    };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .corner_radius(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(13.0).strong().color(text_color));
        });
}
