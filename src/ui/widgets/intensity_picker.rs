//! Row of intensity buttons.

use egui::{Color32, RichText, Ui, Vec2};

use crate::ui::theme::{accents, intensity_colors};
use crate::workouts::Intensity;

/// Show one button per intensity level, updating `selected` on click.
///
/// Returns true if the selection changed.
pub fn intensity_picker(ui: &mut Ui, selected: &mut Intensity) -> bool {
    let mut changed = false;
    let spacing = ui.spacing().item_spacing.x;
    let width = ((ui.available_width() - spacing * 3.0) / 4.0).max(72.0);

    ui.horizontal(|ui| {
        for level in Intensity::ALL {
            let is_selected = *selected == level;
            let fill = if is_selected {
                intensity_colors::color(level)
            } else {
                accents::SLATE
            };
            let text_color = if is_selected {
                Color32::from_rgb(17, 24, 39)
            } else {
                Color32::WHITE
            };
            let height = if is_selected { 64.0 } else { 56.0 };

            let text = RichText::new(format!("{}\n{}", level.emoji(), level.label()))
                .size(14.0)
                .strong()
                .color(text_color);

            let button = egui::Button::new(text).fill(fill).corner_radius(10.0);
            if ui.add_sized(Vec2::new(width, height), button).clicked() && !is_selected {
                *selected = level;
                changed = true;
            }
        }
    });

    changed
}
