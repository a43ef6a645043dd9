//! Stat card widget for the totals row.

use egui::{Align, Color32, Layout, RichText, Stroke, Ui, Vec2};

use crate::ui::theme::accents;
use crate::workouts::WorkoutStats;

/// A single headline number with a caption.
pub struct StatCard<'a> {
    /// The value to display
    value: String,
    /// Caption under the value
    label: &'a str,
    /// Value color
    color: Color32,
    /// Draw the highlighted (just updated) variant
    highlight: bool,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card.
    pub fn new(value: impl Into<String>, label: &'a str) -> Self {
        Self {
            value: value.into(),
            label,
            color: accents::GOLD,
            highlight: false,
        }
    }

    /// Card for the total number of workouts.
    pub fn total_workouts(stats: &WorkoutStats) -> Self {
        Self::new(stats.count.to_string(), "TOTAL WORKOUTS")
    }

    /// Card for the total minutes.
    pub fn total_minutes(stats: &WorkoutStats) -> Self {
        Self::new(stats.total_minutes.to_string(), "MINUTES")
    }

    /// Card for the day streak.
    pub fn streak(stats: &WorkoutStats) -> Self {
        Self::new(format!("{} 🔥", stats.streak), "DAY STREAK")
    }

    /// Set the highlighted state.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Render the card at `width`.
    pub fn show(self, ui: &mut Ui, width: f32) {
        let (value_size, stroke) = if self.highlight {
            (46.0, Stroke::new(2.0, accents::GOLD))
        } else {
            (40.0, Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        };

        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(stroke)
            .inner_margin(16.0)
            .corner_radius(16.0)
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(width, 90.0));
                ui.set_max_width(width);

                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.value)
                            .size(value_size)
                            .strong()
                            .color(self.color),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.label).size(13.0).weak());
                });
            });
    }
}
