//! Workout log screen: totals, the log form and the workout list.

use std::time::{Duration, Instant};

use egui::{Align, Layout, RichText, ScrollArea, Ui, Vec2};

use crate::ui::theme::accents;
use crate::ui::widgets::{intensity_picker, StatCard, WorkoutCard};
use crate::workouts::{Intensity, NewWorkout, ValidationError, WorkoutId, WorkoutLog, WorkoutStats};

/// How long the stat cards stay highlighted after a workout is logged.
pub const PULSE_DURATION: Duration = Duration::from_secs(1);

/// Maximum content width.
const CONTENT_WIDTH: f32 = 760.0;

/// Something the user asked the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogAction {
    /// Log a new workout
    Submit(NewWorkout),
    /// Delete a workout
    Delete(WorkoutId),
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    /// Workout type field
    pub workout_type: String,
    /// Duration field, in minutes
    pub duration: String,
    /// Selected intensity
    pub intensity: Intensity,
    /// Notes field
    pub notes: String,
    /// Message from the last rejected submit
    pub error: Option<String>,
}

impl WorkoutForm {
    /// Turn the current input into a validated draft.
    pub fn draft(&self) -> Result<NewWorkout, ValidationError> {
        let draft = NewWorkout::from_form(
            &self.workout_type,
            &self.duration,
            self.intensity,
            &self.notes,
        )?;
        draft.validate()?;
        Ok(draft)
    }

    /// Clear all fields; intensity goes back to medium.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Workout log screen state.
#[derive(Debug, Default)]
pub struct WorkoutLogScreen {
    /// Form input
    pub form: WorkoutForm,
    /// Whether the form is open
    pub show_form: bool,
    /// Stat cards are highlighted until this instant
    pulse_until: Option<Instant>,
}

impl WorkoutLogScreen {
    /// Create a new workout log screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store accepted the submitted workout.
    pub fn on_logged(&mut self, now: Instant) {
        self.form.reset();
        self.show_form = false;
        self.pulse_until = Some(now + PULSE_DURATION);
    }

    /// The submitted workout was rejected; keep the input for another try.
    pub fn on_rejected(&mut self, message: impl Into<String>) {
        self.form.error = Some(message.into());
        self.show_form = true;
    }

    /// Whether the stat cards are highlighted at `now`.
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Render the screen and return the action the user took, if any.
    pub fn show(&mut self, ui: &mut Ui, log: &WorkoutLog, stats: &WorkoutStats) -> Option<LogAction> {
        let mut action = None;

        let now = Instant::now();
        let pulsing = self.is_pulsing(now);
        if pulsing {
            if let Some(until) = self.pulse_until {
                ui.ctx().request_repaint_after(until.saturating_duration_since(now));
            }
        } else {
            self.pulse_until = None;
        }

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_WIDTH);

                self.render_header(ui);
                ui.add_space(24.0);

                self.render_stats(ui, stats, pulsing);
                ui.add_space(24.0);

                if self.show_form {
                    if let Some(draft) = self.render_form(ui) {
                        action = Some(LogAction::Submit(draft));
                    }
                } else {
                    let button = egui::Button::new(
                        RichText::new("+ LOG WORKOUT").size(22.0).strong(),
                    )
                    .fill(accents::PUMP_RED)
                    .corner_radius(14.0);
                    if ui.add_sized(Vec2::new(ui.available_width(), 56.0), button).clicked() {
                        self.show_form = true;
                    }
                }

                ui.add_space(24.0);

                if let Some(id) = self.render_list(ui, log) {
                    action = Some(LogAction::Delete(id));
                }
            });
        });

        action
    }

    fn render_header(&self, ui: &mut Ui) {
        ui.add_space(16.0);
        ui.label(
            RichText::new("💪 PUMP TRACKER 🔥")
                .size(44.0)
                .strong()
                .color(accents::PUMP_RED),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new("CRUSH YOUR GOALS. TRACK YOUR GAINS.")
                .size(16.0)
                .color(accents::SKY),
        );
    }

    fn render_stats(&self, ui: &mut Ui, stats: &WorkoutStats, pulsing: bool) {
        let spacing = ui.spacing().item_spacing.x;
        let card_width = ((ui.available_width() - spacing * 2.0) / 3.0 - 32.0).max(120.0);

        ui.horizontal(|ui| {
            StatCard::total_workouts(stats)
                .with_highlight(pulsing)
                .show(ui, card_width);
            StatCard::total_minutes(stats)
                .with_highlight(pulsing)
                .show(ui, card_width);
            StatCard::streak(stats)
                .with_highlight(pulsing)
                .show(ui, card_width);
        });
    }

    /// Render the form. Returns a draft when a valid submit happened.
    fn render_form(&mut self, ui: &mut Ui) -> Option<NewWorkout> {
        let mut submitted = None;

        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .inner_margin(20.0)
            .corner_radius(16.0)
            .show(ui, |ui| {
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("WORKOUT TYPE").strong().color(accents::GOLD));
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.workout_type)
                                    .hint_text("Bench Press, Running, Yoga...")
                                    .desired_width(360.0),
                            );
                        });
                        ui.add_space(16.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new("DURATION (MIN)").strong().color(accents::GOLD),
                            );
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.duration)
                                    .hint_text("30")
                                    .desired_width(140.0),
                            );
                        });
                    });

                    ui.add_space(12.0);
                    ui.label(RichText::new("INTENSITY").strong().color(accents::GOLD));
                    intensity_picker(ui, &mut self.form.intensity);

                    ui.add_space(12.0);
                    ui.label(RichText::new("NOTES (OPTIONAL)").strong().color(accents::GOLD));
                    ui.add(
                        egui::TextEdit::multiline(&mut self.form.notes)
                            .desired_width(ui.available_width())
                            .desired_rows(3)
                            .hint_text("PR today! 💪"),
                    );

                    if let Some(error) = &self.form.error {
                        ui.add_space(8.0);
                        ui.label(RichText::new(error).color(accents::PUMP_RED));
                    }

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        let submit = egui::Button::new(
                            RichText::new("🚀 LOG IT!").size(18.0).strong(),
                        )
                        .fill(accents::SKY);
                        if ui.add_sized(Vec2::new(200.0, 44.0), submit).clicked() {
                            match self.form.draft() {
                                Ok(draft) => {
                                    self.form.error = None;
                                    submitted = Some(draft);
                                }
                                Err(e) => self.form.error = Some(e.to_string()),
                            }
                        }

                        if ui
                            .add_sized(Vec2::new(120.0, 44.0), egui::Button::new("CANCEL"))
                            .clicked()
                        {
                            self.show_form = false;
                            self.form.error = None;
                        }
                    });
                });
            });

        submitted
    }

    /// Render the workout list. Returns the id whose delete was clicked.
    fn render_list(&self, ui: &mut Ui, log: &WorkoutLog) -> Option<WorkoutId> {
        if log.is_empty() {
            ui.add_space(32.0);
            ui.label(RichText::new("💪").size(56.0));
            ui.label(RichText::new("NO WORKOUTS YET").size(22.0).strong());
            ui.label(RichText::new("Time to get pumped! Log your first workout.").weak());
            return None;
        }

        let mut deleted = None;
        for record in log {
            if WorkoutCard::new(record).show(ui) {
                deleted = Some(record.id);
            }
            ui.add_space(8.0);
        }
        deleted
    }
}
