//! Main application state and egui integration.

use std::time::Instant;

use eframe::egui;

use pumptracker::storage::config::{self, AppConfig};
use pumptracker::storage::Database;
use pumptracker::ui::screens::{LogAction, WorkoutLogScreen};
use pumptracker::ui::theme::{accents, Theme};
use pumptracker::workouts::{StoreError, SystemClock, WorkoutStore};

/// Main application state.
pub struct PumpTrackerApp {
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Workout log and its storage
    store: WorkoutStore<Database, SystemClock>,
    /// Workout log screen state
    screen: WorkoutLogScreen,
    /// Last storage problem, shown in the top bar
    status: Option<String>,
}

impl PumpTrackerApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        store: WorkoutStore<Database, SystemClock>,
    ) -> Self {
        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        Self {
            theme,
            config,
            store,
            screen: WorkoutLogScreen::new(),
            status: None,
        }
    }

    /// Switch theme and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme;
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!(error = %e, "Failed to save theme preference");
        }
    }

    /// Apply a screen action to the store.
    fn handle_action(&mut self, action: LogAction) {
        match action {
            LogAction::Submit(draft) => match self.store.add(draft) {
                Ok(_) => {
                    self.screen.on_logged(Instant::now());
                    self.status = None;
                }
                Err(StoreError::Validation(e)) => self.screen.on_rejected(e.to_string()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to log workout");
                    self.status = Some(format!("Could not save workout: {e}"));
                }
            },
            LogAction::Delete(id) => match self.store.remove(id) {
                Ok(_) => self.status = None,
                Err(e) => {
                    tracing::error!(error = %e, id = %id, "Failed to delete workout");
                    self.status = Some(format!("Could not delete workout: {e}"));
                }
            },
        }
    }
}

impl eframe::App for PumpTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with theme toggle and storage status
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("PumpTracker");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }

                    if let Some(status) = &self.status {
                        ui.label(egui::RichText::new(status).color(accents::PUMP_RED));
                    }
                });
            });
        });

        // Stats are recomputed every frame since "today" can change
        let stats = self.store.stats();

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.screen.show(ui, self.store.log(), &stats))
            .inner;

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
