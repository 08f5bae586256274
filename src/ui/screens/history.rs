//! Workout history tab.
//!
//! T044: One card per past workout with its exercises

use egui::{RichText, ScrollArea, Ui};

use crate::domain::WorkoutHistoryEntry;
use crate::state::DashboardState;
use crate::ui::format::{format_long_date, format_weight};
use crate::ui::theme::Theme;

/// History screen UI.
pub struct HistoryScreen;

impl HistoryScreen {
    /// Render all history entries in stored order.
    pub fn show(ui: &mut Ui, state: &DashboardState, theme: Theme) {
        ui.heading(RichText::new("История тренировок").size(24.0).strong());
        ui.add_space(16.0);

        if state.history().is_empty() {
            ui.label(RichText::new("Тренировок пока нет").weak());
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for entry in state.history() {
                Self::entry_card(ui, entry, theme);
                ui.add_space(12.0);
            }
        });
    }

    fn entry_card(ui: &mut Ui, entry: &WorkoutHistoryEntry, theme: Theme) {
        egui::Frame::group(ui.style())
            .fill(theme.card_bg())
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format_long_date(entry.date)).size(18.0).strong());
                    if entry.completed {
                        ui.label(RichText::new("✔ Выполнено").color(theme.success()));
                    }
                });

                ui.add_space(8.0);

                for exercise in &entry.exercises {
                    ui.horizontal(|ui| {
                        ui.label(exercise.name.as_str());
                        ui.label(
                            RichText::new(format!(
                                "{} кг × {} × {}",
                                format_weight(exercise.weight),
                                exercise.sets,
                                exercise.reps
                            ))
                            .color(theme.text_secondary()),
                        );
                    });
                }
            });
    }
}
