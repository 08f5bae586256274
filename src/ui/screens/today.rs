//! Today's plan tab.
//!
//! T041: Exercise table and "complete workout" action

use egui::{Grid, RichText, ScrollArea, Ui, Vec2};

use crate::domain::fixtures;
use crate::notifications::Notifier;
use crate::state::DashboardState;
use crate::ui::format::{format_long_date, format_weight};
use crate::ui::theme::Theme;

/// Today's plan UI.
pub struct TodayScreen;

impl TodayScreen {
    /// Render the plan and the completion button.
    pub fn show(ui: &mut Ui, state: &mut DashboardState, notifier: &dyn Notifier, theme: Theme) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new("План на сегодня").size(24.0).strong());
                ui.label(RichText::new(format_long_date(fixtures::plan_date())).weak());
            });

            if state.today_completed() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new("✔ Завершено")
                            .color(theme.success())
                            .strong(),
                    );
                });
            }
        });

        ui.add_space(16.0);

        ScrollArea::horizontal().show(ui, |ui| {
            Grid::new("today_plan")
                .num_columns(5)
                .striped(true)
                .spacing([24.0, 12.0])
                .show(ui, |ui| {
                    for header in ["№", "Упражнение", "Вес (кг)", "Подходы", "Повторения"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (index, exercise) in state.today_workout().iter().enumerate() {
                        ui.label(RichText::new((index + 1).to_string()).weak());
                        ui.label(RichText::new(&exercise.name).strong());
                        ui.label(format_weight(exercise.weight));
                        ui.label(exercise.sets.to_string());
                        ui.label(exercise.reps.to_string());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        let label = if state.today_completed() {
            "✔ Тренировка завершена"
        } else {
            "✔ Завершить тренировку"
        };
        let button = egui::Button::new(RichText::new(label).size(18.0))
            .min_size(Vec2::new(ui.available_width(), 48.0));

        if ui.add_enabled(state.can_complete_today(), button).clicked() {
            state.complete_today_workout(notifier);
        }
    }
}
