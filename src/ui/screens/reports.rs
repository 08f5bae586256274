//! Reports tab: progress charts.
//!
//! T042: Body weight, working weight and weekly completion charts

use egui::{RichText, Ui};

use crate::domain::{fixtures, ChartPoint};
use crate::ui::theme::Theme;
use crate::ui::widgets::{ChartKind, ProgressChart};

/// Reports screen state.
pub struct ReportsScreen {
    weight_progress: Vec<ChartPoint>,
    exercise_progress: Vec<ChartPoint>,
    workout_completion: Vec<ChartPoint>,
}

impl Default for ReportsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportsScreen {
    /// Create a reports screen over the built-in series.
    pub fn new() -> Self {
        Self {
            weight_progress: fixtures::weight_progress(),
            exercise_progress: fixtures::exercise_progress(),
            workout_completion: fixtures::workout_completion(),
        }
    }

    /// Render all three charts.
    pub fn show(&self, ui: &mut Ui, theme: Theme) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            Self::section(ui, "📈 Динамика веса тела");
            ProgressChart::new("weight_progress", &self.weight_progress, ChartKind::Line)
                .series_name("Вес")
                .color(theme.accent())
                .show(ui);

            ui.add_space(24.0);
            Self::section(ui, "📊 Прогресс рабочего веса");
            ProgressChart::new("exercise_progress", &self.exercise_progress, ChartKind::Bar)
                .series_name("Вес")
                .color(theme.accent())
                .show(ui);

            ui.add_space(24.0);
            Self::section(ui, "🗓 Выполнение тренировок");
            ProgressChart::new("workout_completion", &self.workout_completion, ChartKind::Bar)
                .series_name("Выполнено")
                .color(theme.success())
                .show(ui);
        });
    }

    fn section(ui: &mut Ui, title: &str) {
        ui.label(RichText::new(title).size(20.0).strong());
        ui.add_space(8.0);
    }
}
