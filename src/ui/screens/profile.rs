//! Athlete profile tab.
//!
//! T045: Weekly progress, stat cards, achievement and motivation card

use egui::{RichText, Ui};
use rand::Rng;

use crate::domain::fixtures::STREAK_DAYS;
use crate::state::view_model::pick_motivational_quote;
use crate::state::{DashboardState, DashboardSummary};
use crate::ui::theme::Theme;
use crate::ui::widgets::StatCard;

/// Profile screen UI.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the profile. The motivation quote is re-rolled on every call.
    pub fn show<R: Rng + ?Sized>(ui: &mut Ui, state: &DashboardState, theme: Theme, rng: &mut R) {
        let summary = DashboardSummary::from_state(state);

        ui.horizontal(|ui| {
            ui.label(RichText::new("👤").size(48.0));
            ui.vertical(|ui| {
                ui.heading(RichText::new("Спортсмен").size(24.0).strong());
                ui.label(RichText::new(&summary.athlete_line).color(theme.text_secondary()));
            });
        });

        ui.add_space(24.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Прогресс недели").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{}/{} тренировок",
                        summary.total_completed, summary.weekly_goal
                    ))
                    .color(theme.text_secondary()),
                );
            });
        });
        ui.add(
            egui::ProgressBar::new(summary.progress_fraction())
                .fill(theme.accent())
                .text(format!("{:.0}%", summary.weekly_percent)),
        );

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            StatCard::new("🔥", "Серия", format!("{} дней", STREAK_DAYS)).show(ui);
            StatCard::new(
                "🎯",
                "Всего",
                format!("{} тренировок", summary.total_completed),
            )
            .show(ui);
        });

        ui.add_space(16.0);

        Self::highlight_card(
            ui,
            theme,
            "🏆",
            "Достижение разблокировано!",
            "Первая неделя завершена",
        );

        if state.show_motivation() {
            ui.add_space(12.0);
            let quote = pick_motivational_quote(rng);
            Self::highlight_card(ui, theme, "✨", "Мотивация дня", quote);
        }
    }

    fn highlight_card(ui: &mut Ui, theme: Theme, icon: &str, title: &str, text: &str) {
        egui::Frame::group(ui.style())
            .fill(theme.accent().linear_multiply(0.08))
            .stroke(egui::Stroke::new(1.0, theme.accent().linear_multiply(0.4)))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(24.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(title).strong());
                        ui.label(RichText::new(text).color(theme.text_secondary()));
                    });
                });
            });
    }
}
