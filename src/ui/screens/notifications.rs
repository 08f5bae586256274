//! Notification preferences tab.
//!
//! T046: Reminder switch, time field, motivation and rest-day switches

use egui::{RichText, TextEdit, Ui, Vec2};

use crate::domain::NotificationField;
use crate::notifications::Notifier;
use crate::state::DashboardState;
use crate::ui::theme::Theme;

/// Notification settings screen state.
pub struct NotificationsScreen {
    /// Raw text of the reminder time field
    time_input: String,
}

impl NotificationsScreen {
    /// Create the screen pre-filled from the store.
    pub fn new(state: &DashboardState) -> Self {
        Self {
            time_input: state.notification_settings().workout_time.clone(),
        }
    }

    /// Render the settings form.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        state: &mut DashboardState,
        notifier: &dyn Notifier,
        theme: Theme,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🔔").size(32.0));
            ui.vertical(|ui| {
                ui.heading(RichText::new("Уведомления").size(24.0).strong());
                ui.label(
                    RichText::new("Настройте напоминания о тренировках")
                        .color(theme.text_secondary()),
                );
            });
        });

        ui.add_space(16.0);

        let settings = state.notification_settings().clone();
        let mut updates = Vec::new();

        let mut enabled = settings.enabled;
        Self::switch_row(
            ui,
            theme,
            true,
            &mut enabled,
            "Включить уведомления",
            "Получать напоминания о тренировках",
        );
        if enabled != settings.enabled {
            updates.push(NotificationField::Enabled(enabled));
        }

        ui.add_space(12.0);
        ui.label(RichText::new("🕕 Время тренировки").strong());
        let time_edit = TextEdit::singleline(&mut self.time_input)
            .hint_text("ЧЧ:ММ")
            .desired_width(120.0);
        if ui.add_enabled(settings.enabled, time_edit).changed() {
            updates.push(NotificationField::WorkoutTime(self.time_input.clone()));
        }
        if settings.enabled && settings.reminder_time().is_none() {
            ui.label(
                RichText::new("Формат ЧЧ:ММ — напоминание не сработает")
                    .color(theme.accent())
                    .small(),
            );
        } else {
            ui.label(
                RichText::new("Ежедневное напоминание в выбранное время")
                    .color(theme.text_secondary())
                    .small(),
            );
        }

        ui.add_space(12.0);

        let mut motivational = settings.motivational_messages;
        Self::switch_row(
            ui,
            theme,
            settings.enabled,
            &mut motivational,
            "Мотивационные сообщения",
            "Получать вдохновляющие цитаты",
        );
        if motivational != settings.motivational_messages {
            updates.push(NotificationField::MotivationalMessages(motivational));
        }

        let mut rest_days = settings.rest_day_reminders;
        Self::switch_row(
            ui,
            theme,
            settings.enabled,
            &mut rest_days,
            "Напоминания о днях отдыха",
            "Уведомления о важности восстановления",
        );
        if rest_days != settings.rest_day_reminders {
            updates.push(NotificationField::RestDayReminders(rest_days));
        }

        for update in updates {
            state.update_notification_setting(update);
        }

        ui.add_space(12.0);
        egui::Frame::group(ui.style())
            .fill(theme.card_bg())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("ℹ Как работают уведомления?").strong());
                ui.label(
                    RichText::new(
                        "Напоминания помогут не пропустить тренировку. Мотивационные сообщения \
                         появляются случайным образом, чтобы вдохновить вас на новые достижения.",
                    )
                    .color(theme.text_secondary()),
                );
            });

        ui.add_space(16.0);
        let save = egui::Button::new(RichText::new("💾 Сохранить настройки").size(18.0))
            .min_size(Vec2::new(ui.available_width(), 44.0));
        if ui.add(save).clicked() {
            state.save_notification_settings(notifier);
        }
    }

    fn switch_row(
        ui: &mut Ui,
        theme: Theme,
        enabled: bool,
        value: &mut bool,
        title: &str,
        description: &str,
    ) {
        egui::Frame::group(ui.style())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(title).strong());
                        ui.label(RichText::new(description).color(theme.text_secondary()));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled(enabled, egui::Checkbox::without_text(value));
                    });
                });
            });
    }
}
