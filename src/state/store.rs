//! Session state store.
//!
//! T010: Own all mutable dashboard state
//! T011: One update operation per field group
//! T012: Monotonic workout completion

use crate::domain::fixtures;
use crate::domain::{
    AthleteField, AthleteParameters, Exercise, NotificationField, NotificationSettings,
    ParamValue, WorkoutHistoryEntry,
};
use crate::notifications::{Notifier, Toast};

use super::tab::Tab;

/// Duration of the "workout done" toast.
const COMPLETION_TOAST_MS: u64 = 5000;

/// Duration of the "settings saved" toast.
const SETTINGS_SAVED_TOAST_MS: u64 = 3000;

/// All mutable session state of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    active_tab: Tab,
    today_completed: bool,
    show_motivation: bool,
    notification_settings: NotificationSettings,
    /// Bumped on every settings update
    settings_revision: u64,
    athlete: AthleteParameters,
    today_workout: Vec<Exercise>,
    history: Vec<WorkoutHistoryEntry>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(fixtures::today_workout(), fixtures::workout_history())
    }
}

impl DashboardState {
    /// Create a store over the given plan and history.
    pub fn new(today_workout: Vec<Exercise>, history: Vec<WorkoutHistoryEntry>) -> Self {
        Self {
            active_tab: Tab::default(),
            today_completed: false,
            show_motivation: false,
            notification_settings: NotificationSettings::default(),
            settings_revision: 0,
            athlete: AthleteParameters::default(),
            today_workout,
            history,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn today_completed(&self) -> bool {
        self.today_completed
    }

    pub fn show_motivation(&self) -> bool {
        self.show_motivation
    }

    pub fn notification_settings(&self) -> &NotificationSettings {
        &self.notification_settings
    }

    /// Revision of the notification settings; changes on every update.
    pub fn settings_revision(&self) -> u64 {
        self.settings_revision
    }

    pub fn athlete(&self) -> &AthleteParameters {
        &self.athlete
    }

    pub fn today_workout(&self) -> &[Exercise] {
        &self.today_workout
    }

    pub fn history(&self) -> &[WorkoutHistoryEntry] {
        &self.history
    }

    /// Switch the visible tab.
    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!("Tab {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }

    /// Replace exactly one athlete parameter.
    ///
    /// Numeric fields accept any value, NaN included. A value of the wrong
    /// kind is rejected and nothing changes.
    pub fn update_athlete_parameter(
        &mut self,
        field: AthleteField,
        value: impl Into<ParamValue>,
    ) -> Result<(), StateError> {
        let value = value.into();
        let athlete = &mut self.athlete;

        match (field, value) {
            (AthleteField::Gender, ParamValue::Gender(gender)) => athlete.gender = gender,
            (AthleteField::Gender, ParamValue::Number(_)) | (_, ParamValue::Gender(_)) => {
                return Err(StateError::FieldKindMismatch { field });
            }
            (AthleteField::Weight, ParamValue::Number(v)) => athlete.weight = v,
            (AthleteField::Height, ParamValue::Number(v)) => athlete.height = v,
            (AthleteField::Age, ParamValue::Number(v)) => athlete.age = v,
            (AthleteField::Chest, ParamValue::Number(v)) => athlete.chest = v,
            (AthleteField::Waist, ParamValue::Number(v)) => athlete.waist = v,
            (AthleteField::Arm, ParamValue::Number(v)) => athlete.arm = v,
        }

        Ok(())
    }

    /// Replace exactly one notification setting.
    pub fn update_notification_setting(&mut self, field: NotificationField) {
        let settings = &mut self.notification_settings;

        match field {
            NotificationField::Enabled(v) => settings.enabled = v,
            NotificationField::WorkoutTime(v) => settings.workout_time = v,
            NotificationField::MotivationalMessages(v) => settings.motivational_messages = v,
            NotificationField::RestDayReminders(v) => settings.rest_day_reminders = v,
        }

        self.settings_revision = self.settings_revision.wrapping_add(1);
    }

    /// Whether the "complete workout" control is still active.
    pub fn can_complete_today(&self) -> bool {
        !self.today_completed
    }

    /// Mark today's workout as done and congratulate the user.
    pub fn complete_today_workout(&mut self, notifier: &dyn Notifier) {
        if !self.today_completed {
            tracing::info!("Today's workout completed");
        }
        self.today_completed = true;

        notifier.notify(
            Toast::success("🎉 Отличная работа!")
                .with_description("Тренировка завершена. Не забудь восстановиться!")
                .with_duration_ms(COMPLETION_TOAST_MS),
        );
    }

    /// Confirm the current notification settings to the user.
    ///
    /// Settings already live in the store; nothing is written anywhere.
    pub fn save_notification_settings(&self, notifier: &dyn Notifier) {
        tracing::info!(
            "Notification settings confirmed: enabled={}, time={}",
            self.notification_settings.enabled,
            self.notification_settings.workout_time
        );
        notifier.notify(
            Toast::success("✅ Настройки сохранены").with_duration_ms(SETTINGS_SAVED_TOAST_MS),
        );
    }

    /// Reveal the motivation card. Only the motivational timer calls this.
    pub fn reveal_motivation(&mut self) {
        self.show_motivation = true;
    }
}

/// Parse a numeric form input. Unparseable text becomes NaN.
pub fn parse_numeric_input(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an integer form input (age). Fractions are truncated; unparseable
/// text becomes NaN.
pub fn parse_integer_input(text: &str) -> f64 {
    let trimmed = text.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<i64>()
        .map(|v| v as f64)
        .unwrap_or(f64::NAN)
}

/// State store errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Value kind does not match field {field:?}")]
    FieldKindMismatch { field: AthleteField },
}
