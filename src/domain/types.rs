//! Dashboard domain records.
//!
//! T003: Define exercise, history, athlete and notification types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single exercise in a workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Identifier, unique within one workout
    pub id: u32,
    /// Display name
    pub name: String,
    /// Working weight in kilograms
    pub weight: f32,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
}

impl Exercise {
    /// Create a new exercise.
    pub fn new(id: u32, name: impl Into<String>, weight: f32, sets: u32, reps: u32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            sets,
            reps,
        }
    }

    /// Total lifted volume (weight × sets × reps).
    pub fn volume(&self) -> f32 {
        self.weight * self.sets as f32 * self.reps as f32
    }
}

/// A past workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    /// Identifier
    pub id: u32,
    /// Calendar date (unique within the session)
    pub date: NaiveDate,
    /// Exercises in the order they were performed
    pub exercises: Vec<Exercise>,
    /// Whether the workout was finished
    pub completed: bool,
}

/// Athlete gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// All selectable values, in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Localized label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Body measurements of the athlete.
///
/// Numeric fields may hold NaN while the user is mid-edit (e.g. a cleared
/// input). Nothing here rejects such values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteParameters {
    /// Body mass in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Age in years
    pub age: f64,
    /// Gender
    pub gender: Gender,
    /// Chest girth in centimeters
    pub chest: f64,
    /// Waist girth in centimeters
    pub waist: f64,
    /// Arm girth in centimeters
    pub arm: f64,
}

impl Default for AthleteParameters {
    fn default() -> Self {
        Self {
            weight: 78.0,
            height: 180.0,
            age: 28.0,
            gender: Gender::Male,
            chest: 105.0,
            waist: 85.0,
            arm: 38.0,
        }
    }
}

impl AthleteParameters {
    /// Read a numeric field. Returns `None` for [`AthleteField::Gender`].
    pub fn numeric(&self, field: AthleteField) -> Option<f64> {
        match field {
            AthleteField::Weight => Some(self.weight),
            AthleteField::Height => Some(self.height),
            AthleteField::Age => Some(self.age),
            AthleteField::Chest => Some(self.chest),
            AthleteField::Waist => Some(self.waist),
            AthleteField::Arm => Some(self.arm),
            AthleteField::Gender => None,
        }
    }

    /// Whether every numeric field holds a finite value.
    pub fn is_complete(&self) -> bool {
        AthleteField::NUMERIC
            .iter()
            .filter_map(|f| self.numeric(*f))
            .all(f64::is_finite)
    }
}

/// Field selector for [`AthleteParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AthleteField {
    Weight,
    Height,
    Age,
    Gender,
    Chest,
    Waist,
    Arm,
}

impl AthleteField {
    /// Numeric fields in form order.
    pub const NUMERIC: [AthleteField; 6] = [
        AthleteField::Weight,
        AthleteField::Height,
        AthleteField::Age,
        AthleteField::Chest,
        AthleteField::Waist,
        AthleteField::Arm,
    ];

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            AthleteField::Weight => "Масса тела (кг)",
            AthleteField::Height => "Рост (см)",
            AthleteField::Age => "Возраст",
            AthleteField::Gender => "Пол",
            AthleteField::Chest => "Обхват груди (см)",
            AthleteField::Waist => "Обхват талии (см)",
            AthleteField::Arm => "Обхват руки (см)",
        }
    }

    /// Age is entered as a whole number; everything else allows decimals.
    pub fn is_integer(&self) -> bool {
        matches!(self, AthleteField::Age)
    }
}

/// Value written into an [`AthleteParameters`] field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Gender(Gender),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<Gender> for ParamValue {
    fn from(value: Gender) -> Self {
        ParamValue::Gender(value)
    }
}

/// Reminder and motivation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Master switch for reminders
    pub enabled: bool,
    /// Daily reminder time, "HH:MM"
    pub workout_time: String,
    /// Show motivational quotes
    pub motivational_messages: bool,
    /// Remind about rest days
    pub rest_day_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            workout_time: "18:00".to_string(),
            motivational_messages: true,
            rest_day_reminders: true,
        }
    }
}

impl NotificationSettings {
    /// Parse `workout_time` into `(hour, minute)`.
    ///
    /// Returns `None` for anything that is not two integers in `0..=23` and
    /// `0..=59` separated by a colon. Such values never match the clock.
    pub fn reminder_time(&self) -> Option<(u32, u32)> {
        parse_hh_mm(&self.workout_time)
    }
}

/// Parse a "HH:MM" string into hour and minute.
pub fn parse_hh_mm(value: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hour: u32 = hours.trim().parse().ok()?;
    let minute: u32 = minutes.trim().parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some((hour, minute))
}

/// One notification-setting update, carrying its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationField {
    Enabled(bool),
    WorkoutTime(String),
    MotivationalMessages(bool),
    RestDayReminders(bool),
}

/// A labelled point in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// X-axis category label
    pub category: String,
    /// Y value
    pub value: f64,
}

impl ChartPoint {
    /// Create a new chart point.
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}
