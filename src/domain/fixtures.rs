//! Static session data: today's plan, past workouts, chart series and quotes.

use chrono::NaiveDate;

use super::types::{ChartPoint, Exercise, WorkoutHistoryEntry};

/// Number of workouts per week the progress bar measures against.
pub const WEEKLY_GOAL: u32 = 4;

/// Current training streak shown on the profile tab.
pub const STREAK_DAYS: u32 = 7;

/// Motivational quotes. Never empty.
pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "💪 Сегодня отличный день для тренировки!",
    "🔥 Каждая тренировка приближает тебя к цели!",
    "⚡ Сила не приходит от побед. Она приходит от борьбы!",
    "🎯 Твои мышцы растут, когда ты отдыхаешь, но сила воли — когда ты тренируешься!",
    "🏆 Единственная плохая тренировка — это та, которой не было!",
];

/// Date of the plan shown on the "today" tab.
pub fn plan_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 14).unwrap_or_default()
}

/// Today's workout plan.
pub fn today_workout() -> Vec<Exercise> {
    vec![
        Exercise::new(1, "Жим штанги лежа", 80.0, 4, 10),
        Exercise::new(2, "Приседания со штангой", 100.0, 4, 8),
        Exercise::new(3, "Становая тяга", 120.0, 3, 6),
        Exercise::new(4, "Тяга верхнего блока", 60.0, 3, 12),
        Exercise::new(5, "Жим гантелей на наклонной", 30.0, 3, 10),
    ]
}

/// Past workouts, most recent first.
pub fn workout_history() -> Vec<WorkoutHistoryEntry> {
    vec![
        WorkoutHistoryEntry {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap_or_default(),
            exercises: vec![
                Exercise::new(1, "Жим штанги лежа", 75.0, 4, 10),
                Exercise::new(2, "Приседания со штангой", 95.0, 4, 8),
            ],
            completed: true,
        },
        WorkoutHistoryEntry {
            id: 2,
            date: NaiveDate::from_ymd_opt(2026, 1, 7).unwrap_or_default(),
            exercises: vec![
                Exercise::new(1, "Становая тяга", 115.0, 3, 6),
                Exercise::new(2, "Тяга штанги в наклоне", 60.0, 4, 10),
            ],
            completed: true,
        },
    ]
}

/// Body weight per week.
pub fn weight_progress() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Нед 1", 82.0),
        ChartPoint::new("Нед 2", 80.0),
        ChartPoint::new("Нед 3", 79.0),
        ChartPoint::new("Нед 4", 78.0),
    ]
}

/// Working weight per main lift.
pub fn exercise_progress() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Жим", 70.0),
        ChartPoint::new("Присед", 90.0),
        ChartPoint::new("Тяга", 110.0),
    ]
}

/// Completed workouts per week.
pub fn workout_completion() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Нед 1", 3.0),
        ChartPoint::new("Нед 2", 4.0),
        ChartPoint::new("Нед 3", 3.0),
        ChartPoint::new("Нед 4", 4.0),
    ]
}
