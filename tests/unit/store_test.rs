//! Unit tests for the state store update operations.
//!
//! T065: Field-level updates leave every other field untouched

use fittrack::domain::{
    AthleteField, AthleteParameters, Gender, NotificationField, NotificationSettings,
};
use fittrack::state::{parse_numeric_input, DashboardState, StateError};

#[test]
fn test_weight_update_changes_only_weight() {
    let mut state = DashboardState::default();
    state
        .update_athlete_parameter(AthleteField::Weight, 76.0)
        .unwrap();

    assert_eq!(
        *state.athlete(),
        AthleteParameters {
            weight: 76.0,
            ..AthleteParameters::default()
        }
    );
}

#[test]
fn test_each_numeric_field_is_isolated() {
    for field in AthleteField::NUMERIC {
        let mut state = DashboardState::default();
        state.update_athlete_parameter(field, 1.5).unwrap();

        for other in AthleteField::NUMERIC {
            let expected = if other == field {
                1.5
            } else {
                AthleteParameters::default().numeric(other).unwrap()
            };
            assert_eq!(state.athlete().numeric(other), Some(expected), "{field:?}/{other:?}");
        }
        assert_eq!(state.athlete().gender, Gender::Male);
    }
}

#[test]
fn test_cleared_input_degrades_to_nan() {
    let mut state = DashboardState::default();
    state
        .update_athlete_parameter(AthleteField::Arm, parse_numeric_input(""))
        .unwrap();

    assert!(state.athlete().arm.is_nan());
    assert!(!state.athlete().is_complete());
    assert_eq!(state.athlete().waist, 85.0);
}

#[test]
fn test_non_finite_values_accepted() {
    let mut state = DashboardState::default();
    state
        .update_athlete_parameter(AthleteField::Height, f64::INFINITY)
        .unwrap();
    state
        .update_athlete_parameter(AthleteField::Age, -3.0)
        .unwrap();

    assert_eq!(state.athlete().height, f64::INFINITY);
    assert_eq!(state.athlete().age, -3.0);
}

#[test]
fn test_wrong_kind_rejected() {
    let mut state = DashboardState::default();
    assert_eq!(
        state.update_athlete_parameter(AthleteField::Gender, 2.0),
        Err(StateError::FieldKindMismatch {
            field: AthleteField::Gender
        })
    );
}

#[test]
fn test_notification_updates_isolated() {
    let mut state = DashboardState::default();

    state.update_notification_setting(NotificationField::RestDayReminders(false));
    assert_eq!(
        *state.notification_settings(),
        NotificationSettings {
            rest_day_reminders: false,
            ..NotificationSettings::default()
        }
    );

    state.update_notification_setting(NotificationField::WorkoutTime("06:45".into()));
    assert_eq!(state.notification_settings().reminder_time(), Some((6, 45)));
    assert!(!state.notification_settings().rest_day_reminders);
}

#[test]
fn test_every_setting_update_changes_revision() {
    let mut state = DashboardState::default();
    let mut last = state.settings_revision();

    for update in [
        NotificationField::Enabled(true),
        NotificationField::WorkoutTime("18:00".into()),
        NotificationField::MotivationalMessages(true),
        NotificationField::RestDayReminders(true),
    ] {
        state.update_notification_setting(update);
        assert_ne!(state.settings_revision(), last);
        last = state.settings_revision();
    }
}
