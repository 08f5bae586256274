//! Athlete parameters tab.
//!
//! T043: Body measurement form wired to the state store
//!
//! Inputs are parsed on every edit; text that is not a number is stored as
//! NaN and the form keeps the raw text so the user can continue typing.

use egui::{Grid, RichText, TextEdit, Ui};

use crate::domain::{AthleteField, AthleteParameters, Gender};
use crate::state::view_model::format_measure;
use crate::state::{parse_integer_input, parse_numeric_input, DashboardState};
use crate::ui::theme::Theme;

/// Params screen state.
pub struct ParamsScreen {
    /// Raw text per numeric field, in form order
    inputs: Vec<(AthleteField, String)>,
}

impl ParamsScreen {
    /// Create the form pre-filled from `athlete`.
    pub fn new(athlete: &AthleteParameters) -> Self {
        let inputs = AthleteField::NUMERIC
            .iter()
            .map(|field| {
                let text = athlete.numeric(*field).map(format_measure).unwrap_or_default();
                (*field, text)
            })
            .collect();

        Self { inputs }
    }

    /// Raw text currently in the input for `field`.
    pub fn input_text(&self, field: AthleteField) -> Option<&str> {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }

    /// Apply a text edit to the store.
    pub fn apply_input(&mut self, state: &mut DashboardState, field: AthleteField, text: &str) {
        if let Some((_, buffer)) = self.inputs.iter_mut().find(|(f, _)| *f == field) {
            *buffer = text.to_string();
        }

        let value = if field.is_integer() {
            parse_integer_input(text)
        } else {
            parse_numeric_input(text)
        };

        if let Err(e) = state.update_athlete_parameter(field, value) {
            tracing::warn!("Ignoring parameter edit: {}", e);
        }
    }

    /// Render the form.
    pub fn show(&mut self, ui: &mut Ui, state: &mut DashboardState, theme: Theme) {
        ui.heading(RichText::new("Параметры спортсмена").size(24.0).strong());
        ui.add_space(16.0);

        let mut edits = Vec::new();

        Grid::new("athlete_params")
            .num_columns(3)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (field, text) in self.inputs.iter_mut() {
                    ui.label(field.label());
                    if ui
                        .add(TextEdit::singleline(text).desired_width(160.0))
                        .changed()
                    {
                        edits.push((*field, text.clone()));
                    }

                    let value = state.athlete().numeric(*field).unwrap_or(f64::NAN);
                    if value.is_finite() {
                        ui.label("");
                    } else {
                        ui.label(
                            RichText::new("— не задано")
                                .color(theme.text_secondary())
                                .small(),
                        );
                    }
                    ui.end_row();

                    if *field == AthleteField::Age {
                        Self::gender_row(ui, state);
                    }
                }
            });

        for (field, text) in edits {
            self.apply_input(state, field, &text);
        }
    }

    fn gender_row(ui: &mut Ui, state: &mut DashboardState) {
        ui.label(AthleteField::Gender.label());

        let mut gender = state.athlete().gender;
        egui::ComboBox::from_id_salt("athlete_gender")
            .selected_text(gender.label())
            .show_ui(ui, |ui| {
                for option in Gender::ALL {
                    ui.selectable_value(&mut gender, option, option.label());
                }
            });

        if gender != state.athlete().gender {
            if let Err(e) = state.update_athlete_parameter(AthleteField::Gender, gender) {
                tracing::warn!("Ignoring gender edit: {}", e);
            }
        }

        ui.label("");
        ui.end_row();
    }
}
