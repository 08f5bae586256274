//! Stat card widget for the profile tab.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

/// A small card with an icon, a caption and one large value.
pub struct StatCard<'a> {
    /// Leading icon (emoji)
    icon: &'a str,
    /// Caption
    label: &'a str,
    /// Displayed value
    value: String,
    /// Card fill
    fill: Option<Color32>,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card.
    pub fn new(icon: &'a str, label: &'a str, value: impl Into<String>) -> Self {
        Self {
            icon,
            label,
            value: value.into(),
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: Color32) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Render the card.
    pub fn show(self, ui: &mut Ui) {
        let mut frame = egui::Frame::group(ui.style()).inner_margin(12.0);
        if let Some(fill) = self.fill {
            frame = frame.fill(fill);
        }

        frame.show(ui, |ui| {
            ui.set_min_size(Vec2::new(160.0, 64.0));
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.icon).size(18.0));
                    ui.label(RichText::new(self.label).size(13.0));
                });
                ui.add_space(4.0);
                ui.label(RichText::new(&self.value).size(24.0).strong());
            });
        });
    }
}
