//! Toast overlay drawn above all panels.

use egui::{Align2, Color32, Id, Order, RichText, Vec2};

use crate::notifications::{ToastKind, ToastPosition, ToastQueue};

/// Vertical distance between stacked toasts.
const TOAST_SPACING: f32 = 76.0;

/// Renders the active toasts of a [`ToastQueue`].
pub struct ToastOverlay;

impl ToastOverlay {
    /// Draw all active toasts. Clicking a toast dismisses it.
    pub fn show(ctx: &egui::Context, queue: &mut ToastQueue, success_color: Color32) {
        let mut dismissed = None;
        let mut top_slot = 0usize;
        let mut bottom_slot = 0usize;

        for (index, active) in queue.active().iter().enumerate() {
            let toast = &active.toast;
            let (align, offset) = match toast.anchor() {
                ToastPosition::TopCenter => {
                    let offset = Vec2::new(0.0, 16.0 + top_slot as f32 * TOAST_SPACING);
                    top_slot += 1;
                    (Align2::CENTER_TOP, offset)
                }
                ToastPosition::BottomRight => {
                    let offset = Vec2::new(-16.0, -16.0 - bottom_slot as f32 * TOAST_SPACING);
                    bottom_slot += 1;
                    (Align2::RIGHT_BOTTOM, offset)
                }
            };

            let response = egui::Area::new(Id::new(("toast", index)))
                .order(Order::Foreground)
                .anchor(align, offset)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(360.0);
                        let headline = RichText::new(&toast.message).strong();
                        let headline = match toast.kind {
                            ToastKind::Success => headline.color(success_color),
                            ToastKind::Default => headline,
                        };
                        ui.label(headline);
                        if let Some(description) = &toast.description {
                            ui.label(RichText::new(description).weak());
                        }
                    });
                })
                .response;

            if response.interact(egui::Sense::click()).clicked() {
                dismissed = Some(index);
            }
        }

        if let Some(index) = dismissed {
            queue.dismiss(index);
        }
    }
}
