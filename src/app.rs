//! Main application state and egui integration.
//!
//! T050: Create App struct owning the dashboard state
//! T051: Tab bar and per-tab rendering
//! T052: Drive the scheduler from the frame loop

use std::time::Instant;

use eframe::egui;

use fittrack::notifications::{toast_channel, ChannelNotifier, ToastQueue};
use fittrack::scheduler::{Clock, Scheduler, SystemClock};
use fittrack::state::{DashboardState, DashboardSummary, Tab};
use fittrack::storage::config::{self, AppConfig};
use fittrack::ui::screens::{
    HistoryScreen, NotificationsScreen, ParamsScreen, ProfileScreen, ReportsScreen, TodayScreen,
};
use fittrack::ui::theme::Theme;
use fittrack::ui::widgets::ToastOverlay;

/// Main application state.
pub struct FitTrackApp {
    /// Session state
    state: DashboardState,
    /// Motivational timer and reminder poll
    scheduler: Scheduler,
    /// Time source for the scheduler
    clock: SystemClock,
    /// Sink for toasts produced by the store and scheduler
    notifier: ChannelNotifier,
    /// Toasts on screen
    toasts: ToastQueue,
    /// UI theme
    theme: Theme,
    /// Reports tab state
    reports_screen: ReportsScreen,
    /// Params tab state
    params_screen: ParamsScreen,
    /// Notifications tab state
    notifications_screen: NotificationsScreen,
}

impl FitTrackApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale.clamp(0.5, 3.0));

        let state = DashboardState::default();
        let (notifier, rx) = toast_channel();
        let clock = SystemClock;

        let mut scheduler = Scheduler::new(
            config.scheduler.motivation_delay(),
            config.scheduler.reminder_interval(),
        );
        scheduler.mount(&state, &clock);

        Self {
            reports_screen: ReportsScreen::new(),
            params_screen: ParamsScreen::new(state.athlete()),
            notifications_screen: NotificationsScreen::new(&state),
            state,
            scheduler,
            clock,
            notifier,
            toasts: ToastQueue::new(rx),
            theme,
        }
    }

    /// Toggle between dark and light themes.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(self.theme.visuals());
    }

    /// Ask egui to wake up for the next timer deadline or toast expiry.
    fn schedule_repaint(&self, ctx: &egui::Context) {
        let now = self.clock.now();
        let next = [self.scheduler.next_deadline(), self.toasts.next_expiry()]
            .into_iter()
            .flatten()
            .min();

        if let Some(at) = next {
            ctx.request_repaint_after(at.saturating_duration_since(now));
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let summary = DashboardSummary::from_state(&self.state);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("🏋 FitTrack Pro").strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }

                    ui.label(format!("🏆 {} тренировок", summary.total_completed));
                });
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let mut selected = self.state.active_tab();
                for tab in Tab::ALL {
                    ui.selectable_value(&mut selected, tab, tab.label());
                }
                self.state.set_active_tab(selected);
            });
            ui.add_space(4.0);
        });
    }
}

impl eframe::App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let outcome = self.scheduler.tick(
            &self.clock,
            &mut self.state,
            &self.notifier,
            &mut rand::thread_rng(),
        );
        if outcome.motivation_fired || outcome.reminder_fired {
            ctx.request_repaint();
        }

        self.toasts.update(Instant::now());

        self.show_header(ctx);

        let theme = self.theme;
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab() {
            Tab::Today => TodayScreen::show(ui, &mut self.state, &self.notifier, theme),
            Tab::Reports => self.reports_screen.show(ui, theme),
            Tab::Params => self.params_screen.show(ui, &mut self.state, theme),
            Tab::History => HistoryScreen::show(ui, &self.state, theme),
            Tab::Profile => {
                ProfileScreen::show(ui, &self.state, theme, &mut rand::thread_rng())
            }
            Tab::Notifications => {
                self.notifications_screen
                    .show(ui, &mut self.state, &self.notifier, theme)
            }
        });

        ToastOverlay::show(ctx, &mut self.toasts, theme.success());

        self.schedule_repaint(ctx);
    }
}

impl Drop for FitTrackApp {
    fn drop(&mut self) {
        self.scheduler.teardown();
    }
}
