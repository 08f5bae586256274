//! FitTrack - Strength Training Dashboard
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    // T001: Configure tracing subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("FitTrack Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "FitTrack Pro",
        options,
        Box::new(|cc| Ok(Box::new(app::FitTrackApp::new(cc)))),
    )
}
