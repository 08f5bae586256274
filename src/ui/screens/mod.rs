//! UI screens, one per dashboard tab.

pub mod history;
pub mod notifications;
pub mod params;
pub mod profile;
pub mod reports;
pub mod today;

pub use history::HistoryScreen;
pub use notifications::NotificationsScreen;
pub use params::ParamsScreen;
pub use profile::ProfileScreen;
pub use reports::ReportsScreen;
pub use today::TodayScreen;
