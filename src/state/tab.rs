//! Dashboard tab selector.

/// The six mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Today's workout plan
    #[default]
    Today,
    /// Progress charts
    Reports,
    /// Athlete body parameters
    Params,
    /// Past workouts
    History,
    /// Athlete profile and weekly progress
    Profile,
    /// Reminder preferences
    Notifications,
}

impl Tab {
    /// All tabs in tab-bar order.
    pub const ALL: [Tab; 6] = [
        Tab::Today,
        Tab::Reports,
        Tab::Params,
        Tab::History,
        Tab::Profile,
        Tab::Notifications,
    ];

    /// Tab-bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Today => "📅 План",
            Tab::Reports => "📈 Отчеты",
            Tab::Params => "👤 Параметры",
            Tab::History => "🕘 История",
            Tab::Profile => "🏅 Профиль",
            Tab::Notifications => "🔔 Уведомления",
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Today => "today",
            Tab::Reports => "reports",
            Tab::Params => "params",
            Tab::History => "history",
            Tab::Profile => "profile",
            Tab::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
