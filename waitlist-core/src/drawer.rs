//! Navigation drawer state.

/// The drawer's navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTab {
    #[default]
    Dashboard,
    Subscription,
}

impl NavTab {
    /// All tabs in display order.
    pub const ALL: [NavTab; 2] = [NavTab::Dashboard, NavTab::Subscription];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Dashboard => "Dashboard",
            NavTab::Subscription => "Subscription",
        }
    }

    /// The tab after this one, wrapping around.
    pub fn next(&self) -> NavTab {
        match self {
            NavTab::Dashboard => NavTab::Subscription,
            NavTab::Subscription => NavTab::Dashboard,
        }
    }
}

/// State for the collapsible navigation drawer.
///
/// Starts collapsed; expanding only changes how the rail renders, never the
/// active tab.
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    open: bool,
    active: NavTab,
}

impl DrawerState {
    /// Create a collapsed drawer on the default tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drawer is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Expand the drawer.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Collapse the drawer.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// The active tab.
    pub fn active(&self) -> NavTab {
        self.active
    }

    /// Switch to a tab.
    pub fn activate(&mut self, tab: NavTab) {
        self.active = tab;
    }
}
