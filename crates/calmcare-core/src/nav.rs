//! Sidebar navigation tables and active-entry matching
//!
//! Highlighting is a pure function of (menu table, current path). Each
//! sidebar variant carries its own [`MatchPolicy`]:
//! - patient sidebar: [`MatchPolicy::Exact`]
//! - provider sidebar: [`MatchPolicy::Prefix`], where every entry except the
//!   portal root also lights up for paths that start with its path
//!
//! The two policies stay distinct per variant.

use serde::Serialize;

use crate::route::Portal;

/// Icon slot for a nav entry; the TUI maps these to glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Activity,
    Sleep,
    Nutrition,
    Fitness,
    Mind,
    Users,
    Compliance,
    Analytics,
    Messages,
    Settings,
    LogOut,
}

/// A single sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavMenuItem {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavMenuItem {
    pub const fn new(icon: NavIcon, label: &'static str, path: &'static str) -> Self {
        Self { icon, label, path }
    }
}

/// How an entry decides whether it is active for the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Active only when the path equals the entry's path
    Exact,
    /// Active on equality, or, for entries other than `root`, when the
    /// path starts with the entry's path (plain string prefix)
    Prefix,
}

impl MatchPolicy {
    pub fn is_active(self, entry_path: &str, root: &str, current: &str) -> bool {
        match self {
            MatchPolicy::Exact => current == entry_path,
            MatchPolicy::Prefix => {
                current == entry_path || (entry_path != root && current.starts_with(entry_path))
            }
        }
    }
}

/// Which sidebar is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarVariant {
    Patient,
    Provider,
}

/// Static menu table for one sidebar variant
#[derive(Debug, Clone, Copy)]
pub struct NavTable {
    pub variant: SidebarVariant,
    /// Brand line at the top of the sidebar
    pub brand: &'static str,
    pub policy: MatchPolicy,
    /// Portal root; never prefix-matched
    pub root: &'static str,
    pub items: &'static [NavMenuItem],
    /// Footer action ("Switch to Provider" / "Log out")
    pub footer: NavMenuItem,
}

/// A menu entry tagged with its active flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    #[serde(flatten)]
    pub item: NavMenuItem,
    pub active: bool,
}

const PATIENT_ITEMS: &[NavMenuItem] = &[
    NavMenuItem::new(NavIcon::Dashboard, "Dashboard", "/patient"),
    NavMenuItem::new(NavIcon::Activity, "Activity", "/patient/activity"),
    NavMenuItem::new(NavIcon::Sleep, "Sleep", "/patient/sleep"),
    NavMenuItem::new(NavIcon::Nutrition, "Nutrition", "/patient/nutrition"),
    NavMenuItem::new(NavIcon::Fitness, "Fitness", "/patient/fitness"),
    NavMenuItem::new(NavIcon::Mind, "Mental Health", "/patient/mental"),
];

const PROVIDER_ITEMS: &[NavMenuItem] = &[
    NavMenuItem::new(NavIcon::Activity, "Dashboard", "/provider"),
    NavMenuItem::new(NavIcon::Users, "Patients", "/provider/patients"),
    NavMenuItem::new(NavIcon::Compliance, "Compliance", "/provider/compliance"),
    NavMenuItem::new(NavIcon::Analytics, "Analytics", "/provider/analytics"),
    NavMenuItem::new(NavIcon::Messages, "Messages", "/provider/messages"),
    NavMenuItem::new(NavIcon::Settings, "Settings", "/provider/settings"),
];

/// Patient sidebar: exact matching
pub const PATIENT_NAV: NavTable = NavTable {
    variant: SidebarVariant::Patient,
    brand: "Wellness",
    policy: MatchPolicy::Exact,
    root: "/patient",
    items: PATIENT_ITEMS,
    footer: NavMenuItem::new(NavIcon::LogOut, "Switch to Provider", "/provider"),
};

/// Provider sidebar: prefix matching for non-root entries
pub const PROVIDER_NAV: NavTable = NavTable {
    variant: SidebarVariant::Provider,
    brand: "Provider Portal",
    policy: MatchPolicy::Prefix,
    root: "/provider",
    items: PROVIDER_ITEMS,
    footer: NavMenuItem::new(NavIcon::LogOut, "Log out", "/patient"),
};

impl NavTable {
    /// Sidebar for a portal, if the portal has one
    pub fn for_portal(portal: Portal) -> Option<&'static NavTable> {
        match portal {
            Portal::Public => None,
            Portal::Patient => Some(&PATIENT_NAV),
            Portal::Provider => Some(&PROVIDER_NAV),
        }
    }

    /// Tag every entry with whether it is active for `current`
    pub fn highlight(&self, current: &str) -> Vec<NavEntry> {
        self.items
            .iter()
            .map(|item| NavEntry {
                item: *item,
                active: self.policy.is_active(item.path, self.root, current),
            })
            .collect()
    }

    /// Index of the first active entry
    pub fn active_index(&self, current: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| self.policy.is_active(item.path, self.root, current))
    }

    /// Entry at a zero-based position
    pub fn entry(&self, index: usize) -> Option<&'static NavMenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
