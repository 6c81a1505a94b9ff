//! TabsState - Tab selection and keyboard navigation

use gpui::SharedString;

/// A single tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsVariant {
    #[default]
    Default,
    Pills,
    Underline,
}

/// Keyboard navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabNav {
    Prev,
    Next,
    Home,
    End,
}

impl TabNav {
    /// Map a key name to navigation for the given orientation
    pub fn from_key(key: &str, orientation: TabsOrientation) -> Option<Self> {
        match (key, orientation) {
            ("left", TabsOrientation::Horizontal) | ("up", TabsOrientation::Vertical) => {
                Some(TabNav::Prev)
            }
            ("right", TabsOrientation::Horizontal) | ("down", TabsOrientation::Vertical) => {
                Some(TabNav::Next)
            }
            ("home", _) => Some(TabNav::Home),
            ("end", _) => Some(TabNav::End),
            _ => None,
        }
    }

    fn backwards(self) -> bool {
        matches!(self, TabNav::Prev | TabNav::Home)
    }
}

/// State for a tab strip
#[derive(Debug, Clone)]
pub struct TabsState {
    tabs: Vec<TabItem>,
    /// Active tab for uncontrolled strips
    internal_active: Option<SharedString>,
    /// Active tab owned by the caller
    controlled_active: Option<SharedString>,
    pub orientation: TabsOrientation,
    pub variant: TabsVariant,
}

impl TabsState {
    /// Create an uncontrolled strip. The initial tab is `default_tab`, else the
    /// first enabled tab, else the first tab.
    pub fn new(tabs: Vec<TabItem>, default_tab: Option<SharedString>) -> Self {
        let internal_active = default_tab
            .or_else(|| tabs.iter().find(|t| !t.disabled).map(|t| t.id.clone()))
            .or_else(|| tabs.first().map(|t| t.id.clone()));
        Self {
            tabs,
            internal_active,
            controlled_active: None,
            orientation: TabsOrientation::default(),
            variant: TabsVariant::default(),
        }
    }

    /// Create a strip whose active tab is owned by the caller
    pub fn controlled(tabs: Vec<TabItem>, active: impl Into<SharedString>) -> Self {
        let mut state = Self::new(tabs, None);
        state.controlled_active = Some(active.into());
        state
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_active.is_some()
    }

    pub fn active(&self) -> Option<&SharedString> {
        self.controlled_active
            .as_ref()
            .or(self.internal_active.as_ref())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|a| a.as_ref() == id)
    }

    /// Caller write-back for controlled strips
    pub fn set_active(&mut self, id: impl Into<SharedString>) {
        let id = id.into();
        if self.is_controlled() {
            self.controlled_active = Some(id);
        } else {
            self.internal_active = Some(id);
        }
    }

    /// Tab click. Returns the id to report as a change; disabled tabs are ignored.
    pub fn select(&mut self, id: &str) -> Option<SharedString> {
        let tab = self.tabs.iter().find(|t| t.id.as_ref() == id)?;
        if tab.disabled {
            return None;
        }
        let id = tab.id.clone();
        if !self.is_controlled() {
            self.internal_active = Some(id.clone());
        }
        Some(id)
    }

    /// Keyboard navigation from the active tab, wrapping around and skipping
    /// disabled tabs. Returns the newly activated id.
    pub fn key(&mut self, nav: TabNav) -> Option<SharedString> {
        let len = self.tabs.len();
        let active = self.active()?;
        let current = self.tabs.iter().position(|t| &t.id == active)?;
        if self.tabs[current].disabled {
            return None;
        }

        let step_back = |i: usize| if i > 0 { i - 1 } else { len - 1 };
        let step_forward = |i: usize| if i + 1 < len { i + 1 } else { 0 };

        let mut next = match nav {
            TabNav::Prev => step_back(current),
            TabNav::Next => step_forward(current),
            TabNav::Home => 0,
            TabNav::End => len - 1,
        };
        while self.tabs[next].disabled && next != current {
            next = if nav.backwards() {
                step_back(next)
            } else {
                step_forward(next)
            };
        }
        if next == current {
            return None;
        }
        let id = self.tabs[next].id.clone();
        self.select(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabItem> {
        vec![
            TabItem::new("overview", "Overview"),
            TabItem::new("details", "Details").disabled(),
            TabItem::new("settings", "Settings"),
            TabItem::new("history", "History"),
        ]
    }

    #[test]
    fn test_initial_tab_is_first_enabled() {
        let mut items = tabs();
        items[0].disabled = true;
        let state = TabsState::new(items, None);
        assert!(state.is_active("settings"));

        let state = TabsState::new(tabs(), Some("history".into()));
        assert!(state.is_active("history"));
    }

    #[test]
    fn test_next_skips_disabled() {
        let mut state = TabsState::new(tabs(), None);
        assert_eq!(state.key(TabNav::Next).as_ref().map(SharedString::as_str), Some("settings"));
        assert!(state.is_active("settings"));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut state = TabsState::new(tabs(), None);
        assert_eq!(state.key(TabNav::Prev).as_ref().map(SharedString::as_str), Some("history"));
        assert_eq!(state.key(TabNav::Next).as_ref().map(SharedString::as_str), Some("overview"));
    }

    #[test]
    fn test_home_and_end() {
        let mut state = TabsState::new(tabs(), Some("settings".into()));
        assert_eq!(state.key(TabNav::End).as_ref().map(SharedString::as_str), Some("history"));
        assert_eq!(state.key(TabNav::Home).as_ref().map(SharedString::as_str), Some("overview"));
        assert_eq!(state.key(TabNav::Home), None);
    }

    #[test]
    fn test_disabled_click_ignored() {
        let mut state = TabsState::new(tabs(), None);
        assert_eq!(state.select("details"), None);
        assert!(state.is_active("overview"));
    }

    #[test]
    fn test_controlled_reports_without_switching() {
        let mut state = TabsState::controlled(tabs(), "overview");
        assert_eq!(state.select("settings").as_ref().map(SharedString::as_str), Some("settings"));
        assert!(state.is_active("overview"));
        state.set_active("settings");
        assert!(state.is_active("settings"));
    }

    #[test]
    fn test_orientation_keys() {
        assert_eq!(
            TabNav::from_key("down", TabsOrientation::Vertical),
            Some(TabNav::Next)
        );
        assert_eq!(TabNav::from_key("down", TabsOrientation::Horizontal), None);
    }
}
