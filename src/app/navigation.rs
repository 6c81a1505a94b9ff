//! Navigation - Gallery Pages
//!
//! Every component has one gallery page; pages are grouped in the sidebar tree.

use serde::{Deserialize, Serialize};

/// Sidebar group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageGroup {
    Common,
    Forms,
    DataDisplay,
    Feedback,
    Overlay,
    Navigation,
}

impl PageGroup {
    pub const ALL: [PageGroup; 6] = [
        PageGroup::Common,
        PageGroup::Forms,
        PageGroup::DataDisplay,
        PageGroup::Feedback,
        PageGroup::Overlay,
        PageGroup::Navigation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PageGroup::Common => "Common",
            PageGroup::Forms => "Forms",
            PageGroup::DataDisplay => "Data Display",
            PageGroup::Feedback => "Feedback",
            PageGroup::Overlay => "Overlay",
            PageGroup::Navigation => "Navigation",
        }
    }

    /// Pages in this group, in sidebar order
    pub fn pages(&self) -> impl Iterator<Item = ComponentPage> + '_ {
        ComponentPage::ALL
            .iter()
            .copied()
            .filter(move |page| page.group() == *self)
    }
}

/// Gallery page, one per component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentPage {
    #[default]
    Button,
    Badge,
    Card,
    Spinner,
    TextInput,
    Textarea,
    Select,
    Checkbox,
    TagInput,
    SearchBar,
    DataTable,
    Toast,
    Modal,
    Tabs,
}

impl ComponentPage {
    pub const ALL: [ComponentPage; 14] = [
        ComponentPage::Button,
        ComponentPage::Badge,
        ComponentPage::Card,
        ComponentPage::Spinner,
        ComponentPage::TextInput,
        ComponentPage::Textarea,
        ComponentPage::Select,
        ComponentPage::Checkbox,
        ComponentPage::TagInput,
        ComponentPage::SearchBar,
        ComponentPage::DataTable,
        ComponentPage::Toast,
        ComponentPage::Modal,
        ComponentPage::Tabs,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ComponentPage::Button => "Button",
            ComponentPage::Badge => "Badge",
            ComponentPage::Card => "Card",
            ComponentPage::Spinner => "Loading Spinner",
            ComponentPage::TextInput => "Form Input",
            ComponentPage::Textarea => "Form Textarea",
            ComponentPage::Select => "Form Select",
            ComponentPage::Checkbox => "Checkbox",
            ComponentPage::TagInput => "Tag Input",
            ComponentPage::SearchBar => "Search Bar",
            ComponentPage::DataTable => "Data Table",
            ComponentPage::Toast => "Toast",
            ComponentPage::Modal => "Modal",
            ComponentPage::Tabs => "Tabs",
        }
    }

    pub fn group(&self) -> PageGroup {
        match self {
            ComponentPage::Button
            | ComponentPage::Badge
            | ComponentPage::Card
            | ComponentPage::Spinner => PageGroup::Common,
            ComponentPage::TextInput
            | ComponentPage::Textarea
            | ComponentPage::Select
            | ComponentPage::Checkbox
            | ComponentPage::TagInput
            | ComponentPage::SearchBar => PageGroup::Forms,
            ComponentPage::DataTable => PageGroup::DataDisplay,
            ComponentPage::Toast => PageGroup::Feedback,
            ComponentPage::Modal => PageGroup::Overlay,
            ComponentPage::Tabs => PageGroup::Navigation,
        }
    }

    /// Next page in sidebar order, wrapping
    pub fn next(&self) -> Self {
        let ix = self.index();
        Self::ALL[(ix + 1) % Self::ALL.len()]
    }

    /// Previous page in sidebar order, wrapping
    pub fn previous(&self) -> Self {
        let ix = self.index();
        Self::ALL[(ix + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_belongs_to_one_group() {
        let total: usize = PageGroup::ALL.iter().map(|g| g.pages().count()).sum();
        assert_eq!(total, ComponentPage::ALL.len());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(ComponentPage::Tabs.next(), ComponentPage::Button);
        assert_eq!(ComponentPage::Button.previous(), ComponentPage::Tabs);
        assert_eq!(ComponentPage::Badge.next().previous(), ComponentPage::Badge);
    }

    #[test]
    fn test_groups_in_sidebar_order() {
        let forms: Vec<_> = PageGroup::Forms.pages().collect();
        assert_eq!(forms.first(), Some(&ComponentPage::TextInput));
        assert_eq!(forms.len(), 6);
    }
}
