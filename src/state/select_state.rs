//! SelectState - Dropdown select with search, groups and multi-select

use hashlink::LinkedHashMap;
use tracing::debug;

/// Group name used for options without a group
pub const DEFAULT_GROUP: &str = "default";

/// Message shown when the search matches nothing
pub const NO_OPTIONS_MESSAGE: &str = "No options found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub group: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            group: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// The selected value(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl SelectValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(v) => v.is_none(),
            SelectValue::Multiple(v) => v.is_empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            SelectValue::Single(v) => v.as_deref() == Some(value),
            SelectValue::Multiple(v) => v.iter().any(|x| x == value),
        }
    }
}

/// Who owns the selected value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// The state stores every change itself
    #[default]
    Uncontrolled,
    /// Changes are only reported; the owner writes back with `set_value`
    Controlled,
}

#[derive(Debug, Clone)]
pub struct SelectState {
    options: Vec<SelectOption>,
    value: SelectValue,
    mode: ValueMode,
    pub searchable: bool,
    pub disabled: bool,
    pub placeholder: String,
    open: bool,
    query: String,
}

impl SelectState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            value: SelectValue::Single(None),
            mode: ValueMode::Uncontrolled,
            searchable: false,
            disabled: false,
            placeholder: "Select an option...".to_string(),
            open: false,
            query: String::new(),
        }
    }

    /// Switch to multiple selection, keeping a single value if one was set
    pub fn multiple(mut self) -> Self {
        self.value = match self.value {
            SelectValue::Single(v) => SelectValue::Multiple(v.into_iter().collect()),
            multiple => multiple,
        };
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn controlled(mut self) -> Self {
        self.mode = ValueMode::Controlled;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_value(mut self, value: SelectValue) -> Self {
        self.value = value;
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.value, SelectValue::Multiple(_))
    }

    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    pub fn value(&self) -> &SelectValue {
        &self.value
    }

    /// Write the value back (controlled mode) or reset it (either mode)
    pub fn set_value(&mut self, value: SelectValue) {
        self.value = value;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.searchable {
            self.query = query.into();
        }
    }

    /// Trigger click. No-op when disabled; closing clears the search query.
    pub fn toggle_open(&mut self) {
        if self.disabled {
            return;
        }
        self.open = !self.open;
        if !self.open {
            self.query.clear();
        }
    }

    /// Close without choosing (click outside, Escape)
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.contains(value)
    }

    /// Option click. Returns the new value to report as a change.
    ///
    /// Multiple mode toggles membership and stays open; single mode selects
    /// and closes.
    pub fn choose(&mut self, value: &str) -> Option<SelectValue> {
        if self.disabled {
            return None;
        }
        let option = self.options.iter().find(|o| o.value == value)?;
        if option.disabled {
            return None;
        }
        let next = match &self.value {
            SelectValue::Multiple(values) => {
                let mut values = values.clone();
                match values.iter().position(|v| v == value) {
                    Some(index) => {
                        values.remove(index);
                    }
                    None => values.push(value.to_string()),
                }
                SelectValue::Multiple(values)
            }
            SelectValue::Single(_) => {
                self.close();
                SelectValue::Single(Some(value.to_string()))
            }
        };
        debug!(value, "select option chosen");
        if self.mode == ValueMode::Uncontrolled {
            self.value = next.clone();
        }
        Some(next)
    }

    /// Clear button click. Returns the emptied value.
    pub fn clear(&mut self) -> Option<SelectValue> {
        if self.disabled {
            return None;
        }
        let next = match self.value {
            SelectValue::Multiple(_) => SelectValue::Multiple(Vec::new()),
            SelectValue::Single(_) => SelectValue::Single(None),
        };
        if self.mode == ValueMode::Uncontrolled {
            self.value = next.clone();
        }
        Some(next)
    }

    pub fn has_value(&self) -> bool {
        match &self.value {
            SelectValue::Single(Some(v)) => self.label_for(v).is_some(),
            SelectValue::Single(None) => false,
            SelectValue::Multiple(v) => !v.is_empty(),
        }
    }

    fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Trigger text: "{n} selected", the selected label, or the placeholder
    pub fn display_text(&self) -> String {
        match &self.value {
            SelectValue::Multiple(values) => {
                let known = values.iter().filter(|v| self.label_for(v).is_some()).count();
                if known > 0 {
                    format!("{known} selected")
                } else {
                    self.placeholder.clone()
                }
            }
            SelectValue::Single(Some(value)) => self
                .label_for(value)
                .map(str::to_string)
                .unwrap_or_else(|| self.placeholder.clone()),
            SelectValue::Single(None) => self.placeholder.clone(),
        }
    }

    /// Options matching the search query, case-insensitively on the label
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        if !self.searchable || self.query.is_empty() {
            return self.options.iter().collect();
        }
        let query = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&query))
            .collect()
    }

    /// Filtered options grouped by group name, in first-seen order
    pub fn grouped_options(&self) -> LinkedHashMap<&str, Vec<&SelectOption>> {
        let mut groups: LinkedHashMap<&str, Vec<&SelectOption>> = LinkedHashMap::new();
        for option in self.filtered_options() {
            let group = option.group.as_deref().unwrap_or(DEFAULT_GROUP);
            // hashlink has no `or_default`, and its `or_insert*` move occupied
            // entries to the back; match directly to keep insertion order.
            let list = match groups.entry(group) {
                hashlink::linked_hash_map::Entry::Occupied(entry) => entry.into_mut(),
                hashlink::linked_hash_map::Entry::Vacant(entry) => entry.insert(Vec::new()),
            };
            list.push(option);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple", "Apple").group("Fruit"),
            SelectOption::new("carrot", "Carrot").group("Vegetable"),
            SelectOption::new("banana", "Banana").group("Fruit"),
            SelectOption::new("durian", "Durian").disabled(),
        ]
    }

    #[test]
    fn test_single_choose_closes() {
        let mut select = SelectState::new(fruits());
        select.toggle_open();
        let changed = select.choose("banana");
        assert_eq!(changed, Some(SelectValue::Single(Some("banana".into()))));
        assert!(!select.is_open());
        assert_eq!(select.display_text(), "Banana");
    }

    #[test]
    fn test_multiple_toggles_and_stays_open() {
        let mut select = SelectState::new(fruits()).multiple();
        select.toggle_open();
        select.choose("apple");
        select.choose("carrot");
        select.choose("apple");
        assert!(select.is_open());
        assert_eq!(select.value(), &SelectValue::Multiple(vec!["carrot".into()]));
        assert_eq!(select.display_text(), "1 selected");
    }

    #[test]
    fn test_disabled_option_and_select() {
        let mut select = SelectState::new(fruits());
        assert_eq!(select.choose("durian"), None);

        select.disabled = true;
        select.toggle_open();
        assert!(!select.is_open());
        assert_eq!(select.choose("apple"), None);
    }

    #[test]
    fn test_controlled_reports_without_storing() {
        let mut select = SelectState::new(fruits()).controlled();
        let changed = select.choose("apple");
        assert!(changed.is_some());
        assert_eq!(select.display_text(), "Select an option...");

        select.set_value(SelectValue::Single(Some("apple".into())));
        assert_eq!(select.display_text(), "Apple");
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let select = SelectState::new(fruits());
        let groups = select.grouped_options();
        let names: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(names, vec!["Fruit", "Vegetable", DEFAULT_GROUP]);
        assert_eq!(groups["Fruit"].len(), 2);
    }

    #[test]
    fn test_search_filters_and_closing_clears_query() {
        let mut select = SelectState::new(fruits()).searchable();
        select.toggle_open();
        select.set_query("AN");
        let labels: Vec<&str> = select
            .filtered_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Banana", "Durian"]);

        select.toggle_open();
        assert_eq!(select.query(), "");
    }

    #[test]
    fn test_clear() {
        let mut select = SelectState::new(fruits()).multiple();
        select.choose("apple");
        assert_eq!(select.clear(), Some(SelectValue::Multiple(Vec::new())));
        assert!(!select.has_value());
        assert_eq!(select.display_text(), "Select an option...");
    }
}
