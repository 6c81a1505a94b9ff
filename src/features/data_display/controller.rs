//! Data Table Controller
//!
//! Sample rows and columns for the data table page, and the notifications
//! it raises.

use gpui::{div, App, IntoElement, ParentElement, SharedString};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{CellValue, Column, TableState};
use crate::components::primitives::{Badge, BadgeSize, BadgeVariant};

/// A row of the sample user table
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub age: u32,
    pub active: bool,
}

impl User {
    fn new(id: u32, name: &str, role: &str, age: u32, active: bool) -> Self {
        let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
        Self {
            id,
            name: name.to_string(),
            email: format!("{first}@example.com"),
            role: role.to_string(),
            age,
            active,
        }
    }
}

/// The three users of the basic example
pub fn basic_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "Admin", 34, true),
        User::new(2, "Jane Smith", "User", 28, true),
        User::new(3, "Bob Johnson", "User", 45, false),
    ]
}

/// A longer list for the paginated example
pub fn sample_users() -> Vec<User> {
    let mut users = basic_users();
    users.extend([
        User::new(4, "Alice Brown", "Editor", 31, true),
        User::new(5, "Carlos Diaz", "User", 52, true),
        User::new(6, "Dana White", "Admin", 39, false),
        User::new(7, "Evan Green", "User", 23, true),
        User::new(8, "Fiona Hall", "Editor", 47, true),
        User::new(9, "George King", "User", 36, false),
        User::new(10, "Hana Lee", "User", 29, true),
        User::new(11, "Ivan Petrov", "Editor", 41, true),
        User::new(12, "Julia Roberts", "User", 33, true),
    ]);
    users
}

fn role_variant(role: &str) -> BadgeVariant {
    match role {
        "Admin" => BadgeVariant::Danger,
        "Editor" => BadgeVariant::Info,
        _ => BadgeVariant::Default,
    }
}

/// Name, email and role, as in the basic example
pub fn basic_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| u.name.clone()).sortable(),
        Column::new("email", "Email", |u: &User| u.email.clone()).filterable(),
        Column::new("role", "Role", |u: &User| u.role.clone()).sortable(),
    ]
}

/// Full column set with custom cell renderers
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id).fixed_width(60.0).sortable(),
        Column::new("name", "Name", |u: &User| u.name.clone())
            .flex_width(Some(140.0), None)
            .sortable()
            .filterable(),
        Column::new("email", "Email", |u: &User| u.email.clone())
            .flex_width(Some(180.0), None)
            .filterable(),
        Column::new("role", "Role", |u: &User| u.role.clone())
            .fixed_width(110.0)
            .sortable()
            .filterable()
            .render(|value, user| {
                Badge::new(SharedString::from(format!("role-{}", user.id)), value.to_string())
                    .variant(role_variant(&user.role))
                    .size(BadgeSize::Small)
                    .into_any_element()
            }),
        Column::new("age", "Age", |u: &User| u.age).fixed_width(70.0).sortable(),
        Column::new("active", "Status", |u: &User| u.active)
            .fixed_width(100.0)
            .sortable()
            .render(|value, _| {
                let label = match value {
                    CellValue::Bool(true) => "Active",
                    _ => "Inactive",
                };
                div().child(label).into_any_element()
            }),
    ]
}

/// Describe the current selection, e.g. "2 selected: John Doe, Jane Smith"
pub fn selection_summary(state: &TableState<User>) -> String {
    let names: Vec<&str> = state
        .selected_rows()
        .into_iter()
        .map(|u| u.name.as_str())
        .collect();
    if names.is_empty() {
        "No rows selected".to_string()
    } else {
        format!("{} selected: {}", names.len(), names.join(", "))
    }
}

/// Data table page controller
/// Toast text for a 1-based page number
pub fn page_changed_message(page: usize) -> String {
    format!("Showing page {page}")
}

#[derive(Clone)]
pub struct DataTableController {
    entities: AppEntities,
}

impl DataTableController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Rows per page from the gallery settings
    pub fn page_size(&self, cx: &App) -> usize {
        self.entities.settings.read(cx).table_page_size
    }

    /// Announce a page change through the toast layer
    pub fn page_changed(&self, page: usize, cx: &mut App) {
        let message = page_changed_message(page);
        self.entities.toasts.update(cx, |toasts, cx| {
            toasts.info(message, cx);
        });
    }

    /// Announce a row click through the toast layer
    pub fn row_clicked(&self, user: &User, cx: &mut App) {
        let message = format!("Clicked {} ({})", user.name, user.email);
        self.entities.toasts.update(cx, |toasts, cx| {
            toasts.success(message, cx);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::components::composite::data_table::{PaginationConfig, TableOptions};

    fn options() -> TableOptions {
        TableOptions {
            sortable: true,
            filterable: true,
            selectable: true,
            loading: false,
        }
    }

    #[test]
    fn test_sample_users_have_unique_ids() {
        let users = sample_users();
        let ids: BTreeSet<u32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
        assert_eq!(users[0].email, "john@example.com");
    }

    #[test]
    fn test_email_filter_on_basic_table() {
        let mut state = TableState::new(basic_users(), basic_columns()).with_options(options());
        state.set_filter("email", "JANE");
        let names: Vec<&str> = state.page_rows().iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith"]);
    }

    #[test]
    fn test_selection_summary_follows_processed_order() {
        let mut state = TableState::new(sample_users(), user_columns())
            .with_options(options())
            .with_pagination(PaginationConfig::new(5));
        assert_eq!(selection_summary(&state), "No rows selected");

        assert!(state.toggle_sort("name"));
        state.toggle_row(0);
        state.toggle_row(1);
        assert_eq!(selection_summary(&state), "2 selected: Alice Brown, Bob Johnson");
    }

    #[test]
    fn test_age_sorts_numerically() {
        let mut state = TableState::new(sample_users(), user_columns()).with_options(options());
        assert!(state.toggle_sort("age"));
        let ages: Vec<u32> = state.page_rows().iter().map(|r| r.row.age).collect();
        let mut sorted = ages.clone();
        sorted.sort_unstable();
        assert_eq!(ages, sorted);
    }

    #[test]
    fn test_page_changed_message_uses_page_number() {
        assert_eq!(page_changed_message(1), "Showing page 1");
        assert_eq!(page_changed_message(2), "Showing page 2");
    }

    #[test]
    fn test_next_page_reports_second_page() {
        let mut state = TableState::new(sample_users(), user_columns())
            .with_options(options())
            .with_pagination(PaginationConfig::new(5));
        let page = state.next_page().expect("page changed");
        assert_eq!(page_changed_message(page), "Showing page 2");
    }

    #[test]
    fn test_sorting_is_off_by_default() {
        let mut state = TableState::new(basic_users(), basic_columns());
        assert!(!state.toggle_sort("name"));
        let names: Vec<&str> = state.page_rows().iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Bob Johnson"]);
    }
}
