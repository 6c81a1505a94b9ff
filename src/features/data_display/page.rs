//! Data Table Page
//!
//! A basic three-user table and a paginated, filterable, selectable table
//! with custom cell renderers.

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{
    data_table, DataTable, PaginationConfig, TableEvent, TableOptions, TableState,
};
use crate::components::primitives::Button;
use crate::features::data_display::controller::{
    basic_columns, basic_users, sample_users, selection_summary, user_columns,
    DataTableController, User,
};
use crate::features::section::{caption, page, row, section};

pub struct DataTablePage {
    controller: DataTableController,
    basic: Entity<DataTable<User>>,
    users: Entity<DataTable<User>>,
    empty: Entity<DataTable<User>>,
    _subscriptions: Vec<Subscription>,
}

impl DataTablePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DataTableController::new(entities);

        let basic = data_table(
            TableState::new(basic_users(), basic_columns()).with_options(TableOptions {
                sortable: true,
                filterable: true,
                ..TableOptions::default()
            }),
            cx,
        );

        let page_size = controller.page_size(cx);
        let users = cx.new(|cx| {
            let state = TableState::new(sample_users(), user_columns())
                .with_options(TableOptions {
                    sortable: true,
                    filterable: true,
                    selectable: true,
                    loading: false,
                })
                .with_pagination(PaginationConfig::new(page_size));
            let mut table = DataTable::new(state, cx);
            let clicks = controller.clone();
            table.on_row_click(move |user, _ix, _window, cx| clicks.row_clicked(user, cx));
            table
        });

        let empty = cx.new(|cx| {
            let mut table = DataTable::new(TableState::new(Vec::<User>::new(), basic_columns()), cx);
            table.set_empty_message("No users match this team");
            table
        });

        let _subscriptions = vec![
            cx.subscribe(&users, |this, _, event: &TableEvent, cx| match event {
                TableEvent::PageChanged(page) => this.controller.page_changed(*page, cx),
            }),
            // Selection lives in the table; re-render the summary
            cx.observe(&users, |_this, _, cx| cx.notify()),
        ];

        Self {
            controller,
            basic,
            users,
            empty,
            _subscriptions,
        }
    }

    fn on_toggle_loading(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.users.update(cx, |table, cx| {
            let loading = !table.state().is_loading();
            table.set_loading(loading, cx);
        });
    }

    fn on_reload(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.users
            .update(cx, |table, cx| table.set_rows(sample_users(), cx));
    }
}

impl Render for DataTablePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (summary, loading) = {
            let table = self.users.read(cx);
            (selection_summary(table.state()), table.state().is_loading())
        };

        page("Data Table", "Sorting, filtering, pagination and row selection.")
            .child(section("Basic", self.basic.clone()))
            .child(section(
                "Paginated with selection",
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        row()
                            .child(
                                Button::secondary(
                                    "table-loading",
                                    if loading { "Stop loading" } else { "Show loading" },
                                )
                                .on_click(cx.listener(Self::on_toggle_loading)),
                            )
                            .child(
                                Button::ghost("table-reload", "Reload rows")
                                    .on_click(cx.listener(Self::on_reload)),
                            ),
                    )
                    .child(self.users.clone())
                    .child(caption(summary)),
            ))
            .child(section("Empty", self.empty.clone()))
    }
}
