//! DataTable Component
//!
//! Renders a `TableState`: sortable headers, per-column filter inputs, an
//! optional checkbox column, the current page of rows and a pagination
//! footer.

use gpui::{
    div, prelude::*, px, relative, AnyElement, App, Context, Entity, EventEmitter, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window,
};

use super::column::{Column, ColumnWidth};
use super::pagination::Pagination;
use super::sort::SortDirection;
use super::state::TableState;
use crate::components::primitives::{Checkbox, Spinner, TextInput};
use crate::constants::{TABLE_CHECKBOX_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::state::{FieldMeta, InputEvent, InputState};
use crate::theme::UiColors;

/// Events emitted by the DataTable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Navigation moved to a different page
    PageChanged(usize),
}

type RowClickHandler<R> = Box<dyn Fn(&R, usize, &mut Window, &mut App) + 'static>;

/// DataTable component
pub struct DataTable<R: 'static> {
    state: TableState<R>,
    filter_inputs: Vec<(SharedString, Entity<TextInput>)>,
    on_row_click: Option<RowClickHandler<R>>,
    empty_message: SharedString,
    _subscriptions: Vec<Subscription>,
}

impl<R: 'static> EventEmitter<TableEvent> for DataTable<R> {}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(state: TableState<R>, cx: &mut Context<Self>) -> Self {
        let mut table = Self {
            state,
            filter_inputs: Vec::new(),
            on_row_click: None,
            empty_message: "No data available".into(),
            _subscriptions: Vec::new(),
        };
        table.build_filter_inputs(cx);
        table
    }

    /// Called with the row and its absolute index; independent of selection
    pub fn on_row_click(&mut self, handler: impl Fn(&R, usize, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Box::new(handler));
    }

    pub fn state(&self) -> &TableState<R> {
        &self.state
    }

    /// Replace the rows; the selection is cleared
    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.state.set_rows(rows);
        cx.notify();
    }

    /// Replace the columns; filters, sort and selection are reset
    pub fn set_columns(&mut self, columns: Vec<Column<R>>, cx: &mut Context<Self>) {
        self.state.set_columns(columns);
        self.build_filter_inputs(cx);
        cx.notify();
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.state.set_loading(loading);
        cx.notify();
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Navigate, reporting the page when it actually changed
    pub fn go_to_page(&mut self, page: usize, cx: &mut Context<Self>) {
        if let Some(page) = self.state.go_to_page(page) {
            cx.emit(TableEvent::PageChanged(page));
        }
        cx.notify();
    }

    fn build_filter_inputs(&mut self, cx: &mut Context<Self>) {
        self.filter_inputs.clear();
        self._subscriptions.clear();
        if !self.state.options().filterable {
            return;
        }

        let keys: Vec<(SharedString, SharedString)> = self
            .state
            .columns()
            .iter()
            .filter(|c| c.filterable)
            .map(|c| (c.key.clone(), c.header.clone()))
            .collect();

        for (key, header) in keys {
            let meta = FieldMeta {
                placeholder: Some(format!("Filter {header}...")),
                ..FieldMeta::default()
            };
            let input = cx.new(|cx| {
                TextInput::new(
                    SharedString::from(format!("filter-{key}")),
                    InputState::new("").meta(meta),
                    cx,
                )
            });
            let column = key.clone();
            self._subscriptions.push(cx.subscribe(
                &input,
                move |this, _input, event: &InputEvent, cx| {
                    if let InputEvent::Changed(query) = event {
                        this.state.set_filter(&column, query.clone());
                        cx.notify();
                    }
                },
            ));
            self.filter_inputs.push((key, input));
        }
    }

    fn cell_container(width: &ColumnWidth) -> gpui::Div {
        let cell = div().px_3().overflow_hidden();
        match *width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min, max } => cell
                .flex_1()
                .when_some(min, |el, min| el.min_w(px(min)))
                .when_some(max, |el, max| el.max_w(px(max))),
            ColumnWidth::Percent(p) => cell.w(relative(p / 100.0)).flex_none(),
        }
    }

    fn checkbox_cell() -> gpui::Div {
        div()
            .w(px(TABLE_CHECKBOX_COLUMN_WIDTH))
            .flex_none()
            .flex()
            .justify_center()
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let options = self.state.options();
        let weak = cx.entity().downgrade();

        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(UiColors::table_header_bg())
            .border_b_1()
            .border_color(UiColors::border())
            .when(options.selectable, |el| {
                let page_selected = self.state.is_page_selected();
                el.child(Self::checkbox_cell().child(
                    Checkbox::new("select-all").checked(page_selected).on_change(
                        move |_, _window, cx| {
                            let _ = weak.update(cx, |this, cx| {
                                this.state.toggle_select_all();
                                cx.notify();
                            });
                        },
                    ),
                ))
            })
            .children(self.state.columns().iter().enumerate().map(|(ix, col)| {
                let sortable = options.sortable && col.sortable;
                let direction = self.state.sort_direction(&col.key);
                let key = col.key.clone();

                Self::cell_container(&col.width).child(
                    div()
                        .id(("header", ix))
                        .flex()
                        .items_center()
                        .gap_1()
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(UiColors::text_primary())
                        .child(col.header.clone())
                        .when(sortable, |el| {
                            el.cursor_pointer()
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(if direction == SortDirection::None {
                                            UiColors::text_muted()
                                        } else {
                                            UiColors::primary()
                                        })
                                        .child(direction.indicator()),
                                )
                                .on_click(cx.listener(move |this, _, _window, cx| {
                                    if this.state.toggle_sort(&key) {
                                        cx.notify();
                                    }
                                }))
                        }),
                )
            }))
    }

    fn render_filters(&self) -> Option<impl IntoElement> {
        if self.filter_inputs.is_empty() {
            return None;
        }
        let selectable = self.state.options().selectable;

        Some(
            div()
                .w_full()
                .flex()
                .items_center()
                .py_1()
                .bg(UiColors::table_header_bg())
                .border_b_1()
                .border_color(UiColors::border())
                .when(selectable, |el| el.child(Self::checkbox_cell()))
                .children(self.state.columns().iter().map(|col| {
                    let input = self
                        .filter_inputs
                        .iter()
                        .find(|(key, _)| *key == col.key)
                        .map(|(_, input)| input.clone());
                    Self::cell_container(&col.width).children(input)
                })),
        )
    }

    /// Render the visible page of rows
    fn render_rows(&self, cx: &mut Context<Self>) -> Vec<AnyElement> {
        let selectable = self.state.options().selectable;
        let weak = cx.entity().downgrade();

        self.state
            .page_rows()
            .into_iter()
            .map(|page_row| {
                let absolute = page_row.absolute_index;
                let selected = self.state.is_selected(absolute);
                let bg = if selected {
                    UiColors::table_row_selected()
                } else if page_row.page_index % 2 == 0 {
                    UiColors::surface()
                } else {
                    UiColors::table_row_alt()
                };
                let weak = weak.clone();

                div()
                    .id(("row", absolute))
                    .h(px(TABLE_ROW_HEIGHT))
                    .w_full()
                    .flex()
                    .items_center()
                    .bg(bg)
                    .hover(|s| s.bg(UiColors::table_row_hover()))
                    .border_b_1()
                    .border_color(UiColors::border())
                    .when(self.on_row_click.is_some(), |el| el.cursor_pointer())
                    .on_click(cx.listener(move |this, _, window, cx| {
                        if let (Some(handler), Some(row)) =
                            (&this.on_row_click, this.state.row_at(absolute))
                        {
                            handler(row, absolute, window, cx);
                        }
                    }))
                    .when(selectable, |el| {
                        el.child(Self::checkbox_cell().child(
                            Checkbox::new(("select", absolute)).checked(selected).on_change(
                                move |_, _window, cx| {
                                    let _ = weak.update(cx, |this, cx| {
                                        this.state.toggle_row(absolute);
                                        cx.notify();
                                    });
                                },
                            ),
                        ))
                    })
                    .children(self.state.columns().iter().map(|col| {
                        Self::cell_container(&col.width)
                            .text_sm()
                            .text_color(UiColors::text_primary())
                            .child(col.render_cell(page_row.row))
                    }))
                    .into_any_element()
            })
            .collect()
    }

    /// Single placeholder row spanning every column
    fn render_empty(&self) -> impl IntoElement {
        div()
            .w_full()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(UiColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .w_full()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .child(Spinner::new().text("Loading data..."))
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        if !self.state.shows_pagination() {
            return None;
        }
        let weak = cx.entity().downgrade();
        Some(
            Pagination::new(
                self.state.current_page(),
                self.state.total_pages(),
                self.state.total_rows(),
            )
            .on_page_change(move |page, _window, cx| {
                let _ = weak.update(cx, |this, cx| this.go_to_page(page, cx));
            }),
        )
    }
}

impl<R: 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body: AnyElement = if self.state.is_loading() {
            self.render_loading().into_any_element()
        } else if self.state.total_rows() == 0 {
            self.render_empty().into_any_element()
        } else {
            div()
                .id("data-table-rows")
                .w_full()
                .flex()
                .flex_col()
                .children(self.render_rows(cx))
                .into_any_element()
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(UiColors::surface())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header(cx))
            .children(self.render_filters())
            .child(body)
            .children(self.render_footer(cx))
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: 'static, V: 'static>(
    state: TableState<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| DataTable::new(state, cx))
}
