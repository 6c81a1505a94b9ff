//! Features - Gallery Pages
//!
//! One live example page per component, grouped the way the sidebar groups
//! them.

pub mod common;
pub mod data_display;
pub mod feedback;
pub mod forms;
pub mod navigation;
pub mod overlay;
mod section;

use gpui::{AnyView, App, AppContext, Window};

use crate::app::entities::AppEntities;
use crate::app::navigation::ComponentPage;

/// Build the view for a gallery page
pub fn build_page(
    page: ComponentPage,
    entities: &AppEntities,
    window: &mut Window,
    cx: &mut App,
) -> AnyView {
    let entities = entities.clone();
    match page {
        ComponentPage::Button => cx.new(|_| common::ButtonPage::new()).into(),
        ComponentPage::Badge => cx.new(|_| common::BadgePage::new()).into(),
        ComponentPage::Card => cx.new(|_| common::CardPage).into(),
        ComponentPage::Spinner => cx.new(|_| common::SpinnerPage).into(),
        ComponentPage::TextInput => cx.new(forms::TextInputPage::new).into(),
        ComponentPage::Textarea => cx.new(forms::TextareaPage::new).into(),
        ComponentPage::Select => cx.new(forms::SelectPage::new).into(),
        ComponentPage::Checkbox => cx.new(|_| forms::CheckboxPage::new()).into(),
        ComponentPage::TagInput => cx.new(forms::TagInputPage::new).into(),
        ComponentPage::SearchBar => cx.new(|cx| forms::SearchBarPage::new(entities, cx)).into(),
        ComponentPage::DataTable => {
            cx.new(|cx| data_display::page::DataTablePage::new(entities, cx)).into()
        }
        ComponentPage::Toast => cx.new(|cx| feedback::ToastPage::new(entities, cx)).into(),
        ComponentPage::Modal => cx.new(|cx| overlay::ModalPage::new(window, cx)).into(),
        ComponentPage::Tabs => cx.new(navigation::TabsPage::new).into(),
    }
}
