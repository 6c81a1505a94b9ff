//! Composite Components
//!
//! Components assembled from primitives.

pub mod card;
pub mod data_table;
pub mod modal;
pub mod tabs;
pub mod toast;

pub use card::{Card, CardPadding, CardVariant};
pub use data_table::{DataTable, TableEvent};
pub use modal::{Modal, ModalAction, ModalEvent, ModalSize};
pub use tabs::{TabChanged, Tabs};
pub use toast::{ToastActionTriggered, ToastLayer};
