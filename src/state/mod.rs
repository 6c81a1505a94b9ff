//! State - Component state modules
//!
//! Each component keeps its behaviour in a plain state type here; the
//! `gpui` views in `components` own one of these and render it.

pub mod input_state;
pub mod search_state;
pub mod select_state;
pub mod tabs_state;
pub mod tag_state;
pub mod textarea_state;
pub mod toast_state;

pub use input_state::{EditKey, FieldMessage, FieldMeta, InputEvent, InputState, InputType, TextBuffer};
pub use search_state::{SearchEvent, SearchState};
pub use select_state::{SelectOption, SelectState, SelectValue, ValueMode};
pub use tabs_state::{TabItem, TabNav, TabsOrientation, TabsState, TabsVariant};
pub use tag_state::{TagError, TagState};
pub use textarea_state::TextareaState;
pub use toast_state::{Toast, ToastAction, ToastKind, ToastOptions, ToastPosition, ToastQueue};
