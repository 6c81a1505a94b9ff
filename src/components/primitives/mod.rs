//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod search_bar;
pub mod select;
pub mod spinner;
pub mod tag_input;
pub mod text_input;
pub mod textarea;

pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use checkbox::Checkbox;
pub use search_bar::SearchBar;
pub use select::{Select, SelectChanged};
pub use spinner::{Spinner, SpinnerSize};
pub use tag_input::{TagInput, TagsChanged};
pub use text_input::{text_input, TextInput};
pub use textarea::{Textarea, TextareaChanged};
