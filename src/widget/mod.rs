//! Widget state
//!
//! Pure interaction models with no terminal dependencies. Rendering lives in
//! `view::ui`; key translation lives in `input::keybindings`.

pub mod autocomplete;
pub mod dropdown;
pub mod suggestions;

pub use autocomplete::{AutocompleteEntry, AutocompleteOptions};
pub use dropdown::{ChangeCallback, LabeledDropdown};
pub use suggestions::{PopupState, SuggestionList, VisibleList};
