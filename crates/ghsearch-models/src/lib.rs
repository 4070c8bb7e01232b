//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod input_event;
mod query;
mod search_result;
mod ui_state;

pub use input_event::InputEvent;
pub use query::Query;
pub use search_result::SearchResult;
pub use ui_state::UiState;
