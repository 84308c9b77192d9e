pub mod types;
pub mod view;

pub use types::{AppEvent, UiEvent};
pub use view::{SearchPhase, SynonymCard, ViewData};
