pub mod debounce_timer;
pub mod result_actions;
pub mod search_controller;

pub use result_actions::ResultActions;
pub use search_controller::{QueryDispatch, SearchCompletion, SearchController, SearchPhase};
