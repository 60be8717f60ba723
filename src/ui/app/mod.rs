//! Application state and async plumbing for Pantry.
//!
//! `PantryApp` owns the ingredient store and the request tracker. UI handlers
//! dispatch actions; reducers update state and emit commands; the runtime runs
//! commands on tokio and feeds their results back as actions.

mod ingredient_ops;
mod init;
mod polling;
mod root;
mod state;
mod store;

pub use root::PantryApp;
pub use state::{
    AppState, IngredientStore, OperationTag, RequestContext, RequestState, RequestStatus,
    SearchState,
};
pub use store::{
    Action, AsyncAction, IngredientAction, RequestAction, RequestSpec, SearchAction, Settlement,
};
