pub mod async_handler;
pub mod ingredients;
pub mod request;
pub mod search;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Ingredients(action) => {
            ingredients::reduce(&mut state.ingredients, action);
            Vec::new()
        }
        Action::Request(action) => request::reduce(&mut state.request, action),
        Action::Search(action) => search::reduce(&mut state.search, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
