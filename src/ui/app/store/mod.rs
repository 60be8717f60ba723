//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{
    Action, AsyncAction, IngredientAction, RequestAction, RequestSpec, SearchAction, Settlement,
};

use super::PantryApp;

impl PantryApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
