use crate::domain::{Ingredient, NewIngredient, RequestError};
use crate::infra::http::HttpRequest;

use super::PantryApp;
use super::state::{OperationTag, RequestContext};
use super::store::{Action, IngredientAction, RequestAction, RequestSpec, SearchAction};

impl PantryApp {
    /// Starts a tracked request. The tracker is pending once this returns.
    pub fn send_request(
        &mut self,
        request: HttpRequest,
        context: Option<RequestContext>,
        tag: OperationTag,
    ) {
        self.dispatch(Action::Request(RequestAction::Send(RequestSpec {
            request,
            context,
            tag,
        })));
    }

    pub fn add_ingredient(&mut self, ingredient: NewIngredient) -> Result<(), RequestError> {
        let request = self.api.create_request(&ingredient)?;
        self.send_request(
            request,
            Some(RequestContext::Ingredient(ingredient)),
            OperationTag::Add,
        );
        Ok(())
    }

    pub fn remove_ingredient(&mut self, id: impl Into<String>) -> Result<(), RequestError> {
        let id = id.into();
        let request = self.api.delete_request(&id)?;
        self.send_request(
            request,
            Some(RequestContext::IngredientId(id)),
            OperationTag::Remove,
        );
        Ok(())
    }

    pub fn search_ingredients(&mut self, filter: impl Into<String>) {
        self.dispatch(Action::Search(SearchAction::Run {
            filter: filter.into(),
        }));
    }

    /// Replaces the list with an externally filtered set.
    pub fn set_filtered_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.dispatch(Action::Ingredients(IngredientAction::Set(ingredients)));
    }

    pub fn clear_request_error(&mut self) {
        self.dispatch(Action::Request(RequestAction::Clear));
    }

    pub fn dismiss_errors(&mut self) {
        self.clear_request_error();
        self.dispatch(Action::Search(SearchAction::DismissError));
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.state.ingredients.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.request.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.visible_error()
    }
}
