use serde_json::Value;

use crate::domain::{Ingredient, RequestError};
use crate::infra::http::HttpRequest;
use crate::ui::app::state::{OperationTag, RequestContext};

#[derive(Debug)]
pub enum Action {
    Ingredients(IngredientAction),
    Request(RequestAction),
    Search(SearchAction),
    Async(AsyncAction),
}

/// The only mutations the ingredient store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientAction {
    Set(Vec<Ingredient>),
    Add(Ingredient),
    Delete(String),
}

#[derive(Debug)]
pub enum RequestAction {
    Send(RequestSpec),
    /// Dismiss the error notification.
    Clear,
}

#[derive(Debug)]
pub enum SearchAction {
    Run { filter: String },
    DismissError,
}

#[derive(Debug)]
pub enum AsyncAction {
    RequestSettled(Box<Settlement>),
    SearchLoaded {
        generation: u64,
        result: Result<Vec<Ingredient>, RequestError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub request: HttpRequest,
    pub context: Option<RequestContext>,
    pub tag: OperationTag,
}

/// Outcome of one tracked request, carrying back what was supplied at send time.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub generation: u64,
    pub tag: OperationTag,
    pub context: Option<RequestContext>,
    pub result: Result<Value, RequestError>,
}
