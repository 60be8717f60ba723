use std::fmt;

use serde_json::Value;

use crate::domain::{Ingredient, NewIngredient};

/// Lifecycle of the tracked request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Routes a settled request to the store mutation it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTag {
    Add,
    Remove,
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationTag::Add => write!(f, "add"),
            OperationTag::Remove => write!(f, "remove"),
        }
    }
}

/// Value supplied with a request and echoed back untouched on settlement.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestContext {
    /// Fields submitted by the form.
    Ingredient(NewIngredient),
    /// Id of the ingredient being deleted.
    IngredientId(String),
}

/// The single request being tracked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestState {
    pub status: RequestStatus,
    pub payload: Option<Value>,
    pub context: Option<RequestContext>,
    pub tag: Option<OperationTag>,
    pub error: Option<String>,
    /// Bumped on every send; settlements carrying an older value are stale.
    pub generation: u64,
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, RequestStatus::Success | RequestStatus::Error)
    }
}

/// In-memory ingredient list, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientStore {
    pub items: Vec<Ingredient>,
}

impl IngredientStore {
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub generation: u64,
    pub is_searching: bool,
    pub last_filter: Option<String>,
    pub error: Option<String>,
}

/// All app state in one struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub ingredients: IngredientStore,
    pub request: RequestState,
    pub search: SearchState,
    pub remove_on_failed_delete: bool,
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        self.request.is_loading() || self.search.is_searching
    }

    /// Error to show in the notification area, request errors first.
    pub fn visible_error(&self) -> Option<&str> {
        self.request
            .error
            .as_deref()
            .or(self.search.error.as_deref())
    }
}
