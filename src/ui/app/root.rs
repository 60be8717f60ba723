//! Root app struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::infra::http::HttpTransport;
use crate::infra::remote::IngredientApi;

use super::state::AppState;
use super::store::Action;

/// Owns both reducer states and the channel network tasks report back on.
pub struct PantryApp {
    pub state: AppState,

    pub api: IngredientApi,
    pub transport: Arc<dyn HttpTransport>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,
}
