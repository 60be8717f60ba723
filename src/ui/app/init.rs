use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::infra::app_config::AppConfig;
use crate::infra::http::{HttpTransport, ReqwestTransport};
use crate::infra::remote::IngredientApi;

use super::PantryApp;
use super::state::AppState;

const ACTION_CHANNEL_CAPACITY: usize = 32;

impl PantryApp {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: &AppConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);

        let state = AppState {
            remove_on_failed_delete: config.remove_on_failed_delete,
            ..Default::default()
        };

        log::debug!(
            "pantry app for {} (remove on failed delete: {})",
            config.base_url,
            config.remove_on_failed_delete
        );

        Self {
            state,
            api: IngredientApi::from_config(config),
            transport,
            action_tx,
            action_rx,
        }
    }
}
