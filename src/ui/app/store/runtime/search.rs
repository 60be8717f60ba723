use super::super::super::PantryApp;
use super::super::action::{Action, AsyncAction};
use crate::infra::remote::parse_collection;

pub fn fetch_ingredients(app: &mut PantryApp, generation: u64, filter: String) {
    let request = app.api.search_request(&filter);
    let transport = app.transport.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = match request {
            Ok(request) => transport.send(request).await.and_then(parse_collection),
            Err(err) => Err(err),
        };
        if action_tx
            .send(Action::Async(AsyncAction::SearchLoaded { generation, result }))
            .await
            .is_err()
        {
            log::debug!("search {generation} settled after shutdown");
        }
    });
}
