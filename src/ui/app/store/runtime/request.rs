use super::super::super::PantryApp;
use super::super::super::state::{OperationTag, RequestContext};
use super::super::action::{Action, AsyncAction, Settlement};
use crate::infra::http::HttpRequest;

pub fn send_request(
    app: &mut PantryApp,
    generation: u64,
    request: HttpRequest,
    tag: OperationTag,
    context: Option<RequestContext>,
) {
    let transport = app.transport.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        log::debug!("{tag} request {generation}: {} {}", request.method, request.url);
        let result = transport.send(request).await;
        let settlement = Settlement {
            generation,
            tag,
            context,
            result,
        };
        if action_tx
            .send(Action::Async(AsyncAction::RequestSettled(Box::new(
                settlement,
            ))))
            .await
            .is_err()
        {
            log::debug!("{tag} request {generation} settled after shutdown");
        }
    });
}
