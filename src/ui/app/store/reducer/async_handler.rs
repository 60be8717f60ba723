use serde_json::Value;

use crate::infra::remote::created_id;

use super::super::super::state::{AppState, OperationTag, RequestContext, RequestStatus};
use super::super::action::{AsyncAction, IngredientAction, Settlement};
use super::super::command::Command;
use super::ingredients;

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::RequestSettled(settlement) => {
            settle_request(state, *settlement);
            Vec::new()
        }
        AsyncAction::SearchLoaded { generation, result } => {
            if generation != state.search.generation {
                log::debug!(
                    "dropping search result {} (latest is {})",
                    generation,
                    state.search.generation
                );
                return Vec::new();
            }

            state.search.is_searching = false;
            match result {
                Ok(items) => {
                    state.search.error = None;
                    ingredients::reduce(&mut state.ingredients, IngredientAction::Set(items));
                }
                Err(err) => {
                    log::warn!("search failed: {err}");
                    state.search.error = Some(err.to_string());
                }
            }
            Vec::new()
        }
    }
}

fn settle_request(state: &mut AppState, settlement: Settlement) {
    let Settlement {
        generation,
        tag,
        context,
        result,
    } = settlement;

    if generation != state.request.generation {
        log::debug!(
            "dropping stale {tag} result {} (latest is {})",
            generation,
            state.request.generation
        );
        return;
    }
    if !state.request.is_loading() {
        log::debug!("{tag} request {generation} already settled");
        return;
    }

    match result {
        Ok(payload) => {
            state.request.status = RequestStatus::Success;
            state.request.payload = Some(payload.clone());
            state.request.context = context.clone();
            reconcile_success(state, tag, context, &payload);
        }
        Err(err) => {
            log::warn!("{tag} request failed: {err}");
            state.request.status = RequestStatus::Error;
            state.request.error = Some(err.to_string());
            state.request.payload = None;
            state.request.context = None;
            reconcile_failure(state, tag, context);
        }
    }
}

fn reconcile_success(
    state: &mut AppState,
    tag: OperationTag,
    context: Option<RequestContext>,
    payload: &Value,
) {
    match (tag, context) {
        (OperationTag::Add, Some(RequestContext::Ingredient(fields))) => match created_id(payload) {
            Ok(id) => {
                ingredients::reduce(
                    &mut state.ingredients,
                    IngredientAction::Delete(id.clone()),
                );
                ingredients::reduce(
                    &mut state.ingredients,
                    IngredientAction::Add(fields.with_id(id)),
                );
            }
            Err(err) => {
                log::warn!("add request succeeded without an id: {err}");
                state.request.status = RequestStatus::Error;
                state.request.error = Some(err.to_string());
                state.request.payload = None;
                state.request.context = None;
            }
        },
        (OperationTag::Remove, Some(RequestContext::IngredientId(id))) => {
            ingredients::reduce(&mut state.ingredients, IngredientAction::Delete(id));
        }
        (tag, context) => {
            log::warn!("no reconciliation for {tag} with context {context:?}");
        }
    }
}

fn reconcile_failure(state: &mut AppState, tag: OperationTag, context: Option<RequestContext>) {
    if let (OperationTag::Remove, Some(RequestContext::IngredientId(id))) = (tag, context)
        && state.remove_on_failed_delete
    {
        log::warn!("removing {id} locally although the delete failed");
        ingredients::reduce(&mut state.ingredients, IngredientAction::Delete(id));
    }
}
