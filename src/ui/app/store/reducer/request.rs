use super::super::super::state::{RequestState, RequestStatus};
use super::super::action::RequestAction;
use super::super::command::Command;

pub fn reduce(request: &mut RequestState, action: RequestAction) -> Vec<Command> {
    match action {
        RequestAction::Send(spec) => {
            let generation = request.generation + 1;
            *request = RequestState {
                status: RequestStatus::Pending,
                payload: None,
                context: None,
                tag: Some(spec.tag),
                error: None,
                generation,
            };
            vec![Command::SendRequest {
                generation,
                request: spec.request,
                tag: spec.tag,
                context: spec.context,
            }]
        }
        RequestAction::Clear => {
            request.error = None;
            if request.is_settled() {
                request.status = RequestStatus::Idle;
            }
            Vec::new()
        }
    }
}
