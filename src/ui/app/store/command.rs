use crate::infra::http::HttpRequest;
use crate::ui::app::state::{OperationTag, RequestContext};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SendRequest {
        generation: u64,
        request: HttpRequest,
        tag: OperationTag,
        context: Option<RequestContext>,
    },
    FetchIngredients {
        generation: u64,
        filter: String,
    },
}
