pub mod request;
pub mod search;


use super::super::PantryApp;
use super::command::Command;

pub fn run(app: &mut PantryApp, command: Command) {
    match command {
        Command::SendRequest {
            generation,
            request,
            tag,
            context,
        } => request::send_request(app, generation, request, tag, context),
        Command::FetchIngredients { generation, filter } => {
            search::fetch_ingredients(app, generation, filter)
        }
    }
}
