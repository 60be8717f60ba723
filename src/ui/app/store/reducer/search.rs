use super::super::super::state::SearchState;
use super::super::action::SearchAction;
use super::super::command::Command;

pub fn reduce(search: &mut SearchState, action: SearchAction) -> Vec<Command> {
    match action {
        SearchAction::Run { filter } => {
            let filter = filter.trim().to_string();
            search.generation += 1;
            search.is_searching = true;
            search.error = None;
            search.last_filter = Some(filter.clone());
            vec![Command::FetchIngredients {
                generation: search.generation,
                filter,
            }]
        }
        SearchAction::DismissError => {
            search.error = None;
            Vec::new()
        }
    }
}
