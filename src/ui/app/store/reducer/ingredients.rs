use super::super::super::state::IngredientStore;
use super::super::action::IngredientAction;

pub fn reduce(store: &mut IngredientStore, action: IngredientAction) {
    match action {
        IngredientAction::Set(items) => {
            store.items = items;
        }
        IngredientAction::Add(item) => {
            store.items.push(item);
        }
        IngredientAction::Delete(id) => {
            if let Some(idx) = store.items.iter().position(|i| i.id == id) {
                store.items.remove(idx);
            }
        }
    }
}
