pub mod domain;
pub mod infra;
pub mod ui;

pub use ui::app::PantryApp;
