//! UI layer - app state plumbing and the terminal front end

pub mod app;
pub mod shell;
