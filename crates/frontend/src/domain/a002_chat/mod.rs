pub mod links;
pub mod markdown;
pub mod state;
pub mod ui;
