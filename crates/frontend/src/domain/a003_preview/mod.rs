pub mod audio;
pub mod strategy;
pub mod ui;
