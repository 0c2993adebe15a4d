pub mod app;
pub mod config;
pub mod events;
pub mod scene;
pub mod sys;
pub mod ui;
