pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod ui;
pub mod utils;
