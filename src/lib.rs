pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod logging;
pub mod portfolio;
pub mod render;
pub mod types;
pub mod verify;
