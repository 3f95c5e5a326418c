pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod passwords;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
