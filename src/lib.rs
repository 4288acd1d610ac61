pub mod config;
pub mod api;
pub mod models;
pub mod services;
pub mod utils;
pub mod templates;
pub mod handlers;
pub mod routes;

pub use routes::build_app;
