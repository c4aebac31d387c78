pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod logging;
pub mod parser;
pub mod render;
pub mod types;

// Layered boundaries: use cases and ports in `app`, adapters in `infra`
pub mod app;
pub mod infra;
