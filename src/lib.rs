// src/lib.rs
pub mod completion;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompts;
pub mod web;

pub use completion::{CompletionGateway, CompletionRequest, GroqClient};
pub use config::ProviderConfig;
pub use error::ApiError;
pub use web::start_web_server;
