pub mod affiliate;
pub mod chat_service;
pub mod conversation;
pub mod llm_service;

pub use chat_service::ChatService;
pub use llm_service::{LlmProvider, LlmService};
