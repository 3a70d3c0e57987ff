//! Conversation memory management module
//!
//! Provides in-memory per-user conversation state with:
//! - Thread-safe storage (DashMap)
//! - FIFO truncation to a fixed history cap
//! - Total operations over the key space (absent user = empty history)

mod store;
mod types;

pub use store::ConversationStore;
pub use types::{ChatTurn, Role};
