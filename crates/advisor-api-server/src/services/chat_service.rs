use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{ConversationConfig, PromptsConfig};
use crate::services::affiliate::ReplyPostProcessor;
use crate::services::conversation::{ChatTurn, ConversationStore};
use crate::services::llm_service::LlmProvider;
use crate::utils::error::ApiError;

/// Request orchestration: history bookkeeping, prompt assembly, provider
/// call and reply post-processing.
pub struct ChatService {
    store: Arc<ConversationStore>,
    llm: Arc<dyn LlmProvider>,
    post_processor: ReplyPostProcessor,
    history_limit: usize,
    system_prompt: String,
}

impl ChatService {
    pub fn new(
        store: Arc<ConversationStore>,
        llm: Arc<dyn LlmProvider>,
        post_processor: ReplyPostProcessor,
        conversation: ConversationConfig,
        prompts: PromptsConfig,
    ) -> Self {
        Self {
            store,
            llm,
            post_processor,
            history_limit: conversation.history_limit,
            system_prompt: prompts.system_prompt,
        }
    }

    /// Handle one chat request for `user_id`.
    ///
    /// The history is trimmed exactly once per request, after both the user
    /// and assistant turns are appended.
    pub async fn handle_chat(
        &self,
        user_id: &str,
        messages: Vec<ChatTurn>,
    ) -> Result<String, ApiError> {
        if messages.is_empty() {
            return Err(ApiError::BadRequest("messages must not be empty".to_string()));
        }

        info!(
            "Chat request: user={}, incoming_messages={}",
            user_id,
            messages.len()
        );

        self.store.append_many(user_id, messages);

        let history = self.store.recent(user_id, self.history_limit);
        let prompt = self.build_prompt(&history);
        debug!("Assembled prompt with {} turns", prompt.len());

        let reply = self.llm.generate(&prompt).await?;

        self.store.append(user_id, ChatTurn::assistant(reply.clone()));
        self.store.trim(user_id, self.history_limit);

        Ok(self.post_processor.process(&reply))
    }

    /// Reset the stored history. Idempotent for unknown users.
    pub fn clear(&self, user_id: &str) {
        self.store.clear(user_id);
        info!("Cleared conversation history for user {}", user_id);
    }

    /// Exactly one system turn first, then the retained history in original
    /// order.
    pub fn build_prompt(&self, history: &[ChatTurn]) -> Vec<ChatTurn> {
        let mut prompt = Vec::with_capacity(history.len() + 1);
        prompt.push(ChatTurn::system(self.system_prompt.clone()));
        prompt.extend_from_slice(history);
        prompt
    }
}
