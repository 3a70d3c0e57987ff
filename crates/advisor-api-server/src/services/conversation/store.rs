use dashmap::DashMap;
use tracing::{debug, info};

use crate::models::chat::UserId;

use super::types::ChatTurn;

/// Thread-safe in-memory conversation store, keyed by user identifier.
///
/// Every operation acquires the per-key shard lock for its whole duration,
/// so individual operations are atomic per user. Turns from two concurrent
/// requests for the same user may still interleave between operations; the
/// per-request trim keeps the history cap regardless of ordering.
pub struct ConversationStore {
    /// History storage: user_id -> ordered turns, oldest first
    storage: DashMap<UserId, Vec<ChatTurn>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        info!("Initializing conversation store with DashMap");
        Self {
            storage: DashMap::new(),
        }
    }

    /// Append one turn, creating the history if absent.
    pub fn append(&self, user_id: &str, turn: ChatTurn) {
        self.storage.entry(user_id.to_string()).or_default().push(turn);
    }

    /// Append several turns under one entry lock.
    pub fn append_many(&self, user_id: &str, turns: impl IntoIterator<Item = ChatTurn>) {
        self.storage
            .entry(user_id.to_string())
            .or_default()
            .extend(turns);
    }

    /// Last `limit` turns (or fewer) in original order. Pure read; an
    /// unknown user reads as an empty history.
    pub fn recent(&self, user_id: &str, limit: usize) -> Vec<ChatTurn> {
        match self.storage.get(user_id) {
            Some(history) => {
                let start = history.len().saturating_sub(limit);
                history[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Reset the history to empty. No-op for an unknown user.
    pub fn clear(&self, user_id: &str) {
        if let Some(mut history) = self.storage.get_mut(user_id) {
            debug!("Clearing {} stored turns for user {}", history.len(), user_id);
            history.clear();
        }
    }

    /// Discard all but the last `limit` turns, oldest first.
    pub fn trim(&self, user_id: &str, limit: usize) {
        if let Some(mut history) = self.storage.get_mut(user_id) {
            let len = history.len();
            if len > limit {
                debug!("Trimming history for user {}: {} -> {}", user_id, len, limit);
                history.drain(..len - limit);
            }
        }
    }

    /// Number of users with a tracked history.
    pub fn user_count(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
