mod settings;

pub use settings::{
    AffiliateConfig, ConversationConfig, LlmConfig, PromptsConfig, ServerConfig, Settings,
};
