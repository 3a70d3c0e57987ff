use anyhow::{bail, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub affiliate: AffiliateConfig,
    pub conversation: ConversationConfig,
    pub prompts: PromptsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_tokens: usize,
    pub temperature: f32,
    /// Provider credential, sourced from the GROQ_API_KEY environment
    /// variable at startup. Never read from the settings file.
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AffiliateConfig {
    pub marketplace_base_url: String,
    pub tag: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConversationConfig {
    pub history_limit: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PromptsConfig {
    pub system_prompt: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/settings").required(true))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            settings.llm.api_key = key;
        }
        if let Ok(tag) = std::env::var("AFFILIATE_TAG") {
            settings.affiliate.tag = tag;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Credentials are checked once here so the process refuses to start
    /// instead of failing on the first chat request.
    fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            bail!("GROQ_API_KEY is not set; cannot serve chat requests without provider credentials");
        }
        if self.affiliate.tag.trim().is_empty() {
            bail!("affiliate tag is not set (AFFILIATE_TAG env var or affiliate.tag)");
        }
        Ok(())
    }
}
