use async_trait::async_trait;

use crate::core::ProviderConfig;
use super::{
    ConversationTurn, MockupProvider, ProviderError, build_messages, chat_completion, extract_html,
};

const SYSTEM_PROMPT: &str = "You are an expert UI/UX designer and HTML developer. Generate a complete, self-contained HTML mockup based on the user's description. The HTML should:
- Be a complete, valid HTML5 document
- Include embedded CSS styles (no external stylesheets)
- Be visually appealing and modern
- Include proper semantic HTML
- Be responsive when appropriate
- Include placeholder text and images where needed
- Not include any JavaScript unless specifically requested

Return ONLY the HTML code, nothing else.";

// Sampling parameters are fixed per provider, not per request
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 4000;

#[derive(Debug)]
pub struct XaiProvider {
    config: ProviderConfig,
}

impl XaiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MockupProvider for XaiProvider {
    fn name(&self) -> &'static str {
        "x.ai"
    }

    async fn generate_mockup(
        &self,
        description: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey { provider: "X.AI" });
        }

        let messages = build_messages(SYSTEM_PROMPT, history, description);
        let content =
            chat_completion("X.AI", &self.config, &messages, TEMPERATURE, MAX_TOKENS).await?;

        Ok(extract_html(&content))
    }
}
