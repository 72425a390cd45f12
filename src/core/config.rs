use std::env;

/// Static configuration for one upstream model API. Read-only after
/// startup.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub default_provider: String,
    pub xai: ProviderConfig,
    pub zai: ProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let default_provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "xai".to_string());

        // Empty keys are allowed so the server can start without every
        // provider configured. An unconfigured provider fails at
        // generation time instead.
        let xai = ProviderConfig {
            api_key: env::var("XAI_API_KEY").unwrap_or_default(),
            api_url: env::var("XAI_API_URL")
                .unwrap_or_else(|_| "https://api.x.ai/v1/chat/completions".to_string()),
            model: env::var("XAI_MODEL").unwrap_or_else(|_| "grok-beta".to_string()),
        };
        let zai = ProviderConfig {
            api_key: env::var("ZAI_API_KEY").unwrap_or_default(),
            api_url: env::var("ZAI_API_URL")
                .unwrap_or_else(|_| "https://api.z.ai/api/paas/v4/chat/completions".to_string()),
            model: env::var("ZAI_MODEL").unwrap_or_else(|_| "glm-4-plus".to_string()),
        };

        Self {
            host,
            port,
            default_provider,
            xai,
            zai,
        }
    }
}
