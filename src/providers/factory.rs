use crate::core::AppConfig;
use super::{MockupProvider, ProviderError, XaiProvider, ZaiProvider};

/// The closed set of known provider identifiers, in discovery order.
pub fn supported_providers() -> &'static [&'static str] {
    &["xai", "zai"]
}

/// Constructs a provider for the given identifier, matched
/// case-insensitively. Unknown identifiers enumerate the supported
/// set in the error.
pub fn create_provider(
    provider_type: &str,
    config: &AppConfig,
) -> Result<Box<dyn MockupProvider>, ProviderError> {
    match provider_type.to_lowercase().as_str() {
        "xai" => Ok(Box::new(XaiProvider::new(config.xai.clone()))),
        "zai" => Ok(Box::new(ZaiProvider::new(config.zai.clone()))),
        _ => Err(ProviderError::Unsupported {
            requested: provider_type.to_string(),
            supported: supported_providers().join(", "),
        }),
    }
}
