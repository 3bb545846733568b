use store::AppConfig;

const EMBEDDED: &str = include_str!("../billdesk.toml");

/// Configuration baked into the bundle, with the build-time API URL override.
pub fn load() -> AppConfig {
    let config = AppConfig::from_toml(EMBEDDED).unwrap_or_else(|e| {
        tracing::error!("invalid {}: {e}; using defaults", AppConfig::filename());
        AppConfig::default()
    });

    match option_env!("BILLDESK_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}
