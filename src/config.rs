use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "Labcore";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Initialize tracing for the embedding application. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", APP_NAME, APP_VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_labcore() {
        assert_eq!(APP_NAME, "Labcore");
    }

    #[test]
    fn default_filter_scopes_crate_to_debug() {
        let filter = default_log_filter();
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("labcore=debug"));
    }
}
