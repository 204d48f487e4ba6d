use std::sync::Arc;
use std::time::Duration;

/// Deadline applied to every page gate unless overridden by environment.
const DEFAULT_GATE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct AppConfig {
    asset_base: Arc<str>,
    gate_timeout: Duration,
    kiosk_mode: bool,
}

impl AppConfig {
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: Arc::from(asset_base.into()),
            gate_timeout: DEFAULT_GATE_TIMEOUT,
            kiosk_mode: false,
        }
    }

    pub fn from_environment() -> Self {
        let asset_base = std::env::var("ATRIUM_ASSET_BASE")
            .unwrap_or_else(|_| "http://localhost:8080/assets/".to_string());

        let gate_timeout = std::env::var("ATRIUM_GATE_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_GATE_TIMEOUT);

        let env_value = std::env::var("ATRIUM_KIOSK_MODE").unwrap_or_default();
        let kiosk_mode = matches!(
            env_value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ) || std::env::args().any(|arg| arg == "--kiosk");

        Self {
            asset_base: Arc::from(asset_base),
            gate_timeout,
            kiosk_mode,
        }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    pub fn gate_timeout(&self) -> Duration {
        self.gate_timeout
    }

    pub fn kiosk_mode(&self) -> bool {
        self.kiosk_mode
    }

    pub fn with_gate_timeout(mut self, timeout: Duration) -> Self {
        self.gate_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::new("http://localhost:9000/");
        assert_eq!(config.asset_base(), "http://localhost:9000/");
        assert_eq!(config.gate_timeout(), Duration::from_secs(5));
        assert!(!config.kiosk_mode());
    }

    #[test]
    fn timeout_override() {
        let config =
            AppConfig::new("http://localhost:9000/").with_gate_timeout(Duration::from_millis(500));
        assert_eq!(config.gate_timeout(), Duration::from_millis(500));
    }
}
