/// Client configuration, read from the environment on native targets.
///
/// In the browser everything falls back to compiled defaults; the API is
/// assumed to be same-origin behind `/api`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin the `/api/...` paths are resolved against.
    pub api_base: String,
    /// Consecutive transport failures before the realtime listener stops.
    pub poll_max_errors: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8080".to_string(),
            poll_max_errors: 10,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Self {
            api_base: env_or("FORUMKIT_API_BASE", defaults.api_base),
            poll_max_errors: env_parse("FORUMKIT_POLL_MAX_ERRORS", defaults.poll_max_errors),
        }
    }

    /// Same config pointed at a different origin. Used by tests to target
    /// an ephemeral mock server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ClientConfig::default();
        assert!(cfg.api_base.starts_with("http"));
        assert!(cfg.poll_max_errors > 0);
    }

    #[test]
    fn with_api_base_overrides_origin() {
        let cfg = ClientConfig::default().with_api_base("http://127.0.0.1:9999");
        assert_eq!(cfg.api_base, "http://127.0.0.1:9999");
    }
}
