use std::env;

pub const DEFAULT_API_URL: &str = "https://api.mellow.fm/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Overrides the keyring-stored token when set.
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MELLOW_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: env::var("MELLOW_TOKEN").ok().filter(|v| !v.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env_values_are_ignored() {
        // SAFETY: tests in this module are the only writers of these vars.
        unsafe {
            env::set_var("MELLOW_API_URL", "");
            env::set_var("MELLOW_TOKEN", "");
        }
        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token, None);
    }
}
