use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
    pub auth_cookie_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8080".to_string(),
            backend_url_production: "https://api.auction-market.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UIConfig::default(),
            auth_cookie_name: "Authorization".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Window (ms) in which repeated bid / buy-now clicks collapse into one.
    pub debounce_window_ms: u32,
    pub profile_image_placeholder: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            debounce_window_ms: 500,
            profile_image_placeholder: "https://via.placeholder.com/300".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .or(option_env!("BACKEND_URL"))
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui_config: UIConfig {
                debounce_window_ms: option_env!("DEBOUNCE_WINDOW_MS")
                    .unwrap_or("500").parse().unwrap_or(500),
                profile_image_placeholder: option_env!("PROFILE_IMAGE_PLACEHOLDER")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.profile_image_placeholder),
            },
            auth_cookie_name: option_env!("AUTH_COOKIE_NAME")
                .unwrap_or("Authorization").to_string(),
        }
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:8080");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.auction-market.app");
    }

    #[test]
    fn default_debounce_window_is_500ms() {
        assert_eq!(AppConfig::default().ui_config.debounce_window_ms, 500);
    }

    #[test]
    fn logging_flag_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
