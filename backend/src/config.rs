use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::Config;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CORS_ORIGIN_PREFIX: &str = "http://localhost";

/// Settings read from `Rocket.toml` or `ROCKET_*` environment variables.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    secure_cookies: Option<bool>,
    #[serde(default)]
    cors_origin_prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Marks the identity cookie `Secure`. On by default in the release profile.
    pub secure_cookies: bool,
    pub cors_origin_prefix: String,
}

impl AppConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, rocket::figment::Error> {
        let raw: RawConfig = figment.extract()?;
        let release = figment.profile() == &Config::RELEASE_PROFILE;

        Ok(Self {
            secure_cookies: raw.secure_cookies.unwrap_or(release),
            cors_origin_prefix: raw
                .cors_origin_prefix
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN_PREFIX.to_string()),
        })
    }

    /// Extracts the configuration at ignite and places it in managed state.
    pub fn fairing() -> AdHoc {
        AdHoc::try_on_ignite("App Config", |rocket| async move {
            match AppConfig::from_figment(rocket.figment()) {
                Ok(config) => {
                    info!("⚙️ secure_cookies={} cors_origin_prefix={}", config.secure_cookies, config.cors_origin_prefix);
                    Ok(rocket.manage(config))
                }
                Err(e) => {
                    error!("Invalid configuration: {}", e);
                    Err(rocket)
                }
            }
        })
    }
}
