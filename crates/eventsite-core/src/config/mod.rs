use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::CID_PLACEHOLDER;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub access: AccessConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    SingleUser,
    Proxy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub proxy: Option<ProxyAuthConfig>,
    pub single_user: Option<SingleUserAuthConfig>,
}

/// Trusts an upstream proxy to put the authenticated user's email in a header.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyAuthConfig {
    pub header: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleUserAuthConfig {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

const fn default_run_migrations() -> bool {
    true
}

impl DatabaseConfig {
    /// URL scheme selecting the in-process store instead of PostgreSQL.
    pub const MEMORY_URL: &'static str = "memory://";

    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(Self::MEMORY_URL)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            self.serve_origin()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Subscription link template; `{cid}` is replaced by a calendar id or feed URL.
    pub share_link_template: String,
    pub prodid: String,
    pub feed_name: String,
    /// IANA zone event times are shown in on the events page.
    pub display_timezone: chrono_tz::Tz,
}

impl CalendarConfig {
    /// ## Summary
    /// Builds a shareable subscription link for a calendar id or feed URL.
    #[must_use]
    pub fn calendar_link(&self, cid: &str) -> String {
        self.share_link_template.replace(CID_PLACEHOLDER, cid)
    }
}

/// Group names granting elevated access levels.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    pub officer_group: String,
    pub candidate_group: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with default values.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", "debug")?
            .set_default("auth.proxy.header", "X-Remote-User")?
            .set_default(
                "calendar.share_link_template",
                "https://calendar.google.com/calendar/render?cid={cid}",
            )?
            .set_default("calendar.prodid", "-//eventsite//Events Calendar//EN")?
            .set_default("calendar.feed_name", "Events")?
            .set_default("calendar.display_timezone", "America/Los_Angeles")?
            .set_default("access.officer_group", "officer")?
            .set_default("access.candidate_group", "candidate")?)
    }

    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => tracing::trace!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
    }

    Settings::load()
}
