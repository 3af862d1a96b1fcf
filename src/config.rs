use std::collections::HashMap;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use landing_contact::{
    GoogleSheetsConfig, Target,
    google::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URI},
};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Legacy variables read without the `LANDING__` prefix, mapped to their
/// configuration keys.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("GOOGLE_CLIENT_EMAIL", "google.client_email"),
    ("GOOGLE_PRIVATE_KEY", "google.private_key"),
    ("GOOGLE_SHEET_ID", "google.sheet_id"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// URL of this server's relay endpoint, as seen from the same machine.
    pub fn relay_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };

        format!("http://{host}:{}{}", self.port, landing_contact::SUBMIT_PATH)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Service account used by the relay. The private key keeps the escaped
/// `\n` form it has in the environment; it is unescaped when the client is
/// built.
#[derive(Deserialize, Clone)]
pub struct GoogleConfig {
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub sheet_id: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("sheet_id", &self.sheet_id)
            .field("token_uri", &self.token_uri)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_email: String::new(),
            private_key: String::new(),
            sheet_id: String::new(),
            token_uri: default_token_uri(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl GoogleConfig {
    pub fn is_configured(&self) -> bool {
        !self.client_email.is_empty() && !self.private_key.is_empty() && !self.sheet_id.is_empty()
    }

    pub fn sheets_config(&self) -> GoogleSheetsConfig {
        GoogleSheetsConfig {
            client_email: self.client_email.to_owned(),
            private_key: self.private_key.to_owned(),
            sheet_id: self.sheet_id.to_owned(),
            token_uri: self.token_uri.to_owned(),
            api_base_url: self.api_base_url.to_owned(),
        }
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Language of the relay's JSON messages.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            range: default_range(),
            timezone: default_timezone(),
            locale: default_locale(),
        }
    }
}

impl ContactConfig {
    pub fn target(&self) -> Target {
        Target {
            range: self.range.to_owned(),
            timezone: self.timezone.to_owned(),
        }
    }
}

fn default_range() -> String {
    "Sheet1!A1:C1".to_string()
}

fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}

fn default_locale() -> String {
    "ru".to_string()
}

/// Company details shown on the page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_contact_email")]
    pub email: String,
    #[serde(default = "default_contact_phone")]
    pub phone: String,
    #[serde(default = "default_address")]
    pub address: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            email: default_contact_email(),
            phone: default_contact_phone(),
            address: default_address(),
        }
    }
}

fn default_site_name() -> String {
    "iDev".to_string()
}

fn default_contact_email() -> String {
    "idev24@gmail.com".to_string()
}

fn default_contact_phone() -> String {
    "+992 880-51-40-04".to_string()
}

fn default_address() -> Vec<String> {
    vec!["Dushanbe".to_string(), "123 Primernaya St.".to_string()]
}

impl Config {
    /// Load configuration from file and the process environment
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, std::env::vars().collect())
    }

    /// Load configuration from file and the given environment
    ///
    /// Priority (highest to lowest):
    /// 1. `GOOGLE_CLIENT_EMAIL`, `GOOGLE_PRIVATE_KEY`, `GOOGLE_SHEET_ID`
    /// 2. Prefixed variables (LANDING__SERVER__PORT, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load_with_env(
        config_path: Option<String>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        for (var, key) in LEGACY_ENV {
            if let Some(value) = env.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("LANDING")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(env)),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.range.trim().is_empty() {
            return Err("Contact sheet range must not be empty".to_string());
        }
        if time_tz::timezones::get_by_name(&self.contact.timezone).is_none() {
            return Err(format!("Unknown time zone: {}", self.contact.timezone));
        }
        if !rust_i18n::available_locales!().contains(&self.contact.locale.as_str()) {
            return Err(format!("Unsupported locale: {}", self.contact.locale));
        }
        Ok(())
    }
}
