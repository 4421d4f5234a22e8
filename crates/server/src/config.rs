use adapter::RedditConfig;
use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const ENV_PREFIX: &str = "ANALYSE_";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub reddit: RedditSettings,
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Clone)]
pub struct LoggingSettings {
    /// Log lines are appended here as well as to stdout. Empty disables it.
    pub file: String,
}

impl LoggingSettings {
    pub fn file_path(&self) -> Option<&str> {
        Some(self.file.trim()).filter(|f| !f.is_empty())
    }
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
}

#[derive(Deserialize, Clone)]
pub struct RedditSettings {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub auth_url: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl RedditSettings {
    pub fn client_config(&self) -> RedditConfig {
        RedditConfig {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            user_agent: self.user_agent.clone(),
            auth_url: self.auth_url.clone(),
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::from_sources(&run_mode, collect_env_vars(std::env::vars()))
    }

    fn from_sources(run_mode: &str, env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let env_json =
            serde_json::to_string(&env_map).map_err(|e| ConfigError::Foreign(Box::new(e)))?;

        let s = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.cors_origins", "*")?
            .set_default("reddit.user_agent", "rust:community-sentiment:v0.1.0")?
            .set_default("reddit.auth_url", "https://www.reddit.com")?
            .set_default("reddit.api_url", "https://oauth.reddit.com")?
            .set_default("reddit.timeout_secs", 30)?
            .set_default("logging.file", "logs/logs.log")?
            // client_id / client_secret have no default on purpose
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(config::File::from_str(&env_json, config::FileFormat::Json))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        if settings.reddit.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "reddit.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }
}

/// `ANALYSE_REDDIT__CLIENT_ID` becomes `reddit.client_id`.
fn collect_env_vars(vars: impl Iterator<Item = (String, String)>) -> HashMap<String, String> {
    vars.filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .map(|(k, v)| {
            let new_key = k
                .trim_start_matches(ENV_PREFIX)
                .replace("__", ".")
                .to_lowercase();
            (new_key, v)
        })
        .collect()
}
