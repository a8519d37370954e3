use std::env;
use std::time::Duration;

use super::pacing::PacingConfig;
use crate::domain::ids::PlayerId;
use crate::error::ClientError;
use crate::infra::retry::RetryPolicy;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_PLAYER_ID: &str = "player-human";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Everything a game session needs from its environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub player_id: PlayerId,
    pub request_timeout: Duration,
    pub pacing: PacingConfig,
    pub retry: RetryPolicy,
    /// Bound of the UI -> loop handoff channel.
    pub input_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            player_id: PlayerId::from(DEFAULT_PLAYER_ID),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            pacing: PacingConfig::default(),
            retry: RetryPolicy::default(),
            input_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Reads `LOVELETTER_*` variables, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    ///
    /// A variable that is present but not valid unicode is a config error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let mut config = Self::default();

        if let Some(url) = read_var(&lookup, "LOVELETTER_SERVER_URL")? {
            config.server_url = server_url(&url)?;
        }
        if let Some(id) = read_var(&lookup, "LOVELETTER_PLAYER_ID")? {
            let id = id.trim();
            if id.is_empty() {
                return Err(ClientError::config("LOVELETTER_PLAYER_ID must not be empty"));
            }
            config.player_id = PlayerId::from(id);
        }
        if let Some(raw) = read_var(&lookup, "LOVELETTER_REQUEST_TIMEOUT_MS")? {
            let ms: u64 = parse_var("LOVELETTER_REQUEST_TIMEOUT_MS", &raw)?;
            if ms == 0 {
                return Err(ClientError::config(
                    "LOVELETTER_REQUEST_TIMEOUT_MS must be greater than zero",
                ));
            }
            config.request_timeout = Duration::from_millis(ms);
        }
        if let Some(raw) = read_var(&lookup, "LOVELETTER_PACING_SCALE")? {
            let factor: f64 = parse_var("LOVELETTER_PACING_SCALE", &raw)?;
            if !factor.is_finite() || factor < 0.0 {
                return Err(ClientError::config(format!(
                    "LOVELETTER_PACING_SCALE must be a non-negative number, got '{raw}'"
                )));
            }
            config.pacing = PacingConfig::scaled(factor);
        }
        if let Some(raw) = read_var(&lookup, "LOVELETTER_CHANNEL_CAPACITY")? {
            let capacity: usize = parse_var("LOVELETTER_CHANNEL_CAPACITY", &raw)?;
            if capacity == 0 {
                return Err(ClientError::config(
                    "LOVELETTER_CHANNEL_CAPACITY must be greater than zero",
                ));
            }
            config.input_capacity = capacity;
        }

        Ok(config)
    }

    /// Zero pacing and no retry backoff.
    pub fn for_tests() -> Self {
        Self {
            pacing: PacingConfig::zero(),
            retry: RetryPolicy {
                max_retries: 2,
                base_backoff: Duration::ZERO,
            },
            ..Self::default()
        }
    }

    pub fn with_server_url(mut self, url: &str) -> Result<Self, ClientError> {
        self.server_url = server_url(url)?;
        Ok(self)
    }
}

fn read_var<F>(lookup: &F, name: &str) -> Result<Option<String>, ClientError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn server_url(raw: &str) -> Result<String, ClientError> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ClientError::config(format!(
            "server url must start with http:// or https://, got '{raw}'"
        )));
    }
    Ok(url.to_string())
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ClientError> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::config(format!("{name} has an invalid value: '{raw}'")))
}
