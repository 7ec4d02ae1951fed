//! Configuration resolution for a game run.
//!
//! Values start from defaults, are overridden by a TOML file named in
//! `WARSIM_CONFIG`, then by individual environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use warsim_engine::game::GameOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub max_rounds: Option<u64>,
    pub detect_repeats: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub max_rounds: ValueSource,
    pub detect_repeats: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            max_rounds: ValueSource::Default,
            detect_repeats: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rounds: None,
            detect_repeats: true,
        }
    }
}

impl Config {
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            max_rounds: self.max_rounds,
            detect_repeats: self.detect_repeats,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("WARSIM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.max_rounds {
            cfg.max_rounds = Some(v);
            sources.max_rounds = ValueSource::File;
        }
        if let Some(v) = f.detect_repeats {
            cfg.detect_repeats = v;
            sources.detect_repeats = ValueSource::File;
        }
    }

    if let Ok(rounds) = std::env::var("WARSIM_MAX_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.max_rounds = Some(
            rounds
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid max_rounds".into()))?,
        );
        sources.max_rounds = ValueSource::Env;
    }
    if let Ok(detect) = std::env::var("WARSIM_DETECT_REPEATS")
        && !detect.is_empty()
    {
        cfg.detect_repeats = parse_bool(&detect)
            .ok_or_else(|| ConfigError::Invalid("Invalid detect_repeats".into()))?;
        sources.detect_repeats = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    max_rounds: Option<u64>,
    #[serde(default)]
    detect_repeats: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_rounds == Some(0) {
        return Err(ConfigError::Invalid("max_rounds must be >= 1".into()));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
