use minutecasino_engine::limits::{MAX_LIMIT_MINUTES, MIN_LIMIT_MINUTES};
use minutecasino_engine::math_challenge::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<i64>,
    pub wager: u32,
    pub difficulty: Difficulty,
    pub starting_limit: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub wager: ValueSource,
    pub difficulty: ValueSource,
    pub starting_limit: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            wager: ValueSource::Default,
            difficulty: ValueSource::Default,
            starting_limit: ValueSource::Default,
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
            seed: None,
            wager: 10,
            difficulty: Difficulty::Easy,
            starting_limit: 60,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("MINUTECASINO_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.wager {
            cfg.wager = v;
            sources.wager = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = v;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.starting_limit {
            cfg.starting_limit = v;
            sources.starting_limit = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("MINUTECASINO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(wager) = std::env::var("MINUTECASINO_WAGER")
        && !wager.is_empty()
    {
        cfg.wager = wager
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid wager".into()))?;
        sources.wager = ValueSource::Env;
    }
    if let Ok(diff) = std::env::var("MINUTECASINO_DIFFICULTY")
        && !diff.is_empty()
    {
        cfg.difficulty = diff
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid difficulty".into()))?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(limit) = std::env::var("MINUTECASINO_STARTING_LIMIT")
        && !limit.is_empty()
    {
        cfg.starting_limit = limit
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_limit".into()))?;
        sources.starting_limit = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<i64>,
    #[serde(default)]
    wager: Option<u32>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    starting_limit: Option<i64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.wager == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: wager must be >0".into(),
        ));
    }
    if !(MIN_LIMIT_MINUTES..=MAX_LIMIT_MINUTES).contains(&cfg.starting_limit) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_limit must be within {}..={}",
            MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES
        )));
    }
    Ok(())
}
