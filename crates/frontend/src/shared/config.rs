use contracts::shared::list_query::SearchOptions;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub integrity: IntegrityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> anyhow::Result<log::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.level))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IntegrityConfig {
    /// Log references to ids that do not exist when the store loads
    pub check_references: bool,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            check_references: true,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[search]
min_query_len = 0

[integrity]
check_references = true
"#;

static DEFAULT: Lazy<Result<Config, String>> =
    Lazy::new(|| parse_config(DEFAULT_CONFIG).map_err(|e| format!("{e:#}")));

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.logging.level()?;
    Ok(config)
}

/// Load configuration.
///
/// Uses `overrides` (TOML text) when given, otherwise the embedded default.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<Config> {
    match overrides {
        Some(contents) => {
            log::info!("Using configuration overrides");
            parse_config(contents)
        }
        None => DEFAULT.clone().map_err(anyhow::Error::msg),
    }
}
