use eyre::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub providers: ProvidersConfig,
    pub lookup: LookupConfig,
}

/// Per-provider endpoints and timeouts
///
/// Each section is layered over that provider's own defaults, so a file that
/// sets only `timeout_ms` keeps the provider's `base_url`.
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersConfig {
    pub ipinfo: ProviderConfig,
    pub hibp: ProviderConfig,
    pub shodan: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            ipinfo: ProviderConfig {
                base_url: "https://ipinfo.io".to_string(),
                timeout_ms: 5000,
                user_agent: None,
            },
            hibp: ProviderConfig {
                base_url: "https://haveibeenpwned.com".to_string(),
                timeout_ms: 5000,
                user_agent: Some(format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))),
            },
            shodan: ProviderConfig {
                base_url: "https://api.shodan.io".to_string(),
                timeout_ms: 10000,
                user_agent: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: Option<String>,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Provider sections as written in the file; absent fields stay `None`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProvidersFile {
    ipinfo: ProviderOverrides,
    hibp: ProviderOverrides,
    shodan: ProviderOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderOverrides {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
    user_agent: Option<String>,
}

impl ProviderOverrides {
    fn over(self, base: ProviderConfig) -> ProviderConfig {
        ProviderConfig {
            base_url: self.base_url.unwrap_or(base.base_url),
            timeout_ms: self.timeout_ms.unwrap_or(base.timeout_ms),
            user_agent: self.user_agent.or(base.user_agent),
        }
    }
}

impl<'de> Deserialize<'de> for ProvidersConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let file = ProvidersFile::deserialize(deserializer)?;
        let defaults = ProvidersConfig::default();
        Ok(Self {
            ipinfo: file.ipinfo.over(defaults.ipinfo),
            hibp: file.hibp.over(defaults.hibp),
            shodan: file.shodan.over(defaults.shodan),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub deadline_ms: Option<u64>,
    pub batch_concurrency: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            deadline_ms: None,
            batch_concurrency: 4,
        }
    }
}

impl LookupConfig {
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            providers: ProvidersConfig::default(),
            lookup: LookupConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
