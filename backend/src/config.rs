//! Server configuration.
//!
//! Read from `autopilot.toml` (or the file named by `AUTOPILOT_CONFIG`),
//! then overridden by environment variables.
//!
//! # Environment Variables
//!
//! - `AUTOPILOT_CONFIG`: explicit path to the TOML file
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8080)
//! - `CIVIL_TIMEZONE`: IANA zone rules are evaluated in (default: America/Chicago)
//! - `SEED_LOCATIONS`: JSON file of locations loaded into the catalog at startup

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::CIVIL_TIMEZONE;

pub const CONFIG_PATH_ENV: &str = "AUTOPILOT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub rules: RulesSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesSettings {
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timezone() -> String {
    CIVIL_TIMEZONE.name().to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RulesSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl ServerConfig {
    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Look for `autopilot.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("autopilot.toml"),
            PathBuf::from("backend/autopilot.toml"),
            PathBuf::from("../autopilot.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// File (explicit or discovered, else defaults), then environment overrides,
    /// then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.civil_timezone()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `CIVIL_TIMEZONE` and `SEED_LOCATIONS` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(tz) = lookup("CIVIL_TIMEZONE") {
            self.rules.timezone = tz;
        }
        if let Some(path) = lookup("SEED_LOCATIONS") {
            self.catalog.seed_path = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// The configured zone. An unknown name is a startup failure, never a
    /// silent fall back to machine-local time.
    pub fn civil_timezone(&self) -> Result<Tz, ConfigError> {
        self.rules
            .timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.rules.timezone.clone()))
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST",
            value: raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rules.timezone, "America/Chicago");
        assert_eq!(config.civil_timezone().unwrap(), CIVIL_TIMEZONE);
        assert!(config.catalog.seed_path.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 9000
"#;
        let config = ServerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.rules.timezone, "America/Chicago");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 3000

[rules]
timezone = "America/Chicago"

[catalog]
seed_path = "data/locations.json"
"#;
        let config = ServerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.catalog.seed_path,
            Some(PathBuf::from("data/locations.json"))
        );
    }

    #[test]
    fn test_malformed_toml() {
        let err = ServerConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\ntimezone = \"America/Chicago\"").unwrap();
        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rules.timezone, "America/Chicago");
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/no/such/autopilot.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "8181"),
            ("SEED_LOCATIONS", "/tmp/seed.json"),
        ]
        .into_iter()
        .collect();
        let mut config = ServerConfig::default();
        config
            .apply_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8181);
        assert_eq!(config.catalog.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_overrides(|k| (k == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_invalid_timezone_is_an_error() {
        let mut config = ServerConfig::default();
        config.rules.timezone = "America/Gotham".to_string();
        assert!(matches!(
            config.civil_timezone(),
            Err(ConfigError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut config = ServerConfig::default();
        config.server.host = "not a host".to_string();
        assert!(config.bind_addr().is_err());
    }
}
