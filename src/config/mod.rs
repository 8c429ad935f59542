use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub use crate::feed::FeedConfig;
pub use crate::telemetry::DriftConfig;

/// Config file read when `MAHA_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "maharakshak.toml";

/// Complete MahaRakshak configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MahaConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub drift: DriftConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow any origin (the page front end is served from elsewhere)
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MahaConfig {
    /// Apply `MAHA_HOST`, `MAHA_PORT` and `MAHA_RNG_SEED` on top of the file values
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("MAHA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("MAHA_PORT") {
            self.server.port = port
                .parse()
                .context("MAHA_PORT must be a valid port number")?;
        }
        if let Some(seed) = var("MAHA_RNG_SEED") {
            self.feed.rng_seed = Some(
                seed.parse()
                    .context("MAHA_RNG_SEED must be an unsigned integer")?,
            );
        }
        Ok(())
    }

    /// Reject settings the feed cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.feed.patient_interval_ms == 0 {
            bail!("feed.patient_interval_ms must be greater than zero");
        }
        if self.feed.device_interval_ms == 0 {
            bail!("feed.device_interval_ms must be greater than zero");
        }
        if self.feed.update_buffer == 0 {
            bail!("feed.update_buffer must be greater than zero");
        }
        if let Some(name) = self.drift.invalid_bounds() {
            bail!("drift.{} has min greater than max", name);
        }
        let steps = [
            ("temperature_step", self.drift.temperature_step),
            ("heart_rate_step", self.drift.heart_rate_step),
            ("oxygen_step", self.drift.oxygen_step),
            ("reading_step", self.drift.reading_step),
            ("battery_drain_max", self.drift.battery_drain_max),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value < 0.0 {
                bail!("drift.{} must be a finite, non-negative number", name);
            }
        }
        Ok(())
    }
}

/// Load configuration from TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<MahaConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: MahaConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Load the file if it exists, otherwise start from defaults
pub fn load_or_default(path: impl AsRef<Path>) -> Result<MahaConfig> {
    let path = path.as_ref();
    if path.exists() {
        info!(path = %path.display(), "Loading config file");
        load_config(path)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(MahaConfig::default())
    }
}

/// Resolve the config path, load it, apply env overrides and validate
pub fn from_env() -> Result<MahaConfig> {
    let path = std::env::var("MAHA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = load_or_default(&path)?;
    config.apply_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = MahaConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_permissive);
        assert_eq!(config.feed.patient_interval_ms, 5000);
        assert_eq!(config.feed.device_interval_ms, 3000);
        assert_eq!(config.feed.rng_seed, None);
        assert_eq!(config.drift.oxygen_bounds.min, 85.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            cors_permissive = false

            [feed]
            patient_interval_ms = 1000
            device_interval_ms = 500
            rng_seed = 42
            update_buffer = 64

            [drift]
            temperature_step = 1.0
            oxygen_bounds = { min = 80.0, max = 100.0 }
        "#;

        let config: MahaConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
        assert!(!config.server.cors_permissive);
        assert_eq!(config.feed.patient_interval_ms, 1000);
        assert_eq!(config.feed.rng_seed, Some(42));
        assert_eq!(config.feed.update_buffer, 64);
        assert_eq!(config.drift.temperature_step, 1.0);
        assert_eq!(config.drift.oxygen_bounds.min, 80.0);
        assert_eq!(config.drift.heart_rate_step, 10.0); // Default
    }

    #[test]
    fn test_partial_config() {
        // Missing sections and fields use defaults
        let toml = r#"
            [feed]
            device_interval_ms = 1500
        "#;

        let config: MahaConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.feed.device_interval_ms, 1500);
        assert_eq!(config.feed.patient_interval_ms, 5000); // Default
        assert_eq!(config.server.port, 3000); // Default
    }

    #[test]
    fn test_env_overrides() {
        let mut config = MahaConfig::default();
        config
            .apply_overrides(vars(&[
                ("MAHA_HOST", "localhost"),
                ("MAHA_PORT", "9000"),
                ("MAHA_RNG_SEED", "7"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_addr(), "localhost:9000");
        assert_eq!(config.feed.rng_seed, Some(7));
    }

    #[test]
    fn test_bad_env_port_rejected() {
        let mut config = MahaConfig::default();
        let err = config
            .apply_overrides(vars(&[("MAHA_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("MAHA_PORT"));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = MahaConfig::default();
        config.feed.patient_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = MahaConfig::default();
        config.feed.update_buffer = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let toml = r#"
            [drift]
            heart_rate_bounds = { min = 200.0, max = 40.0 }
        "#;
        let config: MahaConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("heart_rate_bounds"));
    }

    #[test]
    fn test_validate_rejects_non_finite_drift() {
        // TOML accepts nan and inf as float values
        for toml in [
            "[drift]\nbattery_drain_max = nan",
            "[drift]\ntemperature_step = inf",
            "[drift]\nreading_step = -1.0",
        ] {
            let config: MahaConfig = toml::from_str(toml).unwrap();
            assert!(config.validate().is_err(), "accepted {}", toml);
        }

        let config: MahaConfig = toml::from_str("[drift]\noxygen_step = nan").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("oxygen_step"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_config_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"high\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
