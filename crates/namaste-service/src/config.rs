//! Service configuration from the environment.

use std::path::PathBuf;

use namaste_loader::LoadConfig;

const DEFAULT_DATA_PATH: &str = "data";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Runtime configuration of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Directory holding the catalog and cross-map files.
    pub data_path: PathBuf,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Skip invalid concepts instead of failing the load.
    pub skip_invalid: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            skip_invalid: false,
        }
    }
}

impl ServiceConfig {
    /// Reads `NAMASTE_DATA_PATH`, `NAMASTE_HOST`, `NAMASTE_PORT` and
    /// `NAMASTE_SKIP_INVALID`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_path: lookup("NAMASTE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            host: lookup("NAMASTE_HOST").unwrap_or(defaults.host),
            port: lookup("NAMASTE_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            skip_invalid: lookup("NAMASTE_SKIP_INVALID")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.skip_invalid),
        }
    }

    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the loader configuration.
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig {
            skip_invalid: self.skip_invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert!(!config.load_config().skip_invalid);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("NAMASTE_DATA_PATH", "/srv/terminology"),
            ("NAMASTE_HOST", "127.0.0.1"),
            ("NAMASTE_PORT", "8080"),
            ("NAMASTE_SKIP_INVALID", "TRUE"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/srv/terminology"));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert!(config.load_config().skip_invalid);
    }

    #[test]
    fn test_bad_port_falls_back() {
        assert_eq!(config(&[("NAMASTE_PORT", "http")]).port, 3001);
        assert_eq!(config(&[("NAMASTE_PORT", "70000")]).port, 3001);
    }

    #[test]
    fn test_skip_invalid_values() {
        assert!(config(&[("NAMASTE_SKIP_INVALID", "1")]).skip_invalid);
        assert!(!config(&[("NAMASTE_SKIP_INVALID", "0")]).skip_invalid);
        assert!(!config(&[("NAMASTE_SKIP_INVALID", "no")]).skip_invalid);
    }
}
