//! Configuration management
//!
//! Settings are resolved in this order of precedence:
//! 1. Environment variables
//! 2. `memory-server.toml` in the working directory
//! 3. Default values
//!
//! `${VAR_NAME}` inside the TOML file is replaced with the environment value.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Error;

/// Default configuration file name
pub const CONFIG_FILE: &str = "memory-server.toml";

const STORAGE_FILE: &str = "messages.db";

/// Main configuration for mcp-memory-server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Message storage configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port serving `/mcp` and `/health`
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Folder holding the message database; working directory when unset
    pub folder: Option<String>,
}

impl MemoryConfig {
    /// Path of the message database file
    pub fn storage_path(&self) -> PathBuf {
        match &self.folder {
            Some(folder) => Path::new(folder).join(STORAGE_FILE),
            None => PathBuf::from(STORAGE_FILE),
        }
    }

    /// Create the storage folder if needed and return the database path
    pub fn prepare_storage(&self) -> crate::Result<PathBuf> {
        if let Some(folder) = &self.folder {
            std::fs::create_dir_all(folder).map_err(|e| {
                Error::Config(format!("Failed to create memory folder {}: {}", folder, e))
            })?;
        }
        Ok(self.storage_path())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9091
}

impl Config {
    /// Replace `${VAR_NAME}` occurrences with environment values
    ///
    /// Unset variables expand to an empty string.
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next();

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut cfg = Self::from_toml_str(&toml_content)?;
        cfg.apply_env_overrides();

        Ok(cfg)
    }

    fn from_toml_str(content: &str) -> crate::Result<Self> {
        let expanded_content = Self::expand_env_vars(content);
        toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from the default file when present, otherwise
    /// from the environment alone
    pub fn load() -> crate::Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            return Self::from_toml_file(CONFIG_FILE);
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("MCP_HTTP_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid MCP_HTTP_PORT: {}", port),
            }
        }
        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }

        if let Ok(folder) = std::env::var("MEMORY_FOLDER") {
            if !folder.is_empty() {
                self.memory.folder = Some(folder);
            }
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 9091);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_storage_path() {
        let config = MemoryConfig::default();
        assert_eq!(config.storage_path(), PathBuf::from("messages.db"));

        let config = MemoryConfig {
            folder: Some("/data/memory".to_string()),
        };
        assert_eq!(config.storage_path(), PathBuf::from("/data/memory/messages.db"));
    }

    #[test]
    fn test_prepare_storage_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("memory");
        let config = MemoryConfig {
            folder: Some(folder.to_string_lossy().into_owned()),
        };

        let path = config.prepare_storage().unwrap();
        assert!(folder.is_dir());
        assert_eq!(path, folder.join("messages.db"));
    }

    #[test]
    fn test_expand_env_vars() {
        unsafe {
            std::env::set_var("MEMORY_SERVER_TEST_VAR", "test_value");
        }

        let result = Config::expand_env_vars("prefix_${MEMORY_SERVER_TEST_VAR}_suffix");
        assert_eq!(result, "prefix_test_value_suffix");

        let result = Config::expand_env_vars("prefix_${NONEXISTENT_VAR}_suffix");
        assert_eq!(result, "prefix__suffix");

        unsafe {
            std::env::remove_var("MEMORY_SERVER_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_no_braces() {
        assert_eq!(Config::expand_env_vars("no_vars_here"), "no_vars_here");
        assert_eq!(Config::expand_env_vars("cost: $5"), "cost: $5");
    }

    #[test]
    fn test_toml_config_parsing() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[memory]
folder = "/var/lib/memory"
"#;

        let config = Config::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.memory.folder.as_deref(), Some("/var/lib/memory"));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = Config::from_toml_str("[memory]\n").unwrap();
        assert_eq!(config.server.port, 9091);
        assert!(config.memory.folder.is_none());
    }
}
