//! Server configuration, loadable from TOML.

use std::path::PathBuf;

use serde::Deserialize;

use hearth_inference::InferenceConfig;

/// Top-level configuration for the API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the SQLite device directory.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Directory for generated routine artifacts.
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
    /// Inference backend settings. Optional — defaults to local Ollama.
    #[serde(default)]
    pub inference: InferenceConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("home_details.db")
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("routines")
}

impl ServerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            artifact_dir: default_artifact_dir(),
            inference: InferenceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("home_details.db"));
        assert_eq!(config.artifact_dir, PathBuf::from("routines"));
        assert_eq!(config.inference.host, "http://localhost:11434");
    }

    #[test]
    fn deserialize_minimal_config() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.inference.structured_model, "gemma:7b");
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
host = "0.0.0.0"
port = 8080
database_path = "/var/lib/hearth/home_details.db"
artifact_dir = "/var/lib/hearth/routines"

[inference]
host = "http://192.168.1.50:11434"
structured_model = "gemma:2b"
responder_model = "mistral:7b"
"#;
        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/hearth/home_details.db")
        );
        assert_eq!(config.inference.structured_model, "gemma:2b");
        assert_eq!(config.inference.responder_model, "mistral:7b");
    }

    #[test]
    fn deserialize_missing_inference_uses_defaults() {
        let toml = r#"
port = 9000
"#;
        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.inference.host, "http://localhost:11434");
        assert_eq!(config.inference.responder_model, "mistral:7b-instruct-q6_K");
    }
}
