//! Configuration for the coordinator.

use recall_memory::StoreConfig;
use serde::{Deserialize, Serialize};

/// Main coordinator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Memory store configuration
    #[serde(default)]
    pub memory: StoreConfig,
}

impl CoordinatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.memory.default_threshold, 0.85);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[memory]
path = "/tmp/recall/memory_store.json"
default_threshold = 0.9
"#,
        )
        .unwrap();

        let config = CoordinatorConfig::from_file(&path).unwrap();
        assert_eq!(config.memory.default_threshold, 0.9);
        assert_eq!(
            config.memory.path,
            std::path::PathBuf::from("/tmp/recall/memory_store.json")
        );
        // Unset fields fall back to serde defaults.
        assert!(config.memory.similarity_epsilon <= 1e-6);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(CoordinatorConfig::from_file("/definitely/not/here.toml").is_err());
    }
}
