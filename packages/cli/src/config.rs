use serde::{Deserialize, Serialize};
use sitebuilder_model::DEFAULT_SITE_NAME;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitebuilder.config.json";

/// Site builder configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one file per stored key
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Default target of `export` and source of `import`
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// `name` written into exported documents
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

fn default_store_dir() -> String {
    ".sitebuilder".to_string()
}

fn default_export_file() -> String {
    "website-config.json".to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_store_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    pub fn get_export_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.export_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            export_file: default_export_file(),
            site_name: default_site_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storeDir": "state",
            "exportFile": "site.json",
            "siteName": "Acme"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_dir, "state");
        assert_eq!(config.export_file, "site.json");
        assert_eq!(config.site_name, "Acme");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "siteName": "Acme" }"#).unwrap();
        assert_eq!(config.store_dir, ".sitebuilder");
        assert_eq!(config.export_file, "website-config.json");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.site_name, "My Website");
    }
}
