use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE, DEFAULT_API_BASE_URL};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub default_department: Option<String>,
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|mut path| {
            path.push(CONFIG_FILE);
            path
        })
        .unwrap_or_else(|| Path::new(CONFIG_FILE).to_path_buf())
}

pub(crate) fn read_config(path: &Path) -> Config {
    if path.exists() {
        let content = fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn load_config() -> Config {
    read_config(&config_path())
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path(), content)?;
    Ok(())
}

/// Resolve the API base URL: environment variable first, then the config
/// file, then the built-in default.
pub fn get_base_url() -> String {
    if let Ok(url) = env::var("STAFF_API_BASE_URL") {
        return url;
    }

    let config = load_config();
    config
        .base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_config_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            base_url: Some("http://staging:8080/rest-webapp/".to_string()),
            default_department: Some("Audio".to_string()),
        };
        let content = serde_json::to_string_pretty(&config).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let loaded = read_config(file.path());
        assert_eq!(
            loaded.base_url.as_deref(),
            Some("http://staging:8080/rest-webapp/")
        );
        assert_eq!(loaded.default_department.as_deref(), Some("Audio"));
    }

    #[test]
    fn test_read_config_missing_file_is_default() {
        let loaded = read_config(Path::new("/nonexistent/.staff-cli-config.json"));
        assert!(loaded.base_url.is_none());
        assert!(loaded.default_department.is_none());
    }

    #[test]
    fn test_read_config_garbage_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let loaded = read_config(file.path());
        assert!(loaded.base_url.is_none());
    }
}
