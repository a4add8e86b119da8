// TOML config adapter - Configuration management using TOML files

use crate::domain::errors::*;
use crate::ports::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Table holding WebClip settings inside the config file
const SECTION: &str = "webclip";

/// TOML configuration adapter
pub struct TomlConfigAdapter {
    config: RwLock<HashMap<String, String>>,
    config_file_path: RwLock<Option<PathBuf>>,
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter with no values set
    pub fn new() -> Self {
        Self {
            config: RwLock::new(HashMap::new()),
            config_file_path: RwLock::new(None),
        }
    }

    /// Default config file path: `<config dir>/webclip/config.toml`
    pub fn default_config_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("webclip").join("config.toml"),
            None => PathBuf::from("webclip_config.toml"),
        }
    }

    /// Path of the last loaded file, if any
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.config_file_path
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Parse a TOML document and merge the `[webclip]` table into the current values
    pub fn deserialize_config(&self, toml_content: &str) -> Result<(), DomainError> {
        let parsed: toml::Value = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;

        let Some(table) = parsed.get(SECTION).and_then(|section| section.as_table()) else {
            return Ok(());
        };

        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        for (key, value) in table {
            let flattened = Self::flatten_value(key, value)?;
            config.insert(key.clone(), flattened);
        }

        Ok(())
    }

    /// Render scalar and array values as the strings stored in the map
    fn flatten_value(key: &str, value: &toml::Value) -> Result<String, DomainError> {
        match value {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Float(f) => Ok(f.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            toml::Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| match item {
                        toml::Value::String(s) => Ok(s.clone()),
                        other => Err(DomainError::ConfigFail(format!(
                            "Array '{}' must contain strings, found {}",
                            key,
                            other.type_str()
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(parts.join(","))
            }
            other => Err(DomainError::ConfigFail(format!(
                "Unsupported value type for '{}': {}",
                key,
                other.type_str()
            ))),
        }
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for TomlConfigAdapter {
    fn get_config(&self, key: &str) -> Option<String> {
        let config = self.config.read().unwrap_or_else(|e| e.into_inner());
        config.get(key).cloned()
    }

    fn set_config(&self, key: &str, value: &str) {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        config.insert(key.to_string(), value.to_string());
        tracing::debug!("Set config {} = {}", key, value);
    }

    fn load_config(&self, file_path: &str) -> Result<(), DomainError> {
        let path = Path::new(file_path);

        if !path.exists() {
            return Err(DomainError::FileNotFound(format!(
                "Config file does not exist: {}",
                file_path
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::FsFail(format!("Failed to read config file: {}", e)))?;

        self.deserialize_config(&content)?;
        let mut config_path = self.config_file_path.write().unwrap_or_else(|e| e.into_inner());
        *config_path = Some(path.to_path_buf());

        Ok(())
    }
}
