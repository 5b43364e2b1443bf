use crate::book::DuplicatePolicy;
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Keys accepted by [`RosterConfig::get`] and [`RosterConfig::set`].
pub const KEYS: &[&str] = &["contacts-file", "tasks-file", "duplicate-policy"];

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RosterConfig {
    /// Contacts file, relative to the data dir unless absolute
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,

    /// Whether updating a contact to its own phone counts as a duplicate
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_tasks_file() -> String {
    DEFAULT_TASKS_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            tasks_file: default_tasks_file(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "contacts-file" => Some(self.contacts_file.clone()),
            "tasks-file" => Some(self.tasks_file.clone()),
            "duplicate-policy" => Some(self.duplicate_policy.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "contacts-file" => self.contacts_file = file_name(key, value)?,
            "tasks-file" => self.tasks_file = file_name(key, value)?,
            "duplicate-policy" => {
                self.duplicate_policy = value.parse().map_err(RosterError::Config)?;
            }
            _ => return Err(RosterError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Every key with its current value, in [`KEYS`] order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.contacts_file)
    }

    pub fn tasks_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.tasks_file)
    }
}

fn file_name(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(RosterError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
