use crate::api::RosterApi;
use crate::commands::RosterPaths;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::model::{Contact, Task};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the platform data directory when set and non-empty.
pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct RosterContext {
    pub paths: RosterPaths,
    pub config: RosterConfig,
}

impl RosterContext {
    pub fn contacts(&self) -> Result<RosterApi<Contact, FileStore>> {
        let store = FileStore::new(self.config.contacts_path(&self.paths.data_dir));
        RosterApi::open(store, self.config.duplicate_policy)
    }

    pub fn tasks(&self) -> Result<RosterApi<Task, FileStore>> {
        let store = FileStore::new(self.config.tasks_path(&self.paths.data_dir));
        RosterApi::open(store, self.config.duplicate_policy)
    }
}

/// Picks the data directory: the `ROSTER_HOME` value if given, else the
/// platform data dir.
pub fn resolve_data_dir(home: Option<OsString>) -> Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine data dir".to_string()))
}

pub fn initialize() -> Result<RosterContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV))?;
    Ok(initialize_at(data_dir))
}

/// Builds a context rooted at `data_dir`. An unreadable config falls back to
/// defaults.
pub fn initialize_at(data_dir: PathBuf) -> RosterContext {
    let config = RosterConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        RosterConfig::default()
    });
    debug!(data_dir = %data_dir.display(), "initialized");

    RosterContext {
        paths: RosterPaths::new(data_dir),
        config,
    }
}
