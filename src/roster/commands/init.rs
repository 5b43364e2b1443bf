use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;
use std::fs;

/// Creates the data directory and writes a default config if none exists.
pub fn run<R>(paths: &RosterPaths) -> Result<CmdResult<R>> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir)?;

    let mut result = CmdResult::default();
    if !dir.join("config.json").exists() {
        RosterConfig::default().save(dir)?;
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized roster store at {}",
        dir.display()
    )));
    Ok(result)
}
