use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Config results carry no records; `R` only fixes the result type for the
/// caller.
pub fn run<R>(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult<R>> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = RosterConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RosterConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RosterConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn set_then_show() {
        let dir = tempdir().unwrap();
        let paths = RosterPaths::new(dir.path());

        let set: CmdResult<()> = run(
            &paths,
            ConfigAction::Set("duplicate-policy".into(), "exclude-self".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "duplicate-policy set to exclude-self");

        let shown: CmdResult<()> =
            run(&paths, ConfigAction::ShowKey("duplicate-policy".into())).unwrap();
        assert_eq!(shown.messages[0].content, "exclude-self");

        let all: CmdResult<()> = run(&paths, ConfigAction::ShowAll).unwrap();
        assert!(all.config.is_some());
    }

    #[test]
    fn unknown_key_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let paths = RosterPaths::new(dir.path());

        let shown: CmdResult<()> =
            run(&paths, ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Error);

        let set: CmdResult<()> =
            run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
