use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RecipeConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RecipeConfig::load(dir)?;
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
            let mut config = RecipeConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::DEFAULT_API_URL;
    use tempfile::tempdir;

    #[test]
    fn show_all_returns_default_config_when_no_file() {
        let temp = tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn set_persists_value() {
        let temp = tempdir().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("api-url".into(), "http://localhost:3000/api".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(temp.path(), ConfigAction::ShowKey("api-url".into())).unwrap();
        assert_eq!(shown.messages[0].content, "http://localhost:3000/api");
    }

    #[test]
    fn invalid_set_reports_error_without_writing() {
        let temp = tempdir().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("timeout".into(), "later".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let temp = tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("editor".into())).unwrap();
        assert!(result.has_errors());
    }
}
