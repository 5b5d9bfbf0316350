use std::env;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};
use crate::parser::message::DEFAULT_PREFIXES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub owner_id: String,
    pub bot_name: String,
    pub command_prefixes: Vec<char>,
    pub broadcast_delay_secs: u64,
    pub console_groups: Vec<String>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let owner_id = env::var("OWNER_ID")
            .map_err(|_| BotError::Config(anyhow!("OWNER_ID must be set")))?;

        let bot_name = env::var("BOT_NAME")
            .unwrap_or_else(|_| "BotWA".to_string());

        let command_prefixes = env::var("COMMAND_PREFIXES")
            .map(|prefixes| prefixes.chars().filter(|c| !c.is_whitespace()).collect())
            .unwrap_or_else(|_| DEFAULT_PREFIXES.to_vec());

        let broadcast_delay_secs = env::var("BROADCAST_DELAY_SECS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .unwrap_or(3);

        // 逗号分隔的群组ID，仅供控制台模式使用
        let console_groups = env::var("CONSOLE_GROUPS")
            .map(|groups| {
                groups
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Settings {
            owner_id,
            bot_name,
            command_prefixes,
            broadcast_delay_secs,
            console_groups,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.owner_id.trim().is_empty() {
            return Err(BotError::Config(anyhow!("Owner id cannot be empty")));
        }

        if self.command_prefixes.is_empty() {
            return Err(BotError::Config(anyhow!(
                "At least one command prefix must be configured"
            )));
        }

        Ok(())
    }

    /// 回复文本中展示的前缀
    pub fn display_prefix(&self) -> char {
        self.command_prefixes
            .first()
            .copied()
            .unwrap_or(DEFAULT_PREFIXES[0])
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            owner_id: String::new(),
            bot_name: "BotWA".to_string(),
            command_prefixes: DEFAULT_PREFIXES.to_vec(),
            broadcast_delay_secs: 3,
            console_groups: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorSeverity;

    #[test]
    fn test_validate_reports_config_errors() {
        let settings = Settings::default();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let settings = Settings {
            owner_id: "owner".to_string(),
            command_prefixes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(BotError::Config(_))));
        assert_eq!(settings.display_prefix(), '.');
    }

    #[test]
    fn test_display_prefix_is_first_configured() {
        let settings = Settings {
            owner_id: "owner".to_string(),
            command_prefixes: vec!['!', '.'],
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.display_prefix(), '!');
    }
}
