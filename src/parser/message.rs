use crate::bot::models::IncomingMessage;
use crate::parser::regex::RegexPatterns;
use log::debug;

pub const DEFAULT_PREFIXES: [char; 4] = ['.', '!', '/', '#'];

#[derive(Clone, Debug)]
pub struct MessageParser {
    prefixes: Vec<char>,
    patterns: &'static RegexPatterns,
}

impl MessageParser {
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_PREFIXES.to_vec())
    }

    pub fn with_prefixes(prefixes: Vec<char>) -> Self {
        Self {
            prefixes,
            patterns: RegexPatterns::get_instance(),
        }
    }

    /// 把原始聊天文本拆成前缀、命令和正文
    ///
    /// 没有可识别前缀的消息返回空前缀，整段文本作为正文。
    pub fn parse(&self, text: &str, sender_id: &str, chat_id: &str) -> IncomingMessage {
        let not_a_command = || IncomingMessage {
            prefix: String::new(),
            command: String::new(),
            text: text.trim().to_string(),
            sender_id: sender_id.to_string(),
            chat_id: chat_id.to_string(),
        };

        let Some(captures) = self.patterns.command_regex.captures(text) else {
            return not_a_command();
        };

        let prefix = &captures["prefix"];
        if !prefix.chars().all(|c| self.prefixes.contains(&c)) {
            debug!("Prefix {prefix:?} is not configured, treating as plain text");
            return not_a_command();
        }

        let command = captures["command"].to_lowercase();
        let body = captures
            .name("body")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        debug!("Parsed command: prefix={prefix} command={command} body_len={}", body.len());

        IncomingMessage {
            prefix: prefix.to_string(),
            command,
            text: body,
            sender_id: sender_id.to_string(),
            chat_id: chat_id.to_string(),
        }
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}
