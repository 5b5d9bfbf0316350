use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct RegexPatterns {
    pub command_regex: Regex,
}

impl RegexPatterns {
    pub fn new() -> Self {
        Self {
            // 匹配 <前缀><命令> <正文>，前缀是任意一个非单词、非空白字符，正文可以跨行
            command_regex: Regex::new(
                r"^\s*(?P<prefix>[^\w\s])(?P<command>\S*)(?:\s+(?P<body>[\s\S]*))?$",
            )
            .unwrap(),
        }
    }

    pub fn get_instance() -> &'static Self {
        static INSTANCE: OnceLock<RegexPatterns> = OnceLock::new();
        INSTANCE.get_or_init(RegexPatterns::new)
    }
}

impl Default for RegexPatterns {
    fn default() -> Self {
        Self::new()
    }
}
