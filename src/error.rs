use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Send error: {message}")]
    Send { message: String },

    #[error("Group directory error: {message}")]
    GroupDirectory { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;

impl BotError {
    pub fn send_error(message: impl Into<String>) -> Self {
        Self::Send {
            message: message.into(),
        }
    }

    pub fn group_directory_error(message: impl Into<String>) -> Self {
        Self::GroupDirectory {
            message: message.into(),
        }
    }

    pub fn metrics_error(message: impl Into<String>) -> Self {
        Self::Metrics {
            message: message.into(),
        }
    }

    /// 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::Config(_) => ErrorSeverity::Critical,
            BotError::GroupDirectory { .. } => ErrorSeverity::High,
            BotError::Send { .. } => ErrorSeverity::Medium,
            BotError::Io(_) => ErrorSeverity::Medium,
            BotError::Metrics { .. } => ErrorSeverity::Low,
            BotError::Json(_) => ErrorSeverity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 对应的日志级别
    pub fn log_level(&self) -> log::Level {
        match self {
            ErrorSeverity::Low => log::Level::Warn,
            ErrorSeverity::Medium | ErrorSeverity::High | ErrorSeverity::Critical => {
                log::Level::Error
            }
        }
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Low => write!(f, "LOW"),
            ErrorSeverity::Medium => write!(f, "MEDIUM"),
            ErrorSeverity::High => write!(f, "HIGH"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
