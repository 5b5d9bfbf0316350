use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// 进程启动时确定、之后只读的运行环境
#[derive(Debug, Clone)]
pub struct BotEnvironment {
    pub owner_id: String,
    pub started_at: DateTime<Utc>, // 仅用于展示
    started: Instant,              // 计算运行时长用单调时钟
}

impl BotEnvironment {
    /// 在启动时调用一次，记录进程启动时间
    pub fn capture(owner_id: impl Into<String>) -> Self {
        Self::with_start(owner_id, Utc::now(), Instant::now())
    }

    pub fn with_start(
        owner_id: impl Into<String>,
        started_at: DateTime<Utc>,
        started: Instant,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            started_at,
            started,
        }
    }

    pub fn is_owner(&self, sender_id: &str) -> bool {
        self.owner_id == sender_id
    }

    pub fn process_uptime(&self) -> Duration {
        self.started.elapsed()
    }
}
