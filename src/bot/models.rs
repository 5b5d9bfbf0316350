use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 解析后的一条聊天消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub prefix: String,  // 为空表示不是命令
    pub command: String, // 小写的命令关键字
    pub text: String,    // 命令之后的正文
    pub sender_id: String,
    pub chat_id: String,
}

/// 原始的入站事件，每行一个JSON对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub sender: String,
    pub chat: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: String,
}

impl GroupRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// 每次 ping/uptime 重新采集的系统快照
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub platform: Option<String>,
    pub total_memory_bytes: Option<u64>,
    pub total_disk_bytes: Option<u64>,
    pub cpu_count: usize,
    pub host_uptime: Option<Duration>,
    pub process_uptime: Duration,
    pub response_latency: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastResult {
    pub groups_targeted: usize,
    pub groups_succeeded: usize,
    pub failed_groups: Vec<String>,
}

impl BroadcastResult {
    pub fn new(groups_targeted: usize) -> Self {
        Self {
            groups_targeted,
            ..Default::default()
        }
    }

    pub fn groups_failed(&self) -> usize {
        self.failed_groups.len()
    }
}
