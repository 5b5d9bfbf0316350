use async_trait::async_trait;
use std::time::Duration;

use crate::bot::models::GroupRef;
use crate::error::Result;

/// 抽象聊天客户端操作的trait，用于测试时mock
#[async_trait]
pub trait BotApi: Send + Sync {
    /// 发送文本消息
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;

    /// 获取机器人账号当前加入的所有群组
    async fn joined_groups(&self) -> Result<Vec<GroupRef>>;
}

/// 主机指标，每一项都可以单独失败
#[cfg_attr(test, mockall::automock)]
pub trait MetricsProvider: Send + Sync {
    fn platform(&self) -> Result<String>;

    fn total_memory(&self) -> Result<u64>;

    fn total_disk(&self) -> Result<u64>;

    fn cpu_count(&self) -> Result<usize>;

    fn host_uptime(&self) -> Result<Duration>;
}
