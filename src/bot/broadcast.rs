use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

use crate::bot::models::{BroadcastResult, GroupRef};
use crate::bot::traits::BotApi;
use crate::error::BotError;

pub const DEFAULT_BROADCAST_DELAY: Duration = Duration::from_secs(3);

/// 每次发送之后的等待时间，参数是从0开始的发送序号
pub trait DelayStrategy: Send + Sync {
    fn delay_for(&self, attempt: usize) -> Duration;
}

/// 固定间隔
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_BROADCAST_DELAY)
    }
}

impl DelayStrategy for FixedDelay {
    fn delay_for(&self, _attempt: usize) -> Duration {
        self.0
    }
}

/// 不等待，测试用
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayStrategy for NoDelay {
    fn delay_for(&self, _attempt: usize) -> Duration {
        Duration::ZERO
    }
}

/// 接收广播过程中每个失败的群组
pub trait BroadcastObserver: Send + Sync {
    fn on_send_failure(&self, group: &GroupRef, error: &BotError);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl BroadcastObserver for LoggingObserver {
    fn on_send_failure(&self, group: &GroupRef, error: &BotError) {
        warn!("Broadcast to group {} failed: {}", group.id, error);
    }
}

/// 依次向每个群组发送同一段文本
///
/// 单个群组失败不会中断循环；每次发送之后（无论成败）都按 `delay` 等待。
pub async fn deliver(
    bot: &dyn BotApi,
    groups: &[GroupRef],
    text: &str,
    delay: &dyn DelayStrategy,
    observer: &dyn BroadcastObserver,
) -> BroadcastResult {
    let mut result = BroadcastResult::new(groups.len());

    for (attempt, group) in groups.iter().enumerate() {
        match bot.send_message(&group.id, text).await {
            Ok(()) => {
                debug!("Broadcast sent to group {}", group.id);
                result.groups_succeeded += 1;
            }
            Err(e) => {
                observer.on_send_failure(group, &e);
                result.failed_groups.push(group.id.clone());
            }
        }

        let pause = delay.delay_for(attempt);
        if !pause.is_zero() {
            sleep(pause).await;
        }
    }

    result
}
