use log::warn;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bot::models::SystemSnapshot;
use crate::bot::traits::MetricsProvider;
use crate::config::BotEnvironment;
use crate::utils::{Formatter, UNKNOWN};

/// 收集系统信息并生成 ping/uptime 的回复
#[derive(Clone)]
pub struct StatusReporter {
    metrics: Arc<dyn MetricsProvider>,
    env: Arc<BotEnvironment>,
}

impl StatusReporter {
    pub fn new(metrics: Arc<dyn MetricsProvider>, env: Arc<BotEnvironment>) -> Self {
        Self { metrics, env }
    }

    /// 采集快照；response_latency 在调用方发送前通过 `finish` 填入
    pub fn collect(&self) -> SystemSnapshot {
        let platform = self
            .metrics
            .platform()
            .map_err(|e| warn!("Failed to read platform: {e}"))
            .ok();
        let total_memory_bytes = self
            .metrics
            .total_memory()
            .map_err(|e| warn!("Failed to read total memory: {e}"))
            .ok();
        let total_disk_bytes = self
            .metrics
            .total_disk()
            .map_err(|e| warn!("Failed to read total disk: {e}"))
            .ok();
        let cpu_count = self
            .metrics
            .cpu_count()
            .map_err(|e| warn!("Failed to read cpu count: {e}"))
            .unwrap_or(0);
        let host_uptime = self
            .metrics
            .host_uptime()
            .map_err(|e| warn!("Failed to read host uptime: {e}"))
            .ok();

        SystemSnapshot {
            platform,
            total_memory_bytes,
            total_disk_bytes,
            cpu_count,
            host_uptime,
            process_uptime: self.env.process_uptime(),
            response_latency: Duration::ZERO,
        }
    }

    /// 采集并渲染完整的状态消息
    pub fn report(&self) -> String {
        let start = Instant::now();
        let mut snapshot = self.collect();
        snapshot.response_latency = start.elapsed();
        render_status(&snapshot)
    }
}

pub fn render_status(snapshot: &SystemSnapshot) -> String {
    format!(
        "*🔴 INFORMATION SERVER*

• Platform : {}
• Total Ram : {}
• Total Disk : {}
• Total Cpu : {} Core
• Runtime VPS : {}

*🔵 INFORMATION BOT GOLANG*

• Respon Speed : {} detik
• Runtime Bot : {}",
        snapshot.platform.as_deref().unwrap_or(UNKNOWN),
        Formatter::format_gigabytes(snapshot.total_memory_bytes),
        Formatter::format_gigabytes(snapshot.total_disk_bytes),
        snapshot.cpu_count,
        Formatter::format_optional_duration(snapshot.host_uptime),
        Formatter::format_latency(snapshot.response_latency),
        Formatter::format_duration(snapshot.process_uptime),
    )
}
