use std::path::Path;
use std::time::Duration;
use sysinfo::{Disks, System};

use crate::bot::traits::MetricsProvider;
use crate::error::{BotError, Result};

/// 基于 sysinfo 的主机指标
#[derive(Debug, Default)]
pub struct SystemMetrics;

impl SystemMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsProvider for SystemMetrics {
    fn platform(&self) -> Result<String> {
        match std::env::consts::OS {
            "" => Err(BotError::metrics_error("platform name unavailable")),
            os => Ok(os.to_string()),
        }
    }

    fn total_memory(&self) -> Result<u64> {
        let mut sys = System::new();
        sys.refresh_memory();

        match sys.total_memory() {
            0 => Err(BotError::metrics_error("total memory unavailable")),
            total => Ok(total),
        }
    }

    fn total_disk(&self) -> Result<u64> {
        let disks = Disks::new_with_refreshed_list();

        disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .map(|disk| disk.total_space())
            .filter(|total| *total > 0)
            .ok_or_else(|| BotError::metrics_error("root filesystem not found"))
    }

    fn cpu_count(&self) -> Result<usize> {
        std::thread::available_parallelism()
            .map(|count| count.get())
            .map_err(BotError::from)
    }

    fn host_uptime(&self) -> Result<Duration> {
        match System::uptime() {
            0 => Err(BotError::metrics_error("host uptime unavailable")),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
