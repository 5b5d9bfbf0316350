use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::time::Duration;

use crate::bot::models::BroadcastResult;

/// 指标缺失时显示的占位符
pub const UNKNOWN: &str = "Unknown";

/// 日志记录工具
pub struct Logger;

impl Logger {
    pub fn log_operation_start(operation: &str, details: &str) {
        info!("🚀 Starting {}: {}", operation, details);
    }

    pub fn log_operation_success(operation: &str, details: &str) {
        info!("✅ {} completed successfully: {}", operation, details);
    }

    pub fn log_operation_failure(operation: &str, error: &str) {
        error!("❌ {} failed: {}", operation, error);
    }

    pub fn log_broadcast_summary(requested_by: &str, result: &BroadcastResult) {
        if result.groups_failed() > 0 {
            warn!(
                "📢 Broadcast by {} finished: {}/{} groups, failed: {:?}",
                requested_by,
                result.groups_succeeded,
                result.groups_targeted,
                result.failed_groups
            );
        } else {
            info!(
                "📢 Broadcast by {} finished: {}/{} groups",
                requested_by, result.groups_succeeded, result.groups_targeted
            );
        }
    }
}

/// 格式化工具
pub struct Formatter;

impl Formatter {
    /// 按 天/时/分/秒 输出非零的单位，单位之间用一个空格分隔
    pub fn format_duration(duration: Duration) -> String {
        let mut seconds = duration.as_secs();

        let days = seconds / 86_400;
        seconds %= 86_400;
        let hours = seconds / 3_600;
        seconds %= 3_600;
        let minutes = seconds / 60;
        seconds %= 60;

        let parts: Vec<String> = [
            (days, "hari"),
            (hours, "jam"),
            (minutes, "menit"),
            (seconds, "detik"),
        ]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value} {unit}"))
        .collect();

        // 不足一秒时也要有可读的输出
        if parts.is_empty() {
            return "0 detik".to_string();
        }

        parts.join(" ")
    }

    /// 十进制GB，保留两位小数
    pub fn format_gigabytes(bytes: Option<u64>) -> String {
        match bytes {
            Some(bytes) => format!("{:.2} GB", bytes as f64 / 1e9),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn format_optional_duration(duration: Option<Duration>) -> String {
        duration
            .map(Self::format_duration)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// 响应耗时，秒，保留四位小数
    pub fn format_latency(latency: Duration) -> String {
        format!("{:.4}", latency.as_secs_f64())
    }

    /// 格式化时间戳
    pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
        timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Formatter::format_duration(Duration::from_secs(90_061)),
            "1 hari 1 jam 1 menit 1 detik"
        );
        assert_eq!(Formatter::format_duration(Duration::from_secs(45)), "45 detik");
        assert_eq!(Formatter::format_duration(Duration::from_secs(3_600)), "1 jam");
        assert_eq!(
            Formatter::format_duration(Duration::from_secs(2 * 86_400 + 5)),
            "2 hari 5 detik"
        );
        assert_eq!(
            Formatter::format_duration(Duration::from_secs(7_260)),
            "2 jam 1 menit"
        );
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(Formatter::format_duration(Duration::ZERO), "0 detik");
        assert_eq!(Formatter::format_duration(Duration::from_millis(999)), "0 detik");
    }

    #[test]
    fn test_format_duration_has_no_trailing_space() {
        for secs in [1, 59, 60, 61, 3_599, 3_600, 86_399, 86_400, 1_000_000] {
            let formatted = Formatter::format_duration(Duration::from_secs(secs));
            assert_eq!(formatted, formatted.trim(), "input {secs}");
            assert!(!formatted.contains("  "), "input {secs}");
        }
    }

    #[test]
    fn test_format_gigabytes() {
        assert_eq!(Formatter::format_gigabytes(Some(8_000_000_000)), "8.00 GB");
        assert_eq!(Formatter::format_gigabytes(Some(16_777_216_000)), "16.78 GB");
        assert_eq!(Formatter::format_gigabytes(None), "Unknown");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(Formatter::format_latency(Duration::from_micros(1_234)), "0.0012");
        assert_eq!(Formatter::format_latency(Duration::ZERO), "0.0000");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 1, 8, 30, 0).unwrap();
        assert_eq!(Formatter::format_timestamp(ts), "2024-12-01 08:30:00 UTC");
    }
}
