use log::{debug, error, info};
use std::sync::Arc;

use crate::bot::broadcast::{self, BroadcastObserver, DelayStrategy, FixedDelay, LoggingObserver};
use crate::bot::models::IncomingMessage;
use crate::bot::status::StatusReporter;
use crate::bot::traits::{BotApi, MetricsProvider};
use crate::config::BotEnvironment;
use crate::parser::message::DEFAULT_PREFIXES;
use crate::utils::Logger;

/// 帮助文本里的命令使用第一个配置的前缀
pub fn menu_text(prefix: char) -> String {
    format!(
        "*📋 MENU BOT*

• {prefix}ping - Cek status server dan bot
• {prefix}uptime - Sama dengan {prefix}ping
• {prefix}menu - Tampilkan daftar perintah
• {prefix}jpm <teks> - Kirim pesan ke semua grup (khusus owner)"
    )
}

pub const OWNER_ONLY_TEXT: &str = "❌ Perintah ini hanya untuk owner bot!";

pub fn broadcast_usage_text(prefix: char) -> String {
    format!("Contoh: {prefix}jpm Halo semua, ini pesan dari owner")
}

pub fn broadcast_progress_text(total: usize) -> String {
    format!("⏳ Mengirim pesan ke {total} grup...")
}

pub fn broadcast_done_text(succeeded: usize) -> String {
    format!("Total groups successfully sent: {succeeded}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Menu,
    Broadcast,
    Unknown(String),
}

impl Command {
    /// 关键字区分大小写
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "ping" | "uptime" => Command::Status,
            "menu" => Command::Menu,
            "jpm" => Command::Broadcast,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct CommandRouter {
    env: Arc<BotEnvironment>,
    prefix: char,
    status: StatusReporter,
    delay: Arc<dyn DelayStrategy>,
    observer: Arc<dyn BroadcastObserver>,
}

impl CommandRouter {
    pub fn new(env: Arc<BotEnvironment>, metrics: Arc<dyn MetricsProvider>) -> Self {
        Self {
            status: StatusReporter::new(metrics, env.clone()),
            env,
            prefix: DEFAULT_PREFIXES[0],
            delay: Arc::new(FixedDelay::default()),
            observer: Arc::new(LoggingObserver),
        }
    }

    /// 回复文本中展示的命令前缀
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelayStrategy>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn BroadcastObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 处理一条消息；所有错误都在内部记录，不向调用方传播
    pub async fn route(&self, message: &IncomingMessage, bot: &dyn BotApi) {
        if message.prefix.is_empty() {
            return;
        }

        match Command::parse(&message.command) {
            Command::Status => self.handle_status(bot, message).await,
            Command::Menu => self.handle_menu(bot, message).await,
            Command::Broadcast => self.handle_broadcast(bot, message).await,
            Command::Unknown(keyword) => {
                debug!("Ignoring unknown command: {keyword:?}");
            }
        }
    }

    async fn handle_status(&self, bot: &dyn BotApi, message: &IncomingMessage) {
        let report = self.status.report();
        reply(bot, &message.chat_id, &report, "status reply").await;
    }

    async fn handle_menu(&self, bot: &dyn BotApi, message: &IncomingMessage) {
        reply(bot, &message.chat_id, &menu_text(self.prefix), "menu reply").await;
    }

    async fn handle_broadcast(&self, bot: &dyn BotApi, message: &IncomingMessage) {
        if !self.env.is_owner(&message.sender_id) {
            info!("Broadcast refused for non-owner sender {}", message.sender_id);
            reply(bot, &message.chat_id, OWNER_ONLY_TEXT, "owner-only reply").await;
            return;
        }

        if message.text.is_empty() {
            reply(
                bot,
                &message.chat_id,
                &broadcast_usage_text(self.prefix),
                "usage reply",
            )
            .await;
            return;
        }

        // 获取失败时只记录日志，不通知发起人
        let groups = match bot.joined_groups().await {
            Ok(groups) => groups,
            Err(e) => {
                Logger::log_operation_failure("Fetching joined groups", &e.to_string());
                return;
            }
        };

        Logger::log_operation_start("Broadcast", &format!("{} groups", groups.len()));
        reply(
            bot,
            &message.chat_id,
            &broadcast_progress_text(groups.len()),
            "broadcast progress",
        )
        .await;

        let result = broadcast::deliver(
            bot,
            &groups,
            &message.text,
            self.delay.as_ref(),
            self.observer.as_ref(),
        )
        .await;
        Logger::log_broadcast_summary(&message.sender_id, &result);

        reply(
            bot,
            &message.chat_id,
            &broadcast_done_text(result.groups_succeeded),
            "broadcast completion",
        )
        .await;
    }
}

async fn reply(bot: &dyn BotApi, chat_id: &str, text: &str, what: &str) {
    if let Err(e) = bot.send_message(chat_id, text).await {
        error!("Failed to send {what} to {chat_id}: {e}");
    }
}
