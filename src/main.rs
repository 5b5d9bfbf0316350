use anyhow::Result;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;

use botwa::bot::broadcast::FixedDelay;
use botwa::utils::{Formatter, Logger};
use botwa::{
    BotApi, BotDispatcher, BotEnvironment, CommandRouter, ConsoleBot, MessageHandler,
    MessageParser, Settings, SystemMetrics,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载环境变量
    dotenv().ok();

    // 初始化日志，未设置 RUST_LOG 时默认 info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Logger::log_operation_start("BotWA", "Initializing application");

    // 加载配置
    let settings = match Settings::new() {
        Ok(s) => {
            Logger::log_operation_success("Configuration", "Settings loaded successfully");
            s
        }
        Err(e) => {
            Logger::log_operation_failure("Configuration", &e.to_string());
            return Err(e.into());
        }
    };

    // 验证配置
    if let Err(e) = settings.validate() {
        Logger::log_operation_failure("Configuration validation", &e.to_string());
        return Err(e.into());
    }

    // 进程启动时间只在这里记录一次
    let env = Arc::new(BotEnvironment::capture(settings.owner_id.clone()));

    let router = CommandRouter::new(env.clone(), Arc::new(SystemMetrics::new()))
        .with_prefix(settings.display_prefix())
        .with_delay(Arc::new(FixedDelay(Duration::from_secs(
            settings.broadcast_delay_secs,
        ))));
    let parser = MessageParser::with_prefixes(settings.command_prefixes.clone());
    let message_handler = MessageHandler::new(parser, router);
    Logger::log_operation_success("MessageHandler", "Handler initialized successfully");

    let bot: Arc<dyn BotApi> = Arc::new(ConsoleBot::new(settings.console_groups.clone()));

    info!("🤖 {} initialized successfully!", settings.bot_name);
    info!("📊 Configuration:");
    info!("  - Started at: {}", Formatter::format_timestamp(env.started_at));
    info!("  - Command prefixes: {:?}", settings.command_prefixes);
    info!("  - Broadcast delay: {}s", settings.broadcast_delay_secs);
    info!("  - Console groups: {}", settings.console_groups.len());
    info!("💡 Reading JSON events from stdin, e.g. {{\"sender\":\"...\",\"chat\":\"...\",\"text\":\".ping\"}}");

    let dispatcher = BotDispatcher::new(message_handler);
    let handled = dispatcher
        .run(bot, BufReader::new(tokio::io::stdin()))
        .await?;

    Logger::log_operation_success("BotWA", &format!("{handled} messages handled"));
    Ok(())
}
