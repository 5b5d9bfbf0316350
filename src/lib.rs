// 公开内部模块以便测试
pub mod bot;
pub mod config;
pub mod error;
pub mod metrics;
pub mod parser;
pub mod utils;

// 重新导出常用的类型和结构体
pub use bot::{BotApi, BotDispatcher, Command, CommandRouter, ConsoleBot, MessageHandler};
pub use config::{BotEnvironment, Settings};
pub use error::BotError;
pub use metrics::SystemMetrics;
pub use parser::MessageParser;
