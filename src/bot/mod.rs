pub mod broadcast;
pub mod commands;
pub mod console;
pub mod dispatcher;
pub mod handler;
pub mod models;
pub mod status;
pub mod traits;

pub use commands::{Command, CommandRouter};
pub use console::ConsoleBot;
pub use dispatcher::BotDispatcher;
pub use handler::MessageHandler;
pub use traits::{BotApi, MetricsProvider};
