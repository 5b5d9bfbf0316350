pub mod environment;
pub mod settings;

pub use environment::BotEnvironment;
pub use settings::Settings;
