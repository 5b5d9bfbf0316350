use log::debug;

use crate::bot::commands::CommandRouter;
use crate::bot::models::InboundEvent;
use crate::bot::traits::BotApi;
use crate::parser::message::MessageParser;

#[derive(Clone)]
pub struct MessageHandler {
    parser: MessageParser,
    router: CommandRouter,
}

impl MessageHandler {
    pub fn new(parser: MessageParser, router: CommandRouter) -> Self {
        Self { parser, router }
    }

    pub async fn handle_event(&self, event: &InboundEvent, bot: &dyn BotApi) {
        debug!("Processing message from {} in chat {}", event.sender, event.chat);

        let message = self.parser.parse(&event.text, &event.sender, &event.chat);
        if message.prefix.is_empty() {
            debug!("Not a command, skipping");
            return;
        }

        self.router.route(&message, bot).await;
    }
}
