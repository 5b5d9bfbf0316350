use anyhow::Result;
use log::{debug, error, info, log};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::bot::handler::MessageHandler;
use crate::bot::models::InboundEvent;
use crate::bot::traits::BotApi;
use crate::error::BotError;

pub struct BotDispatcher {
    message_handler: MessageHandler,
}

impl BotDispatcher {
    pub fn new(message_handler: MessageHandler) -> Self {
        Self { message_handler }
    }

    /// 逐行读取JSON事件，每条消息在独立的任务里处理
    ///
    /// 读到EOF或读取出错后，都先等待所有进行中的任务结束。
    pub async fn run<R>(self, bot: Arc<dyn BotApi>, mut reader: R) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        info!("🤖 Starting dispatcher...");

        let mut buf = Vec::new();
        let mut tasks = JoinSet::new();
        let mut dispatched = 0;

        // 按字节读取，非UTF-8的行和格式错误的JSON一样跳过
        let read_error = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break None,
                Ok(_) => {}
                Err(e) => break Some(e),
            }

            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let event = match serde_json::from_slice::<InboundEvent>(&buf) {
                Ok(event) => event,
                Err(e) => {
                    let e = BotError::from(e);
                    log!(e.severity().log_level(), "Skipping malformed event: {e}");
                    continue;
                }
            };

            let handler = self.message_handler.clone();
            let bot = bot.clone();
            tasks.spawn(async move {
                handler.handle_event(&event, bot.as_ref()).await;
            });
            dispatched += 1;
        };

        // 输入出错时也要让进行中的消息（例如群发）处理完
        debug!("Input closed, waiting for {} in-flight messages", tasks.len());
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!("Message task panicked: {e}");
            }
        }

        if let Some(e) = read_error {
            error!("Dispatcher input failed after {dispatched} messages: {e}");
            return Err(BotError::from(e).into());
        }

        info!("Dispatcher stopped after {dispatched} messages");
        Ok(dispatched)
    }
}
