use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::bot::models::GroupRef;
use crate::bot::traits::BotApi;
use crate::error::Result;

/// 把消息写到标准输出的客户端，群组列表来自配置
pub struct ConsoleBot<W = tokio::io::Stdout> {
    out: Mutex<W>,
    groups: Vec<GroupRef>,
}

impl ConsoleBot {
    pub fn new(groups: Vec<String>) -> Self {
        Self::with_writer(tokio::io::stdout(), groups)
    }
}

impl<W> ConsoleBot<W> {
    pub fn with_writer(out: W, groups: Vec<String>) -> Self {
        Self {
            out: Mutex::new(out),
            groups: groups.into_iter().map(GroupRef::new).collect(),
        }
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W> BotApi for ConsoleBot<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(format!("[{chat_id}] {text}\n").as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }

    async fn joined_groups(&self) -> Result<Vec<GroupRef>> {
        Ok(self.groups.clone())
    }
}
