use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use async_trait::async_trait;
use cucumber::{given, when, then, World};

// 导入项目模块
use botwa::bot::broadcast::NoDelay;
use botwa::bot::models::{GroupRef, InboundEvent};
use botwa::bot::traits::{BotApi, MetricsProvider};
use botwa::error::{BotError, Result};
use botwa::{BotEnvironment, CommandRouter, MessageHandler, MessageParser};

const ORIGIN_CHAT: &str = "origin@s.whatsapp.net";

#[derive(Debug, Clone, Default)]
pub struct MockBotApi {
    pub sent_messages: Arc<Mutex<Vec<(String, String)>>>,
    pub groups: Arc<Mutex<Vec<GroupRef>>>,
    pub failing_chats: Arc<Mutex<HashSet<String>>>,
    pub directory_fails: Arc<Mutex<bool>>,
    pub directory_calls: Arc<Mutex<usize>>,
}

#[async_trait]
impl BotApi for MockBotApi {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        self.sent_messages
            .lock()
            .await
            .push((chat_id.to_string(), text.to_string()));
        if self.failing_chats.lock().await.contains(chat_id) {
            return Err(BotError::send_error("Mock error"));
        }
        Ok(())
    }

    async fn joined_groups(&self) -> Result<Vec<GroupRef>> {
        *self.directory_calls.lock().await += 1;
        if *self.directory_fails.lock().await {
            return Err(BotError::group_directory_error("Mock error"));
        }
        Ok(self.groups.lock().await.clone())
    }
}

struct StaticMetrics;

impl MetricsProvider for StaticMetrics {
    fn platform(&self) -> Result<String> {
        Ok("linux".to_string())
    }

    fn total_memory(&self) -> Result<u64> {
        Ok(2_000_000_000)
    }

    fn total_disk(&self) -> Result<u64> {
        Ok(40_000_000_000)
    }

    fn cpu_count(&self) -> Result<usize> {
        Ok(1)
    }

    fn host_uptime(&self) -> Result<Duration> {
        Ok(Duration::from_secs(120))
    }
}

// World结构，管理测试状态
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct BotWorld {
    pub bot_api: MockBotApi,
    pub owner_id: String,
}

impl BotWorld {
    async fn new() -> Self {
        Self {
            bot_api: MockBotApi::default(),
            owner_id: String::new(),
        }
    }

    fn create_handler(&self) -> MessageHandler {
        let env = Arc::new(BotEnvironment::capture(self.owner_id.clone()));
        let router = CommandRouter::new(env, Arc::new(StaticMetrics)).with_delay(Arc::new(NoDelay));
        MessageHandler::new(MessageParser::new(), router)
    }
}

#[given(expr = "the owner is {string}")]
async fn owner_is(world: &mut BotWorld, owner_id: String) {
    world.owner_id = owner_id;
}

#[given(expr = "the bot has joined {int} groups")]
async fn bot_has_groups(world: &mut BotWorld, count: usize) {
    let groups = (1..=count)
        .map(|i| GroupRef::new(format!("group-{i}@g.us")))
        .collect();
    *world.bot_api.groups.lock().await = groups;
}

#[given(expr = "sending to group {int} fails")]
async fn sending_to_group_fails(world: &mut BotWorld, index: usize) {
    world
        .bot_api
        .failing_chats
        .lock()
        .await
        .insert(format!("group-{index}@g.us"));
}

#[given(expr = "the group list is unavailable")]
async fn group_list_unavailable(world: &mut BotWorld) {
    *world.bot_api.directory_fails.lock().await = true;
}

#[when(expr = "{string} sends {string}")]
async fn user_sends(world: &mut BotWorld, sender: String, text: String) {
    let event = InboundEvent {
        sender,
        chat: ORIGIN_CHAT.to_string(),
        text,
    };
    let handler = world.create_handler();
    handler.handle_event(&event, &world.bot_api).await;
}

#[then(expr = "no message should be sent")]
async fn no_message_sent(world: &mut BotWorld) {
    assert!(world.bot_api.sent_messages.lock().await.is_empty());
}

#[then(regex = r"^(\d+) messages? should be sent$")]
async fn messages_sent(world: &mut BotWorld, count: String) {
    let expected: usize = count.parse().expect("count should be a number");
    assert_eq!(world.bot_api.sent_messages.lock().await.len(), expected);
}

#[then(expr = "the reply should contain {string}")]
async fn reply_should_contain(world: &mut BotWorld, expected_text: String) {
    let sent = world.bot_api.sent_messages.lock().await;
    let (chat_id, text) = sent
        .iter()
        .rev()
        .find(|(chat_id, _)| chat_id == ORIGIN_CHAT)
        .expect("a reply to the origin chat");
    assert_eq!(chat_id, ORIGIN_CHAT);
    assert!(
        text.contains(&expected_text),
        "reply {text:?} should contain {expected_text:?}"
    );
}

#[then(expr = "the group list should not have been requested")]
async fn group_list_not_requested(world: &mut BotWorld) {
    assert_eq!(*world.bot_api.directory_calls.lock().await, 0);
}

#[tokio::main]
async fn main() {
    BotWorld::run("tests/features").await;
}
