//! Serenity event handler wiring the relay pipeline to the gateway.

use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, error, info};

use crate::config::RelayConfig;
use crate::gemini::Completion;
use crate::relay;

/// Handles inbound message events: filter, complete, reply.
///
/// Holds only read-only configuration and a shared handle to the completion
/// collaborator, so overlapping event dispatches need no synchronization.
pub struct RelayHandler {
    config: RelayConfig,
    ai: Option<Arc<dyn Completion>>,
}

impl RelayHandler {
    pub fn new(config: RelayConfig, ai: Option<Arc<dyn Completion>>) -> Self {
        Self { config, ai }
    }

    /// Runs the completion step for an already-filtered message and returns
    /// the ordered replies to deliver. This is the whole pipeline minus
    /// delivery, kept free of gateway types so tests can drive it with a
    /// mock collaborator.
    pub async fn completion_replies(&self, content: &str) -> Vec<String> {
        let Some(client) = &self.ai else {
            return vec![relay::CLIENT_UNAVAILABLE_REPLY.to_string()];
        };

        let outcome = client.generate(content).await;
        if let Err(e) = &outcome {
            error!("Completion request failed: {}", e);
        }
        relay::replies_for(outcome)
    }
}

#[async_trait]
impl EventHandler for RelayHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {} (ID: {})", ready.user.name, ready.user.id);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if !relay::accepts(self.config.target_channel, msg.author.bot, msg.channel_id) {
            return;
        }

        debug!(
            "Relaying message from {} in channel {}",
            msg.author.name, msg.channel_id
        );

        // Best-effort typing indicator for the duration of the request; the
        // background task swallows its own failures.
        let typing = self
            .ai
            .is_some()
            .then(|| msg.channel_id.start_typing(&ctx.http));

        let replies = self.completion_replies(&msg.content).await;

        if let Some(typing) = typing {
            typing.stop();
        }

        for reply in replies {
            if let Err(e) = msg.reply(&ctx.http, reply).await {
                error!("Failed to send reply: {}", e);
                return;
            }
        }
    }
}
