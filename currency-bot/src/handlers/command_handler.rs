//! Terminal handler: routes the message text through the [`CommandRouter`] and sends the single
//! reply.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{error, instrument};

use crate::commands::CommandRouter;

pub struct CommandHandler {
    router: Arc<CommandRouter>,
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(router: Arc<CommandRouter>, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    /// Replies once for a registered command (`Reply`); anything else is `Ignore`d with no reply.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(reply) = self.router.dispatch(&message.content).await else {
            return Ok(HandlerResponse::Ignore);
        };

        if let Err(e) = self.bot.reply_to(message, &reply).await {
            error!(error = %e, "Failed to send reply");
            return Err(e);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
