//! Operator alerting over Telegram.

use teloxide::Bot;
use teloxide::requests::Requester;
use teloxide::types::ChatId;
use tracing::{error, warn};

use super::config::AppConfig;

/// Fans a failure message out to every configured chat.
///
/// Built from the raw configuration on purpose: alerting must stay usable
/// when the validated run configuration cannot even be constructed.
pub struct TelegramNotifier {
    bot: Option<Bot>,
    recipients: Vec<String>,
}

impl TelegramNotifier {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            bot: config.alert_token().map(Bot::new),
            recipients: config.alert_recipients(),
        }
    }

    /// Send `Error while executing: <message>` to every recipient.
    ///
    /// Delivery problems are logged and never escalate; the process exit
    /// code has to reflect the pipeline failure either way.
    pub async fn alert(&self, message: &str) {
        let Some(bot) = &self.bot else {
            error!("TOKEN not defined in environment, skip sending telegram message");
            return;
        };
        if self.recipients.is_empty() {
            warn!("chatlist is empty (env var: TELEGRAM_CHATLIST)");
            return;
        }

        let text = format!("Error while executing: {message}");
        for recipient in &self.recipients {
            let Ok(id) = recipient.parse::<i64>() else {
                error!("chat id '{recipient}' is not numeric, skipping");
                continue;
            };
            if let Err(e) = bot.send_message(ChatId(id), &text).await {
                error!("could not deliver alert to chat {id}: {e}");
            }
        }
    }
}
