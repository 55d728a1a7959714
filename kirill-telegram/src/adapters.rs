//! Adapters from Telegram (teloxide) types to kirill_core types.
//! Depends only on teloxide and kirill_core type definitions.

use kirill_core::{Chat, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// `created_at` carries the Telegram message date (origination time), not the
/// receive time; the staleness policy reads it to drop backlog messages.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let content = self.0.text().unwrap_or("").to_string();
        let message_type = if content.starts_with('/') {
            "command"
        } else {
            "text"
        };
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content,
            message_type: message_type.to_string(),
            direction: MessageDirection::Incoming,
            created_at: self.0.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(321),
            is_bot: false,
            first_name: "Ulug'bek".to_string(),
            last_name: Some("Tursunov".to_string()),
            username: Some("ulugbek".to_string()),
            language_code: Some("uz".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let core_user = wrapper.to_core();

        assert_eq!(core_user.id, 321);
        assert_eq!(core_user.username, Some("ulugbek".to_string()));
        assert_eq!(core_user.first_name, Some("Ulug'bek".to_string()));
        assert_eq!(core_user.last_name, Some("Tursunov".to_string()));
    }
}
