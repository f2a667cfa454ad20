//! Shared test doubles and message builders.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_service;

use currency_bot::CurrencyWhitelist;
use bot_core::{Chat, Message, User};

pub const CHAT_ID: i64 = 456;

pub fn text_message(content: &str) -> Message {
    Message::new(
        "1",
        User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content,
    )
}

pub fn whitelist() -> CurrencyWhitelist {
    CurrencyWhitelist::parse("USD EUR RUB GBP")
}
