//! Integration tests for command dispatch through the handler chain.
//!
//! Each test builds the production chain (LoggingHandler + CommandHandler) with a recording
//! [`MockBot`] and a [`MockConversionService`], sends one message and checks the single reply.

mod common;

use std::sync::Arc;

use bot_core::HandlerResponse;
use currency_bot::commands::{HELP_TEXT, INFO_TEXT, START_TEXT};
use currency_bot::{build_handler_chain, CommandRouter};
use exchange_client::{ConversionError, ConversionRequest};

use common::mock_bot::{MockBot, SentRecord};
use common::mock_service::MockConversionService;
use common::{text_message, whitelist, CHAT_ID};

struct Fixture {
    bot: Arc<MockBot>,
    service: Arc<MockConversionService>,
    chain: handler_chain::HandlerChain,
}

fn fixture(service: MockConversionService) -> Fixture {
    fixture_with_bot(service, MockBot::new())
}

fn fixture_with_bot(service: MockConversionService, bot: MockBot) -> Fixture {
    let bot = Arc::new(bot);
    let service = Arc::new(service);
    let router = Arc::new(CommandRouter::with_default_commands(
        Arc::new(whitelist()),
        service.clone(),
    ));
    let chain = build_handler_chain(router, bot.clone());
    Fixture {
        bot,
        service,
        chain,
    }
}

impl Fixture {
    /// Sends `text` through the chain and returns the only reply.
    async fn reply_to(&self, text: &str) -> String {
        let before = self.bot.sent().len();
        let response = self.chain.handle(&text_message(text)).await.unwrap();
        let sent = self.bot.sent();
        assert_eq!(sent.len(), before + 1, "exactly one reply for {:?}", text);
        let last = sent.last().unwrap().clone();
        assert_eq!(last.chat_id, CHAT_ID);
        assert_eq!(response, HandlerResponse::Reply(last.text.clone()));
        last.text
    }
}

#[tokio::test]
async fn test_start_help_info_reply_static_text() {
    let f = fixture(MockConversionService::returning(1.0));

    assert_eq!(f.reply_to("/start").await, START_TEXT);
    assert_eq!(f.reply_to("/help").await, HELP_TEXT);
    assert_eq!(f.reply_to("/info").await, INFO_TEXT);
    assert_eq!(f.service.call_count(), 0);
}

#[tokio::test]
async fn test_values_lists_each_code_once_in_order() {
    let f = fixture(MockConversionService::returning(1.0));

    let reply = f.reply_to("/values").await;

    assert_eq!(reply, "Possible currencies: USD, EUR, RUB, GBP");
    for code in whitelist().iter() {
        assert_eq!(reply.matches(code).count(), 1, "{} listed once", code);
    }
}

#[tokio::test]
async fn test_conv_with_too_few_tokens_is_incorrect_input() {
    let f = fixture(MockConversionService::returning(1.0));

    for text in ["/conv", "/conv usd", "/conv   eur  "] {
        assert_eq!(f.reply_to(text).await, "Incorrect input");
    }
    assert_eq!(f.service.call_count(), 0);
}

#[tokio::test]
async fn test_conv_with_non_numeric_amount_is_incorrect_input() {
    let f = fixture(MockConversionService::returning(1.0));

    for text in ["/conv usd eur ten", "/conv usd eur 1,5", "/conv usd eur nan"] {
        assert_eq!(f.reply_to(text).await, "Incorrect input");
    }
    assert_eq!(f.service.call_count(), 0);
}

#[tokio::test]
async fn test_conv_ignores_tokens_after_amount() {
    let f = fixture(MockConversionService::returning(1.84));

    assert_eq!(f.reply_to("/conv usd eur 2 extra").await, "2 USD = 1.84 EUR");
    assert_eq!(
        f.service.requests(),
        vec![ConversionRequest::new("USD", "EUR", Some(2.0))]
    );
}

#[tokio::test]
async fn test_conv_with_unknown_currency_names_it_without_calling_service() {
    let f = fixture(MockConversionService::returning(1.0));

    assert_eq!(f.reply_to("/conv btc eur").await, "Incorrect currency BTC");
    assert_eq!(f.reply_to("/conv usd jpy 3").await, "Incorrect currency JPY");
    assert_eq!(f.service.call_count(), 0);
}

#[tokio::test]
async fn test_conv_success_with_default_amount() {
    let f = fixture(MockConversionService::returning(92.5));

    assert_eq!(f.reply_to("/conv usd rub").await, "1 USD = 92.5 RUB");
    assert_eq!(
        f.service.requests(),
        vec![ConversionRequest::new("USD", "RUB", Some(1.0))]
    );
}

#[tokio::test]
async fn test_conv_success_with_amount_and_mixed_case() {
    let f = fixture(MockConversionService::returning(16.85));

    assert_eq!(f.reply_to("/conv Eur uSD 15.5").await, "15.5 EUR = 16.85 USD");
    assert_eq!(
        f.service.requests(),
        vec![ConversionRequest::new("EUR", "USD", Some(15.5))]
    );
}

#[tokio::test]
async fn test_conv_accepts_bot_mention_suffix() {
    let f = fixture(MockConversionService::returning(0.79));

    assert_eq!(
        f.reply_to("/conv@CurrencyBot usd gbp").await,
        "1 USD = 0.79 GBP"
    );
}

#[tokio::test]
async fn test_conv_provider_errors_become_messages() {
    let cases = [
        (ConversionError::Input, "Error: incorrect input"),
        (ConversionError::Http(500), "Error: Error in HTTP request: 500"),
        (ConversionError::Connection, "Error: connection to server error"),
        (ConversionError::Parse, "Error: unexpected response from server"),
    ];

    for (error, expected) in cases {
        let f = fixture(MockConversionService::failing(error));
        assert_eq!(f.reply_to("/conv usd eur").await, expected);
        assert_eq!(f.service.call_count(), 1);
    }
}

#[tokio::test]
async fn test_conv_repeated_command_gives_identical_reply() {
    let f = fixture(MockConversionService::returning(0.92));

    let first = f.reply_to("/conv usd eur 1").await;
    let second = f.reply_to("/conv usd eur 1").await;

    assert_eq!(first, second);
    assert_eq!(f.service.call_count(), 2);
}

#[tokio::test]
async fn test_plain_text_and_unknown_commands_get_no_reply() {
    let f = fixture(MockConversionService::returning(1.0));

    for text in ["hello", "/unknown", "", "conv usd eur"] {
        let response = f.chain.handle(&text_message(text)).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue, "text {:?}", text);
    }
    assert!(f.bot.sent().is_empty());
    assert_eq!(f.service.call_count(), 0);
}

#[tokio::test]
async fn test_send_failure_is_reported_to_caller() {
    let f = fixture_with_bot(MockConversionService::returning(1.0), MockBot::failing());

    let result = f.chain.handle(&text_message("/start")).await;

    assert!(result.is_err());
    assert_eq!(f.bot.sent(), Vec::<SentRecord>::new());
}
