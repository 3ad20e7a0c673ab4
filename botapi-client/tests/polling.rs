mod support;

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use botapi_client::types::{CallbackQuery, Message, Update};
use botapi_client::{CancellationToken, InvocationError, PollOptions, UpdateHandler, UpdateStream, run_polling};
use serde_json::json;
use support::{FakeBotApi, Reply, message_update};

fn quick_options() -> PollOptions {
    PollOptions { timeout: 0, error_delay: Duration::from_millis(10), ..PollOptions::default() }
}

#[tokio::test]
async fn stream_confirms_seen_updates_with_offset() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([message_update(10, "a"), message_update(11, "b")])));
    api.reply("getUpdates", Reply::ok(json!([message_update(12, "c")])));

    let mut stream = UpdateStream::new(api.client(), quick_options(), CancellationToken::new());
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(stream.next().await.unwrap().unwrap().update_id);
    }
    assert_eq!(ids, [10, 11, 12]);
    assert_eq!(stream.offset(), Some(13));

    let polls = api.requests_for("getUpdates");
    assert_eq!(polls.len(), 2);
    assert_eq!(polls[0].json(), json!({ "timeout": 0 }));
    assert_eq!(polls[1].json(), json!({ "offset": 12, "timeout": 0 }));
}

#[tokio::test]
async fn stream_sends_allowed_updates_and_limit() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([message_update(1, "x")])));

    let options = PollOptions {
        limit: Some(50),
        allowed_updates: Some(vec![
            botapi_client::types::UpdateType::Message,
            botapi_client::types::UpdateType::CallbackQuery,
        ]),
        ..quick_options()
    };
    let mut stream = UpdateStream::new(api.client(), options, CancellationToken::new()).with_offset(1);
    stream.next().await.unwrap().unwrap();

    assert_eq!(
        api.requests_for("getUpdates")[0].json(),
        json!({ "offset": 1, "limit": 50, "timeout": 0, "allowed_updates": ["message", "callback_query"] })
    );
}

#[tokio::test]
async fn transient_failure_is_polled_again() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::error(502, "Bad Gateway"));
    api.reply("getUpdates", Reply::ok(json!([message_update(5, "back")])));

    let mut stream = UpdateStream::new(api.client(), quick_options(), CancellationToken::new());
    let update = stream.next().await.unwrap().unwrap();
    assert_eq!(update.update_id, 5);
    assert_eq!(api.requests_for("getUpdates").len(), 2);
}

#[tokio::test]
async fn fatal_failure_ends_the_stream() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::error(401, "Unauthorized"));

    let mut stream = UpdateStream::new(api.client(), quick_options(), CancellationToken::new());
    let err = stream.next().await.unwrap_err();
    assert_eq!(err.error_code(), Some(401));
    assert_eq!(api.requests_for("getUpdates").len(), 1);
}

#[tokio::test]
async fn cancellation_interrupts_long_poll() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([])).delayed(Duration::from_secs(5)));

    let cancel = CancellationToken::new();
    let mut stream = UpdateStream::new(api.client(), quick_options(), cancel.clone());
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    assert!(stream.next().await.unwrap().is_none());
}

#[tokio::test]
async fn cancel_stops_delivery_and_confirms_offset() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([message_update(10, "a"), message_update(11, "b")])));

    let cancel = CancellationToken::new();
    let mut stream = UpdateStream::new(api.client(), quick_options(), cancel.clone());
    assert_eq!(stream.next().await.unwrap().unwrap().update_id, 10);
    cancel.cancel();

    assert!(stream.next().await.unwrap().is_none());
    assert!(stream.next().await.unwrap().is_none());
    assert_eq!(stream.offset(), Some(11));

    let polls = api.requests_for("getUpdates");
    assert_eq!(polls.len(), 2, "confirmed exactly once");
    assert_eq!(polls[0].json(), json!({ "timeout": 0 }));
    assert_eq!(polls[1].json(), json!({ "offset": 11, "limit": 1, "timeout": 0 }));
}

#[tokio::test]
async fn failed_confirmation_still_stops() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([message_update(10, "a")])));
    api.reply("getUpdates", Reply::error(502, "Bad Gateway"));

    let cancel = CancellationToken::new();
    let mut stream = UpdateStream::new(api.client(), quick_options(), cancel.clone());
    stream.next().await.unwrap().unwrap();
    cancel.cancel();

    assert!(stream.next().await.unwrap().is_none());
    assert_eq!(api.requests_for("getUpdates").len(), 2);
}

// ─── Handler ──────────────────────────────────────────────────────────────────

struct Recorder {
    events: Mutex<Vec<String>>,
    cancel: CancellationToken,
}

impl Recorder {
    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl UpdateHandler for Recorder {
    async fn on_message(&self, message: &Message) -> Result<(), InvocationError> {
        let text = message.text.clone().unwrap_or_default();
        if text == "boom" {
            return Err(InvocationError::InvalidResponse("boom".into()));
        }
        self.push(format!("message:{text}"));
        Ok(())
    }

    async fn on_callback_query(&self, query: &CallbackQuery) -> Result<(), InvocationError> {
        self.push(format!("callback:{}", query.data.as_deref().unwrap_or("")));
        self.cancel.cancel();
        Ok(())
    }

    async fn on_unknown(&self, update: &Update) -> Result<(), InvocationError> {
        self.push(format!("unknown:{}", update.update_id));
        Ok(())
    }

    async fn on_error(&self, update: &Update, error: InvocationError) {
        self.push(format!("error:{}:{error}", update.update_id));
    }
}

#[tokio::test]
async fn run_polling_dispatches_by_kind_until_cancelled() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([
        message_update(1, "/start"),
        message_update(2, "boom"),
        {
            "update_id": 3,
            "callback_query": {
                "id": "cb-1",
                "from": { "id": 1001, "is_bot": false, "first_name": "Ada" },
                "chat_instance": "ci-1",
                "data": "yes"
            }
        },
        { "update_id": 4, "poll": { "id": "p-1" } }
    ])));

    let cancel = CancellationToken::new();
    let handler = Recorder { events: Mutex::default(), cancel: cancel.clone() };
    run_polling(api.client(), &handler, quick_options(), cancel).await.unwrap();

    // Update 4 was fetched but cancellation came first.
    let events = handler.events.into_inner().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], "message:/start");
    assert!(events[1].starts_with("error:2:"), "{}", events[1]);
    assert_eq!(events[2], "callback:yes");

    let polls = api.requests_for("getUpdates");
    assert_eq!(polls.len(), 2);
    assert_eq!(polls[1].json(), json!({ "offset": 4, "limit": 1, "timeout": 0 }));
}

#[tokio::test]
async fn unknown_updates_reach_on_unknown() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::ok(json!([
        { "update_id": 4, "poll": { "id": "p-1" } },
        {
            "update_id": 5,
            "callback_query": {
                "id": "cb-2",
                "from": { "id": 1001, "is_bot": false, "first_name": "Ada" },
                "chat_instance": "ci-1",
                "data": "stop"
            }
        }
    ])));

    let cancel = CancellationToken::new();
    let handler = Recorder { events: Mutex::default(), cancel: cancel.clone() };
    run_polling(api.client(), &handler, quick_options(), cancel).await.unwrap();

    assert_eq!(handler.events.into_inner().unwrap(), ["unknown:4", "callback:stop"]);
}

#[tokio::test]
async fn run_polling_reports_fatal_errors() {
    let api = FakeBotApi::start().await;
    api.reply("getUpdates", Reply::error(401, "Unauthorized"));

    let cancel = CancellationToken::new();
    let handler = Recorder { events: Mutex::default(), cancel: cancel.clone() };
    let err = run_polling(api.client(), &handler, quick_options(), cancel).await.unwrap_err();
    assert!(err.is_fatal());
    assert!(handler.events.lock().unwrap().is_empty());
}
