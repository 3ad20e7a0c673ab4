mod support;

use std::time::Duration;

use botapi_client::types::methods::{EditTarget, GetMe, SendMessage, SendPhoto};
use botapi_client::types::{
    ChatAction, File, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, InputMedia,
    InputMediaPhoto, InvalidRequest, MessageOrTrue, ParseMode,
};
use botapi_client::{AvailableMethodsExt, BotApiExt, CancellationToken, Client, Config, InvocationError};
use serde_json::json;
use support::{FakeBotApi, Reply, private_message};

#[tokio::test]
async fn send_message_posts_json_and_decodes_result() {
    let api = FakeBotApi::start().await;
    api.reply("sendMessage", Reply::ok(private_message(7, "hi")));
    let client = api.client();

    let req = SendMessage::new(1001_i64, "hi")
        .parse_mode(ParseMode::Html)
        .reply_markup(InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("Yes", "y")]]));
    let msg = client.invoke(&req).await.unwrap();
    assert_eq!(msg.message_id, 7);
    assert_eq!(msg.text.as_deref(), Some("hi"));

    let sent = api.requests_for("sendMessage");
    assert_eq!(sent.len(), 1);
    assert!(sent[0].content_type.starts_with("application/json"));
    assert_eq!(
        sent[0].json(),
        json!({
            "chat_id": 1001,
            "text": "hi",
            "parse_mode": "HTML",
            "reply_markup": { "inline_keyboard": [[{ "text": "Yes", "callback_data": "y" }]] }
        })
    );
}

#[tokio::test]
async fn shortcuts_use_wire_method_names() {
    let api = FakeBotApi::start().await;
    api.reply("getMe", Reply::ok(json!({ "id": 42, "is_bot": true, "first_name": "Test", "username": "test_bot" })));
    let client = api.client();

    let me = client.get_me().await.unwrap();
    assert_eq!(me.username.as_deref(), Some("test_bot"));
    assert!(client.send_chat_action(1001_i64, ChatAction::Typing).await.unwrap());
    assert!(client.delete_message("@channel", 5).await.unwrap());

    let methods: Vec<_> = api.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, ["getMe", "sendChatAction", "deleteMessage"]);
    assert_eq!(api.requests_for("getMe")[0].json(), json!({}));
    assert_eq!(api.requests_for("deleteMessage")[0].json(), json!({ "chat_id": "@channel", "message_id": 5 }));
}

#[tokio::test]
async fn inline_edit_returns_true() {
    let api = FakeBotApi::start().await;
    let client = api.client();

    let edited = client.edit_message_text(EditTarget::inline("AAQ-inline"), "updated").await.unwrap();
    assert_eq!(edited, MessageOrTrue::True);
    assert_eq!(
        api.requests_for("editMessageText")[0].json(),
        json!({ "inline_message_id": "AAQ-inline", "text": "updated" })
    );
}

#[tokio::test]
async fn api_error_carries_code_and_description() {
    let api = FakeBotApi::start().await;
    api.reply("sendMessage", Reply::error(400, "Bad Request: chat not found"));
    let client = api.client();

    let err = client.send_message(-100_i64, "hi").await.unwrap_err();
    assert_eq!(err.error_code(), Some(400));
    assert!(err.is("*chat not found"));
    assert!(err.is("Bad Request: *"));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn flood_error_exposes_retry_after() {
    let api = FakeBotApi::start().await;
    api.reply("sendMessage", Reply::flood(17));
    let client = api.client();

    let err = client.send_message(1001_i64, "spam").await.unwrap_err();
    assert_eq!(err.error_code(), Some(429));
    assert_eq!(err.retry_after(), Some(17));
    assert_eq!(api.requests_for("sendMessage").len(), 1, "no automatic retry");
}

#[tokio::test]
async fn missing_required_parameter_is_never_sent() {
    let api = FakeBotApi::start().await;
    let client = api.client();

    let err = client.invoke(&SendMessage::new("", "hello")).await.unwrap_err();
    match err {
        InvocationError::InvalidRequest(InvalidRequest::MissingParameter(name)) => assert_eq!(name, "chat_id"),
        other => panic!("expected MissingParameter, got {other:?}"),
    }
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn clashing_upload_names_are_never_sent() {
    let api = FakeBotApi::start().await;
    let client = api.client();

    let album = vec![
        InputMedia::Photo(InputMediaPhoto::new(InputFile::upload("image.jpg", b"first".to_vec()))),
        InputMedia::Photo(InputMediaPhoto::new(InputFile::upload("image.jpg", b"second".to_vec()))),
    ];
    let err = client.send_media_group(1001_i64, album).await.unwrap_err();
    match err {
        InvocationError::InvalidRequest(InvalidRequest::DuplicateUpload(name)) => assert_eq!(name, "image.jpg"),
        other => panic!("expected DuplicateUpload, got {other:?}"),
    }
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn transport_errors_never_show_token() {
    let client = Client::with_config(Config {
        api_base: "http://127.0.0.1:1".into(),
        ..Config::new("42:SUPERSECRET")
    }).unwrap();

    let err = client.get_me().await.unwrap_err();
    assert!(matches!(err, InvocationError::Http(_)), "{err:?}");
    assert!(!err.to_string().contains("SUPERSECRET"), "{err}");
    assert!(!format!("{err:?}").contains("SUPERSECRET"), "{err:?}");
}

#[tokio::test]
async fn upload_switches_to_multipart() {
    let api = FakeBotApi::start().await;
    api.reply("sendPhoto", Reply::ok(private_message(9, "")));
    let client = api.client();

    let req = SendPhoto::new(1001_i64, InputFile::upload("cat.jpg", b"\xFF\xD8jpeg".to_vec())).caption("meow");
    client.invoke(&req).await.unwrap();

    let sent = &api.requests_for("sendPhoto")[0];
    assert!(sent.is_multipart(), "content type was {}", sent.content_type);
    let body = sent.body_text();
    assert!(body.contains(r#"name="chat_id""#));
    assert!(body.contains("1001"));
    assert!(body.contains("meow"));
    assert!(body.contains("attach://cat.jpg"));
    assert!(body.contains(r#"filename="cat.jpg""#));
    assert!(body.contains("image/jpeg"));
}

#[tokio::test]
async fn same_file_used_twice_is_uploaded_once() {
    let api = FakeBotApi::start().await;
    api.reply("sendMediaGroup", Reply::ok(json!([private_message(1, ""), private_message(2, "")])));
    let client = api.client();

    let photo = InputFile::upload("image.jpg", b"pixels".to_vec());
    let album = vec![
        InputMedia::Photo(InputMediaPhoto::new(photo.clone())),
        InputMedia::Photo(InputMediaPhoto::new(photo)),
    ];
    client.send_media_group(1001_i64, album).await.unwrap();

    let body = api.requests_for("sendMediaGroup")[0].body_text();
    assert_eq!(body.matches(r#"filename="image.jpg""#).count(), 1);
    assert_eq!(body.matches("attach://image.jpg").count(), 2);
}

#[tokio::test]
async fn remote_media_group_stays_json() {
    let api = FakeBotApi::start().await;
    api.reply("sendMediaGroup", Reply::ok(json!([private_message(1, ""), private_message(2, "")])));
    let client = api.client();

    let media = vec![
        InputMedia::Photo(InputMediaPhoto::new(InputFile::file_id("AgAD1"))),
        InputMedia::Photo(InputMediaPhoto::new(InputFile::url("https://example.com/2.png"))),
    ];
    let sent = client.send_media_group(1001_i64, media).await.unwrap();
    assert_eq!(sent.len(), 2);

    let req = &api.requests_for("sendMediaGroup")[0];
    assert!(!req.is_multipart());
    assert_eq!(req.json()["media"][1]["media"], "https://example.com/2.png");
}

#[tokio::test]
async fn cancelled_call_returns_cancelled() {
    let api = FakeBotApi::start().await;
    api.reply("getMe", Reply::ok(json!({ "id": 1, "is_bot": true, "first_name": "Slow" })).delayed(Duration::from_secs(5)));
    let client = api.client();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client.invoke_with_cancel(&GetMe {}, &cancel).await.unwrap_err();
    assert!(matches!(err, InvocationError::Cancelled));
}

#[tokio::test]
async fn download_file_fetches_file_path() {
    let api = FakeBotApi::start().await;
    api.file("documents/file_3.txt", b"hello file");
    api.reply("getFile", Reply::ok(json!({
        "file_id": "BQAD3",
        "file_unique_id": "u3",
        "file_size": 10,
        "file_path": "documents/file_3.txt"
    })));
    let client = api.client();

    let file = client.get_file("BQAD3").await.unwrap();
    assert_eq!(client.download_file(&file).await.unwrap(), b"hello file");
}

#[tokio::test]
async fn download_without_path_is_rejected() {
    let api = FakeBotApi::start().await;
    let client = api.client();

    let file = File { file_id: "BQAD4".into(), file_unique_id: "u4".into(), file_size: None, file_path: None };
    let err = client.download_file(&file).await.unwrap_err();
    assert!(matches!(err, InvocationError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_environment_routes_under_test() {
    let api = FakeBotApi::start().await;
    let client = Client::with_config(Config { test_environment: true, ..api.config() }).unwrap();

    client.log_out().await.unwrap();
    assert_eq!(api.requests()[0].method, "test/logOut");
}

#[tokio::test]
async fn wrong_token_is_fatal() {
    let api = FakeBotApi::start().await;
    let client = Client::with_config(Config { api_base: api.base.clone(), ..Config::new("0:WRONG") }).unwrap();

    let err = client.get_me().await.unwrap_err();
    assert_eq!(err.error_code(), Some(401));
    assert!(err.is_fatal());
}

#[test]
fn blocking_client_runs_without_a_runtime() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let api = rt.block_on(FakeBotApi::start());
    api.reply("getMe", Reply::ok(json!({ "id": 42, "is_bot": true, "first_name": "Sync" })));

    let client = botapi_client::blocking::Client::with_config(api.config()).unwrap();
    let me = client.invoke(&GetMe {}).unwrap();
    assert_eq!(me.first_name, "Sync");
}
