use botapi_types::methods::{
    AnswerInlineQuery, EditMessageText, EditTarget, GetMe, GetUpdates, SendMediaGroup, SendMessage,
    SetMyCommands, SetPassportDataErrors,
};
use botapi_types::{
    ApiResponse, BotCommand, BotCommandScope, ChatId, ChatMember, ChatType, EncryptedPassportElementType,
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResultArticle, InputFile, InputMedia,
    InputMediaPhoto, InputMediaVideo, InputTextMessageContent, InvalidRequest, MenuButton, Message,
    MessageEntityType, MessageOrTrue, Method, ParseMode, PassportElementError, Update, UpdateKind, UpdateType,
};
use serde_json::json;

// ── Request bodies ────────────────────────────────────────────────────────────

#[test]
fn chat_id_encodes_as_number_or_string() {
    let numeric = serde_json::to_value(SendMessage::new(-1001234567890_i64, "hi")).unwrap();
    assert_eq!(numeric["chat_id"], json!(-1001234567890_i64));

    let handle = serde_json::to_value(SendMessage::new("@rustlang", "hi")).unwrap();
    assert_eq!(handle["chat_id"], json!("@rustlang"));
}

#[test]
fn send_message_with_markup() {
    let kb = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Yes", "vote:yes"),
        InlineKeyboardButton::url("Docs", "https://core.telegram.org/bots/api"),
    ]]);
    let req = SendMessage::new(7_i64, "*bold*")
        .parse_mode(ParseMode::MarkdownV2)
        .reply_to(3)
        .reply_markup(kb);

    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, json!({
        "chat_id": 7,
        "text": "*bold*",
        "parse_mode": "MarkdownV2",
        "reply_parameters": { "message_id": 3 },
        "reply_markup": { "inline_keyboard": [[
            { "text": "Yes",  "callback_data": "vote:yes" },
            { "text": "Docs", "url": "https://core.telegram.org/bots/api" }
        ]]}
    }));
}

#[test]
fn parameterless_methods_send_empty_object() {
    assert_eq!(serde_json::to_string(&GetMe {}).unwrap(), "{}");
    assert_eq!(serde_json::to_string(&GetUpdates::new()).unwrap(), "{}");
}

#[test]
fn get_updates_allowed_updates_use_wire_names() {
    let req = GetUpdates {
        allowed_updates: Some(vec![UpdateType::Message, UpdateType::CallbackQuery]),
        ..GetUpdates::new().offset(101).timeout(30)
    };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({
        "offset": 101,
        "timeout": 30,
        "allowed_updates": ["message", "callback_query"]
    }));
}

#[test]
fn command_scope_is_tagged_by_type() {
    let req = SetMyCommands::new(vec![BotCommand::new("hello", "Say hello")])
        .scope(BotCommandScope::chat_member("@group", 42));
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({
        "commands": [{ "command": "hello", "description": "Say hello" }],
        "scope": { "type": "chat_member", "chat_id": "@group", "user_id": 42 }
    }));

    let default = serde_json::to_value(BotCommandScope::Default).unwrap();
    assert_eq!(default, json!({ "type": "default" }));
}

#[test]
fn empty_language_code_is_omitted() {
    let req = SetMyCommands::new(vec![BotCommand::new("start", "Start")]).language("");
    let body = serde_json::to_value(&req).unwrap();
    assert!(body.get("language_code").is_none());

    let req = req.language("de");
    assert_eq!(serde_json::to_value(&req).unwrap()["language_code"], "de");
}

#[test]
fn media_group_references_uploads_by_attach_name() {
    let req = SendMediaGroup::new(1_i64, vec![
        InputMediaPhoto::new(InputFile::file_id("AgAD")).caption("first").into(),
        InputMediaVideo::new(InputFile::upload("clip.mp4", b"\x00\x01".to_vec()))
            .thumbnail(InputFile::upload("clip.jpg", b"\xff".to_vec()))
            .supports_streaming(true)
            .into(),
    ]);

    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["media"], json!([
        { "type": "photo", "media": "AgAD", "caption": "first" },
        { "type": "video", "media": "attach://clip.mp4", "thumbnail": "attach://clip.jpg",
          "supports_streaming": true }
    ]));

    let names: Vec<_> = req.uploads().into_iter().map(|u| u.name.clone()).collect();
    assert_eq!(names, ["clip.mp4", "clip.jpg"]);
}

#[test]
fn empty_media_group_fails_validation() {
    let req = SendMediaGroup::new(1_i64, Vec::<InputMedia>::new());
    assert_eq!(req.validate(), Err(InvalidRequest::MissingParameter("media")));
}

#[test]
fn inline_article_answer() {
    let article = InlineQueryResultArticle::new(
        "1",
        "Greeting",
        InputTextMessageContent::new("Hello!"),
    ).description("Sends a greeting");
    let req = AnswerInlineQuery::new("q-1", vec![article.into()]);

    assert_eq!(serde_json::to_value(&req).unwrap(), json!({
        "inline_query_id": "q-1",
        "results": [{
            "type": "article",
            "id": "1",
            "title": "Greeting",
            "input_message_content": { "message_text": "Hello!" },
            "description": "Sends a greeting"
        }]
    }));
}

#[test]
fn passport_errors_are_tagged_by_source() {
    let req = SetPassportDataErrors::new(99, vec![
        PassportElementError::data(EncryptedPassportElementType::PersonalDetails, "first_name", "aGFzaA==", "Typo"),
        PassportElementError::translation_file(EncryptedPassportElementType::Passport, "ZmlsZQ==", "Blurry"),
    ]);
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({
        "user_id": 99,
        "errors": [
            { "source": "data", "type": "personal_details", "field_name": "first_name",
              "data_hash": "aGFzaA==", "message": "Typo" },
            { "source": "translation_file", "type": "passport", "file_hash": "ZmlsZQ==",
              "message": "Blurry" }
        ]
    }));
}

#[test]
fn inline_edit_target_has_no_chat_id() {
    let req = EditMessageText::new(EditTarget::inline("AAAB"), "updated");
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({
        "inline_message_id": "AAAB",
        "text": "updated"
    }));
}

// ── Responses ─────────────────────────────────────────────────────────────────

const MESSAGE_UPDATE: &str = r#"{
    "update_id": 815,
    "message": {
        "message_id": 12,
        "from": { "id": 1, "is_bot": false, "first_name": "Ada", "last_name": "L", "language_code": "en" },
        "chat": { "id": 1, "type": "private", "first_name": "Ada" },
        "date": 1700000000,
        "text": "/hello@my_bot world",
        "entities": [{ "type": "bot_command", "offset": 0, "length": 13 }]
    }
}"#;

#[test]
fn decode_message_update() {
    let update: Update = serde_json::from_str(MESSAGE_UPDATE).unwrap();
    assert_eq!(update.update_id, 815);
    assert_eq!(update.update_type(), UpdateType::Message);

    let UpdateKind::Message(msg) = update.kind() else { panic!("expected a message") };
    assert!(msg.is_command());
    assert!(msg.is_accessible());
    assert!(msg.chat.is_private());
    assert_eq!(msg.from.as_ref().unwrap().full_name(), "Ada L");

    let entities = msg.parse_entities();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].0.kind, MessageEntityType::BotCommand);
    assert_eq!(entities[0].1, "/hello@my_bot");
}

#[test]
fn entity_offsets_count_utf16_units() {
    let msg: Message = serde_json::from_value(json!({
        "message_id": 1,
        "date": 1,
        "chat": { "id": 5, "type": "group", "title": "g" },
        "text": "🦀 #rust",
        "entities": [{ "type": "hashtag", "offset": 3, "length": 5 }]
    })).unwrap();
    assert_eq!(msg.parse_entities()[0].1, "#rust");
}

#[test]
fn unknown_entity_type_is_tolerated() {
    let msg: Message = serde_json::from_value(json!({
        "message_id": 1,
        "date": 1,
        "chat": { "id": 5, "type": "supergroup", "title": "g" },
        "text": "x",
        "entities": [{ "type": "future_entity", "offset": 0, "length": 1 }]
    })).unwrap();
    assert_eq!(msg.entities.unwrap()[0].kind, MessageEntityType::Unknown);
}

#[test]
fn chat_member_status_discriminates() {
    let owner: ChatMember = serde_json::from_value(json!({
        "status": "creator",
        "user": { "id": 1, "is_bot": false, "first_name": "A" },
        "is_anonymous": false
    })).unwrap();
    assert!(owner.is_privileged());
    assert!(owner.is_present());

    let banned: ChatMember = serde_json::from_value(json!({
        "status": "kicked",
        "user": { "id": 2, "is_bot": false, "first_name": "B" },
        "until_date": 0
    })).unwrap();
    assert!(!banned.is_present());
    assert_eq!(banned.user().id, 2);

    let restricted: ChatMember = serde_json::from_value(json!({
        "status": "restricted",
        "user": { "id": 3, "is_bot": false, "first_name": "C" },
        "is_member": true,
        "until_date": 0,
        "can_send_messages": false
    })).unwrap();
    let ChatMember::Restricted(r) = &restricted else { panic!("expected restricted") };
    assert_eq!(r.permissions.can_send_messages, Some(false));
    assert!(restricted.is_present());
}

#[test]
fn edit_result_is_message_or_true() {
    let inline: ApiResponse<MessageOrTrue> = serde_json::from_str(r#"{"ok":true,"result":true}"#).unwrap();
    assert_eq!(inline.result, Some(MessageOrTrue::True));

    let chat: ApiResponse<MessageOrTrue> = serde_json::from_value(json!({
        "ok": true,
        "result": { "message_id": 4, "date": 5, "chat": { "id": 6, "type": "channel", "title": "c" } }
    })).unwrap();
    assert!(matches!(chat.result, Some(MessageOrTrue::Message(m)) if m.chat.kind == ChatType::Channel));
}

#[test]
fn edit_result_false_is_rejected() {
    assert!(serde_json::from_str::<MessageOrTrue>("false").is_err());
    assert!(serde_json::from_str::<ApiResponse<MessageOrTrue>>(r#"{"ok":true,"result":false}"#).is_err());
    assert_eq!(serde_json::to_value(MessageOrTrue::True).unwrap(), json!(true));
}

#[test]
fn error_envelope_carries_parameters() {
    let resp: ApiResponse<bool> = serde_json::from_str(
        r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 7","parameters":{"retry_after":7}}"#,
    ).unwrap();
    assert!(!resp.ok);
    assert_eq!(resp.error_code, Some(429));
    assert_eq!(resp.parameters.unwrap().retry_after, Some(7));
}

#[test]
fn menu_button_round_trips() {
    let web = json!({ "type": "web_app", "text": "Open", "web_app": { "url": "https://example.org" } });
    let button: MenuButton = serde_json::from_value(web.clone()).unwrap();
    assert_eq!(serde_json::to_value(&button).unwrap(), web);
}

#[test]
fn chat_id_display() {
    assert_eq!(ChatId::from(-5_i64).to_string(), "-5");
    assert_eq!(ChatId::from("@chan").to_string(), "@chan");
    assert!(ChatId::from("").is_empty());
}
