use crate::*;
use serde_json::{json, Value};
use tgbot_core::codec::{decode_array, decode_nested_array, encode_array, encode_nested_array};

fn assert_round_trip<T: Entity + PartialEq + std::fmt::Debug>(wire: Value) {
    let decoded = T::decode(wire.clone()).unwrap();
    let encoded = decoded.encode().unwrap();
    assert_eq!(encoded, wire, "encode(decode(m)) must keep every key");
    assert_eq!(T::decode(encoded).unwrap(), decoded);
}

#[test]
fn test_bot_user_scenario() {
    let user = User::decode(json!({"id": 4944223129_i64, "is_bot": true, "first_name": "TestBot"}))
        .unwrap();
    assert_eq!(user.id, 4944223129);
    assert!(user.is_bot);
    assert_eq!(user.first_name, "TestBot");
    assert!(user.last_name.is_none());
    assert!(user.username.is_none());
    assert!(user.language_code.is_none());
    assert!(user.is_premium.is_none());
    assert!(user.can_join_groups.is_none());
    assert!(user.supports_inline_queries.is_none());
}

#[test]
fn test_identifier_precision() {
    let wire = json!({"id": 9223372036854775_i64, "is_bot": false, "first_name": "Big"});
    let user = User::decode(wire.clone()).unwrap();
    assert_eq!(user.id, 9223372036854775);
    assert_eq!(user.encode().unwrap()["id"], json!(9223372036854775_i64));

    let chat = Chat::decode(json!({"id": -1009223372036854_i64, "type": "supergroup"})).unwrap();
    assert_eq!(chat.id, -1009223372036854);
}

#[test]
fn test_optional_bool_absent_vs_false() {
    let absent = User::decode(json!({"id": 1, "is_bot": false, "first_name": "A"})).unwrap();
    let explicit =
        User::decode(json!({"id": 1, "is_bot": false, "first_name": "A", "is_premium": false}))
            .unwrap();
    assert_eq!(absent.is_premium, None);
    assert_eq!(explicit.is_premium, Some(false));
    assert_ne!(absent, explicit);
    assert!(absent.encode().unwrap().get("is_premium").is_none());
    assert_eq!(explicit.encode().unwrap()["is_premium"], json!(false));
}

#[test]
fn test_empty_string_is_present() {
    let user =
        User::decode(json!({"id": 1, "is_bot": false, "first_name": "A", "last_name": ""})).unwrap();
    assert_eq!(user.last_name.as_deref(), Some(""));
    assert_eq!(user.encode().unwrap()["last_name"], json!(""));
}

#[test]
fn test_entity_round_trips() {
    let chat = json!({"id": 5, "type": "private", "first_name": "Ann", "username": "ann"});
    let user = json!({"id": 5, "is_bot": false, "first_name": "Ann", "language_code": "en"});
    assert_round_trip::<User>(user.clone());
    assert_round_trip::<Chat>(chat.clone());
    assert_round_trip::<Message>(json!({
        "message_id": 77,
        "from": user,
        "date": 1700000000,
        "chat": chat,
        "forward_origin": {"type": "hidden_user", "date": 1690000000, "sender_user_name": "Z"},
        "text": "/help now",
        "entities": [{"type": "bot_command", "offset": 0, "length": 5}],
        "link_preview_options": {"is_disabled": true},
        "has_protected_content": false,
        "reply_markup": {"inline_keyboard": [[{"text": "Go", "callback_data": "go"}]]}
    }));
    assert_round_trip::<Sticker>(json!({
        "file_id": "s", "file_unique_id": "u", "type": "regular",
        "width": 512, "height": 512, "is_animated": false, "is_video": true, "emoji": "🙂"
    }));
    assert_round_trip::<ChatInviteLink>(json!({
        "invite_link": "https://t.me/+abc",
        "creator": {"id": 1, "is_bot": true, "first_name": "Bot"},
        "creates_join_request": false,
        "is_primary": true,
        "is_revoked": false
    }));
    assert_round_trip::<Venue>(json!({
        "location": {"latitude": 1.5, "longitude": 2.25},
        "title": "Cafe",
        "address": "Main st"
    }));
    assert_round_trip::<LabeledPrice>(json!({"label": "Tax", "amount": 150}));
}

#[test]
fn test_collection_round_trips() {
    let prices = [
        json!([]),
        json!([{"label": "Item", "amount": 1000}]),
        json!([{"label": "Item", "amount": 1000}, {"label": "Tax", "amount": 150}, {"label": "Tip", "amount": 0}]),
    ];
    for wire in prices {
        let decoded: Vec<LabeledPrice> = decode_array(wire.clone()).unwrap();
        assert_eq!(encode_array(&decoded).unwrap(), wire);
        let again: Vec<LabeledPrice> = decode_array(encode_array(&decoded).unwrap()).unwrap();
        assert_eq!(again, decoded);
    }
}

#[test]
fn test_nested_collection_round_trip() {
    let wire = json!([
        [{"text": "1"}, {"text": "2"}, {"text": "3"}],
        [],
        [{"text": "Cancel", "request_location": false}]
    ]);
    let rows: Vec<Vec<KeyboardButton>> = decode_nested_array(wire.clone()).unwrap();
    assert_eq!(rows[0].iter().map(|b| b.text.as_str()).collect::<Vec<_>>(), ["1", "2", "3"]);
    assert!(rows[1].is_empty());
    assert_eq!(rows[2][0].request_location, Some(false));
    assert_eq!(encode_nested_array(&rows).unwrap(), wire);

    let outer_empty: Vec<Vec<KeyboardButton>> = decode_nested_array(json!([])).unwrap();
    assert!(outer_empty.is_empty());
}

#[test]
fn test_collection_iteration_is_restartable() {
    let commands: Vec<BotCommand> = decode_array(json!([
        {"command": "a", "description": "A"},
        {"command": "b", "description": "B"}
    ]))
    .unwrap();
    let first: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();
    let second: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();
    assert_eq!(first, second);
    assert_eq!(encode_array(&commands).unwrap()[1]["command"], json!("b"));
}
