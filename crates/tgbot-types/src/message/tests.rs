use super::*;
use serde_json::json;
use tgbot_core::DecodeError;

fn private_chat() -> Value {
    json!({"id": 100, "type": "private", "first_name": "Ann"})
}

#[test]
fn test_message_text_only() {
    let msg = Message::decode(json!({
        "message_id": 2,
        "date": 1700000000,
        "chat": private_chat(),
        "text": "hello"
    }))
    .unwrap();
    assert_eq!(msg.text.as_deref(), Some("hello"));
    assert!(msg.voice.is_none());
    assert!(msg.from.is_none());
    assert_eq!(msg.text_or_caption(), Some("hello"));
}

#[test]
fn test_message_with_photo_picks_largest() {
    let msg = Message::decode(json!({
        "message_id": 3,
        "date": 1700000000,
        "chat": private_chat(),
        "photo": [
            {"file_id": "small", "file_unique_id": "a", "width": 90, "height": 90, "file_size": 1000},
            {"file_id": "medium", "file_unique_id": "b", "width": 320, "height": 320, "file_size": 5000},
            {"file_id": "large", "file_unique_id": "c", "width": 800, "height": 800, "file_size": 20000}
        ],
        "caption": "Check this out"
    }))
    .unwrap();
    assert_eq!(msg.largest_photo().unwrap().file_id, "large");
    assert_eq!(msg.text_or_caption(), Some("Check this out"));
}

#[test]
fn test_message_missing_chat() {
    let err = Message::decode(json!({"message_id": 1, "date": 1})).unwrap_err();
    assert_eq!(err, DecodeError::MissingField("chat".into()));
}

#[test]
fn test_message_null_nested_entity_is_absent() {
    let msg = Message::decode(json!({
        "message_id": 1,
        "date": 1,
        "chat": private_chat(),
        "from": null,
        "reply_to_message": null
    }))
    .unwrap();
    assert!(msg.from.is_none());
    assert!(msg.reply_to_message.is_none());
    let wire = msg.encode().unwrap();
    assert!(wire.get("from").is_none());
    assert!(wire.get("reply_to_message").is_none());
}

#[test]
fn test_message_reply_chain_round_trips() {
    let wire = json!({
        "message_id": 11,
        "date": 1700000100,
        "chat": private_chat(),
        "text": "yes",
        "entities": [{"type": "bold", "offset": 0, "length": 3}],
        "reply_to_message": {
            "message_id": 10,
            "date": 1700000000,
            "chat": private_chat(),
            "text": "ok?"
        }
    });
    let msg = Message::decode(wire.clone()).unwrap();
    assert_eq!(msg.reply_to_message.as_ref().unwrap().message_id, 10);
    assert_eq!(
        msg.entities.as_ref().unwrap()[0].kind,
        MessageEntityType::Bold
    );
    assert_eq!(msg.encode().unwrap(), wire);
}

#[test]
fn test_pinned_message_inaccessible() {
    let msg = Message::decode(json!({
        "message_id": 5,
        "date": 1700000000,
        "chat": private_chat(),
        "pinned_message": {"chat": private_chat(), "message_id": 4, "date": 0}
    }))
    .unwrap();
    let pinned = msg.pinned_message.unwrap();
    assert!(matches!(pinned, MaybeInaccessibleMessage::Inaccessible(_)));
    assert_eq!(pinned.message_id(), 4);
    assert!(pinned.accessible().is_none());
}

#[test]
fn test_pinned_message_accessible() {
    let wire = json!({"message_id": 4, "date": 1699999999, "chat": private_chat(), "text": "pin me"});
    let pinned = MaybeInaccessibleMessage::decode(wire.clone()).unwrap();
    assert_eq!(pinned.accessible().unwrap().text.as_deref(), Some("pin me"));
    assert_eq!(pinned.encode().unwrap(), wire);
}

#[test]
fn test_maybe_inaccessible_requires_date() {
    let err = MaybeInaccessibleMessage::decode(json!({"message_id": 4, "chat": private_chat()}))
        .unwrap_err();
    assert_eq!(err, DecodeError::MissingField("date".into()));
}

#[test]
fn test_message_origin_variants() {
    let user = MessageOrigin::decode(json!({
        "type": "user",
        "date": 1,
        "sender_user": {"id": 7, "is_bot": false, "first_name": "Bo"}
    }))
    .unwrap();
    assert!(matches!(user, MessageOrigin::User(ref o) if o.sender_user.id == 7));

    let hidden =
        MessageOrigin::decode(json!({"type": "hidden_user", "date": 2, "sender_user_name": "X"}))
            .unwrap();
    assert!(matches!(hidden, MessageOrigin::HiddenUser(_)));

    let chat = MessageOrigin::decode(json!({"type": "chat", "date": 3, "sender_chat": private_chat()}))
        .unwrap();
    assert!(matches!(chat, MessageOrigin::Chat(_)));

    let channel = MessageOrigin::decode(json!({
        "type": "channel", "date": 4, "message_id": 9,
        "chat": {"id": -1001, "type": "channel", "title": "News"}
    }))
    .unwrap();
    assert_eq!(channel.date(), 4);
    assert!(matches!(channel, MessageOrigin::Channel(ref o) if o.message_id == 9));
}

#[test]
fn test_message_origin_reencodes_discriminant() {
    let wire = json!({"type": "hidden_user", "date": 2, "sender_user_name": "X"});
    let origin = MessageOrigin::decode(wire.clone()).unwrap();
    assert_eq!(origin.encode().unwrap(), wire);
}

#[test]
fn test_message_origin_unknown_type() {
    let err = MessageOrigin::decode(json!({"type": "bot", "date": 1})).unwrap_err();
    assert_eq!(err, DecodeError::UnknownVariant("bot".into()));
}

#[test]
fn test_message_or_true() {
    assert_eq!(MessageOrTrue::decode(json!(true)).unwrap(), MessageOrTrue::True);
    let edited = MessageOrTrue::decode(json!({
        "message_id": 1, "date": 1, "chat": private_chat(), "text": "edited"
    }))
    .unwrap();
    assert!(matches!(edited, MessageOrTrue::Message(ref m) if m.text.as_deref() == Some("edited")));
    assert!(MessageOrTrue::decode(json!(false)).is_err());
    assert_eq!(MessageOrTrue::True.encode().unwrap(), json!(true));
}

#[test]
fn test_parse_mode_wire_names() {
    assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
    assert_eq!(
        serde_json::to_value(ParseMode::MarkdownV2).unwrap(),
        json!("MarkdownV2")
    );
}

#[test]
fn test_reply_parameters_minimal() {
    let params = ReplyParameters::new(42);
    assert_eq!(params.encode().unwrap(), json!({"message_id": 42}));
}

#[test]
fn test_reaction_type_variants() {
    assert_eq!(
        ReactionType::decode(json!({"type": "emoji", "emoji": "👍"})).unwrap(),
        ReactionType::emoji("👍")
    );
    assert!(matches!(
        ReactionType::decode(json!({"type": "custom_emoji", "custom_emoji_id": "5368"})).unwrap(),
        ReactionType::CustomEmoji(ref r) if r.custom_emoji_id == "5368"
    ));
    assert_eq!(
        ReactionType::decode(json!({"type": "paid"})).unwrap(),
        ReactionType::Paid
    );
}

#[test]
fn test_reaction_marker_keeps_discriminant() {
    assert_eq!(ReactionType::Paid.encode().unwrap(), json!({"type": "paid"}));
}

#[test]
fn test_reaction_unknown_type() {
    let err = ReactionType::decode(json!({"type": "bogus"})).unwrap_err();
    assert_eq!(err, DecodeError::UnknownVariant("bogus".into()));
}

#[test]
fn test_reaction_missing_discriminant() {
    let err = ReactionType::decode(json!({"emoji": "👍"})).unwrap_err();
    assert_eq!(err, DecodeError::UnknownVariant(String::new()));
}
