//! Bidirectional mapping between wire values and typed values.
//!
//! Entities, collections, and polymorphic families all go through serde;
//! this module fixes the error taxonomy and the shape checks around it.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DecodeError, EncodeError};

/// A wire entity with a fixed wire map shape.
///
/// Optional fields are `Option<T>` and are omitted from the wire map when
/// absent, never emitted as `null`.
pub trait Entity: Serialize + DeserializeOwned {
    /// Decode a wire map into this entity.
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode(value)
    }

    /// Encode this entity into a wire map.
    fn encode(&self) -> Result<Value, EncodeError> {
        encode(self)
    }
}

/// How a method maps its raw result onto its declared output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// `true` on success; an absent result also means `true`.
    Boolean,
    /// A scalar (integer, string) passed through unchanged.
    Primitive,
    /// A single entity or polymorphic family member.
    Entity,
    /// An ordered sequence of entities.
    Collection,
}

/// Decode any typed value from a wire value.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::from)
}

/// Encode any typed value into a wire value.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value, EncodeError> {
    Ok(serde_json::to_value(value)?)
}

/// Decode a wire array element by element, keeping wire order.
pub fn decode_array<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DecodeError> {
    match value {
        Value::Array(items) => items.into_iter().map(decode).collect(),
        other => Err(DecodeError::Invalid(format!(
            "expected array, got {}",
            kind(&other)
        ))),
    }
}

/// Decode an array of arrays; each inner array is decoded independently.
pub fn decode_nested_array<T: DeserializeOwned>(value: Value) -> Result<Vec<Vec<T>>, DecodeError> {
    decode_array::<Value>(value)?
        .into_iter()
        .map(decode_array)
        .collect()
}

/// Encode a sequence into a wire array, keeping order.
pub fn encode_array<T: Serialize>(items: &[T]) -> Result<Value, EncodeError> {
    items
        .iter()
        .map(encode)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Encode a sequence of sequences into a wire array of arrays.
pub fn encode_nested_array<T: Serialize>(rows: &[Vec<T>]) -> Result<Value, EncodeError> {
    rows.iter()
        .map(|row| encode_array(row))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Map a raw method result onto the declared output type.
pub fn map_result<T: DeserializeOwned>(
    shape: ResultShape,
    raw: Option<Value>,
) -> Result<T, DecodeError> {
    match (shape, raw) {
        (ResultShape::Boolean, None) => decode(Value::Bool(true)),
        (_, None) => Err(DecodeError::MissingField("result".into())),
        (ResultShape::Collection, Some(value)) if !value.is_array() => Err(DecodeError::Invalid(
            format!("expected array result, got {}", kind(&value)),
        )),
        (_, Some(value)) => decode(value),
    }
}

/// Decode an internally tagged family.
///
/// Reads `key` from the wire map and hands the tag plus the whole map to
/// `build`. A missing or non-string discriminant is reported as an unknown
/// empty variant, never defaulted.
pub fn decode_tagged<'de, D, T, F>(
    deserializer: D,
    key: &'static str,
    variants: &'static [&'static str],
    build: F,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    F: FnOnce(&str, Value) -> Result<T, serde_json::Error>,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    let tag = match map.get(key) {
        Some(Value::String(tag)) => tag.clone(),
        _ => return Err(de::Error::unknown_variant("", variants)),
    };
    build(&tag, Value::Object(map)).map_err(de::Error::custom)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Key {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hidden: Option<bool>,
    }

    impl Entity for Key {}

    #[derive(Debug, PartialEq, Serialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    enum Shape {
        Dot,
        Circle { radius: i64 },
    }

    impl<'de> Deserialize<'de> for Shape {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Circle {
                radius: i64,
            }
            const VARIANTS: &[&str] = &["dot", "circle"];
            decode_tagged(deserializer, "kind", VARIANTS, |tag, value| match tag {
                "dot" => Ok(Shape::Dot),
                "circle" => {
                    let Circle { radius } = serde_json::from_value(value)?;
                    Ok(Shape::Circle { radius })
                }
                other => Err(de::Error::unknown_variant(other, VARIANTS)),
            })
        }
    }

    #[test]
    fn test_entity_absent_optional_is_omitted() {
        let key = Key::decode(json!({"text": "a"})).unwrap();
        assert_eq!(key.hidden, None);
        assert_eq!(key.encode().unwrap(), json!({"text": "a"}));
    }

    #[test]
    fn test_entity_explicit_false_is_kept() {
        let key = Key::decode(json!({"text": "a", "hidden": false})).unwrap();
        assert_eq!(key.hidden, Some(false));
        assert_eq!(key.encode().unwrap(), json!({"text": "a", "hidden": false}));
    }

    #[test]
    fn test_array_preserves_order() {
        for wire in [json!([]), json!([{"text": "a"}]), json!([{"text": "b"}, {"text": "a"}])] {
            let keys: Vec<Key> = decode_array(wire.clone()).unwrap();
            assert_eq!(encode_array(&keys).unwrap(), wire);
        }
    }

    #[test]
    fn test_nested_array_keeps_empty_rows() {
        let wire = json!([[{"text": "1"}, {"text": "2"}], [], [{"text": "3"}]]);
        let rows: Vec<Vec<Key>> = decode_nested_array(wire.clone()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[0][1].text, "2");
        assert_eq!(encode_nested_array(&rows).unwrap(), wire);
    }

    #[test]
    fn test_array_rejects_object() {
        let err = decode_array::<Key>(json!({"text": "a"})).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid(_)));
    }

    #[test]
    fn test_tagged_resolves_each_variant() {
        assert_eq!(decode::<Shape>(json!({"kind": "dot"})).unwrap(), Shape::Dot);
        assert_eq!(
            decode::<Shape>(json!({"kind": "circle", "radius": 3})).unwrap(),
            Shape::Circle { radius: 3 }
        );
    }

    #[test]
    fn test_tagged_unknown_and_missing_discriminant() {
        assert_eq!(
            decode::<Shape>(json!({"kind": "square"})).unwrap_err(),
            DecodeError::UnknownVariant("square".into())
        );
        assert_eq!(
            decode::<Shape>(json!({"radius": 3})).unwrap_err(),
            DecodeError::UnknownVariant(String::new())
        );
    }

    #[test]
    fn test_tagged_inner_missing_field() {
        assert_eq!(
            decode::<Shape>(json!({"kind": "circle"})).unwrap_err(),
            DecodeError::MissingField("radius".into())
        );
    }

    #[test]
    fn test_tagged_marker_round_trips() {
        let wire = encode(&Shape::Dot).unwrap();
        assert_eq!(wire, json!({"kind": "dot"}));
        assert_eq!(decode::<Shape>(wire).unwrap(), Shape::Dot);
    }

    #[test]
    fn test_map_result_boolean_absent_is_true() {
        assert!(map_result::<bool>(ResultShape::Boolean, None).unwrap());
        assert!(!map_result::<bool>(ResultShape::Boolean, Some(json!(false))).unwrap());
    }

    #[test]
    fn test_map_result_entity_absent_is_missing() {
        let err = map_result::<Key>(ResultShape::Entity, None).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("result".into()));
    }

    #[test]
    fn test_map_result_collection_requires_array() {
        let err = map_result::<Vec<Key>>(ResultShape::Collection, Some(json!({"text": "a"})))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Invalid(_)));
    }

    #[test]
    fn test_large_identifier_round_trips() {
        let wire = json!(9223372036854775_i64);
        let id: i64 = decode(wire.clone()).unwrap();
        assert_eq!(id, 9223372036854775);
        assert_eq!(encode(&id).unwrap(), wire);
    }
}
