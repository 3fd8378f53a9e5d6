//! Conversion between the generated messages and their proto3 JSON mapping
//!
//! Messages are transcoded through a [`DynamicMessage`] built from the descriptors
//! of a [`TypeRegistry`], which also resolves embedded `google.protobuf.Any`
//! payloads. The JSON side is [`Struct`], the plain JSON object used by the
//! hand-written client surface.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use prost::{Message, Name};
use prost_reflect::{DeserializeOptions, DynamicMessage, ReflectMessage, SerializeOptions, Value as ReflectValue};
use prost_types::Any;
use serde_json::{Number, Value};

pub use cloud_logging_common::Struct;

mod registry;
mod schema;

pub use registry::TypeRegistry;

/// Key holding the type url of an `Any` in its JSON form
pub const TYPE_KEY: &str = "@type";

/// Key holding the base64 encoded bytes of an `Any` kept in raw form
pub const RAW_VALUE_KEY: &str = "value";

const ANY: &str = "google.protobuf.Any";

/// Largest magnitude up to which every whole number is exactly a double
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message `{0}` is not known to the type registry")]
    UnknownMessage(String),
    #[error("structure does not match `{message}`")]
    Schema {
        message: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("type url `{0}` cannot be resolved in the type registry")]
    UnresolvableType(String),
    #[error("failed to decode `{message}`")]
    Decode {
        message: String,
        #[source]
        source: prost::DecodeError,
    },
    #[error("invalid message descriptors")]
    Descriptor(#[from] prost_reflect::DescriptorError),
}

/// The JSON object of a message, leaving out fields at their default value
///
/// Fails with [`Error::UnresolvableType`] when an `Any` anywhere in the message
/// holds a type the registry does not know.
pub fn to_json<M: Message + Name>(message: &M, registry: &TypeRegistry) -> Result<Struct, Error> {
    let name = M::full_name();
    let dynamic = DynamicMessage::decode(registry.message(&name)?, message.encode_to_vec().as_slice())
        .map_err(|source| Error::Decode {
            message: name.clone(),
            source,
        })?;

    check_payloads(&dynamic, registry)?;

    let schema = |source| Error::Schema {
        message: name.clone(),
        source,
    };
    let json = dynamic
        .serialize_with_options(serde_json::value::Serializer, &SerializeOptions::new())
        .map_err(schema)?;

    serde_json::from_value(integral_numbers(json)).map_err(schema)
}

/// Build a message from its JSON object
///
/// Fields are accepted under their JSON name and their proto name. Keys naming no
/// field of the message are an error.
pub fn from_json<M: Message + Name + Default>(
    fields: Struct,
    registry: &TypeRegistry,
) -> Result<M, Error> {
    let name = M::full_name();
    let dynamic = DynamicMessage::deserialize_with_options(
        registry.message(&name)?,
        Value::Object(fields),
        &DeserializeOptions::new(),
    )
    .map_err(|source| Error::Schema {
        message: name.clone(),
        source,
    })?;

    dynamic
        .transcode_to()
        .map_err(|source| Error::Decode { message: name, source })
}

/// The raw JSON form of an `Any`: its type url and its bytes, base64 encoded
pub fn raw_any_to_json(any: &Any) -> Struct {
    let mut fields = Struct::new();
    fields.insert(TYPE_KEY.to_string(), Value::String(any.type_url.clone()));
    fields.insert(
        RAW_VALUE_KEY.to_string(),
        Value::String(STANDARD.encode(&any.value)),
    );

    fields
}

/// Recover an `Any` from its raw JSON form
///
/// Gives `None` when `value` is anything other than an object holding exactly a
/// type url and valid base64 bytes.
pub fn raw_any(value: &Value) -> Option<Any> {
    let fields = value.as_object()?;
    if fields.len() != 2 {
        return None;
    }

    let type_url = fields.get(TYPE_KEY)?.as_str()?;
    let bytes = fields.get(RAW_VALUE_KEY)?.as_str()?;

    Some(Any {
        type_url: type_url.to_string(),
        value: STANDARD.decode(bytes).ok()?,
    })
}

/// Fail on the first `Any` holding a type the registry cannot resolve
fn check_payloads(message: &DynamicMessage, registry: &TypeRegistry) -> Result<(), Error> {
    if message.descriptor().full_name() == ANY {
        let any: Any = message.transcode_to().map_err(|source| Error::Decode {
            message: ANY.to_string(),
            source,
        })?;
        if !registry.contains(&any.type_url) {
            return Err(Error::UnresolvableType(any.type_url));
        }

        let name = registry::type_name(&any.type_url);
        let payload = DynamicMessage::decode(registry.message(name)?, any.value.as_slice())
            .map_err(|source| Error::Decode {
                message: name.to_string(),
                source,
            })?;

        return check_payloads(&payload, registry);
    }

    message
        .fields()
        .try_for_each(|(_, value)| check_value(value, registry))
}

fn check_value(value: &ReflectValue, registry: &TypeRegistry) -> Result<(), Error> {
    match value {
        ReflectValue::Message(message) => check_payloads(message, registry),
        ReflectValue::List(values) => values
            .iter()
            .try_for_each(|value| check_value(value, registry)),
        ReflectValue::Map(values) => values
            .values()
            .try_for_each(|value| check_value(value, registry)),
        _ => Ok(()),
    }
}

/// `google.protobuf.Value` only holds doubles. Whole numbers a double holds exactly
/// are written as integers so `3` does not come back as `3.0`.
fn integral_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(integral(number)),
        Value::Array(items) => Value::Array(items.into_iter().map(integral_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, integral_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

fn integral(number: Number) -> Number {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER => {
            Number::from(value as i64)
        }
        _ => number,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::generated::google::api::MonitoredResource;
    use crate::generated::google::logging::v2::{
        log_entry::Payload, LogEntry, LogEntrySourceLocation, LogSplit,
    };

    fn fields(value: Value) -> Struct {
        match value {
            Value::Object(fields) => fields,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn message_to_json() {
        let entry = LogEntry {
            log_name: "projects/my-project/logs/app".to_string(),
            resource: Some(MonitoredResource {
                r#type: "global".to_string(),
                labels: [("zone".to_string(), "eu".to_string())].into(),
            }),
            timestamp: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
            severity: 500,
            source_location: Some(LogEntrySourceLocation {
                file: "main.rs".to_string(),
                line: 42,
                ..Default::default()
            }),
            payload: Some(Payload::TextPayload("hello".to_string())),
            ..Default::default()
        };

        let json = to_json(&entry, &TypeRegistry::default()).unwrap();

        assert_eq!(
            Value::Object(json),
            json!({
                "logName": "projects/my-project/logs/app",
                "resource": {"type": "global", "labels": {"zone": "eu"}},
                "timestamp": "2023-11-14T22:13:20Z",
                "severity": "ERROR",
                "sourceLocation": {"file": "main.rs", "line": "42"},
                "textPayload": "hello",
            })
        );
    }

    #[test]
    fn message_from_json_accepts_both_names() {
        let split: LogSplit = from_json(
            fields(json!({"uid": "abc", "index": 1, "total_splits": 3})),
            &TypeRegistry::default(),
        )
        .unwrap();

        assert_eq!(
            split,
            LogSplit {
                uid: "abc".to_string(),
                index: 1,
                total_splits: 3,
            }
        );
    }

    #[test]
    fn message_from_json_rejects_unknown_fields() {
        let error = from_json::<LogSplit>(
            fields(json!({"uid": "abc", "colour": "blue"})),
            &TypeRegistry::default(),
        )
        .unwrap_err();

        assert!(
            matches!(&error, Error::Schema { message, source }
                if message == "google.logging.v2.LogSplit" && source.to_string().contains("colour")),
            "{error:?}"
        );
    }

    #[test]
    fn json_payload_keeps_integers() {
        let entry: LogEntry = from_json(
            fields(json!({
                "jsonPayload": {"count": 3, "status": 200, "ratio": 0.5, "huge": 1e300},
            })),
            &TypeRegistry::default(),
        )
        .unwrap();

        let json = to_json(&entry, &TypeRegistry::default()).unwrap();

        assert_eq!(
            json["jsonPayload"],
            json!({"count": 3, "status": 200, "ratio": 0.5, "huge": 1e300})
        );
    }

    #[test]
    fn unknown_payload_type() {
        let entry = LogEntry {
            payload: Some(Payload::ProtoPayload(Any {
                type_url: "type.googleapis.com/example.Opaque".to_string(),
                value: vec![8, 1],
            })),
            ..Default::default()
        };

        assert!(matches!(
            to_json(&entry, &TypeRegistry::default()),
            Err(Error::UnresolvableType(type_url)) if type_url == "type.googleapis.com/example.Opaque"
        ));
    }

    #[test]
    fn known_payload_type() {
        let split = LogSplit {
            uid: "abc".to_string(),
            index: 1,
            total_splits: 3,
        };
        let entry = LogEntry {
            payload: Some(Payload::ProtoPayload(Any {
                type_url: "type.googleapis.com/google.logging.v2.LogSplit".to_string(),
                value: split.encode_to_vec(),
            })),
            ..Default::default()
        };

        let json = to_json(&entry, &TypeRegistry::default()).unwrap();

        assert_eq!(
            json["protoPayload"],
            json!({
                "@type": "type.googleapis.com/google.logging.v2.LogSplit",
                "uid": "abc",
                "index": 1,
                "totalSplits": 3,
            })
        );
        let back: LogEntry = from_json(json, &TypeRegistry::default()).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn integral_numbers_only_touch_whole_doubles() {
        assert_eq!(integral_numbers(json!(3.0)), json!(3));
        assert_eq!(integral_numbers(json!(-0.0)), json!(0));
        assert_eq!(integral_numbers(json!([2.5, 1e16])), json!([2.5, 1e16]));
        assert_eq!(integral_numbers(json!({"a": {"b": 7.0}})), json!({"a": {"b": 7}}));
        assert_eq!(integral_numbers(json!("3.0")), json!("3.0"));
    }

    #[test]
    fn raw_any_keeps_bytes() {
        let any = Any {
            type_url: "type.googleapis.com/example.Unknown".to_string(),
            value: vec![0, 1, 2, 254, 255],
        };

        let json = raw_any_to_json(&any);

        assert_eq!(
            Value::Object(json.clone()),
            json!({
                "@type": "type.googleapis.com/example.Unknown",
                "value": "AAEC/v8=",
            })
        );
        assert_eq!(raw_any(&Value::Object(json)), Some(any));
    }

    #[test]
    fn raw_any_rejects_other_shapes() {
        assert_eq!(raw_any(&json!("AAEC")), None);
        assert_eq!(raw_any(&json!({"@type": "x", "value": "not base64!"})), None);
        assert_eq!(raw_any(&json!({"@type": "x", "value": "AAEC", "extra": 1})), None);
        assert_eq!(raw_any(&json!({"@type": "x", "name": "AAEC"})), None);
    }
}
