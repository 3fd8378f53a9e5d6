//! Conversion of log entries between the generated message and the plain structure
use cloud_logging_proto::json::{self, raw_any, raw_any_to_json, TypeRegistry, TYPE_KEY};
use cloud_logging_proto::logging::{log_entry::Payload, LogEntry};
use cloud_logging_proto::prost::Name;
use cloud_logging_proto::prost_types::Any;
use serde::de::Error as _;
use serde_json::Value;
use tracing::warn;

use crate::Struct;

const PROTO_PAYLOAD_KEYS: [&str; 2] = ["protoPayload", "proto_payload"];

/// Build the message of a log entry from its plain structure
///
/// Field names the message does not have are an error. A `protoPayload` needs either a
/// type known to `registry` or the raw `{"@type", "value"}` form. The raw form is taken
/// byte for byte, whether or not its type is known.
pub fn log_entry_mapping_to_pb(
    mut mapping: Struct,
    registry: &TypeRegistry,
) -> Result<LogEntry, json::Error> {
    let Some((key, payload)) = PROTO_PAYLOAD_KEYS
        .iter()
        .find_map(|key| mapping.remove_entry(*key))
    else {
        return json::from_json(mapping, registry);
    };

    let raw = raw_any(&payload);
    let known = payload
        .get(TYPE_KEY)
        .and_then(Value::as_str)
        .is_some_and(|type_url| registry.contains(type_url));

    let raw = match raw {
        Some(raw) if known => {
            let mut decoded = mapping.clone();
            decoded.insert(key, payload);
            match json::from_json(decoded, registry) {
                Ok(entry) => return Ok(entry),
                Err(_) => raw,
            }
        }
        Some(raw) => raw,
        None => {
            let unknown = payload.get(TYPE_KEY).and_then(Value::as_str).filter(|_| !known);
            if let Some(type_url) = unknown {
                return Err(json::Error::UnresolvableType(type_url.to_string()));
            }

            mapping.insert(key, payload);
            return json::from_json(mapping, registry);
        }
    };

    with_raw_payload(mapping, raw, registry)
}

fn with_raw_payload(
    mapping: Struct,
    payload: Any,
    registry: &TypeRegistry,
) -> Result<LogEntry, json::Error> {
    let mut entry: LogEntry = json::from_json(mapping, registry)?;
    if entry.payload.is_some() {
        return Err(json::Error::Schema {
            message: LogEntry::full_name(),
            source: serde_json::Error::custom("an entry holds a single payload"),
        });
    }
    entry.payload = Some(Payload::ProtoPayload(payload));

    Ok(entry)
}

/// Turn an entry message into its plain structure
///
/// A proto payload whose type `registry` cannot resolve does not fail the entry. It is
/// kept in raw form under `protoPayload` while every other field converts as usual.
pub fn parse_log_entry(mut entry: LogEntry, registry: &TypeRegistry) -> Result<Struct, json::Error> {
    let error = match json::to_json(&entry, registry) {
        Ok(mapping) => return Ok(mapping),
        Err(error @ json::Error::UnresolvableType(_)) => error,
        Err(error) => return Err(error),
    };

    let Some(Payload::ProtoPayload(payload)) = entry.payload.take() else {
        return Err(error);
    };

    warn!(
        type_url = %payload.type_url,
        insert_id = %entry.insert_id,
        "unknown payload type, keeping the payload encoded"
    );

    let mut mapping = json::to_json(&entry, registry)?;
    mapping.insert(
        "protoPayload".to_string(),
        Value::Object(raw_any_to_json(&payload)),
    );

    Ok(mapping)
}
