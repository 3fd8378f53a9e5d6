use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::{
    optional_object, optional_string, required_string, Logger, LoggerCache, MonitoredResource,
};
use crate::{Client, ParseError, Struct};

/// The body of a log entry
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Text(String),
    Json(Struct),
    /// A protocol buffer payload in its JSON form. It keeps an `@type` key and is either
    /// the decoded message or, when the type was unknown, the still encoded bytes under
    /// `value`.
    Proto(Struct),
}

impl Payload {
    fn from_resource(resource: &Struct) -> Result<Self, ParseError> {
        if let Some(text) = optional_string(resource, "textPayload")? {
            return Ok(Self::Text(text));
        }

        if let Some(json) = optional_object(resource, "jsonPayload")? {
            return Ok(Self::Json(json));
        }

        if let Some(proto) = optional_object(resource, "protoPayload")? {
            return Ok(Self::Proto(proto));
        }

        Ok(Self::Empty)
    }

    fn write_to(&self, resource: &mut Struct) {
        match self {
            Self::Empty => {}
            Self::Text(text) => {
                resource.insert("textPayload".to_string(), Value::String(text.clone()));
            }
            Self::Json(json) => {
                resource.insert("jsonPayload".to_string(), Value::Object(json.clone()));
            }
            Self::Proto(proto) => {
                resource.insert("protoPayload".to_string(), Value::Object(proto.clone()));
            }
        }
    }
}

/// A single log entry, as read from or written to the API
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    /// Full resource name of the log this entry belongs to
    pub log_name: Option<String>,
    /// Logger for [Self::log_name] when the log is scoped to a project
    pub logger: Option<Arc<Logger>>,
    pub payload: Payload,
    pub labels: Option<BTreeMap<String, String>>,
    pub insert_id: Option<String>,
    pub severity: Option<String>,
    pub http_request: Option<Struct>,
    pub timestamp: Option<DateTime<Utc>>,
    pub received_timestamp: Option<DateTime<Utc>>,
    pub resource: Option<MonitoredResource>,
    pub trace: Option<String>,
    pub span_id: Option<String>,
    pub trace_sampled: Option<bool>,
    pub source_location: Option<Struct>,
    pub operation: Option<Struct>,
}

impl LogEntry {
    /// Build an entry from its API representation
    ///
    /// Loggers are looked up in (and added to) `loggers`, so entries of the same log share
    /// one [Logger].
    pub fn from_resource(
        resource: &Struct,
        client: &Arc<Client>,
        loggers: &mut LoggerCache,
    ) -> Result<Self, ParseError> {
        let log_name = required_string(resource, "logName")?;
        let logger = loggers.get_or_create(&log_name, client);

        let source_location = optional_object(resource, "sourceLocation")?
            .map(source_location_with_int_line)
            .transpose()?;

        let monitored_resource = match resource.get("resource") {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value.clone()).map_err(|error| {
                ParseError::InvalidField {
                    field: "resource",
                    reason: error.to_string(),
                }
            })?),
        };

        let trace_sampled = match resource.get("traceSampled") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(sampled)) => Some(*sampled),
            Some(other) => {
                return Err(ParseError::InvalidField {
                    field: "traceSampled",
                    reason: format!("expected a boolean, got {other}"),
                })
            }
        };

        Ok(Self {
            log_name: Some(log_name),
            logger,
            payload: Payload::from_resource(resource)?,
            labels: labels(resource)?,
            insert_id: optional_string(resource, "insertId")?,
            severity: optional_string(resource, "severity")?,
            http_request: optional_object(resource, "httpRequest")?,
            timestamp: optional_timestamp(resource, "timestamp")?,
            received_timestamp: optional_timestamp(resource, "receiveTimestamp")?,
            resource: monitored_resource,
            trace: optional_string(resource, "trace")?,
            span_id: optional_string(resource, "spanId")?,
            trace_sampled,
            source_location,
            operation: optional_object(resource, "operation")?,
        })
    }

    /// The API representation of this entry, as accepted when writing entries
    pub fn to_resource(&self) -> Struct {
        let mut resource = Struct::new();

        if let Some(log_name) = &self.log_name {
            resource.insert("logName".to_string(), Value::String(log_name.clone()));
        }

        self.payload.write_to(&mut resource);

        let strings = [
            ("insertId", &self.insert_id),
            ("severity", &self.severity),
            ("trace", &self.trace),
            ("spanId", &self.span_id),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                resource.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        let objects = [
            ("httpRequest", &self.http_request),
            ("sourceLocation", &self.source_location),
            ("operation", &self.operation),
        ];
        for (key, value) in objects {
            if let Some(value) = value {
                resource.insert(key.to_string(), Value::Object(value.clone()));
            }
        }

        if let Some(labels) = &self.labels {
            let labels = labels
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            resource.insert("labels".to_string(), Value::Object(labels));
        }

        if let Some(timestamp) = &self.timestamp {
            resource.insert(
                "timestamp".to_string(),
                Value::String(timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            );
        }

        if let Some(monitored_resource) = &self.resource {
            if let Ok(value) = serde_json::to_value(monitored_resource) {
                resource.insert("resource".to_string(), value);
            }
        }

        if let Some(trace_sampled) = self.trace_sampled {
            resource.insert("traceSampled".to_string(), Value::Bool(trace_sampled));
        }

        resource
    }
}

fn labels(resource: &Struct) -> Result<Option<BTreeMap<String, String>>, ParseError> {
    let Some(labels) = optional_object(resource, "labels")? else {
        return Ok(None);
    };

    labels
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(value) => Ok((key, value)),
            other => Err(ParseError::InvalidField {
                field: "labels",
                reason: format!("label `{key}` is not a string: {other}"),
            }),
        })
        .collect::<Result<_, _>>()
        .map(Some)
}

fn optional_timestamp(
    resource: &Struct,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    optional_string(resource, field)?
        .map(|timestamp| {
            DateTime::parse_from_rfc3339(&timestamp)
                .map(|timestamp| timestamp.with_timezone(&Utc))
                .map_err(|error| ParseError::InvalidField {
                    field,
                    reason: error.to_string(),
                })
        })
        .transpose()
}

/// The API sends `line` as an int64, which is a string in JSON. Turn it into a number.
fn source_location_with_int_line(mut location: Struct) -> Result<Struct, ParseError> {
    let line = match location.remove("line") {
        None | Some(Value::Null) => Value::Null,
        Some(Value::Number(line)) => Value::Number(line),
        Some(Value::String(line)) => {
            let line: i64 = line.parse().map_err(|_| ParseError::InvalidField {
                field: "sourceLocation",
                reason: format!("line `{line}` is not an integer"),
            })?;
            Value::from(line)
        }
        Some(other) => {
            return Err(ParseError::InvalidField {
                field: "sourceLocation",
                reason: format!("line is not an integer: {other}"),
            })
        }
    };

    location.insert("line".to_string(), line);

    Ok(location)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn resource(value: Value) -> Struct {
        match value {
            Value::Object(map) => map,
            _ => panic!("test resource should be an object"),
        }
    }

    #[test]
    fn text_entry_from_resource() {
        let client = Arc::new(Client::new("my-project"));
        let mut loggers = LoggerCache::default();

        let entry = LogEntry::from_resource(
            &resource(json!({
                "logName": "projects/my-project/logs/syslog",
                "textPayload": "hello",
                "insertId": "abc",
                "severity": "ERROR",
                "timestamp": "2024-05-01T10:00:00.123456789Z",
                "receiveTimestamp": "2024-05-01T10:00:01Z",
                "labels": {"env": "prod"},
                "resource": {"type": "gce_instance", "labels": {"zone": "us-east1-b"}},
                "trace": "projects/my-project/traces/123",
                "spanId": "000000000000004a",
                "traceSampled": true,
                "sourceLocation": {"file": "main.rs", "line": "42", "function": "main"},
            })),
            &client,
            &mut loggers,
        )
        .unwrap();

        assert_eq!(entry.payload, Payload::Text("hello".to_string()));
        assert_eq!(entry.insert_id.as_deref(), Some("abc"));
        assert_eq!(entry.severity.as_deref(), Some("ERROR"));
        assert_eq!(
            entry.timestamp,
            Some(Utc.timestamp_opt(1714557600, 123456789).unwrap())
        );
        assert_eq!(
            entry.received_timestamp,
            Some(Utc.timestamp_opt(1714557601, 0).unwrap())
        );
        assert_eq!(
            entry.labels,
            Some(BTreeMap::from([("env".to_string(), "prod".to_string())]))
        );
        assert_eq!(
            entry.resource,
            Some(MonitoredResource::new("gce_instance").with_label("zone", "us-east1-b"))
        );
        assert_eq!(entry.trace_sampled, Some(true));
        assert_eq!(
            entry.source_location,
            Some(resource(
                json!({"file": "main.rs", "line": 42, "function": "main"})
            ))
        );
        assert_eq!(entry.logger.as_ref().unwrap().name(), "syslog");
    }

    #[test]
    fn payload_kinds() {
        let client = Arc::new(Client::new("my-project"));
        let mut loggers = LoggerCache::default();

        let json_entry = LogEntry::from_resource(
            &resource(json!({
                "logName": "projects/my-project/logs/app",
                "jsonPayload": {"message": "hi", "count": 2},
            })),
            &client,
            &mut loggers,
        )
        .unwrap();
        let proto_entry = LogEntry::from_resource(
            &resource(json!({
                "logName": "projects/my-project/logs/app",
                "protoPayload": {"@type": "type.googleapis.com/example.Ping", "value": "CgJoaQ=="},
            })),
            &client,
            &mut loggers,
        )
        .unwrap();
        let empty_entry = LogEntry::from_resource(
            &resource(json!({"logName": "organizations/1/logs/app"})),
            &client,
            &mut loggers,
        )
        .unwrap();

        assert_eq!(
            json_entry.payload,
            Payload::Json(resource(json!({"message": "hi", "count": 2})))
        );
        assert_eq!(
            proto_entry.payload,
            Payload::Proto(resource(
                json!({"@type": "type.googleapis.com/example.Ping", "value": "CgJoaQ=="})
            ))
        );
        assert_eq!(empty_entry.payload, Payload::Empty);
        assert!(empty_entry.logger.is_none());
        assert!(Arc::ptr_eq(
            json_entry.logger.as_ref().unwrap(),
            proto_entry.logger.as_ref().unwrap()
        ));
    }

    #[test]
    fn missing_log_name() {
        let client = Arc::new(Client::new("my-project"));

        let error = LogEntry::from_resource(
            &resource(json!({"textPayload": "hello"})),
            &client,
            &mut LoggerCache::default(),
        )
        .unwrap_err();

        assert_eq!(error, ParseError::MissingField("logName"));
    }

    #[test]
    fn invalid_timestamp() {
        let client = Arc::new(Client::new("my-project"));

        let error = LogEntry::from_resource(
            &resource(json!({"logName": "projects/p/logs/l", "timestamp": "yesterday"})),
            &client,
            &mut LoggerCache::default(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            ParseError::InvalidField {
                field: "timestamp",
                ..
            }
        ));
    }

    #[test]
    fn to_resource_is_inverse() {
        let client = Arc::new(Client::new("my-project"));
        let original = resource(json!({
            "logName": "projects/my-project/logs/syslog",
            "jsonPayload": {"message": "hi"},
            "insertId": "abc",
            "severity": "WARNING",
            "timestamp": "2024-05-01T10:00:00.123Z",
            "labels": {"env": "prod"},
            "resource": {"type": "global"},
            "trace": "projects/my-project/traces/123",
            "spanId": "000000000000004a",
            "traceSampled": false,
            "httpRequest": {"requestMethod": "GET", "status": 200},
            "operation": {"id": "op-1", "first": true},
        }));

        let entry =
            LogEntry::from_resource(&original, &client, &mut LoggerCache::default()).unwrap();

        assert_eq!(entry.to_resource(), original);
    }
}
