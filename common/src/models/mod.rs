//! Hand-written resource objects built from the plain structures returned by the API.

pub mod entry;
pub mod logger;
pub mod metric;
pub mod resource;
pub mod sink;

pub use entry::{LogEntry, Payload};
pub use logger::{Logger, LoggerCache};
pub use metric::Metric;
pub use resource::MonitoredResource;
pub use sink::Sink;

use serde_json::Value;

use crate::{ParseError, Struct};

/// Get an optional string field out of a resource
fn optional_string(resource: &Struct, field: &'static str) -> Result<Option<String>, ParseError> {
    match resource.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ParseError::InvalidField {
            field,
            reason: format!("expected a string, got {other}"),
        }),
    }
}

/// Get a string field that every resource of this kind carries
fn required_string(resource: &Struct, field: &'static str) -> Result<String, ParseError> {
    optional_string(resource, field)?.ok_or(ParseError::MissingField(field))
}

fn optional_object(resource: &Struct, field: &'static str) -> Result<Option<Struct>, ParseError> {
    match resource.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ParseError::InvalidField {
            field,
            reason: format!("expected an object, got {other}"),
        }),
    }
}
