pub mod client;
pub mod client_info;
pub mod models;

pub use client::{Client, ClientOptions, Credentials};
pub use client_info::{ClientInfo, GapicClientInfo, VersionInfo};

/// A resource in its plain key-value shape, keyed by the lowerCamelCase JSON names of
/// the API messages.
pub type Struct = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur when turning a plain resource into one of the models
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("resource is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("resource field `{field}` is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Split a resource name on its last `/` and return the final segment
///
/// ```
/// assert_eq!(cloud_logging_common::short_name("projects/p/sinks/my-sink"), "my-sink");
/// assert_eq!(cloud_logging_common::short_name("my-sink"), "my-sink");
/// ```
pub fn short_name(resource_name: &str) -> &str {
    resource_name
        .rsplit_once('/')
        .map_or(resource_name, |(_, name)| name)
}
