//! Hand-friendly access to the logging API over the generated gRPC clients
//!
//! Each facade wraps one generated client together with the shared [Client] context.
//! Calls take plain values or [Struct]s and give back plain structures or the models of
//! [cloud_logging_common].
use std::sync::Arc;

use cloud_logging_common::{Client, GapicClientInfo, ParseError, VersionInfo};
use cloud_logging_proto::prost::{Message, Name};
use cloud_logging_proto::{client, config, json, logging, metrics};
use tonic::metadata::errors::InvalidMetadataValue;

pub mod convert;
mod logging_api;
mod metrics_api;
mod pager;
mod sinks_api;

pub use cloud_logging_common::Struct;
pub use cloud_logging_proto::json::TypeRegistry;
pub use logging_api::{ListEntriesOptions, LoggingApi, WriteEntriesOptions};
pub use metrics_api::MetricsApi;
pub use pager::ListOptions;
pub use sinks_api::SinksApi;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Codec(#[from] json::Error),
    #[error(transparent)]
    Rpc(#[from] tonic::Status),
    #[error("failed to set up the transport: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("invalid request metadata: {0}")]
    Metadata(#[from] InvalidMetadataValue),
    #[error("unexpected resource in response: {0}")]
    Resource(#[from] ParseError),
}

impl From<client::Error> for Error {
    fn from(error: client::Error) -> Self {
        match error {
            client::Error::Transport(error) => Self::Transport(error),
            client::Error::Metadata(error) => Self::Metadata(error),
        }
    }
}

/// The plain structure of a sink or metric message
///
/// These messages carry no `Any` fields, so no type has to be resolved.
pub(crate) fn to_mapping<M: Message + Name>(message: &M) -> Result<Struct, Error> {
    Ok(json::to_json(message, &TypeRegistry::new())?)
}

/// Adapt the version information of a client to the shape the gRPC clients send
///
/// Information that already has that shape is used as is.
pub fn client_info_to_gapic(client_info: &VersionInfo) -> GapicClientInfo {
    match client_info {
        VersionInfo::Gapic(client_info) => client_info.clone(),
        VersionInfo::Generic(client_info) => GapicClientInfo {
            language_version: client_info.language_version.clone(),
            grpc_version: client_info.grpc_version.clone(),
            api_core_version: client_info.api_core_version.clone(),
            gapic_version: client_info.gapic_version.clone(),
            client_library_version: client_info.client_library_version.clone(),
            user_agent: client_info.user_agent.clone(),
            rest_version: client_info.rest_version.clone(),
        },
    }
}

/// Create the log entries facade for `client`
///
/// The channel connects on the first call, so this needs a tokio runtime but makes no
/// request.
pub fn make_logging_api(client: &Arc<Client>) -> Result<LoggingApi<logging::Client>, Error> {
    let gapic = logging::get_client(
        client.client_options(),
        client.credentials(),
        &client_info_to_gapic(client.client_info()),
    )?;

    Ok(LoggingApi::new(gapic, Arc::clone(client)))
}

/// Create the sinks facade for `client`
pub fn make_sinks_api(client: &Arc<Client>) -> Result<SinksApi<config::Client>, Error> {
    let gapic = config::get_client(
        client.client_options(),
        client.credentials(),
        &client_info_to_gapic(client.client_info()),
    )?;

    Ok(SinksApi::new(gapic, Arc::clone(client)))
}

/// Create the logs-based metrics facade for `client`
pub fn make_metrics_api(client: &Arc<Client>) -> Result<MetricsApi<metrics::Client>, Error> {
    let gapic = metrics::get_client(
        client.client_options(),
        client.credentials(),
        &client_info_to_gapic(client.client_info()),
    )?;

    Ok(MetricsApi::new(gapic, Arc::clone(client)))
}
