//! Channel and request metadata shared by the service clients
use cloud_logging_common::{ClientOptions, Credentials, GapicClientInfo};
use tonic::metadata::{errors::InvalidMetadataValue, AsciiMetadataValue};
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};
use tracing::debug;

const AUTHORIZATION: &str = "authorization";
const USER_PROJECT: &str = "x-goog-user-project";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to configure the endpoint: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("invalid request metadata: {0}")]
    Metadata(#[from] InvalidMetadataValue),
}

/// Adds the client headers, and the credentials when there are any, to every request
#[derive(Clone)]
pub struct ApiMetadata {
    api_client: (&'static str, AsciiMetadataValue),
    authorization: Option<AsciiMetadataValue>,
    user_project: Option<AsciiMetadataValue>,
}

impl ApiMetadata {
    pub fn new(
        options: &ClientOptions,
        credentials: &Credentials,
        client_info: &GapicClientInfo,
    ) -> Result<Self, InvalidMetadataValue> {
        let (header, value) = client_info.to_grpc_metadata();

        let authorization = credentials
            .authorization()
            .map(|value| {
                value.parse::<AsciiMetadataValue>().map(|mut value| {
                    value.set_sensitive(true);
                    value
                })
            })
            .transpose()?;

        let user_project = options
            .quota_project_id
            .as_deref()
            .map(str::parse::<AsciiMetadataValue>)
            .transpose()?;

        Ok(Self {
            api_client: (header, value.parse::<AsciiMetadataValue>()?),
            authorization,
            user_project,
        })
    }
}

impl Interceptor for ApiMetadata {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let metadata = request.metadata_mut();
        let (header, value) = &self.api_client;

        metadata.insert(*header, value.clone());

        if let Some(authorization) = &self.authorization {
            metadata.insert(AUTHORIZATION, authorization.clone());
        }

        if let Some(user_project) = &self.user_project {
            metadata.insert(USER_PROJECT, user_project.clone());
        }

        Ok(request)
    }
}

/// A channel to the configured endpoint that connects on first use
pub fn channel(options: &ClientOptions, client_info: &GapicClientInfo) -> Result<Channel, Error> {
    let mut endpoint = Endpoint::from_shared(options.api_endpoint.clone())?
        .user_agent(client_info.to_user_agent())?;

    if let Some(timeout) = options.connect_timeout() {
        endpoint = endpoint.connect_timeout(timeout);
    }

    if let Some(timeout) = options.timeout() {
        endpoint = endpoint.timeout(timeout);
    }

    if endpoint.uri().scheme_str() == Some("https") {
        endpoint = endpoint.tls_config(ClientTlsConfig::new())?;
    }

    debug!(endpoint = %endpoint.uri(), "created lazy channel");

    Ok(endpoint.connect_lazy())
}

/// The channel and request metadata every service client is built from
pub fn connect_lazy(
    options: &ClientOptions,
    credentials: &Credentials,
    client_info: &GapicClientInfo,
) -> Result<(Channel, ApiMetadata), Error> {
    let metadata = ApiMetadata::new(options, credentials, client_info)?;
    let channel = channel(options, client_info)?;

    Ok((channel, metadata))
}
