use std::fmt::{Debug, Display};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::client_info::VersionInfo;
use crate::models::logger::Logger;

/// Default endpoint of the logging API
pub const DEFAULT_API_ENDPOINT: &str = "https://logging.googleapis.com";

/// Credentials used to authorize calls to the API
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Send no authorization header, for emulators and local fakes
    #[default]
    Anonymous,
    /// A ready OAuth 2.0 access token, sent as a bearer token
    AccessToken(String),
}

impl Credentials {
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    /// The value for an `authorization` header, if these credentials need one
    pub fn authorization(&self) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::AccessToken(token) => Some(format!("Bearer {token}")),
        }
    }
}

// Ensure we can't accidentaly log an access token
impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => write!(f, "Credentials: Anonymous"),
            Self::AccessToken(_) => write!(f, "Credentials: REDACTED"),
        }
    }
}

impl Display for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Transport options shared by the generated clients
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientOptions {
    pub api_endpoint: String,
    /// Project billed for the quota of the calls, sent as `x-goog-user-project`
    pub quota_project_id: Option<String>,
    /// Seconds to wait for a connection to be established
    pub connect_timeout: Option<u64>,
    /// Seconds to wait for each request
    pub timeout: Option<u64>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            quota_project_id: None,
            connect_timeout: None,
            timeout: None,
        }
    }
}

impl ClientOptions {
    /// Default options, with the quota project taken from `GOOGLE_CLOUD_QUOTA_PROJECT` when set
    pub fn from_env() -> Self {
        Self {
            quota_project_id: std::env::var("GOOGLE_CLOUD_QUOTA_PROJECT")
                .ok()
                .filter(|project| !project.is_empty()),
            ..Default::default()
        }
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Shared context of every API adapter: which project to talk about, how to
/// authenticate and how to reach the service.
#[derive(Clone, Debug)]
pub struct Client {
    project: String,
    credentials: Credentials,
    client_options: ClientOptions,
    client_info: VersionInfo,
}

impl Client {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            credentials: Credentials::default(),
            client_options: ClientOptions::default(),
            client_info: VersionInfo::default(),
        }
    }

    /// A client for the project in `GOOGLE_CLOUD_PROJECT`, with options from the environment
    pub fn from_env() -> Option<Self> {
        let project = std::env::var("GOOGLE_CLOUD_PROJECT").ok()?;

        Some(Self::new(project).with_client_options(ClientOptions::from_env()))
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_client_options(mut self, client_options: ClientOptions) -> Self {
        self.client_options = client_options;
        self
    }

    pub fn with_client_info(mut self, client_info: impl Into<VersionInfo>) -> Self {
        self.client_info = client_info.into();
        self
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn client_options(&self) -> &ClientOptions {
        &self.client_options
    }

    pub fn client_info(&self) -> &VersionInfo {
        &self.client_info
    }

    /// A logger bound to this client's project
    pub fn logger(self: &Arc<Self>, name: impl Into<String>) -> Logger {
        Logger::new(name, Arc::clone(self))
    }
}
