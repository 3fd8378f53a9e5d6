//! Version information sent along with every API request.

/// Header that carries the API client metrics on gRPC requests
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Version of this client library
pub const CLIENT_LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generic client information, independent of the transport being used
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientInfo {
    pub language_version: String,
    pub grpc_version: Option<String>,
    pub api_core_version: String,
    pub gapic_version: Option<String>,
    pub client_library_version: Option<String>,
    pub user_agent: Option<String>,
    pub rest_version: Option<String>,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            language_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
            grpc_version: None,
            api_core_version: CLIENT_LIBRARY_VERSION.to_string(),
            gapic_version: None,
            client_library_version: Some(CLIENT_LIBRARY_VERSION.to_string()),
            user_agent: None,
            rest_version: None,
        }
    }
}

impl ClientInfo {
    /// The user agent string for this client, for example
    /// `my-app/1.0 gl-rust/1.75 grpc/0.10.2 gax/0.1.0 gccl/0.1.0`
    pub fn to_user_agent(&self) -> String {
        let mut parts = Vec::with_capacity(7);

        if let Some(user_agent) = &self.user_agent {
            parts.push(user_agent.clone());
        }

        parts.push(format!("gl-rust/{}", self.language_version));

        if let Some(grpc_version) = &self.grpc_version {
            parts.push(format!("grpc/{grpc_version}"));
        }

        if let Some(rest_version) = &self.rest_version {
            parts.push(format!("rest/{rest_version}"));
        }

        parts.push(format!("gax/{}", self.api_core_version));

        if let Some(gapic_version) = &self.gapic_version {
            parts.push(format!("gapic/{gapic_version}"));
        }

        if let Some(client_library_version) = &self.client_library_version {
            parts.push(format!("gccl/{client_library_version}"));
        }

        parts.join(" ")
    }
}

/// Client information in the shape expected by the generated gRPC clients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapicClientInfo {
    pub language_version: String,
    pub grpc_version: Option<String>,
    pub api_core_version: String,
    pub gapic_version: Option<String>,
    pub client_library_version: Option<String>,
    pub user_agent: Option<String>,
    pub rest_version: Option<String>,
}

impl GapicClientInfo {
    pub fn to_user_agent(&self) -> String {
        ClientInfo {
            language_version: self.language_version.clone(),
            grpc_version: self.grpc_version.clone(),
            api_core_version: self.api_core_version.clone(),
            gapic_version: self.gapic_version.clone(),
            client_library_version: self.client_library_version.clone(),
            user_agent: self.user_agent.clone(),
            rest_version: self.rest_version.clone(),
        }
        .to_user_agent()
    }

    /// The metadata entry to attach to every gRPC request
    pub fn to_grpc_metadata(&self) -> (&'static str, String) {
        (API_CLIENT_HEADER, self.to_user_agent())
    }
}

/// The version information held by a [crate::Client]. Callers may supply either shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionInfo {
    Generic(ClientInfo),
    Gapic(GapicClientInfo),
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::Generic(ClientInfo::default())
    }
}

impl From<ClientInfo> for VersionInfo {
    fn from(info: ClientInfo) -> Self {
        Self::Generic(info)
    }
}

impl From<GapicClientInfo> for VersionInfo {
    fn from(info: GapicClientInfo) -> Self {
        Self::Gapic(info)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn user_agent_skips_missing_parts() {
        let info = ClientInfo {
            language_version: "1.75".to_string(),
            grpc_version: None,
            api_core_version: "2.0.0".to_string(),
            gapic_version: None,
            client_library_version: None,
            user_agent: None,
            rest_version: None,
        };

        assert_eq!(info.to_user_agent(), "gl-rust/1.75 gax/2.0.0");
    }

    #[test]
    fn user_agent_orders_all_parts() {
        let info = ClientInfo {
            language_version: "1.75".to_string(),
            grpc_version: Some("0.10.2".to_string()),
            api_core_version: "2.0.0".to_string(),
            gapic_version: Some("3.0.0".to_string()),
            client_library_version: Some("0.1.0".to_string()),
            user_agent: Some("my-app/1.0".to_string()),
            rest_version: Some("0.11".to_string()),
        };

        assert_eq!(
            info.to_user_agent(),
            "my-app/1.0 gl-rust/1.75 grpc/0.10.2 rest/0.11 gax/2.0.0 gapic/3.0.0 gccl/0.1.0"
        );
    }

    #[test]
    fn gapic_metadata_uses_api_client_header() {
        let info = GapicClientInfo {
            language_version: "1.75".to_string(),
            grpc_version: Some("0.10.2".to_string()),
            api_core_version: "2.0.0".to_string(),
            gapic_version: None,
            client_library_version: None,
            user_agent: None,
            rest_version: None,
        };

        assert_eq!(
            info.to_grpc_metadata(),
            ("x-goog-api-client", "gl-rust/1.75 grpc/0.10.2 gax/2.0.0".to_string())
        );
    }
}
