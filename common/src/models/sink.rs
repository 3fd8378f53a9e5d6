use std::sync::Arc;

use super::{optional_string, required_string};
use crate::{Client, ParseError, Struct};

/// A sink exporting matching log entries to a destination
#[derive(Clone, Debug)]
pub struct Sink {
    pub name: String,
    pub filter: Option<String>,
    pub destination: String,
    /// Identity the service writes to the destination with. Set by the API.
    pub writer_identity: Option<String>,
    parent: String,
    client: Arc<Client>,
}

impl Sink {
    /// Build a sink from its API representation
    ///
    /// `parent` is the resource owning the sink; when absent the sink is assumed to
    /// belong to the client's project.
    pub fn from_resource(
        resource: &Struct,
        client: &Arc<Client>,
        parent: Option<&str>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            name: required_string(resource, "name")?,
            filter: optional_string(resource, "filter")?,
            destination: required_string(resource, "destination")?,
            writer_identity: optional_string(resource, "writerIdentity")?,
            parent: parent.map_or_else(
                || format!("projects/{}", client.project()),
                ToString::to_string,
            ),
            client: Arc::clone(client),
        })
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Full resource name, for example `projects/my-project/sinks/my-sink`
    pub fn full_name(&self) -> String {
        format!("{}/sinks/{}", self.parent, self.name)
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
