use std::sync::Arc;

use super::{optional_string, required_string};
use crate::{Client, ParseError, Struct};

/// A log-based metric, counting the entries that match a filter
#[derive(Clone, Debug)]
pub struct Metric {
    pub name: String,
    pub filter: String,
    pub description: String,
    client: Arc<Client>,
}

impl Metric {
    pub fn from_resource(resource: &Struct, client: &Arc<Client>) -> Result<Self, ParseError> {
        Ok(Self {
            name: required_string(resource, "name")?,
            filter: required_string(resource, "filter")?,
            description: optional_string(resource, "description")?.unwrap_or_default(),
            client: Arc::clone(client),
        })
    }

    /// Full resource name, for example `projects/my-project/metrics/error_count`
    pub fn full_name(&self) -> String {
        format!("projects/{}/metrics/{}", self.client.project(), self.name)
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
