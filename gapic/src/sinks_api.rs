use std::sync::Arc;

use cloud_logging_common::models::Sink;
use cloud_logging_common::{short_name, Client};
use cloud_logging_proto::config::{
    ConfigRpc, CreateSinkRequest, DeleteSinkRequest, GetSinkRequest, ListSinksRequest, LogSink,
    UpdateSinkRequest,
};
use futures::{Stream, StreamExt};
use tracing::instrument;

use crate::pager::{item_limit, paginate, ListOptions, Page};
use crate::{to_mapping, Error, Struct};

/// Access to the sinks exporting log entries
#[derive(Clone)]
pub struct SinksApi<C> {
    gapic: C,
    client: Arc<Client>,
}

impl<C> SinksApi<C>
where
    C: ConfigRpc + Clone + Send + 'static,
{
    pub fn new(gapic: C, client: Arc<Client>) -> Self {
        Self { gapic, client }
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// List the sinks of `parent`, for example `projects/my-project` or
    /// `organizations/123`
    #[instrument(skip_all, fields(parent = %parent, max_results = options.max_results))]
    pub fn list_sinks(
        &self,
        parent: &str,
        options: ListOptions,
    ) -> Result<impl Stream<Item = Result<Sink, Error>> + Send + 'static, Error> {
        let limit = item_limit(options.max_results)?;
        let page_size = options.page_size.unwrap_or_default();
        let parent = parent.to_string();

        let gapic = self.gapic.clone();
        let request_parent = parent.clone();
        let pages = paginate(options.page_token, move |page_token| {
            let mut gapic = gapic.clone();
            let request = ListSinksRequest {
                parent: request_parent.clone(),
                page_token,
                page_size,
            };

            async move {
                let response = gapic.list_sinks(request).await?;

                Ok::<_, Error>(Page {
                    items: response.sinks,
                    next_page_token: response.next_page_token,
                })
            }
        });

        let client = Arc::clone(&self.client);
        let sinks = pages.map(move |sink| -> Result<Sink, Error> {
            let mapping = to_mapping(&sink?)?;

            Ok(Sink::from_resource(&mapping, &client, Some(parent.as_str()))?)
        });

        Ok(sinks.take(limit))
    }

    /// Create a sink under `parent` and give back the sink as created by the service
    ///
    /// With `unique_writer_identity` the service picks a dedicated identity for writing
    /// to the destination, which shows up as `writerIdentity` of the result.
    #[instrument(skip(self))]
    pub async fn sink_create(
        &self,
        parent: &str,
        sink_name: &str,
        filter: Option<&str>,
        destination: &str,
        unique_writer_identity: bool,
    ) -> Result<Struct, Error> {
        let request = CreateSinkRequest {
            parent: parent.to_string(),
            sink: Some(sink(sink_name, filter, destination)),
            unique_writer_identity,
        };

        let created = self.gapic.clone().create_sink(request).await?;

        to_mapping(&created)
    }

    /// `sink_name` is the full resource name, for example `projects/p/sinks/my-sink`
    #[instrument(skip(self))]
    pub async fn sink_get(&self, sink_name: &str) -> Result<Struct, Error> {
        let sink = self
            .gapic
            .clone()
            .get_sink(GetSinkRequest {
                sink_name: sink_name.to_string(),
            })
            .await?;

        to_mapping(&sink)
    }

    /// Replace the filter and destination of the sink at `sink_name`
    #[instrument(skip(self))]
    pub async fn sink_update(
        &self,
        sink_name: &str,
        filter: Option<&str>,
        destination: &str,
        unique_writer_identity: bool,
    ) -> Result<Struct, Error> {
        let request = UpdateSinkRequest {
            sink_name: sink_name.to_string(),
            sink: Some(sink(short_name(sink_name), filter, destination)),
            unique_writer_identity,
            update_mask: None,
        };

        let updated = self.gapic.clone().update_sink(request).await?;

        to_mapping(&updated)
    }

    #[instrument(skip(self))]
    pub async fn sink_delete(&self, sink_name: &str) -> Result<(), Error> {
        self.gapic
            .clone()
            .delete_sink(DeleteSinkRequest {
                sink_name: sink_name.to_string(),
            })
            .await?;

        Ok(())
    }
}

fn sink(name: &str, filter: Option<&str>, destination: &str) -> LogSink {
    LogSink {
        name: name.to_string(),
        filter: filter.unwrap_or_default().to_string(),
        destination: destination.to_string(),
        ..Default::default()
    }
}
