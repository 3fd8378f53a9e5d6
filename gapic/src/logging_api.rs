use std::collections::BTreeMap;
use std::sync::Arc;

use cloud_logging_common::models::{LogEntry, LoggerCache, MonitoredResource};
use cloud_logging_common::Client;
use cloud_logging_proto::json::TypeRegistry;
use cloud_logging_proto::logging::{
    self as pb, DeleteLogRequest, ListLogEntriesRequest, LoggingRpc, WriteLogEntriesRequest,
};
use futures::{Stream, StreamExt};
use tracing::instrument;

use crate::convert::{log_entry_mapping_to_pb, parse_log_entry};
use crate::pager::{item_limit, paginate, Page};
use crate::{Error, Struct};

/// What to list and how to page through it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListEntriesOptions {
    /// Only list entries matching this filter
    pub filter: Option<String>,
    /// `timestamp asc` or `timestamp desc`
    pub order_by: Option<String>,
    pub max_results: Option<i64>,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

/// Defaults the service applies to every entry of a write that does not set its own
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteEntriesOptions {
    /// Full resource name of the log, for example `projects/my-project/logs/syslog`
    pub logger_name: Option<String>,
    pub resource: Option<MonitoredResource>,
    pub labels: Option<BTreeMap<String, String>>,
    /// Write the valid entries even when some of the others are rejected
    pub partial_success: bool,
    /// Validate the entries without writing them
    pub dry_run: bool,
}

impl Default for WriteEntriesOptions {
    fn default() -> Self {
        Self {
            logger_name: None,
            resource: None,
            labels: None,
            partial_success: true,
            dry_run: false,
        }
    }
}

/// Access to log entries
#[derive(Clone)]
pub struct LoggingApi<C> {
    gapic: C,
    client: Arc<Client>,
    registry: Arc<TypeRegistry>,
}

impl<C> LoggingApi<C>
where
    C: LoggingRpc + Clone + Send + 'static,
{
    pub fn new(gapic: C, client: Arc<Client>) -> Self {
        Self {
            gapic,
            client,
            registry: Arc::new(TypeRegistry::default()),
        }
    }

    /// Resolve proto payloads against `registry` instead of the default one
    pub fn with_type_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// List the entries of the logs under `resource_names`
    ///
    /// Pages are fetched as the stream is consumed and fetching stops once
    /// `max_results` entries were yielded. Entries of one log share a [Logger] for the
    /// lifetime of the returned stream.
    ///
    /// [Logger]: cloud_logging_common::models::Logger
    #[instrument(skip_all, fields(resource_names = ?resource_names, filter = options.filter.as_deref(), max_results = options.max_results))]
    pub fn list_entries(
        &self,
        resource_names: Vec<String>,
        options: ListEntriesOptions,
    ) -> Result<impl Stream<Item = Result<LogEntry, Error>> + Send + 'static, Error> {
        let limit = item_limit(options.max_results)?;
        let ListEntriesOptions {
            filter,
            order_by,
            page_size,
            page_token,
            ..
        } = options;

        let gapic = self.gapic.clone();
        let pages = paginate(page_token, move |page_token| {
            let mut gapic = gapic.clone();
            let request = ListLogEntriesRequest {
                resource_names: resource_names.clone(),
                filter: filter.clone().unwrap_or_default(),
                order_by: order_by.clone().unwrap_or_default(),
                page_size: page_size.unwrap_or_default(),
                page_token,
            };

            async move {
                let response = gapic.list_log_entries(request).await?;

                Ok::<_, Error>(Page {
                    items: response.entries,
                    next_page_token: response.next_page_token,
                })
            }
        });

        let client = Arc::clone(&self.client);
        let registry = Arc::clone(&self.registry);
        let mut loggers = LoggerCache::default();
        let entries = pages.map(move |entry| -> Result<LogEntry, Error> {
            let mapping = parse_log_entry(entry?, &registry)?;

            Ok(LogEntry::from_resource(&mapping, &client, &mut loggers)?)
        });

        Ok(entries.take(limit))
    }

    /// Write `entries` in a single request
    ///
    /// Each entry is the structure [LogEntry::to_resource] gives.
    #[instrument(skip_all, fields(entries = entries.len(), logger_name = options.logger_name.as_deref(), dry_run = options.dry_run))]
    pub async fn write_entries(
        &self,
        entries: Vec<Struct>,
        options: WriteEntriesOptions,
    ) -> Result<(), Error> {
        let entries = entries
            .into_iter()
            .map(|entry| log_entry_mapping_to_pb(entry, &self.registry))
            .collect::<Result<Vec<_>, _>>()?;

        let request = WriteLogEntriesRequest {
            log_name: options.logger_name.unwrap_or_default(),
            resource: options.resource.map(resource_to_pb),
            labels: options.labels.unwrap_or_default().into_iter().collect(),
            entries,
            partial_success: options.partial_success,
            dry_run: options.dry_run,
        };

        self.gapic.clone().write_log_entries(request).await?;

        Ok(())
    }

    /// Delete every entry of a log
    #[instrument(skip(self))]
    pub async fn logger_delete(&self, logger_name: &str) -> Result<(), Error> {
        self.gapic
            .clone()
            .delete_log(DeleteLogRequest {
                log_name: logger_name.to_string(),
            })
            .await?;

        Ok(())
    }
}

fn resource_to_pb(resource: MonitoredResource) -> pb::MonitoredResource {
    pb::MonitoredResource {
        r#type: resource.r#type,
        labels: resource.labels.into_iter().collect(),
    }
}
