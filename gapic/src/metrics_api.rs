use std::sync::Arc;

use cloud_logging_common::models::Metric;
use cloud_logging_common::Client;
use cloud_logging_proto::metrics::{
    CreateLogMetricRequest, DeleteLogMetricRequest, GetLogMetricRequest, ListLogMetricsRequest,
    LogMetric, MetricsRpc, UpdateLogMetricRequest,
};
use futures::{Stream, StreamExt};
use tracing::instrument;

use crate::pager::{item_limit, paginate, ListOptions, Page};
use crate::{to_mapping, Error, Struct};

/// Access to the logs-based metrics of projects
#[derive(Clone)]
pub struct MetricsApi<C> {
    gapic: C,
    client: Arc<Client>,
}

impl<C> MetricsApi<C>
where
    C: MetricsRpc + Clone + Send + 'static,
{
    pub fn new(gapic: C, client: Arc<Client>) -> Self {
        Self { gapic, client }
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// List the metrics of `project`
    #[instrument(skip_all, fields(project = %project, max_results = options.max_results))]
    pub fn list_metrics(
        &self,
        project: &str,
        options: ListOptions,
    ) -> Result<impl Stream<Item = Result<Metric, Error>> + Send + 'static, Error> {
        let limit = item_limit(options.max_results)?;
        let page_size = options.page_size.unwrap_or_default();
        let parent = format!("projects/{project}");

        let gapic = self.gapic.clone();
        let pages = paginate(options.page_token, move |page_token| {
            let mut gapic = gapic.clone();
            let request = ListLogMetricsRequest {
                parent: parent.clone(),
                page_token,
                page_size,
            };

            async move {
                let response = gapic.list_log_metrics(request).await?;

                Ok::<_, Error>(Page {
                    items: response.metrics,
                    next_page_token: response.next_page_token,
                })
            }
        });

        let client = Arc::clone(&self.client);
        let metrics = pages.map(move |metric| -> Result<Metric, Error> {
            let mapping = to_mapping(&metric?)?;

            Ok(Metric::from_resource(&mapping, &client)?)
        });

        Ok(metrics.take(limit))
    }

    /// Create a metric counting the entries of `project` that match `filter`
    ///
    /// Nothing of the created metric is given back. Use [Self::metric_get] to read it.
    #[instrument(skip(self))]
    pub async fn metric_create(
        &self,
        project: &str,
        metric_name: &str,
        filter: &str,
        description: &str,
    ) -> Result<(), Error> {
        let request = CreateLogMetricRequest {
            parent: format!("projects/{project}"),
            metric: Some(metric(metric_name, filter, description)),
        };

        self.gapic.clone().create_log_metric(request).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn metric_get(&self, project: &str, metric_name: &str) -> Result<Struct, Error> {
        let metric = self
            .gapic
            .clone()
            .get_log_metric(GetLogMetricRequest {
                metric_name: metric_path(project, metric_name),
            })
            .await?;

        to_mapping(&metric)
    }

    /// Replace the filter and description of a metric
    #[instrument(skip(self))]
    pub async fn metric_update(
        &self,
        project: &str,
        metric_name: &str,
        filter: &str,
        description: &str,
    ) -> Result<Struct, Error> {
        let path = metric_path(project, metric_name);
        let request = UpdateLogMetricRequest {
            metric: Some(metric(&path, filter, description)),
            metric_name: path,
        };

        let updated = self.gapic.clone().update_log_metric(request).await?;

        to_mapping(&updated)
    }

    #[instrument(skip(self))]
    pub async fn metric_delete(&self, project: &str, metric_name: &str) -> Result<(), Error> {
        self.gapic
            .clone()
            .delete_log_metric(DeleteLogMetricRequest {
                metric_name: metric_path(project, metric_name),
            })
            .await?;

        Ok(())
    }
}

fn metric_path(project: &str, metric_name: &str) -> String {
    format!("projects/{project}/metrics/{metric_name}")
}

fn metric(name: &str, filter: &str, description: &str) -> LogMetric {
    LogMetric {
        name: name.to_string(),
        filter: filter.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}
