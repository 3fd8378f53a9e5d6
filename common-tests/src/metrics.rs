use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cloud_logging_proto::metrics::{
    CreateLogMetricRequest, DeleteLogMetricRequest, GetLogMetricRequest, ListLogMetricsRequest,
    ListLogMetricsResponse, LogMetric, MetricsRpc, UpdateLogMetricRequest,
};
use tonic::{async_trait, Status};

use crate::{Failure, Pages};

#[derive(Default)]
struct State {
    listed: Pages<LogMetric>,
    /// Metrics by their full resource name
    stored: HashMap<String, LogMetric>,
    failure: Option<Failure>,
    list_requests: Vec<ListLogMetricsRequest>,
    get_requests: Vec<GetLogMetricRequest>,
    create_requests: Vec<CreateLogMetricRequest>,
    update_requests: Vec<UpdateLogMetricRequest>,
    delete_requests: Vec<DeleteLogMetricRequest>,
}

impl State {
    fn check(&self) -> Result<(), Status> {
        match &self.failure {
            Some(failure) => Err(failure.status()),
            None => Ok(()),
        }
    }
}

/// Metrics service holding logs-based metrics in memory
#[derive(Clone, Default)]
pub struct MockedMetrics {
    state: Arc<Mutex<State>>,
}

impl MockedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: Vec<Vec<LogMetric>>) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().listed = Pages::new(pages);

        mocked
    }

    /// Store `metric` under its full resource name so it can be fetched
    pub fn with_metric(self, metric_name: &str, metric: LogMetric) -> Self {
        self.state
            .lock()
            .unwrap()
            .stored
            .insert(metric_name.to_string(), metric);

        self
    }

    /// Answer every call with `status`
    pub fn failing(status: Status) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().failure = Some(Failure::new(&status));

        mocked
    }

    pub fn list_requests(&self) -> Vec<ListLogMetricsRequest> {
        self.state.lock().unwrap().list_requests.clone()
    }

    pub fn get_requests(&self) -> Vec<GetLogMetricRequest> {
        self.state.lock().unwrap().get_requests.clone()
    }

    pub fn create_requests(&self) -> Vec<CreateLogMetricRequest> {
        self.state.lock().unwrap().create_requests.clone()
    }

    pub fn update_requests(&self) -> Vec<UpdateLogMetricRequest> {
        self.state.lock().unwrap().update_requests.clone()
    }

    pub fn delete_requests(&self) -> Vec<DeleteLogMetricRequest> {
        self.state.lock().unwrap().delete_requests.clone()
    }

    /// Number of calls received, of any kind
    pub fn calls(&self) -> usize {
        let state = self.state.lock().unwrap();

        state.list_requests.len()
            + state.get_requests.len()
            + state.create_requests.len()
            + state.update_requests.len()
            + state.delete_requests.len()
    }
}

#[async_trait]
impl MetricsRpc for MockedMetrics {
    async fn list_log_metrics(
        &mut self,
        request: ListLogMetricsRequest,
    ) -> Result<ListLogMetricsResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let page_token = request.page_token.clone();
        state.list_requests.push(request);
        state.check()?;

        let (metrics, next_page_token) = state.listed.page(&page_token)?;

        Ok(ListLogMetricsResponse {
            metrics,
            next_page_token,
        })
    }

    async fn get_log_metric(&mut self, request: GetLogMetricRequest) -> Result<LogMetric, Status> {
        let mut state = self.state.lock().unwrap();
        let metric_name = request.metric_name.clone();
        state.get_requests.push(request);
        state.check()?;

        state
            .stored
            .get(&metric_name)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("metric `{metric_name}` does not exist")))
    }

    async fn create_log_metric(
        &mut self,
        request: CreateLogMetricRequest,
    ) -> Result<LogMetric, Status> {
        let mut state = self.state.lock().unwrap();
        state.create_requests.push(request.clone());
        state.check()?;

        let metric = request
            .metric
            .ok_or_else(|| Status::invalid_argument("a metric is required"))?;
        let metric_name = format!("{}/metrics/{}", request.parent, metric.name);
        state.stored.insert(metric_name, metric.clone());

        Ok(metric)
    }

    async fn update_log_metric(
        &mut self,
        request: UpdateLogMetricRequest,
    ) -> Result<LogMetric, Status> {
        let mut state = self.state.lock().unwrap();
        state.update_requests.push(request.clone());
        state.check()?;

        let metric = request
            .metric
            .ok_or_else(|| Status::invalid_argument("a metric is required"))?;
        state.stored.insert(request.metric_name, metric.clone());

        Ok(metric)
    }

    async fn delete_log_metric(&mut self, request: DeleteLogMetricRequest) -> Result<(), Status> {
        let mut state = self.state.lock().unwrap();
        let metric_name = request.metric_name.clone();
        state.delete_requests.push(request);
        state.check()?;

        state
            .stored
            .remove(&metric_name)
            .map(|_| ())
            .ok_or_else(|| Status::not_found(format!("metric `{metric_name}` does not exist")))
    }
}
