use std::sync::Arc;

use cloud_logging_common::models::Metric;
use cloud_logging_common::Client;
use cloud_logging_common_tests::metrics::MockedMetrics;
use cloud_logging_gapic::{Error, ListOptions, MetricsApi};
use cloud_logging_proto::metrics::LogMetric;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::{test_context, AsyncTestContext};
use tonic::Code;

struct Project {
    client: Arc<Client>,
}

impl AsyncTestContext for Project {
    async fn setup() -> Self {
        Self {
            client: Arc::new(Client::new("my-project")),
        }
    }

    async fn teardown(self) {}
}

impl Project {
    fn api(&self, mocked: &MockedMetrics) -> MetricsApi<MockedMetrics> {
        MetricsApi::new(mocked.clone(), Arc::clone(&self.client))
    }
}

fn log_metric(name: &str, filter: &str) -> LogMetric {
    LogMetric {
        name: name.to_string(),
        filter: filter.to_string(),
        ..Default::default()
    }
}

#[test_context(Project)]
#[tokio::test]
async fn lists_metrics_of_project(project: &mut Project) {
    let mocked = MockedMetrics::with_pages(vec![
        vec![log_metric("errors", "severity>=ERROR")],
        vec![LogMetric {
            description: "Entries of the web server".to_string(),
            ..log_metric("requests", "logName:apache")
        }],
    ]);

    let metrics: Vec<Metric> = project
        .api(&mocked)
        .list_metrics("my-project", Default::default())
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].full_name(), "projects/my-project/metrics/errors");
    assert_eq!(metrics[0].description, "");
    assert_eq!(metrics[1].filter, "logName:apache");
    assert_eq!(metrics[1].description, "Entries of the web server");

    let requests = mocked.list_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].parent, "projects/my-project");
    assert_eq!(requests[1].page_token, "page-1");
}

#[test_context(Project)]
#[tokio::test]
async fn max_results_limits_metrics(project: &mut Project) {
    let mocked = MockedMetrics::with_pages(vec![
        vec![log_metric("a", "x"), log_metric("b", "x")],
        vec![log_metric("c", "x")],
    ]);

    let metrics: Vec<Metric> = project
        .api(&mocked)
        .list_metrics(
            "my-project",
            ListOptions {
                max_results: Some(1),
                ..Default::default()
            },
        )
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].name, "a");
    assert_eq!(mocked.list_requests().len(), 1);
}

#[test_context(Project)]
#[tokio::test]
async fn negative_max_results_is_rejected(project: &mut Project) {
    let mocked = MockedMetrics::new();

    let result = project.api(&mocked).list_metrics(
        "my-project",
        ListOptions {
            max_results: Some(-1),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(mocked.calls(), 0);
}

#[test_context(Project)]
#[tokio::test]
async fn create_gives_back_nothing(project: &mut Project) {
    let mocked = MockedMetrics::new();
    let api = project.api(&mocked);

    let () = api
        .metric_create("my-project", "errors", "severity>=ERROR", "Error entries")
        .await
        .unwrap();

    let requests = mocked.create_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].parent, "projects/my-project");
    assert_eq!(
        requests[0].metric,
        Some(LogMetric {
            description: "Error entries".to_string(),
            ..log_metric("errors", "severity>=ERROR")
        })
    );

    let stored = api.metric_get("my-project", "errors").await.unwrap();
    assert_eq!(
        serde_json::Value::Object(stored),
        json!({
            "name": "errors",
            "filter": "severity>=ERROR",
            "description": "Error entries",
        })
    );
}

#[test_context(Project)]
#[tokio::test]
async fn gets_metric_by_path(project: &mut Project) {
    let mocked = MockedMetrics::new().with_metric(
        "projects/my-project/metrics/errors",
        log_metric("errors", "severity>=ERROR"),
    );

    let metric = project
        .api(&mocked)
        .metric_get("my-project", "errors")
        .await
        .unwrap();

    assert_eq!(metric.get("filter"), Some(&json!("severity>=ERROR")));
    assert_eq!(
        mocked.get_requests()[0].metric_name,
        "projects/my-project/metrics/errors"
    );
}

#[test_context(Project)]
#[tokio::test]
async fn update_sends_the_full_path(project: &mut Project) {
    let mocked = MockedMetrics::new();

    let updated = project
        .api(&mocked)
        .metric_update("my-project", "errors", "severity>=CRITICAL", "Critical entries")
        .await
        .unwrap();

    let requests = mocked.update_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].metric_name, "projects/my-project/metrics/errors");
    assert_eq!(
        requests[0].metric.as_ref().map(|metric| metric.name.as_str()),
        Some("projects/my-project/metrics/errors")
    );
    assert_eq!(updated.get("description"), Some(&json!("Critical entries")));
}

#[test_context(Project)]
#[tokio::test]
async fn deletes_metric(project: &mut Project) {
    let mocked = MockedMetrics::new().with_metric(
        "projects/my-project/metrics/errors",
        log_metric("errors", "severity>=ERROR"),
    );
    let api = project.api(&mocked);

    api.metric_delete("my-project", "errors").await.unwrap();
    let error = api.metric_delete("my-project", "errors").await.unwrap_err();

    assert_eq!(
        mocked.delete_requests()[0].metric_name,
        "projects/my-project/metrics/errors"
    );
    assert!(matches!(error, Error::Rpc(status) if status.code() == Code::NotFound));
}
