use std::collections::BTreeMap;
use std::sync::Arc;

use cloud_logging_common::models::{LogEntry, MonitoredResource, Payload};
use cloud_logging_common::Client;
use cloud_logging_common_tests::logging::MockedLogging;
use cloud_logging_gapic::{
    Error, ListEntriesOptions, LoggingApi, TypeRegistry, WriteEntriesOptions,
};
use cloud_logging_proto::json::{self, raw_any};
use cloud_logging_proto::logging::{self as pb, log_entry};
use cloud_logging_proto::prost_types::field_descriptor_proto::{Label, Type};
use cloud_logging_proto::prost_types::{
    Any, DescriptorProto, FieldDescriptorProto, FileDescriptorProto,
};
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::{test_context, AsyncTestContext};
use tonic::Status;

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
    fn api(&self, mocked: &MockedLogging) -> LoggingApi<MockedLogging> {
        LoggingApi::new(mocked.clone(), Arc::clone(&self.client))
    }
}

fn text_entry(log_id: &str, text: &str) -> pb::LogEntry {
    pb::LogEntry {
        log_name: format!("projects/my-project/logs/{log_id}"),
        insert_id: text.to_string(),
        payload: Some(log_entry::Payload::TextPayload(text.to_string())),
        ..Default::default()
    }
}

fn five_entries() -> MockedLogging {
    MockedLogging::with_pages(vec![
        vec![text_entry("syslog", "a"), text_entry("syslog", "b")],
        vec![text_entry("syslog", "c"), text_entry("syslog", "d")],
        vec![text_entry("syslog", "e")],
    ])
}

fn audit_payload() -> Any {
    Any {
        type_url: "type.googleapis.com/google.cloud.audit.AuditLog".to_string(),
        value: vec![0x3a, 0x07, b's', b't', b'o', b'r', b'a', b'g', b'e'],
    }
}

/// Knows `google.cloud.audit.AuditLog` with its `service_name` field only
fn audit_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .add_file(FileDescriptorProto {
            name: Some("google/cloud/audit/audit_log.proto".to_string()),
            package: Some("google.cloud.audit".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("AuditLog".to_string()),
                field: vec![FieldDescriptorProto {
                    name: Some("service_name".to_string()),
                    json_name: Some("serviceName".to_string()),
                    number: Some(7),
                    label: Some(Label::Optional as i32),
                    r#type: Some(Type::String as i32),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        })
        .unwrap();

    registry
}

fn mapping(value: Value) -> json::Struct {
    match value {
        Value::Object(mapping) => mapping,
        other => panic!("not an object: {other}"),
    }
}

async fn list(
    api: &LoggingApi<MockedLogging>,
    options: ListEntriesOptions,
) -> Vec<LogEntry> {
    api.list_entries(vec!["projects/my-project".to_string()], options)
        .unwrap()
        .try_collect()
        .await
        .unwrap()
}

fn texts(entries: &[LogEntry]) -> Vec<&str> {
    entries
        .iter()
        .map(|entry| match &entry.payload {
            Payload::Text(text) => text.as_str(),
            other => panic!("not a text payload: {other:?}"),
        })
        .collect()
}

#[test_context(Project)]
#[tokio::test]
async fn lists_every_page(project: &mut Project) {
    let mocked = five_entries();

    let entries = list(
        &project.api(&mocked),
        ListEntriesOptions {
            filter: Some("severity>=ERROR".to_string()),
            order_by: Some("timestamp desc".to_string()),
            page_size: Some(2),
            ..Default::default()
        },
    )
    .await;

    assert_eq!(texts(&entries), vec!["a", "b", "c", "d", "e"]);

    let requests = mocked.list_requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].resource_names, vec!["projects/my-project"]);
    assert_eq!(requests[0].filter, "severity>=ERROR");
    assert_eq!(requests[0].order_by, "timestamp desc");
    assert_eq!(requests[0].page_size, 2);
    assert_eq!(requests[0].page_token, "");
    assert_eq!(requests[1].page_token, "page-1");
    assert_eq!(requests[2].page_token, "page-2");
}

#[test_context(Project)]
#[tokio::test]
async fn max_results_stops_fetching(project: &mut Project) {
    for (max_results, expected, fetched) in [
        (0, vec![], 0),
        (1, vec!["a"], 1),
        (2, vec!["a", "b"], 1),
        (3, vec!["a", "b", "c"], 2),
        (5, vec!["a", "b", "c", "d", "e"], 3),
        (9, vec!["a", "b", "c", "d", "e"], 3),
    ] {
        let mocked = five_entries();

        let entries = list(
            &project.api(&mocked),
            ListEntriesOptions {
                max_results: Some(max_results),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(texts(&entries), expected, "max_results = {max_results}");
        assert_eq!(
            mocked.list_requests().len(),
            fetched,
            "max_results = {max_results}"
        );
    }
}

#[test_context(Project)]
#[tokio::test]
async fn negative_max_results_is_rejected(project: &mut Project) {
    let mocked = five_entries();

    let result = project.api(&mocked).list_entries(
        vec!["projects/my-project".to_string()],
        ListEntriesOptions {
            max_results: Some(-1),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(mocked.calls(), 0);
}

#[test_context(Project)]
#[tokio::test]
async fn starts_from_page_token(project: &mut Project) {
    let mocked = five_entries();

    let entries = list(
        &project.api(&mocked),
        ListEntriesOptions {
            page_token: Some("page-2".to_string()),
            ..Default::default()
        },
    )
    .await;

    assert_eq!(texts(&entries), vec!["e"]);
    assert_eq!(mocked.list_requests()[0].page_token, "page-2");
}

#[test_context(Project)]
#[tokio::test]
async fn nothing_is_fetched_until_polled(project: &mut Project) {
    let mocked = five_entries();

    let stream = project
        .api(&mocked)
        .list_entries(vec!["projects/my-project".to_string()], Default::default())
        .unwrap();
    assert_eq!(mocked.calls(), 0);

    drop(stream);
    assert_eq!(mocked.calls(), 0);
}

#[test_context(Project)]
#[tokio::test]
async fn rpc_failure_ends_listing(project: &mut Project) {
    let mocked = MockedLogging::failing(Status::permission_denied("no access"));

    let mut entries = Box::pin(
        project
            .api(&mocked)
            .list_entries(vec!["projects/my-project".to_string()], Default::default())
            .unwrap(),
    );

    match entries.next().await {
        Some(Err(Error::Rpc(status))) => assert_eq!(status.message(), "no access"),
        other => panic!("unexpected item: {:?}", other.map(|item| item.map(|_| ()))),
    }
    assert!(entries.next().await.is_none());
}

#[test_context(Project)]
#[tokio::test]
async fn unknown_payload_is_kept_encoded(project: &mut Project) {
    let mocked = MockedLogging::with_pages(vec![vec![pb::LogEntry {
        log_name: "projects/my-project/logs/cloudaudit.googleapis.com%2Factivity".to_string(),
        insert_id: "audit-1".to_string(),
        severity: 300,
        payload: Some(log_entry::Payload::ProtoPayload(audit_payload())),
        ..Default::default()
    }]]);

    let entries = list(&project.api(&mocked), Default::default()).await;

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.insert_id.as_deref(), Some("audit-1"));
    assert_eq!(entry.severity.as_deref(), Some("NOTICE"));
    assert_eq!(
        entry.logger.as_ref().map(|logger| logger.name()),
        Some("cloudaudit.googleapis.com/activity")
    );
    match &entry.payload {
        Payload::Proto(payload) => {
            assert_eq!(raw_any(&Value::Object(payload.clone())), Some(audit_payload()))
        }
        other => panic!("not a proto payload: {other:?}"),
    }
}

#[test_context(Project)]
#[tokio::test]
async fn custom_registry_decides_what_is_known(project: &mut Project) {
    let mocked = MockedLogging::with_pages(vec![vec![pb::LogEntry {
        log_name: "projects/my-project/logs/cloudaudit.googleapis.com%2Factivity".to_string(),
        payload: Some(log_entry::Payload::ProtoPayload(audit_payload())),
        ..Default::default()
    }]]);

    let raw = list(&project.api(&mocked), Default::default()).await;
    let known = list(
        &project.api(&mocked).with_type_registry(audit_registry()),
        Default::default(),
    )
    .await;

    match &raw[0].payload {
        Payload::Proto(payload) => {
            assert_eq!(raw_any(&Value::Object(payload.clone())), Some(audit_payload()))
        }
        other => panic!("not a proto payload: {other:?}"),
    }
    assert_eq!(
        known[0].payload,
        Payload::Proto(mapping(json!({
            "@type": "type.googleapis.com/google.cloud.audit.AuditLog",
            "serviceName": "storage",
        })))
    );
}

#[test_context(Project)]
#[tokio::test]
async fn listed_raw_payload_is_written_back_unchanged(project: &mut Project) {
    let listed = MockedLogging::with_pages(vec![vec![pb::LogEntry {
        log_name: "projects/my-project/logs/cloudaudit.googleapis.com%2Factivity".to_string(),
        insert_id: "audit-1".to_string(),
        payload: Some(log_entry::Payload::ProtoPayload(audit_payload())),
        ..Default::default()
    }]]);
    let entries = list(&project.api(&listed), Default::default()).await;

    for registry in [TypeRegistry::default(), audit_registry()] {
        let mocked = MockedLogging::new();

        project
            .api(&mocked)
            .with_type_registry(registry)
            .write_entries(vec![entries[0].to_resource()], Default::default())
            .await
            .unwrap();

        let requests = mocked.write_requests();
        assert_eq!(
            requests[0].entries[0].payload,
            Some(log_entry::Payload::ProtoPayload(audit_payload()))
        );
        assert_eq!(requests[0].entries[0].insert_id, "audit-1");
    }
}

#[test_context(Project)]
#[tokio::test]
async fn entries_of_one_listing_share_loggers(project: &mut Project) {
    let mocked = MockedLogging::with_pages(vec![
        vec![text_entry("syslog", "a"), text_entry("apache", "b")],
        vec![text_entry("syslog", "c")],
    ]);
    let api = project.api(&mocked);

    let first = list(&api, Default::default()).await;
    let second = list(&api, Default::default()).await;

    let logger = |entries: &[LogEntry], index: usize| entries[index].logger.clone().unwrap();

    assert!(Arc::ptr_eq(&logger(&first, 0), &logger(&first, 2)));
    assert!(!Arc::ptr_eq(&logger(&first, 0), &logger(&first, 1)));
    assert_eq!(logger(&first, 1).name(), "apache");
    assert!(!Arc::ptr_eq(&logger(&first, 0), &logger(&second, 0)));
    assert_eq!(logger(&second, 0).full_name(), "projects/my-project/logs/syslog");
}

#[test_context(Project)]
#[tokio::test]
async fn entries_outside_projects_have_no_logger(project: &mut Project) {
    let mocked = MockedLogging::with_pages(vec![vec![pb::LogEntry {
        log_name: "organizations/123/logs/syslog".to_string(),
        payload: Some(log_entry::Payload::TextPayload("a".to_string())),
        ..Default::default()
    }]]);

    let entries = list(&project.api(&mocked), Default::default()).await;

    assert_eq!(entries[0].log_name.as_deref(), Some("organizations/123/logs/syslog"));
    assert!(entries[0].logger.is_none());
}

#[test_context(Project)]
#[tokio::test]
async fn entries_of_other_projects_keep_their_project(project: &mut Project) {
    let mocked = MockedLogging::with_pages(vec![vec![pb::LogEntry {
        log_name: "projects/other/logs/x".to_string(),
        payload: Some(log_entry::Payload::TextPayload("a".to_string())),
        ..Default::default()
    }]]);

    let entries = project
        .api(&mocked)
        .list_entries(vec!["projects/other".to_string()], Default::default())
        .unwrap()
        .try_collect::<Vec<_>>()
        .await
        .unwrap();

    let logger = entries[0].logger.clone().unwrap();
    assert_eq!(logger.project(), "other");
    assert_eq!(logger.full_name(), "projects/other/logs/x");
}

#[test_context(Project)]
#[tokio::test]
async fn writes_entries_in_one_request(project: &mut Project) {
    let mocked = MockedLogging::new();
    let entry = LogEntry {
        log_name: Some("projects/my-project/logs/syslog".to_string()),
        payload: Payload::Json(mapping(json!({"message": "disk full"}))),
        severity: Some("ERROR".to_string()),
        ..Default::default()
    };

    project
        .api(&mocked)
        .write_entries(
            vec![
                entry.to_resource(),
                mapping(json!({"textPayload": "plain"})),
            ],
            WriteEntriesOptions {
                logger_name: Some("projects/my-project/logs/syslog".to_string()),
                resource: Some(MonitoredResource::new("global").with_label("project_id", "my-project")),
                labels: Some(BTreeMap::from([("env".to_string(), "prod".to_string())])),
                dry_run: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let requests = mocked.write_requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.log_name, "projects/my-project/logs/syslog");
    assert_eq!(request.entries.len(), 2);
    assert_eq!(request.entries[0].severity, 500);
    assert_eq!(
        request.entries[1].payload,
        Some(log_entry::Payload::TextPayload("plain".to_string()))
    );
    assert_eq!(
        request.resource.as_ref().map(|resource| resource.r#type.as_str()),
        Some("global")
    );
    assert_eq!(request.labels.get("env").map(String::as_str), Some("prod"));
    assert!(request.partial_success);
    assert!(request.dry_run);
}

#[test_context(Project)]
#[tokio::test]
async fn invalid_entry_is_not_written(project: &mut Project) {
    let mocked = MockedLogging::new();

    let error = project
        .api(&mocked)
        .write_entries(
            vec![mapping(json!({"textPayload": "a", "colour": "blue"}))],
            Default::default(),
        )
        .await
        .unwrap_err();

    assert!(
        matches!(&error, Error::Codec(json::Error::Schema { source, .. }) if source.to_string().contains("colour")),
        "{error:?}"
    );
    assert_eq!(mocked.calls(), 0);
}

#[test_context(Project)]
#[tokio::test]
async fn deletes_logger(project: &mut Project) {
    let mocked = MockedLogging::new();

    project
        .api(&mocked)
        .logger_delete("projects/my-project/logs/syslog")
        .await
        .unwrap();

    let requests = mocked.delete_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].log_name, "projects/my-project/logs/syslog");
}

#[test_context(Project)]
#[tokio::test]
async fn status_is_passed_through(project: &mut Project) {
    let mocked = MockedLogging::failing(Status::not_found("no such log"));

    let error = project
        .api(&mocked)
        .logger_delete("projects/my-project/logs/missing")
        .await
        .unwrap_err();

    match error {
        Error::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::NotFound);
            assert_eq!(status.message(), "no such log");
        }
        other => panic!("unexpected error: {other}"),
    }
}
