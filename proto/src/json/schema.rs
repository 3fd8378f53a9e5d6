//! Descriptors of the messages making up the JSON mapping of the logging API
//!
//! The files mirror the `.proto` sources the generated code was built from, reduced
//! to the messages that take part in the JSON mapping. Field numbers match the
//! `#[prost(tag)]` attributes of the generated structs.
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto,
};

const ANY: &str = "google/protobuf/any.proto";
const DURATION: &str = "google/protobuf/duration.proto";
const STRUCT: &str = "google/protobuf/struct.proto";
const TIMESTAMP: &str = "google/protobuf/timestamp.proto";
const MONITORED_RESOURCE: &str = "google/api/monitored_resource.proto";
const HTTP_REQUEST: &str = "google/logging/type/http_request.proto";
const LOG_SEVERITY: &str = "google/logging/type/log_severity.proto";
const LOG_ENTRY: &str = "google/logging/v2/log_entry.proto";

/// Files in dependency order, well-known types first
pub fn logging_files() -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![
            any(),
            duration(),
            structure(),
            timestamp(),
            monitored_resource(),
            log_severity(),
            http_request(),
            log_entry(),
            logging_config(),
            logging_metrics(),
        ],
    }
}

fn any() -> FileDescriptorProto {
    file(
        ANY,
        "google.protobuf",
        &[],
        vec![message(
            "Any",
            vec![scalar("type_url", 1, Type::String), scalar("value", 2, Type::Bytes)],
        )],
    )
}

fn duration() -> FileDescriptorProto {
    file(
        DURATION,
        "google.protobuf",
        &[],
        vec![seconds_and_nanos("Duration")],
    )
}

fn timestamp() -> FileDescriptorProto {
    file(
        TIMESTAMP,
        "google.protobuf",
        &[],
        vec![seconds_and_nanos("Timestamp")],
    )
}

fn seconds_and_nanos(name: &str) -> DescriptorProto {
    message(
        name,
        vec![scalar("seconds", 1, Type::Int64), scalar("nanos", 2, Type::Int32)],
    )
}

fn structure() -> FileDescriptorProto {
    let kind = |field: FieldDescriptorProto| in_oneof(field, 0);

    let value = DescriptorProto {
        oneof_decl: vec![oneof("kind")],
        ..message(
            "Value",
            vec![
                kind(enumeration("null_value", 1, ".google.protobuf.NullValue")),
                kind(scalar("number_value", 2, Type::Double)),
                kind(scalar("string_value", 3, Type::String)),
                kind(scalar("bool_value", 4, Type::Bool)),
                kind(embedded("struct_value", 5, ".google.protobuf.Struct")),
                kind(embedded("list_value", 6, ".google.protobuf.ListValue")),
            ],
        )
    };

    FileDescriptorProto {
        enum_type: vec![EnumDescriptorProto {
            name: Some("NullValue".to_string()),
            value: vec![enum_value("NULL_VALUE", 0)],
            ..Default::default()
        }],
        ..file(
            STRUCT,
            "google.protobuf",
            &[],
            vec![
                with_map(
                    message("Struct", Vec::new()),
                    "google.protobuf.Struct",
                    "fields",
                    1,
                    embedded("value", 2, ".google.protobuf.Value"),
                ),
                value,
                message(
                    "ListValue",
                    vec![repeated(embedded("values", 1, ".google.protobuf.Value"))],
                ),
            ],
        )
    }
}

fn monitored_resource() -> FileDescriptorProto {
    file(
        MONITORED_RESOURCE,
        "google.api",
        &[],
        vec![with_string_map(
            message("MonitoredResource", vec![scalar("type", 1, Type::String)]),
            "google.api.MonitoredResource",
            "labels",
            2,
        )],
    )
}

fn log_severity() -> FileDescriptorProto {
    let values = [
        ("DEFAULT", 0),
        ("DEBUG", 100),
        ("INFO", 200),
        ("NOTICE", 300),
        ("WARNING", 400),
        ("ERROR", 500),
        ("CRITICAL", 600),
        ("ALERT", 700),
        ("EMERGENCY", 800),
    ];

    FileDescriptorProto {
        enum_type: vec![EnumDescriptorProto {
            name: Some("LogSeverity".to_string()),
            value: values
                .iter()
                .map(|(name, number)| enum_value(name, *number))
                .collect(),
            ..Default::default()
        }],
        ..file(LOG_SEVERITY, "google.logging.type", &[], Vec::new())
    }
}

fn http_request() -> FileDescriptorProto {
    file(
        HTTP_REQUEST,
        "google.logging.type",
        &[DURATION],
        vec![message(
            "HttpRequest",
            vec![
                scalar("request_method", 1, Type::String),
                scalar("request_url", 2, Type::String),
                scalar("request_size", 3, Type::Int64),
                scalar("status", 4, Type::Int32),
                scalar("response_size", 5, Type::Int64),
                scalar("user_agent", 6, Type::String),
                scalar("remote_ip", 7, Type::String),
                scalar("server_ip", 13, Type::String),
                scalar("referer", 8, Type::String),
                embedded("latency", 14, ".google.protobuf.Duration"),
                scalar("cache_lookup", 11, Type::Bool),
                scalar("cache_hit", 9, Type::Bool),
                scalar("cache_validated_with_origin_server", 10, Type::Bool),
                scalar("cache_fill_bytes", 12, Type::Int64),
                scalar("protocol", 15, Type::String),
            ],
        )],
    )
}

fn log_entry() -> FileDescriptorProto {
    let payload = |field: FieldDescriptorProto| in_oneof(field, 0);

    let entry = DescriptorProto {
        oneof_decl: vec![oneof("payload")],
        ..message(
            "LogEntry",
            vec![
                scalar("log_name", 12, Type::String),
                embedded("resource", 8, ".google.api.MonitoredResource"),
                payload(embedded("proto_payload", 2, ".google.protobuf.Any")),
                payload(scalar("text_payload", 3, Type::String)),
                payload(embedded("json_payload", 6, ".google.protobuf.Struct")),
                embedded("timestamp", 9, ".google.protobuf.Timestamp"),
                embedded("receive_timestamp", 24, ".google.protobuf.Timestamp"),
                enumeration("severity", 10, ".google.logging.type.LogSeverity"),
                scalar("insert_id", 4, Type::String),
                embedded("http_request", 7, ".google.logging.type.HttpRequest"),
                embedded("operation", 15, ".google.logging.v2.LogEntryOperation"),
                scalar("trace", 22, Type::String),
                scalar("span_id", 27, Type::String),
                scalar("trace_sampled", 30, Type::Bool),
                embedded(
                    "source_location",
                    23,
                    ".google.logging.v2.LogEntrySourceLocation",
                ),
                embedded("split", 35, ".google.logging.v2.LogSplit"),
            ],
        )
    };

    file(
        LOG_ENTRY,
        "google.logging.v2",
        &[MONITORED_RESOURCE, HTTP_REQUEST, LOG_SEVERITY, ANY, STRUCT, TIMESTAMP],
        vec![
            with_string_map(entry, "google.logging.v2.LogEntry", "labels", 11),
            message(
                "LogEntryOperation",
                vec![
                    scalar("id", 1, Type::String),
                    scalar("producer", 2, Type::String),
                    scalar("first", 3, Type::Bool),
                    scalar("last", 4, Type::Bool),
                ],
            ),
            message(
                "LogEntrySourceLocation",
                vec![
                    scalar("file", 1, Type::String),
                    scalar("line", 2, Type::Int64),
                    scalar("function", 3, Type::String),
                ],
            ),
            message(
                "LogSplit",
                vec![
                    scalar("uid", 1, Type::String),
                    scalar("index", 2, Type::Int32),
                    scalar("total_splits", 3, Type::Int32),
                ],
            ),
        ],
    )
}

fn logging_config() -> FileDescriptorProto {
    let sink = DescriptorProto {
        oneof_decl: vec![oneof("options")],
        ..message(
            "LogSink",
            vec![
                scalar("name", 1, Type::String),
                scalar("destination", 3, Type::String),
                scalar("filter", 5, Type::String),
                scalar("description", 18, Type::String),
                scalar("disabled", 19, Type::Bool),
                repeated(embedded("exclusions", 16, ".google.logging.v2.LogExclusion")),
                scalar("writer_identity", 8, Type::String),
                scalar("include_children", 9, Type::Bool),
                in_oneof(
                    embedded("bigquery_options", 12, ".google.logging.v2.BigQueryOptions"),
                    0,
                ),
                embedded("create_time", 13, ".google.protobuf.Timestamp"),
                embedded("update_time", 14, ".google.protobuf.Timestamp"),
            ],
        )
    };

    file(
        "google/logging/v2/logging_config.proto",
        "google.logging.v2",
        &[TIMESTAMP],
        vec![
            sink,
            message(
                "BigQueryOptions",
                vec![
                    scalar("use_partitioned_tables", 1, Type::Bool),
                    scalar("uses_timestamp_column_partitioning", 3, Type::Bool),
                ],
            ),
            message(
                "LogExclusion",
                vec![
                    scalar("name", 1, Type::String),
                    scalar("description", 2, Type::String),
                    scalar("filter", 3, Type::String),
                    scalar("disabled", 4, Type::Bool),
                    embedded("create_time", 5, ".google.protobuf.Timestamp"),
                    embedded("update_time", 6, ".google.protobuf.Timestamp"),
                ],
            ),
        ],
    )
}

fn logging_metrics() -> FileDescriptorProto {
    let metric = message(
        "LogMetric",
        vec![
            scalar("name", 1, Type::String),
            scalar("description", 2, Type::String),
            scalar("filter", 3, Type::String),
            scalar("bucket_name", 13, Type::String),
            scalar("disabled", 12, Type::Bool),
            scalar("value_extractor", 6, Type::String),
            embedded("create_time", 9, ".google.protobuf.Timestamp"),
            embedded("update_time", 10, ".google.protobuf.Timestamp"),
        ],
    );

    file(
        "google/logging/v2/logging_metrics.proto",
        "google.logging.v2",
        &[TIMESTAMP],
        vec![with_string_map(
            metric,
            "google.logging.v2.LogMetric",
            "label_extractors",
            7,
        )],
    )
}

fn file(
    name: &str,
    package: &str,
    dependencies: &[&str],
    messages: Vec<DescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        dependency: dependencies.iter().map(ToString::to_string).collect(),
        message_type: messages,
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn enum_value(name: &str, number: i32) -> EnumValueDescriptorProto {
    EnumValueDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        ..Default::default()
    }
}

fn scalar(name: &str, number: i32, r#type: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(r#type as i32),
        json_name: Some(json_name(name)),
        ..Default::default()
    }
}

/// `type_name` is fully qualified with a leading dot
fn embedded(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, Type::Message)
    }
}

fn enumeration(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, Type::Enum)
    }
}

fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field
    }
}

fn in_oneof(field: FieldDescriptorProto, index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(index),
        ..field
    }
}

fn with_string_map(
    message: DescriptorProto,
    full_name: &str,
    name: &str,
    number: i32,
) -> DescriptorProto {
    with_map(message, full_name, name, number, scalar("value", 2, Type::String))
}

/// Add a map field with string keys, declared the way protoc does: a repeated
/// field of a nested `<Name>Entry` message
fn with_map(
    mut message: DescriptorProto,
    full_name: &str,
    name: &str,
    number: i32,
    value: FieldDescriptorProto,
) -> DescriptorProto {
    let mut entry_name = pascal_case(name);
    entry_name.push_str("Entry");

    message.nested_type.push(DescriptorProto {
        name: Some(entry_name.clone()),
        field: vec![scalar("key", 1, Type::String), value],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    });
    message.field.push(repeated(embedded(
        name,
        number,
        &format!(".{full_name}.{entry_name}"),
    )));

    message
}

/// `receive_timestamp` becomes `receiveTimestamp`
fn json_name(name: &str) -> String {
    let mut json = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            json.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            json.push(c);
        }
    }

    json
}

fn pascal_case(name: &str) -> String {
    let mut pascal = json_name(name);
    if let Some(first) = pascal.get_mut(..1) {
        first.make_ascii_uppercase();
    }

    pascal
}
