mod generated;
pub mod json;

#[cfg(feature = "client")]
pub mod client;

// useful re-exports if types are needed in other crates
pub use prost;
pub use prost_reflect;
pub use prost_types;
pub use tonic;

#[cfg(feature = "logging")]
pub mod logging {
    use async_trait::async_trait;
    use prost::bytes::Bytes;
    use tonic::codegen::{Body, StdError};
    use tonic::{Request, Response, Status};

    pub use super::generated::google::api::MonitoredResource;
    pub use super::generated::google::logging::r#type::{HttpRequest, LogSeverity};
    pub use super::generated::google::logging::v2::{
        log_entry, logging_service_v2_client, DeleteLogRequest, ListLogEntriesRequest,
        ListLogEntriesResponse, LogEntry, LogEntryOperation, LogEntrySourceLocation, LogSplit,
        WriteLogEntriesRequest, WriteLogEntriesResponse,
    };

    #[cfg(feature = "logging-client")]
    pub use super::_logging_client::*;

    /// The calls of the logging service, one request and one response each
    #[async_trait]
    pub trait LoggingRpc: Send {
        async fn list_log_entries(
            &mut self,
            request: ListLogEntriesRequest,
        ) -> Result<ListLogEntriesResponse, Status>;

        async fn write_log_entries(
            &mut self,
            request: WriteLogEntriesRequest,
        ) -> Result<WriteLogEntriesResponse, Status>;

        async fn delete_log(&mut self, request: DeleteLogRequest) -> Result<(), Status>;
    }

    #[async_trait]
    impl<T> LoggingRpc for logging_service_v2_client::LoggingServiceV2Client<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody> + Send + Sync + Clone,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        T::Future: Send,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        async fn list_log_entries(
            &mut self,
            request: ListLogEntriesRequest,
        ) -> Result<ListLogEntriesResponse, Status> {
            (*self)
                .list_log_entries(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn write_log_entries(
            &mut self,
            request: WriteLogEntriesRequest,
        ) -> Result<WriteLogEntriesResponse, Status> {
            (*self)
                .write_log_entries(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn delete_log(&mut self, request: DeleteLogRequest) -> Result<(), Status> {
            (*self)
                .delete_log(Request::new(request))
                .await
                .map(Response::into_inner)
        }
    }
}

#[cfg(feature = "logging-client")]
mod _logging_client {
    use cloud_logging_common::{ClientOptions, Credentials, GapicClientInfo};
    use tonic::{codegen::InterceptedService, transport::Channel};

    use super::client::{self, ApiMetadata};
    use super::logging::*;

    pub type Client = logging_service_v2_client::LoggingServiceV2Client<
        InterceptedService<Channel, ApiMetadata>,
    >;

    /// Get a logging client for the configured endpoint
    ///
    /// The client connects on its first call.
    pub fn get_client(
        options: &ClientOptions,
        credentials: &Credentials,
        client_info: &GapicClientInfo,
    ) -> Result<Client, client::Error> {
        let (channel, metadata) = client::connect_lazy(options, credentials, client_info)?;

        Ok(logging_service_v2_client::LoggingServiceV2Client::with_interceptor(channel, metadata))
    }
}

#[cfg(feature = "config")]
pub mod config {
    use async_trait::async_trait;
    use prost::bytes::Bytes;
    use tonic::codegen::{Body, StdError};
    use tonic::{Request, Response, Status};

    pub use super::generated::google::logging::v2::{
        config_service_v2_client, log_sink, BigQueryOptions, CreateSinkRequest, DeleteSinkRequest,
        GetSinkRequest, ListSinksRequest, ListSinksResponse, LogExclusion, LogSink,
        UpdateSinkRequest,
    };

    #[cfg(feature = "config-client")]
    pub use super::_config_client::*;

    /// The sink calls of the configuration service
    #[async_trait]
    pub trait ConfigRpc: Send {
        async fn list_sinks(&mut self, request: ListSinksRequest)
            -> Result<ListSinksResponse, Status>;

        async fn get_sink(&mut self, request: GetSinkRequest) -> Result<LogSink, Status>;

        async fn create_sink(&mut self, request: CreateSinkRequest) -> Result<LogSink, Status>;

        async fn update_sink(&mut self, request: UpdateSinkRequest) -> Result<LogSink, Status>;

        async fn delete_sink(&mut self, request: DeleteSinkRequest) -> Result<(), Status>;
    }

    #[async_trait]
    impl<T> ConfigRpc for config_service_v2_client::ConfigServiceV2Client<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody> + Send + Sync + Clone,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        T::Future: Send,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        async fn list_sinks(
            &mut self,
            request: ListSinksRequest,
        ) -> Result<ListSinksResponse, Status> {
            (*self)
                .list_sinks(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn get_sink(&mut self, request: GetSinkRequest) -> Result<LogSink, Status> {
            (*self)
                .get_sink(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn create_sink(&mut self, request: CreateSinkRequest) -> Result<LogSink, Status> {
            (*self)
                .create_sink(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn update_sink(&mut self, request: UpdateSinkRequest) -> Result<LogSink, Status> {
            (*self)
                .update_sink(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn delete_sink(&mut self, request: DeleteSinkRequest) -> Result<(), Status> {
            (*self)
                .delete_sink(Request::new(request))
                .await
                .map(Response::into_inner)
        }
    }
}

#[cfg(feature = "config-client")]
mod _config_client {
    use cloud_logging_common::{ClientOptions, Credentials, GapicClientInfo};
    use tonic::{codegen::InterceptedService, transport::Channel};

    use super::client::{self, ApiMetadata};
    use super::config::*;

    pub type Client = config_service_v2_client::ConfigServiceV2Client<
        InterceptedService<Channel, ApiMetadata>,
    >;

    /// Get a configuration client for the configured endpoint
    ///
    /// The client connects on its first call.
    pub fn get_client(
        options: &ClientOptions,
        credentials: &Credentials,
        client_info: &GapicClientInfo,
    ) -> Result<Client, client::Error> {
        let (channel, metadata) = client::connect_lazy(options, credentials, client_info)?;

        Ok(config_service_v2_client::ConfigServiceV2Client::with_interceptor(channel, metadata))
    }
}

#[cfg(feature = "metrics")]
pub mod metrics {
    use async_trait::async_trait;
    use prost::bytes::Bytes;
    use tonic::codegen::{Body, StdError};
    use tonic::{Request, Response, Status};

    pub use super::generated::google::logging::v2::{
        metrics_service_v2_client, CreateLogMetricRequest, DeleteLogMetricRequest,
        GetLogMetricRequest, ListLogMetricsRequest, ListLogMetricsResponse, LogMetric,
        UpdateLogMetricRequest,
    };

    #[cfg(feature = "metrics-client")]
    pub use super::_metrics_client::*;

    /// The calls of the logs-based metrics service
    #[async_trait]
    pub trait MetricsRpc: Send {
        async fn list_log_metrics(
            &mut self,
            request: ListLogMetricsRequest,
        ) -> Result<ListLogMetricsResponse, Status>;

        async fn get_log_metric(&mut self, request: GetLogMetricRequest)
            -> Result<LogMetric, Status>;

        async fn create_log_metric(
            &mut self,
            request: CreateLogMetricRequest,
        ) -> Result<LogMetric, Status>;

        async fn update_log_metric(
            &mut self,
            request: UpdateLogMetricRequest,
        ) -> Result<LogMetric, Status>;

        async fn delete_log_metric(&mut self, request: DeleteLogMetricRequest)
            -> Result<(), Status>;
    }

    #[async_trait]
    impl<T> MetricsRpc for metrics_service_v2_client::MetricsServiceV2Client<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody> + Send + Sync + Clone,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        T::Future: Send,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        async fn list_log_metrics(
            &mut self,
            request: ListLogMetricsRequest,
        ) -> Result<ListLogMetricsResponse, Status> {
            (*self)
                .list_log_metrics(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn get_log_metric(
            &mut self,
            request: GetLogMetricRequest,
        ) -> Result<LogMetric, Status> {
            (*self)
                .get_log_metric(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn create_log_metric(
            &mut self,
            request: CreateLogMetricRequest,
        ) -> Result<LogMetric, Status> {
            (*self)
                .create_log_metric(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn update_log_metric(
            &mut self,
            request: UpdateLogMetricRequest,
        ) -> Result<LogMetric, Status> {
            (*self)
                .update_log_metric(Request::new(request))
                .await
                .map(Response::into_inner)
        }

        async fn delete_log_metric(
            &mut self,
            request: DeleteLogMetricRequest,
        ) -> Result<(), Status> {
            (*self)
                .delete_log_metric(Request::new(request))
                .await
                .map(Response::into_inner)
        }
    }
}

#[cfg(feature = "metrics-client")]
mod _metrics_client {
    use cloud_logging_common::{ClientOptions, Credentials, GapicClientInfo};
    use tonic::{codegen::InterceptedService, transport::Channel};

    use super::client::{self, ApiMetadata};
    use super::metrics::*;

    pub type Client = metrics_service_v2_client::MetricsServiceV2Client<
        InterceptedService<Channel, ApiMetadata>,
    >;

    /// Get a logs-based metrics client for the configured endpoint
    ///
    /// The client connects on its first call.
    pub fn get_client(
        options: &ClientOptions,
        credentials: &Credentials,
        client_info: &GapicClientInfo,
    ) -> Result<Client, client::Error> {
        let (channel, metadata) = client::connect_lazy(options, credentials, client_info)?;

        Ok(metrics_service_v2_client::MetricsServiceV2Client::with_interceptor(channel, metadata))
    }
}
