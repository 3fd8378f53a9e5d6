use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cloud_logging_proto::config::{
    ConfigRpc, CreateSinkRequest, DeleteSinkRequest, GetSinkRequest, ListSinksRequest,
    ListSinksResponse, LogSink, UpdateSinkRequest,
};
use tonic::{async_trait, Status};

use crate::{Failure, Pages};

/// Identity the mock hands out to sinks created with a unique writer identity
pub const WRITER_IDENTITY: &str = "serviceAccount:sink-writer@logging.iam.gserviceaccount.com";

#[derive(Default)]
struct State {
    listed: Pages<LogSink>,
    /// Sinks by their full resource name
    stored: HashMap<String, LogSink>,
    failure: Option<Failure>,
    list_requests: Vec<ListSinksRequest>,
    get_requests: Vec<GetSinkRequest>,
    create_requests: Vec<CreateSinkRequest>,
    update_requests: Vec<UpdateSinkRequest>,
    delete_requests: Vec<DeleteSinkRequest>,
}

impl State {
    fn check(&self) -> Result<(), Status> {
        match &self.failure {
            Some(failure) => Err(failure.status()),
            None => Ok(()),
        }
    }
}

/// Configuration service holding sinks in memory
#[derive(Clone, Default)]
pub struct MockedConfig {
    state: Arc<Mutex<State>>,
}

impl MockedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: Vec<Vec<LogSink>>) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().listed = Pages::new(pages);

        mocked
    }

    /// Store `sink` under its full resource name so it can be fetched
    pub fn with_sink(self, sink_name: &str, sink: LogSink) -> Self {
        self.state
            .lock()
            .unwrap()
            .stored
            .insert(sink_name.to_string(), sink);

        self
    }

    /// Answer every call with `status`
    pub fn failing(status: Status) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().failure = Some(Failure::new(&status));

        mocked
    }

    pub fn list_requests(&self) -> Vec<ListSinksRequest> {
        self.state.lock().unwrap().list_requests.clone()
    }

    pub fn get_requests(&self) -> Vec<GetSinkRequest> {
        self.state.lock().unwrap().get_requests.clone()
    }

    pub fn create_requests(&self) -> Vec<CreateSinkRequest> {
        self.state.lock().unwrap().create_requests.clone()
    }

    pub fn update_requests(&self) -> Vec<UpdateSinkRequest> {
        self.state.lock().unwrap().update_requests.clone()
    }

    pub fn delete_requests(&self) -> Vec<DeleteSinkRequest> {
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
impl ConfigRpc for MockedConfig {
    async fn list_sinks(&mut self, request: ListSinksRequest) -> Result<ListSinksResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let page_token = request.page_token.clone();
        state.list_requests.push(request);
        state.check()?;

        let (sinks, next_page_token) = state.listed.page(&page_token)?;

        Ok(ListSinksResponse {
            sinks,
            next_page_token,
        })
    }

    async fn get_sink(&mut self, request: GetSinkRequest) -> Result<LogSink, Status> {
        let mut state = self.state.lock().unwrap();
        let sink_name = request.sink_name.clone();
        state.get_requests.push(request);
        state.check()?;

        state
            .stored
            .get(&sink_name)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("sink `{sink_name}` does not exist")))
    }

    async fn create_sink(&mut self, request: CreateSinkRequest) -> Result<LogSink, Status> {
        let mut state = self.state.lock().unwrap();
        state.create_requests.push(request.clone());
        state.check()?;

        let mut sink = request
            .sink
            .ok_or_else(|| Status::invalid_argument("a sink is required"))?;
        let sink_name = format!("{}/sinks/{}", request.parent, sink.name);
        if state.stored.contains_key(&sink_name) {
            return Err(Status::already_exists(format!(
                "sink `{sink_name}` already exists"
            )));
        }

        if request.unique_writer_identity {
            sink.writer_identity = WRITER_IDENTITY.to_string();
        }
        state.stored.insert(sink_name, sink.clone());

        Ok(sink)
    }

    async fn update_sink(&mut self, request: UpdateSinkRequest) -> Result<LogSink, Status> {
        let mut state = self.state.lock().unwrap();
        state.update_requests.push(request.clone());
        state.check()?;

        let sink = request
            .sink
            .ok_or_else(|| Status::invalid_argument("a sink is required"))?;
        state.stored.insert(request.sink_name, sink.clone());

        Ok(sink)
    }

    async fn delete_sink(&mut self, request: DeleteSinkRequest) -> Result<(), Status> {
        let mut state = self.state.lock().unwrap();
        let sink_name = request.sink_name.clone();
        state.delete_requests.push(request);
        state.check()?;

        state
            .stored
            .remove(&sink_name)
            .map(|_| ())
            .ok_or_else(|| Status::not_found(format!("sink `{sink_name}` does not exist")))
    }
}
