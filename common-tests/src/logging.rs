use std::sync::{Arc, Mutex};

use cloud_logging_proto::logging::{
    DeleteLogRequest, ListLogEntriesRequest, ListLogEntriesResponse, LogEntry, LoggingRpc,
    WriteLogEntriesRequest, WriteLogEntriesResponse,
};
use tonic::{async_trait, Status};

use crate::{Failure, Pages};

#[derive(Default)]
struct State {
    entries: Pages<LogEntry>,
    failure: Option<Failure>,
    list_requests: Vec<ListLogEntriesRequest>,
    write_requests: Vec<WriteLogEntriesRequest>,
    delete_requests: Vec<DeleteLogRequest>,
}

/// Logging service serving fixed pages of entries
#[derive(Clone, Default)]
pub struct MockedLogging {
    state: Arc<Mutex<State>>,
}

impl MockedLogging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: Vec<Vec<LogEntry>>) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().entries = Pages::new(pages);

        mocked
    }

    /// Answer every call with `status`
    pub fn failing(status: Status) -> Self {
        let mocked = Self::default();
        mocked.state.lock().unwrap().failure = Some(Failure::new(&status));

        mocked
    }

    pub fn list_requests(&self) -> Vec<ListLogEntriesRequest> {
        self.state.lock().unwrap().list_requests.clone()
    }

    pub fn write_requests(&self) -> Vec<WriteLogEntriesRequest> {
        self.state.lock().unwrap().write_requests.clone()
    }

    pub fn delete_requests(&self) -> Vec<DeleteLogRequest> {
        self.state.lock().unwrap().delete_requests.clone()
    }

    /// Number of calls received, of any kind
    pub fn calls(&self) -> usize {
        let state = self.state.lock().unwrap();

        state.list_requests.len() + state.write_requests.len() + state.delete_requests.len()
    }
}

#[async_trait]
impl LoggingRpc for MockedLogging {
    async fn list_log_entries(
        &mut self,
        request: ListLogEntriesRequest,
    ) -> Result<ListLogEntriesResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let page_token = request.page_token.clone();
        state.list_requests.push(request);

        if let Some(failure) = &state.failure {
            return Err(failure.status());
        }

        let (entries, next_page_token) = state.entries.page(&page_token)?;

        Ok(ListLogEntriesResponse {
            entries,
            next_page_token,
        })
    }

    async fn write_log_entries(
        &mut self,
        request: WriteLogEntriesRequest,
    ) -> Result<WriteLogEntriesResponse, Status> {
        let mut state = self.state.lock().unwrap();
        state.write_requests.push(request);

        match &state.failure {
            Some(failure) => Err(failure.status()),
            None => Ok(WriteLogEntriesResponse {}),
        }
    }

    async fn delete_log(&mut self, request: DeleteLogRequest) -> Result<(), Status> {
        let mut state = self.state.lock().unwrap();
        state.delete_requests.push(request);

        match &state.failure {
            Some(failure) => Err(failure.status()),
            None => Ok(()),
        }
    }
}
