//! In-memory logging services for testing code built on the RPC seams
//!
//! Every mock records the requests it receives. Clones share their state, so a test
//! can keep a handle while the code under test owns (and clones) another one.
pub mod config;
pub mod logging;
pub mod metrics;

use tonic::{Code, Status};

pub use config::MockedConfig;
pub use logging::MockedLogging;
pub use metrics::MockedMetrics;

/// Items served a page at a time, each page pointing at the next one with a token
#[derive(Clone, Debug, Default)]
pub struct Pages<T> {
    pages: Vec<Vec<T>>,
}

impl<T: Clone> Pages<T> {
    pub fn new(pages: Vec<Vec<T>>) -> Self {
        Self { pages }
    }

    /// Token of the page at `index`. The first page has no token.
    pub fn token(index: usize) -> String {
        if index == 0 {
            String::new()
        } else {
            format!("page-{index}")
        }
    }

    /// The items of the page `page_token` points at, along with the token of the page
    /// after it. The last page has an empty next token.
    pub fn page(&self, page_token: &str) -> Result<(Vec<T>, String), Status> {
        let index = if page_token.is_empty() {
            0
        } else {
            page_token
                .strip_prefix("page-")
                .and_then(|index| index.parse::<usize>().ok())
                .filter(|index| *index < self.pages.len())
                .ok_or_else(|| {
                    Status::invalid_argument(format!("unknown page token `{page_token}`"))
                })?
        };

        let items = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = if index + 1 < self.pages.len() {
            Self::token(index + 1)
        } else {
            String::new()
        };

        Ok((items, next_page_token))
    }
}

/// A failure every call of a mock answers with
#[derive(Clone, Debug)]
pub(crate) struct Failure {
    code: Code,
    message: String,
}

impl Failure {
    pub(crate) fn new(status: &Status) -> Self {
        Self {
            code: status.code(),
            message: status.message().to_string(),
        }
    }

    pub(crate) fn status(&self) -> Status {
        Status::new(self.code, self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_chain_tokens() {
        let pages = Pages::new(vec![vec![1, 2], vec![3], vec![4]]);

        assert_eq!(pages.page("").unwrap(), (vec![1, 2], "page-1".to_string()));
        assert_eq!(pages.page("page-1").unwrap(), (vec![3], "page-2".to_string()));
        assert_eq!(pages.page("page-2").unwrap(), (vec![4], String::new()));
        assert_eq!(pages.page("page-3").unwrap_err().code(), Code::InvalidArgument);
    }

    #[test]
    fn no_pages() {
        let pages = Pages::<u8>::default();

        assert_eq!(pages.page("").unwrap(), (Vec::new(), String::new()));
    }
}
