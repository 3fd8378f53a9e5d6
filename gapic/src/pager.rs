use std::future::Future;

use futures::{stream, Stream};
use tracing::debug;

use crate::Error;

/// Paging options of the list calls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Stop after this many items. Negative values are rejected.
    pub max_results: Option<i64>,
    /// Items to ask for per page. The service picks a size when unset.
    pub page_size: Option<i32>,
    /// Resume listing from a token handed out by an earlier page
    pub page_token: Option<String>,
}

/// The number of items a listing may yield
pub(crate) fn item_limit(max_results: Option<i64>) -> Result<usize, Error> {
    match max_results {
        None => Ok(usize::MAX),
        Some(max_results) => usize::try_from(max_results).map_err(|_| {
            Error::InvalidArgument(format!(
                "max_results must not be negative, got {max_results}"
            ))
        }),
    }
}

/// One page of a list response
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    /// Empty on the last page
    pub(crate) next_page_token: String,
}

enum Cursor {
    Start(String),
    Next(String),
    Done,
}

/// Lazily walk the pages `fetch` returns, one item at a time
///
/// A page is only fetched once every item of the page before it was taken. The first
/// error ends the stream.
pub(crate) fn paginate<T, F, Fut>(
    page_token: Option<String>,
    fetch: F,
) -> impl Stream<Item = Result<T, Error>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, Error>>,
{
    let cursor = Cursor::Start(page_token.unwrap_or_default());

    stream::try_unfold(
        (cursor, Vec::new().into_iter(), fetch),
        |(mut cursor, mut buffered, mut fetch)| async move {
            loop {
                if let Some(item) = buffered.next() {
                    return Ok::<_, Error>(Some((item, (cursor, buffered, fetch))));
                }

                let page_token = match cursor {
                    Cursor::Start(page_token) => {
                        debug!(%page_token, "fetching first page");
                        page_token
                    }
                    Cursor::Next(page_token) => {
                        debug!(%page_token, "fetching next page");
                        page_token
                    }
                    Cursor::Done => return Ok(None),
                };

                let page = fetch(page_token).await?;

                cursor = if page.next_page_token.is_empty() {
                    Cursor::Done
                } else {
                    Cursor::Next(page.next_page_token)
                };
                buffered = page.items.into_iter();
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use futures::{StreamExt, TryStreamExt};
    use pretty_assertions::assert_eq;

    use super::*;

    fn pages(
        fetches: Arc<AtomicUsize>,
    ) -> impl Stream<Item = Result<u32, Error>> {
        paginate(None, move |page_token| {
            fetches.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok::<_, Error>(match page_token.as_str() {
                    "" => Page {
                        items: vec![1, 2],
                        next_page_token: "b".to_string(),
                    },
                    "b" => Page {
                        items: vec![],
                        next_page_token: "c".to_string(),
                    },
                    "c" => Page {
                        items: vec![3],
                        next_page_token: String::new(),
                    },
                    other => panic!("unexpected token {other}"),
                })
            }
        })
    }

    #[tokio::test]
    async fn walks_every_page() {
        let fetches = Arc::new(AtomicUsize::new(0));

        let items: Vec<_> = pages(fetches.clone()).try_collect().await.unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn fetches_lazily() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = pages(fetches.clone());
        assert_eq!(fetches.load(Ordering::SeqCst), 0);

        let items: Vec<_> = stream.take(2).try_collect().await.unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn starts_from_page_token() {
        let items: Vec<u32> = paginate(Some("start".to_string()), |page_token| async move {
            assert_eq!(page_token, "start");
            Ok::<_, Error>(Page {
                items: vec![7],
                next_page_token: String::new(),
            })
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let mut stream = Box::pin(paginate(None, |_| async {
            Err::<Page<u32>, _>(Error::Rpc(tonic::Status::unavailable("down")))
        }));

        assert!(matches!(stream.next().await, Some(Err(Error::Rpc(_)))));
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn item_limits() {
        assert_eq!(item_limit(None).unwrap(), usize::MAX);
        assert_eq!(item_limit(Some(0)).unwrap(), 0);
        assert_eq!(item_limit(Some(5)).unwrap(), 5);
        assert!(matches!(
            item_limit(Some(-1)),
            Err(Error::InvalidArgument(_))
        ));
    }
}
