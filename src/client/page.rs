//! Cursor pagination: queries, pages and continuations.
//!
//! Ponto paginates collections with opaque `before`/`after` cursors. A
//! [`Page`] carries its items, the returned paging metadata and enough
//! bound context (client handle, resolved collection path, requested
//! limit) to re-issue the request at either neighboring cursor. The
//! continuations are lazy and re-entrant: each call produces a fresh,
//! independent page rather than advancing shared iterator state.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ClientInner;
use crate::{Error, Result};

/// Inclusive bounds accepted for the `limit` paging parameter.
pub const LIMIT_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Paging parameters for a list operation.
///
/// `before` and `after` are mutually exclusive; when both are supplied,
/// `before` takes precedence and only it is forwarded.
///
/// # Example
///
/// ```
/// use ponto_rs::PageQuery;
///
/// let query = PageQuery::default().with_limit(20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Maximum number of items to return; must lie in [0, 100]
    pub limit: Option<i64>,
    /// Cursor: return items before this position
    pub before: Option<String>,
    /// Cursor: return items after this position
    pub after: Option<String>,
}

impl PageQuery {
    /// Set the page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the `before` cursor.
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `after` cursor.
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Validate and reduce to wire query parameters.
    ///
    /// Fails fast on an out-of-range limit; never reaches the network
    /// with invalid input.
    pub(crate) fn to_params(&self) -> Result<Vec<(&'static str, String)>> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit {
            if !LIMIT_RANGE.contains(&limit) {
                return Err(Error::Validation(format!(
                    "limit must be between 0 and 100, got {limit}"
                )));
            }
            params.push(("limit", limit.to_string()));
        }

        // before wins when both cursors are supplied
        match (&self.before, &self.after) {
            (Some(before), _) => params.push(("before", before.clone())),
            (None, Some(after)) => params.push(("after", after.clone())),
            (None, None) => {}
        }

        Ok(params)
    }
}

/// Paging metadata returned under `meta.paging` in list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct PagingMeta {
    /// Page size applied by the server
    #[serde(default)]
    pub limit: Option<i64>,
    /// Cursor of the item before this page, absent at the first page
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor of the item after this page, absent at the last page
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    paging: PagingMeta,
}

#[derive(Debug, Deserialize)]
struct CollectionDocument<T> {
    data: Vec<T>,
    meta: Meta,
}

/// One page of a paginated collection.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
/// use ponto_rs::PageQuery;
///
/// let page = client
///     .financial_institutions()
///     .list(PageQuery::default().with_limit(2))
///     .await?;
///
/// if let Some(next) = page.next().await? {
///     println!("second page has {} items", next.items.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Page<T> {
    /// Items in this page, in server order.
    pub items: Vec<T>,
    /// Paging metadata for this page.
    pub paging: PagingMeta,
    pub(crate) turner: PageTurner,
}

/// Bound context for re-issuing a page request at a neighboring cursor:
/// the client handle, the resolved collection path (parent ids already
/// interpolated) and the originally requested limit.
pub(crate) struct PageTurner {
    pub(crate) inner: Arc<ClientInner>,
    pub(crate) path: String,
    pub(crate) limit: Option<i64>,
}

impl Clone for PageTurner {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            path: self.path.clone(),
            limit: self.limit,
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Whether a `next()` continuation exists (the collection extends
    /// past this page).
    pub fn has_next(&self) -> bool {
        self.paging.after.is_some()
    }

    /// Whether a `previous()` continuation exists.
    pub fn has_previous(&self) -> bool {
        self.paging.before.is_some()
    }

    /// Fetch the next page, or `None` when this edge of the collection
    /// has been reached.
    ///
    /// Re-issues the bound request with the same limit and
    /// `after = meta.paging.after`. Re-entrant: calling it twice yields
    /// two independent fetches.
    pub async fn next(&self) -> Result<Option<Page<T>>> {
        match &self.paging.after {
            Some(after) => {
                let query = PageQuery {
                    limit: self.turner.limit,
                    before: None,
                    after: Some(after.clone()),
                };
                fetch_page(&self.turner.inner, &self.turner.path, query)
                    .await
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    /// Fetch the previous page, or `None` at the start of the collection.
    pub async fn previous(&self) -> Result<Option<Page<T>>> {
        match &self.paging.before {
            Some(before) => {
                let query = PageQuery {
                    limit: self.turner.limit,
                    before: Some(before.clone()),
                    after: None,
                };
                fetch_page(&self.turner.inner, &self.turner.path, query)
                    .await
                    .map(Some)
            }
            None => Ok(None),
        }
    }
}

impl<T> std::fmt::Debug for Page<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("items", &self.items)
            .field("paging", &self.paging)
            .finish()
    }
}

/// Generic paged GET against a resource collection.
///
/// Every list operation funnels through here; resource services are
/// thin bindings supplying the path and item type.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    inner: &Arc<ClientInner>,
    path: &str,
    query: PageQuery,
) -> Result<Page<T>> {
    let params = query.to_params()?;
    let document: CollectionDocument<T> = inner.get_with_query(path, &params).await?;

    Ok(Page {
        items: document.data,
        paging: document.meta.paging,
        turner: PageTurner {
            inner: inner.clone(),
            path: path.to_string(),
            limit: query.limit,
        },
    })
}

type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

impl PageTurner {
    fn fetch_after<T>(&self, after: String) -> BoxFuture<'static, Result<Page<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let inner = self.inner.clone();
        let path = self.path.clone();
        let query = PageQuery {
            limit: self.limit,
            before: None,
            after: Some(after),
        };
        Box::pin(async move { fetch_page(&inner, &path, query).await })
    }
}

impl<T> Page<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Consume the page into a stream over the remainder of the
    /// collection.
    ///
    /// Yields this page's items, then lazily follows `after` cursors
    /// until the collection is exhausted or a fetch fails. Unlike the
    /// `next()`/`previous()` continuations, the stream advances in one
    /// direction only.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use ponto_rs::PageQuery;
    ///
    /// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
    /// let page = client
    ///     .financial_institutions()
    ///     .list(PageQuery::default().with_limit(50))
    ///     .await?;
    ///
    /// let mut stream = page.into_stream();
    /// while let Some(institution) = stream.next().await {
    ///     println!("{}", institution?.attributes.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_stream(self) -> PageStream<T> {
        PageStream {
            items: self.items.into(),
            after: self.paging.after,
            turner: self.turner,
            pending: None,
        }
    }
}

/// A stream that lazily fetches pages along `after` cursors.
pub struct PageStream<T> {
    items: VecDeque<T>,
    after: Option<String>,
    turner: PageTurner,
    pending: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> Stream for PageStream<T>
where
    T: DeserializeOwned + Send + Unpin + 'static,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending = None;
                        this.items = page.items.into();
                        this.after = page.paging.after;

                        if this.items.is_empty() && this.after.is_none() {
                            return Poll::Ready(None);
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending = None;
                        this.after = None; // stop on error
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match this.after.take() {
                Some(after) => {
                    this.pending = Some(this.turner.fetch_after(after));
                    continue;
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PageStream<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_range_rejected() {
        let err = PageQuery::default().with_limit(101).to_params().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = PageQuery::default().with_limit(-1).to_params().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_limit_bounds_accepted() {
        assert!(PageQuery::default().with_limit(0).to_params().is_ok());
        assert!(PageQuery::default().with_limit(100).to_params().is_ok());
    }

    #[test]
    fn test_before_takes_precedence_over_after() {
        let params = PageQuery::default()
            .with_limit(10)
            .with_before("cur-b")
            .with_after("cur-a")
            .to_params()
            .unwrap();

        assert!(params.contains(&("before", "cur-b".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "after"));
    }

    #[test]
    fn test_empty_query_forwards_nothing() {
        assert!(PageQuery::default().to_params().unwrap().is_empty());
    }

    #[test]
    fn test_paging_meta_cursors_optional() {
        let meta: PagingMeta = serde_json::from_str(r#"{"limit": 2}"#).unwrap();
        assert_eq!(meta.limit, Some(2));
        assert!(meta.before.is_none());
        assert!(meta.after.is_none());
    }

    #[test]
    fn test_collection_document_shape() {
        let json = r#"{
            "data": [{"v": 1}, {"v": 2}],
            "meta": { "paging": { "limit": 2, "after": "cur-a" } }
        }"#;

        #[derive(Debug, Deserialize)]
        struct Item {
            v: i32,
        }

        let document: CollectionDocument<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(document.data.len(), 2);
        assert_eq!(document.meta.paging.after.as_deref(), Some("cur-a"));
    }
}
