// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adapters for list RPCs.
//!
//! List RPCs return results in pages. Each response contains a token to fetch
//! the next page, an empty token means there are no more pages. The types in
//! this module turn a list RPC into a [Stream] of pages, or a [Stream] of the
//! items across all pages.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::collections::VecDeque;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page, returning the items it contains.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty if this is the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts list RPCs as defined by [AIP-4233](https://google.aip.dev/client-libraries/4233)
/// into a [futures::Stream] that can be iterated over in an async fashion.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let token = page.next_page_token();
                        let next = if token.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(token)
                        };
                        Some((Ok(page), next))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts this stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of the items across all the pages returned by a list RPC.
///
/// The stream yields one item at a time, fetching the next page only when
/// the current page is exhausted. An error fetching a page is yielded once,
/// and ends the stream.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let state = (pages, VecDeque::<T::PageItem>::new());
        let stream = unfold(state, |(mut pages, mut buffer)| async move {
            loop {
                if let Some(item) = buffer.pop_front() {
                    return Some((Ok(item), (pages, buffer)));
                }
                match pages.next().await {
                    None => return None,
                    Some(Err(e)) => return Some((Err(e), (pages, buffer))),
                    Some(Ok(page)) => buffer.extend(page.items()),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    type Fixture = Arc<Mutex<VecDeque<(String, crate::Result<TestResponse>)>>>;

    fn fixture(pages: Vec<(&str, crate::Result<TestResponse>)>) -> Fixture {
        Arc::new(Mutex::new(
            pages.into_iter().map(|(t, r)| (t.to_string(), r)).collect(),
        ))
    }

    fn paginator(seed: &str, fixture: Fixture) -> Paginator<TestResponse, Error> {
        let execute = move |token: String| {
            let (want, response) = fixture
                .lock()
                .unwrap()
                .pop_front()
                .expect("too many page requests");
            assert_eq!(token, want);
            async move { response }
        };
        Paginator::new(seed.to_string(), execute)
    }

    #[tokio::test]
    async fn pages() -> anyhow::Result<()> {
        let fixture = fixture(vec![
            ("token1", Ok(page(&["item1", "item2"], "token2"))),
            ("token2", Ok(page(&["item3"], ""))),
        ]);
        let mut stream = paginator("token1", fixture.clone());
        let mut got = Vec::new();
        while let Some(page) = stream.next().await {
            got.push(page?);
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].items, vec!["item1", "item2"]);
        assert_eq!(got[1].items, vec!["item3"]);
        assert!(fixture.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let fixture = fixture(vec![
            ("", Ok(page(&["item1", "item2"], "token2"))),
            ("token2", Ok(page(&[], "token3"))),
            ("token3", Ok(page(&["item3"], ""))),
        ]);
        let mut stream = paginator("", fixture).items();
        let mut got = Vec::new();
        while let Some(item) = stream.next().await {
            got.push(item?);
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let fixture = fixture(vec![
            ("", Ok(page(&["item1"], "token2"))),
            ("token2", Err(Error::io("broken pipe"))),
        ]);
        let mut stream = paginator("", fixture).items();
        let first = stream.next().await;
        assert!(matches!(first, Some(Ok(ref s)) if s == "item1"), "{first:?}");
        let second = stream.next().await;
        assert!(matches!(second, Some(Err(ref e)) if e.is_io()), "{second:?}");
        let third = stream.next().await;
        assert!(third.is_none(), "{third:?}");
    }

    #[tokio::test]
    async fn error_on_first_page() {
        let fixture = fixture(vec![("", Err(Error::io("broken pipe")))]);
        let mut stream = paginator("", fixture);
        let mut count = 0;
        while let Some(page) = stream.next().await {
            assert!(page.is_err(), "{page:?}");
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
