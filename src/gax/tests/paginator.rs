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

use futures::TryStreamExt;
use google_cloud_gax as gax;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::paginator::{PageableResponse, Paginator};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Default)]
struct ListFoosRequest {
    parent: String,
    page_token: String,
}

#[derive(Clone, Debug, Default)]
struct ListFoosResponse {
    foos: Vec<String>,
    next_page_token: String,
}

impl PageableResponse for ListFoosResponse {
    type PageItem = String;

    fn items(self) -> Vec<String> {
        self.foos
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

// Simulates a service returning pages keyed by page token.
#[derive(Clone, Debug, Default)]
struct FooService {
    pages: Arc<BTreeMap<String, ListFoosResponse>>,
    requests: Arc<Mutex<Vec<ListFoosRequest>>>,
}

impl FooService {
    fn new<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, ListFoosResponse)>,
    {
        Self {
            pages: Arc::new(pages.into_iter().map(|(k, v)| (k.to_string(), v)).collect()),
            requests: Arc::default(),
        }
    }

    async fn list(&self, req: ListFoosRequest) -> Result<ListFoosResponse> {
        let token = req.page_token.clone();
        self.requests.lock().unwrap().push(req);
        match self.pages.get(&token) {
            Some(page) => Ok(page.clone()),
            None => Err(Error::service(
                Status::default()
                    .set_code(Code::InvalidArgument)
                    .set_message(format!("unknown page token {token}")),
            )),
        }
    }

    fn paginator(&self, parent: &str) -> Paginator<ListFoosResponse, Error> {
        let service = self.clone();
        let parent = parent.to_string();
        Paginator::new(String::new(), move |token| {
            let service = service.clone();
            let request = ListFoosRequest {
                parent: parent.clone(),
                page_token: token,
            };
            async move { service.list(request).await }
        })
    }

    fn tokens(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.page_token.clone())
            .collect()
    }
}

fn page(foos: &[&str], next: &str) -> ListFoosResponse {
    ListFoosResponse {
        foos: foos.iter().map(|s| s.to_string()).collect(),
        next_page_token: next.to_string(),
    }
}

#[tokio::test]
async fn pages() -> anyhow::Result<()> {
    let service = FooService::new([
        ("", page(&["f1", "f2"], "t1")),
        ("t1", page(&[], "t2")),
        ("t2", page(&["f3"], "")),
    ]);
    let pages = service
        .paginator("projects/p")
        .try_collect::<Vec<_>>()
        .await?;
    let sizes = pages.iter().map(|p| p.foos.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![2, 0, 1]);
    assert_eq!(service.tokens(), vec!["", "t1", "t2"]);
    let parents = service
        .requests
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.parent.clone())
        .collect::<Vec<_>>();
    assert!(parents.iter().all(|p| p == "projects/p"), "{parents:?}");
    Ok(())
}

#[tokio::test]
async fn items_skip_empty_pages() -> anyhow::Result<()> {
    let service = FooService::new([
        ("", page(&["f1"], "t1")),
        ("t1", page(&[], "t2")),
        ("t2", page(&["f2", "f3"], "")),
    ]);
    let items = service
        .paginator("projects/p")
        .items()
        .try_collect::<Vec<_>>()
        .await?;
    assert_eq!(items, vec!["f1", "f2", "f3"]);
    Ok(())
}

#[tokio::test]
async fn error_ends_the_stream() {
    let service = FooService::new([("", page(&["f1"], "bad-token"))]);
    let mut items = service.paginator("projects/p").items();

    let first = items.next().await;
    assert!(matches!(first, Some(Ok(ref f)) if f == "f1"), "{first:?}");
    let err = match items.next().await {
        Some(Err(e)) => e,
        other => panic!("expected an error, got {other:?}"),
    };
    assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));
    assert!(items.next().await.is_none());
    assert_eq!(service.tokens(), vec!["", "bad-token"]);
}
