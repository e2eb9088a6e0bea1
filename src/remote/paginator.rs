//! Pagination loop over one remote collection

use crate::remote::RemoteClient;
use crate::types::RawItem;
use tracing::{debug, warn};

/// Fetch every item of one collection, following `next` links until the
/// remote service stops supplying one
///
/// Pagination is strictly sequential: each page's URL comes from the
/// previous page's response. A fetch failure on any page ends pagination for
/// this collection; the items accumulated so far are kept and returned, the
/// failure is logged with collection context, and no error propagates. One
/// bad collection must never abort an aggregation spanning several.
pub async fn fetch_all_items(client: &RemoteClient, uid: &str) -> Vec<RawItem> {
    let mut items = Vec::new();
    let mut next_url = Some(client.config().listing_url(uid));
    let mut pages = 0usize;

    while let Some(url) = next_url {
        match client.fetch_page(uid, &url).await {
            Ok(page) => {
                pages += 1;
                items.extend(page.results);
                next_url = page.next;
            }
            Err(e) => {
                warn!(
                    uid = %uid,
                    url = %e.url(),
                    error = %e,
                    items_kept = items.len(),
                    "page fetch failed, stopping pagination for this collection"
                );
                break;
            }
        }
    }

    debug!(uid = %uid, pages, items = items.len(), "collection pagination finished");
    items
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoteConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RemoteClient {
        RemoteClient::new(RemoteConfig {
            endpoint: server.uri(),
            timeout_secs: 5,
            ..RemoteConfig::default()
        })
        .unwrap()
    }

    fn item(title: &str) -> serde_json::Value {
        json!({"value": {"title": title}})
    }

    #[tokio::test]
    async fn follows_next_links_and_concatenates_in_page_order() {
        let server = MockServer::start().await;

        // First page comes from the templated listing URL with limit=600
        Mock::given(method("GET"))
            .and(path("/api/v3/collection/UID1/items"))
            .and(query_param("limit", "600"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [item("a"), item("b")],
                "next": format!("{}/page2", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [item("c")],
                "next": format!("{}/page3", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [item("d")],
                "next": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = fetch_all_items(&client, "UID1").await;

        let titles: Vec<String> = items
            .iter()
            .map(|i| i.value.clone().unwrap().title.unwrap())
            .collect();
        assert_eq!(titles, ["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn stops_on_failure_but_keeps_accumulated_items() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/collection/UID1/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [item("kept")],
                "next": format!("{}/broken", server.uri())
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = fetch_all_items(&client, "UID1").await;

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].value.clone().unwrap().title.as_deref(),
            Some("kept")
        );
    }

    #[tokio::test]
    async fn failing_first_page_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/collection/BAD/items"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = fetch_all_items(&client, "BAD").await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn single_page_without_next_issues_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/collection/UID1/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [item("only")],
                "next": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = fetch_all_items(&client, "UID1").await;
        assert_eq!(items.len(), 1);
    }
}
