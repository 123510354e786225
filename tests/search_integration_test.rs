//! Aggregator behavior against real HTTP servers.

use fitroom::search::{PinterestSearch, WebImageSearch};
use fitroom::{ItemSource, SearchAggregator};
use httpmock::prelude::*;

fn web_payload() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "title": "Floral Summer Dress",
                "link": "https://cdn.example.com/dress.jpg",
                "image": {
                    "thumbnailLink": "https://cdn.example.com/dress_thumb.jpg",
                    "contextLink": "https://shop.example.com/dress"
                }
            },
            {
                "title": "Slim Fit Jeans",
                "link": "https://cdn.example.com/jeans.jpg",
                "image": {
                    "thumbnailLink": "https://cdn.example.com/jeans_thumb.jpg",
                    "contextLink": "https://shop.example.com/jeans"
                }
            }
        ]
    })
}

fn pinterest_payload() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "id": "pin-1",
                "title": "Denim Jacket Street Style",
                "images": {
                    "736x": {"url": "https://i.pinimg.com/736x/jacket.jpg"},
                    "236x": {"url": "https://i.pinimg.com/236x/jacket.jpg"}
                }
            }
        ]
    })
}

fn aggregator(web_url: String, pinterest_url: String) -> SearchAggregator {
    SearchAggregator::new(vec![
        Box::new(WebImageSearch::new(
            web_url,
            "key".to_string(),
            "cx".to_string(),
            10,
        )),
        Box::new(PinterestSearch::new(pinterest_url, "token".to_string())),
    ])
}

#[tokio::test]
async fn test_both_providers_contribute_results() {
    let web_server = MockServer::start();
    let pinterest_server = MockServer::start();

    let web_mock = web_server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(web_payload());
    });
    let pinterest_mock = pinterest_server.mock(|when, then| {
        when.method(GET).path("/pins");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pinterest_payload());
    });

    let results = aggregator(web_server.url("/search"), pinterest_server.url("/pins"))
        .search("denim")
        .await;

    web_mock.assert();
    pinterest_mock.assert();
    assert_eq!(results.len(), 3);
    assert_eq!(
        results
            .iter()
            .filter(|item| item.source == ItemSource::Web)
            .count(),
        2
    );
    assert_eq!(
        results
            .iter()
            .filter(|item| item.source == ItemSource::Pinterest)
            .count(),
        1
    );

    // categories come from the shared inference table
    let categories: Vec<&str> = results.iter().map(|item| item.category.as_str()).collect();
    assert!(categories.contains(&"dresses"));
    assert!(categories.contains(&"bottoms"));
    assert!(categories.contains(&"outerwear"));
}

#[tokio::test]
async fn test_one_failing_provider_does_not_sink_the_search() {
    let web_server = MockServer::start();
    let pinterest_server = MockServer::start();

    web_server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(500);
    });
    pinterest_server.mock(|when, then| {
        when.method(GET).path("/pins");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pinterest_payload());
    });

    let results = aggregator(web_server.url("/search"), pinterest_server.url("/pins"))
        .search("denim")
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, ItemSource::Pinterest);
}

#[tokio::test]
async fn test_all_providers_failing_gives_empty_results() {
    let web_server = MockServer::start();
    let pinterest_server = MockServer::start();

    web_server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(500);
    });
    pinterest_server.mock(|when, then| {
        when.method(GET).path("/pins");
        then.status(401);
    });

    let results = aggregator(web_server.url("/search"), pinterest_server.url("/pins"))
        .search("denim")
        .await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_blank_query_makes_no_requests() {
    let web_server = MockServer::start();
    let pinterest_server = MockServer::start();

    let web_mock = web_server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(web_payload());
    });
    let pinterest_mock = pinterest_server.mock(|when, then| {
        when.method(GET).path("/pins");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pinterest_payload());
    });

    let results = aggregator(web_server.url("/search"), pinterest_server.url("/pins"))
        .search("   ")
        .await;

    assert!(results.is_empty());
    web_mock.assert_hits(0);
    pinterest_mock.assert_hits(0);
}
