//! End-to-end try-on flow: search results worn on the mannequin, saved to
//! the collection, and refitted when the measurements change.

use fitroom::domain::ports::CollectionStore;
use fitroom::search::WebImageSearch;
use fitroom::{
    safe_document_id, MeasurementProfile, MemoryStore, SavedIdCache, SearchAggregator,
    TryOnSession,
};
use httpmock::prelude::*;

fn search_payload() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "title": "Floral Summer Dress",
                "link": "https://cdn.example.com/dress.jpg",
                "image": {
                    "thumbnailLink": "https://cdn.example.com/dress_thumb.jpg",
                    "contextLink": "https://shop.example.com/dress"
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_search_try_on_and_measurement_change() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(search_payload());
    });

    let aggregator = SearchAggregator::new(vec![Box::new(WebImageSearch::new(
        server.url("/search"),
        "key".to_string(),
        "cx".to_string(),
        10,
    ))]);

    let results = aggregator.search("summer dress").await;
    assert_eq!(results.len(), 1);
    let dress = &results[0];
    assert_eq!(dress.category, "dresses");

    // Profile A: worn dress picks up profile A's ratios.
    let profile_a = MeasurementProfile {
        bust: Some(81.0),
        hips: Some(85.5),
        ..Default::default()
    };
    let mut session = TryOnSession::new(profile_a);
    session.try_on(dress);

    let style_a = session.outfit().fitted("dresses").unwrap().style;
    assert_eq!(style_a.width_scale, (81.0 / 90.0 + 85.5 / 95.0) / 2.0);

    // Profile B: both bust and hips change; the refit must reflect only the
    // new ratios, with no trace of profile A.
    session.set_measurements(&MeasurementProfile {
        bust: Some(99.0),
        hips: Some(104.5),
        ..Default::default()
    });

    let style_b = session.outfit().fitted("dresses").unwrap().style;
    assert_eq!(style_b.width_scale, (99.0 / 90.0 + 104.5 / 95.0) / 2.0);
    assert_eq!(style_b.waist_width_scale, Some(1.0));
}

#[test]
fn test_worn_slot_replacement_and_removal() {
    let profile = MeasurementProfile::default();
    let mut session = TryOnSession::new(profile);

    let mut first = fitroom::ClothingItem {
        id: "top-1".to_string(),
        name: "White T-Shirt".to_string(),
        brand: "Essentials".to_string(),
        price: 19.99,
        category: "tops".to_string(),
        image_url: "https://example.com/tshirt.jpg".to_string(),
        thumbnail_url: None,
        description: None,
        color: None,
        size: None,
        source: fitroom::ItemSource::Catalog,
        style: fitroom::ScaleStyle::default(),
    };
    session.try_on(&first);

    first.id = "top-2".to_string();
    first.name = "Striped Shirt".to_string();
    session.try_on(&first);

    // same slot, replaced wholesale
    assert_eq!(session.outfit().len(), 1);
    assert_eq!(session.outfit().source("tops").unwrap().id, "top-2");

    let removed = session.remove("tops");
    assert_eq!(removed.unwrap().id, "top-2");
    assert!(session.outfit().is_empty());
}

#[tokio::test]
async fn test_saving_searched_items_to_the_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(search_payload());
    });

    let aggregator = SearchAggregator::new(vec![Box::new(WebImageSearch::new(
        server.url("/search"),
        "key".to_string(),
        "cx".to_string(),
        10,
    ))]);
    let store = MemoryStore::new(SavedIdCache::new());

    let results = aggregator.search("summer dress").await;
    for item in &results {
        store.add_item("demo-user", item.clone()).await.unwrap();
    }

    let saved = store.fetch_saved_items("demo-user").await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].item.id, "https://shop.example.com/dress");

    let ids = store.saved_item_ids("demo-user").await.unwrap();
    assert!(ids.contains(&safe_document_id("https://shop.example.com/dress")));
}
