//! Integration tests for `DocumentStoreClient` against a local store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{BIN_ID, MASTER_KEY, TestStore, sample_document};
use showcase_client::{DocumentStoreClient, Error, ProjectSource, StoreConfig};
use showcase_core::ProjectId;

#[tokio::test]
async fn test_fetch_reads_nested_products() {
    let store = TestStore::open(sample_document()).await;
    let client = DocumentStoreClient::new(StoreConfig::new(&store.base_url, BIN_ID)).unwrap();

    let doc = client
        .fetch_document()
        .await
        .expect("fetch should succeed");

    let products = doc.into_projects();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProjectId::Number(1));
    assert_eq!(products[0].images.len(), 2);
    assert_eq!(products[1].id, ProjectId::Text("42".into()));
    assert_eq!(store.hits(), 1);
}

#[tokio::test]
async fn test_fetch_sends_master_key() {
    let store = TestStore::with_key(sample_document()).await;
    let config = StoreConfig::new(&store.base_url, BIN_ID).with_master_key(MASTER_KEY);
    let client = DocumentStoreClient::new(config).unwrap();

    let doc = client.fetch_document().await.expect("key should be accepted");
    assert_eq!(doc.record.products.len(), 2);
}

#[tokio::test]
async fn test_fetch_without_key_is_rejected() {
    let store = TestStore::with_key(sample_document()).await;
    let client = DocumentStoreClient::new(StoreConfig::new(&store.base_url, BIN_ID)).unwrap();

    let err = client.fetch_document().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_fetch_with_wrong_key_is_rejected() {
    let store = TestStore::with_key(sample_document()).await;
    let config = StoreConfig::new(&store.base_url, BIN_ID).with_master_key("wrong");
    let client = DocumentStoreClient::new(config).unwrap();

    let err = client.fetch_document().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_unknown_bin_is_status_error() {
    let store = TestStore::open(sample_document()).await;
    let client = DocumentStoreClient::new(StoreConfig::new(&store.base_url, "other")).unwrap();

    let err = client.fetch_document().await.unwrap_err();
    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/other"));
        }
        other => unreachable!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_products_yields_empty_list() {
    let store = TestStore::open(serde_json::json!({"record": {}})).await;
    let client = DocumentStoreClient::new(StoreConfig::new(&store.base_url, BIN_ID)).unwrap();

    let doc = client.fetch_document().await.unwrap();
    assert!(doc.into_projects().is_empty());
}

#[tokio::test]
async fn test_malformed_products_is_http_decode_error() {
    let store = TestStore::open(serde_json::json!({"record": {"products": "nope"}})).await;
    let client = DocumentStoreClient::new(StoreConfig::new(&store.base_url, BIN_ID)).unwrap();

    let err = client.fetch_document().await.unwrap_err();
    let Error::Http(inner) = err else {
        unreachable!("expected HTTP decode error");
    };
    assert!(inner.is_decode());
}
