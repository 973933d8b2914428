use std::io;

use bytes::Bytes;
use futures::stream;

use docroute::application::ports::{StagingStore, StagingStoreError};
use docroute::domain::{DocumentId, StoragePath};
use docroute::infrastructure::storage::LocalStagingStore;

fn create_test_store() -> (tempfile::TempDir, LocalStagingStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_returns_total_size() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "invoice.txt");

    let chunks = vec![Ok(Bytes::from("Invoice ")), Ok(Bytes::from("#123"))];
    let size = store
        .store(&path, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    assert_eq!(size, 12);
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "receipt.txt");

    let content = b"Receipt total 19.99";
    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from(&content[..]))]));
    store.store(&path, byte_stream).await.unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "contract.pdf");

    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("data"))]));
    store.store(&path, byte_stream).await.unwrap();

    store.delete(&path).await.unwrap();

    let result = store.fetch(&path).await;
    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_stream_error_when_storing_then_returns_io_error() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "partial.txt");

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "network drop")),
    ];

    let result = store.store(&path, Box::pin(stream::iter(chunks))).await;
    assert!(matches!(result, Err(StagingStoreError::Io(_))));
}

#[tokio::test]
async fn given_nonexistent_path_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "missing.txt");

    let result = store.fetch(&path).await;
    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}
