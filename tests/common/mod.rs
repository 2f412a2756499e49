#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use urlshort::application::services::UrlService;
use urlshort::domain::entities::UrlRecord;
use urlshort::infrastructure::persistence::InMemoryRecordStore;
use urlshort::routes::api_router;
use urlshort::state::AppState;

pub fn create_test_state() -> (AppState, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    let url_service = Arc::new(UrlService::new(store.clone()));

    (AppState::new(url_service), store)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryRecordStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(api_router(state)).unwrap();

    (server, store)
}

pub async fn create_record_at(
    store: &InMemoryRecordStore,
    url: &str,
    code: &str,
    created_at: DateTime<Utc>,
) -> UrlRecord {
    store.insert_at(url, code, created_at).await.unwrap()
}
