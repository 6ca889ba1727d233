use crate::shell::config::{AppConfig, EVENTS_FILE_VAR};
use crate::shell::state::AppState;
use crate::shell::{app, load_event_store};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn get_events(router: axum::Router) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn serves_the_configured_dataset_unchanged() {
    let dataset = json!([
        {"id": 1, "title": "Book swap", "date": "2026-11-14"},
        {"id": 2, "title": "Winter market", "date": "2026-12-12", "stalls": 40}
    ]);
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), dataset.to_string()).unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let config =
        AppConfig::from_lookup(|key| (key == EVENTS_FILE_VAR).then(|| path.clone())).unwrap();

    let store = Arc::new(
        load_event_store(config.event_source().as_ref())
            .await
            .unwrap(),
    );
    let initial = store.as_slice().to_vec();
    let router = app(AppState::new(store.clone()));

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let (status, body) = get_events(router.clone()).await;
        assert_eq!(status, StatusCode::OK);
        bodies.push(body);
    }

    assert!(bodies.iter().all(|body| body == &dataset));
    assert_eq!(store.as_slice(), initial.as_slice());
}

#[tokio::test]
async fn serves_an_empty_dataset_as_an_empty_list() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[]").unwrap();
    let config = AppConfig {
        events_file: Some(file.path().to_path_buf()),
        ..AppConfig::default()
    };

    let store = load_event_store(config.event_source().as_ref())
        .await
        .unwrap();
    let (status, body) = get_events(app(AppState::new(Arc::new(store)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn serves_the_embedded_dataset_by_default() {
    let store = load_event_store(AppConfig::default().event_source().as_ref())
        .await
        .unwrap();

    let (status, body) = get_events(app(AppState::new(Arc::new(store)))).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].clone())
        .collect();
    assert_eq!(
        titles,
        vec![
            json!("Community garden clean-up"),
            json!("Book swap"),
            json!("Neighbourhood council meeting"),
            json!("Winter market"),
        ]
    );
}
