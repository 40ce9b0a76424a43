use std::sync::Arc;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;

use super::{app_with, file_app, get, json_body, memory_app, send};
use crate::{FileStore, RecordService};

#[tokio::test]
async fn serves_a_past_day_from_disk() {
    let tmp = tempfile::TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(tmp.path()));

    let submitted_at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    RecordService::new(store.clone())
        .submit_at(submitted_at, "Wrote spec".into(), "45".into())
        .await
        .unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("2024-03/2024-03-01.log")).unwrap();
    assert_eq!(raw, "Wrote spec|45|2024-03-01 10:00:00\n");

    let response = send(&app_with(store), get("/api/records/2024-03-01")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "data": [{
                "content": "Wrote spec",
                "duration": "45",
                "timestamp": "2024-03-01 10:00:00",
            }],
            "date": "2024-03-01",
        })
    );
}

#[tokio::test]
async fn empty_day_returns_empty_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    let app = file_app(tmp.path());

    let response = send(&app, get("/api/records/2001-01-01")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "data": [], "date": "2001-01-01" })
    );
}

#[tokio::test]
async fn bad_date_is_400() {
    let app = memory_app();

    for uri in [
        "/api/records/not-a-date",
        "/api/records/2024-13-01",
        "/api/records/2024-3-1",
        "/api/records/+2024-03-01",
        "/api/records/%202024-03-01",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(response).await["error"], "invalid date format");
    }
}

#[tokio::test]
async fn unreadable_day_file_is_500() {
    let tmp = tempfile::TempDir::new().unwrap();
    // a directory where the day file should be
    std::fs::create_dir_all(tmp.path().join("2024-03/2024-03-01.log")).unwrap();
    let app = file_app(tmp.path());

    let response = send(&app, get("/api/records/2024-03-01")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["error"], "failed to load records");
}

#[tokio::test]
async fn today_reports_its_date() {
    let app = memory_app();

    let response = send(&app, get("/api/records")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let date = json["date"].as_str().unwrap();
    assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    assert_eq!(json["data"], json!([]));
}
