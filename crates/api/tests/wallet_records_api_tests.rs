mod helpers;

use axum::http::StatusCode;
use helpers::{create_test_app, delete, get, send_json};
use serde_json::json;

#[tokio::test]
async fn test_wallet_record_lifecycle() {
    let (app, _pool) = create_test_app().await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/wallet-records",
        json!({ "user_id": 4, "amount": 1000, "type": 2, "name": "recharge" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], 2);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/wallet-records/{}", id),
        json!({ "remark": "manual fix" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["remark"], "manual fix");
    assert_eq!(body["amount"], 1000);

    let (status, body) = get(&app, &format!("/wallet-records/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "recharge");

    let (status, _) = delete(&app, &format!("/wallet-records/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&app, &format!("/wallet-records/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_user_and_amount() {
    let (app, _pool) = create_test_app().await;

    let (status, _) = send_json(&app, "POST", "/wallet-records", json!({ "amount": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_by_type() {
    let (app, _pool) = create_test_app().await;
    for record_type in [1, 2, 2] {
        send_json(
            &app,
            "POST",
            "/wallet-records",
            json!({ "user_id": 1, "amount": 10, "type": record_type }),
        )
        .await;
    }

    let (status, body) = get(&app, "/wallet-records?type=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert!(body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["type"] == 2));
}

#[tokio::test]
async fn test_health() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_list_with_huge_page_number() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = get(&app, "/wallet-records?nowPage=4294967295&pageSize=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["hasMore"], false);
}
