//! HTTP-level integration tests for operator endpoints: priority moves,
//! batch operations, printers, and the rates/settings configuration.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_order, get_admin, patch_json_admin, post_json, post_json_admin,
    put_json_admin,
};
use sqlx::PgPool;

async fn confirm(app: axum::Router, id: &str) {
    let response = post_json(
        app,
        &format!("/api/v1/orders/{id}/confirm-payment"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Priority moves
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn promote_moves_between_neighbors(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = create_order(app.clone(), 4).await;
    let second = create_order(app.clone(), 4).await;
    assert_eq!(first["priorityIndex"], 1000);
    assert_eq!(second["priorityIndex"], 2000);

    let second_id = second["id"].as_str().unwrap();
    let response = post_json_admin(
        app,
        &format!("/api/v1/orders/{second_id}/priority"),
        serde_json::json!({ "direction": "up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let moved = &body_json(response).await["data"];
    assert_eq!(moved["priorityIndex"], 1500);
    assert_eq!(moved["manualBoost"], true);
}

/// Promoting the head of the queue is a silent no-op, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn promote_at_the_head_is_a_noop(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = create_order(app.clone(), 4).await;
    let first_id = first["id"].as_str().unwrap();

    let response = post_json_admin(
        app,
        &format!("/api/v1/orders/{first_id}/priority"),
        serde_json::json!({ "direction": "up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let unmoved = &body_json(response).await["data"];
    assert_eq!(unmoved["priorityIndex"], first["priorityIndex"]);
    assert_eq!(unmoved["manualBoost"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn priority_on_unknown_order_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_admin(
        app,
        "/api/v1/orders/00000000-0000-0000-0000-000000000000/priority",
        serde_json::json!({ "direction": "down" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Batch operations
// ---------------------------------------------------------------------------

/// Unknown ids are silently skipped; the counts are the signal.
#[sqlx::test(migrations = "../db/migrations")]
async fn batch_cancel_reports_partial_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = create_order(app.clone(), 4).await;
    let second = create_order(app.clone(), 5).await;

    let response = post_json_admin(
        app.clone(),
        "/api/v1/orders/batch/cancel",
        serde_json::json!({
            "orderIds": [
                first["id"],
                second["id"],
                "00000000-0000-0000-0000-000000000000"
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let outcome = &body_json(response).await["data"];
    assert_eq!(outcome["requestedCount"], 3);
    assert_eq!(outcome["affectedCount"], 2);

    let first_id = first["id"].as_str().unwrap();
    let response = common::get(app, &format!("/api/v1/orders/{first_id}")).await;
    assert_eq!(body_json(response).await["data"]["status"], "Cancelled");
}

/// A batch status move only lands on rows in the valid predecessor state.
#[sqlx::test(migrations = "../db/migrations")]
async fn batch_update_skips_ineligible_rows(pool: PgPool) {
    let app = common::build_test_app(pool);

    let queued = create_order(app.clone(), 4).await;
    let pending = create_order(app.clone(), 5).await;
    confirm(app.clone(), queued["id"].as_str().unwrap()).await;

    let response = post_json_admin(
        app,
        "/api/v1/orders/batch/update",
        serde_json::json!({
            "orderIds": [queued["id"], pending["id"]],
            "fields": { "status": "Printing" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let outcome = &body_json(response).await["data"];
    assert_eq!(outcome["requestedCount"], 2);
    assert_eq!(outcome["affectedCount"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn batch_delete_removes_rows(pool: PgPool) {
    let app = common::build_test_app(pool);

    let order = create_order(app.clone(), 4).await;
    let id = order["id"].as_str().unwrap().to_string();

    let response = post_json_admin(
        app.clone(),
        "/api/v1/orders/batch/delete",
        serde_json::json!({ "orderIds": [order["id"]] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["affectedCount"], 1);

    let response = common::get(app, &format!("/api/v1/orders/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Order patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn refund_requires_a_paid_order(pool: PgPool) {
    let app = common::build_test_app(pool);

    let order = create_order(app.clone(), 4).await;
    let id = order["id"].as_str().unwrap().to_string();

    let response = patch_json_admin(
        app.clone(),
        &format!("/api/v1/orders/{id}"),
        serde_json::json!({ "paymentStatus": "refunded" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    confirm(app.clone(), &id).await;

    let response = patch_json_admin(
        app,
        &format!("/api/v1/orders/{id}"),
        serde_json::json!({ "paymentStatus": "refunded" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["paymentStatus"],
        "refunded"
    );
}

/// The unpaid -> paid move belongs exclusively to payment confirmation.
#[sqlx::test(migrations = "../db/migrations")]
async fn patch_cannot_mark_an_order_paid(pool: PgPool) {
    let app = common::build_test_app(pool);

    let order = create_order(app.clone(), 4).await;
    let id = order["id"].as_str().unwrap();

    let response = patch_json_admin(
        app,
        &format!("/api/v1/orders/{id}"),
        serde_json::json!({ "paymentStatus": "paid" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Printers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn printer_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json_admin(
        app.clone(),
        "/api/v1/printers",
        serde_json::json!({
            "name": "Canon iR-2625",
            "ppm": 25,
            "color": false,
            "duplex": true,
            "a4": true,
            "a3": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let printer = body_json(response).await["data"].clone();
    assert_eq!(printer["status"], "idle");
    let id = printer["id"].as_str().unwrap().to_string();

    let response = patch_json_admin(
        app.clone(),
        &format!("/api/v1/printers/{id}"),
        serde_json::json!({ "status": "printing", "progressPct": 40 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["status"], "printing");
    assert_eq!(updated["progressPct"], 40);

    let response = get_admin(app, "/api/v1/printers").await;
    let rows = body_json(response).await["data"].as_array().unwrap().clone();
    assert_eq!(rows.len(), 1);
}

// ---------------------------------------------------------------------------
// Rates and settings
// ---------------------------------------------------------------------------

/// A rates write invalidates the config cache, so the very next quote uses
/// the new prices instead of waiting out the TTL.
#[sqlx::test(migrations = "../db/migrations")]
async fn rates_update_applies_to_the_next_quote(pool: PgPool) {
    let app = common::build_test_app(pool);

    let before = create_order(app.clone(), 10).await;
    assert_eq!(before["priceTotal"], 10.0);

    let response = put_json_admin(
        app.clone(),
        "/api/v1/rates",
        serde_json::json!({
            "bwSingleA4": 2.0,
            "bwDuplexA4": 1.5,
            "colorSingleA4": 10.0,
            "colorDuplexA4": 8.0,
            "minCharge": 5.0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = create_order(app, 10).await;
    assert_eq!(after["priceTotal"], 20.0);

    // The earlier order's price stays frozen at submission-time rates.
    assert_eq!(before["priceTotal"], 10.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_round_trip_reclassifies_new_orders(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_admin(app.clone(), "/api/v1/settings").await;
    assert_eq!(response.status(), StatusCode::OK);
    let settings = body_json(response).await["data"].clone();
    assert_eq!(settings["thresholds"]["smallPages"], 15);

    let response = put_json_admin(
        app.clone(),
        "/api/v1/settings",
        serde_json::json!({
            "adminPassHash": settings["adminPassHash"],
            "thresholds": { "smallPages": 2, "chunkPages": 100, "agingMinutes": 12 }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // 4 pages is now above the small-page threshold.
    let order = create_order(app, 4).await;
    assert_eq!(order["queueType"], "bulk");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rates_require_admin_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/rates").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
