mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_add_candidate_inserts_pending(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    let response = server
        .post("/")
        .json(&json!({
            "type": "add_candidate",
            "auth": common::TEST_ADMIN_KEY,
            "id": "c1",
            "name": "Вика",
            "photo": "https://example.com/p.jpg"
        }))
        .await;

    response.assert_status_ok();
    response.assert_text("Success");

    let (name, photo, approved) = common::candidate_row(&pool, "c1").await.unwrap();
    assert_eq!(name, "Вика");
    assert_eq!(photo, "https://example.com/p.jpg");
    assert_eq!(approved, "НЕТ");
}

#[sqlx::test]
async fn test_edit_resets_approval(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    server
        .post("/")
        .json(&json!({
            "type": "add_candidate",
            "auth": common::TEST_ADMIN_KEY,
            "id": "c1",
            "name": "Вика"
        }))
        .await
        .assert_status_ok();

    // Approved out of band between the two edits.
    sqlx::query("UPDATE candidates SET approved = 'ДА' WHERE id = 'c1'")
        .execute(&pool)
        .await
        .unwrap();

    server
        .post("/")
        .json(&json!({
            "type": "add_candidate",
            "auth": common::TEST_ADMIN_KEY,
            "id": "c1",
            "name": "Виктория",
            "photo": "new.jpg"
        }))
        .await
        .assert_status_ok();

    assert_eq!(common::count_candidates(&pool).await, 1);
    let (name, photo, approved) = common::candidate_row(&pool, "c1").await.unwrap();
    assert_eq!(name, "Виктория");
    assert_eq!(photo, "new.jpg");
    assert_eq!(approved, "НЕТ");
}

#[sqlx::test]
async fn test_wrong_auth_never_mutates(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    // Valid fields, bad key.
    let response = server
        .post("/")
        .json(&json!({
            "type": "add_candidate",
            "auth": "wrong",
            "id": "c1",
            "name": "Вика"
        }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_text("Forbidden: Wrong Auth Key");

    // Missing key entirely, invalid fields too; still forbidden first.
    let response = server
        .post("/")
        .json(&json!({ "type": "add_candidate" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    assert_eq!(common::count_candidates(&pool).await, 0);
}

#[sqlx::test]
async fn test_add_candidate_requires_id_and_name(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    let bodies = [
        json!({ "type": "add_candidate", "auth": common::TEST_ADMIN_KEY, "name": "Вика" }),
        json!({ "type": "add_candidate", "auth": common::TEST_ADMIN_KEY, "id": "c1" }),
        json!({ "type": "add_candidate", "auth": common::TEST_ADMIN_KEY, "id": "", "name": "Вика" }),
    ];

    for body in bodies {
        let response = server.post("/").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("Bad request");
    }

    assert_eq!(common::count_candidates(&pool).await, 0);
}
