mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_vote_saves_new_row(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": 4.5, "userEmail": "a@b.c" }))
        .await;

    response.assert_status_ok();
    response.assert_text("Vote saved");
    assert_eq!(common::count_votes_for(&pool, "c1", "a@b.c").await, 1);
}

#[sqlx::test]
async fn test_revote_is_last_write_wins(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": 2, "userEmail": "a@b.c" }))
        .await
        .assert_text("Vote saved");

    let response = server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": 5, "userEmail": "a@b.c" }))
        .await;
    response.assert_status_ok();
    response.assert_text("Vote updated");

    let rows = common::vote_rows(&pool).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ("c1".to_string(), 5.0, "a@b.c".to_string()));
}

#[sqlx::test]
async fn test_distinct_emails_get_distinct_rows(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    for email in ["a@b.c", "x@y.z", "third@mail.ru"] {
        server
            .post("/")
            .json(&json!({ "type": "vote", "targetId": "c1", "rating": 3, "userEmail": email }))
            .await
            .assert_text("Vote saved");
    }

    assert_eq!(common::count_votes(&pool).await, 3);
}

#[sqlx::test]
async fn test_vote_without_email_uses_guest_identity(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": 4 }))
        .await
        .assert_status_ok();

    assert_eq!(common::count_votes_for(&pool, "c1", "Гость").await, 1);

    // A second anonymous vote hits the same guest identity and updates.
    server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": 1 }))
        .await
        .assert_text("Vote updated");
    assert_eq!(common::count_votes(&pool).await, 1);
}

#[sqlx::test]
async fn test_vote_accepts_numeric_string_rating(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    server
        .post("/")
        .json(&json!({ "type": "vote", "targetId": "c1", "rating": "4.5", "userEmail": "a@b.c" }))
        .await
        .assert_status_ok();

    let rows = common::vote_rows(&pool).await;
    assert_eq!(rows[0].1, 4.5);
}

#[sqlx::test]
async fn test_vote_rejects_missing_or_bad_fields(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool.clone())).unwrap();

    let bodies = [
        json!({ "type": "vote", "rating": 4 }),
        json!({ "type": "vote", "targetId": "", "rating": 4 }),
        json!({ "type": "vote", "targetId": "c1" }),
        json!({ "type": "vote", "targetId": "c1", "rating": "abc" }),
        // JS `Number()` would turn these into a zero-score vote; here
        // they are rejected like any other unparseable rating.
        json!({ "type": "vote", "targetId": "c1", "rating": null }),
        json!({ "type": "vote", "targetId": "c1", "rating": "" }),
    ];

    for body in bodies {
        let response = server.post("/").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("Bad request");
    }

    assert_eq!(common::count_votes(&pool).await, 0);
}
