use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use qa_backend::{
    models::question::QuestionDraft,
    routes,
    store::{InMemoryStore, Store},
    AppState,
};

async fn setup_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = routes::router(AppState::new(Arc::new(store.clone())));
    (app, store)
}

async fn seed_question(store: &InMemoryStore, title: &str) -> i64 {
    store
        .save_question(QuestionDraft {
            id: None,
            title: title.into(),
            description: None,
        })
        .await
        .expect("seed question")
        .id
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

fn timestamp(value: &JsonValue, key: &str) -> DateTime<Utc> {
    value[key]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| panic!("missing timestamp {}", key))
}

fn ids(list: &JsonValue) -> Vec<i64> {
    list.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "First question").await;

    let (status, list) = send_json(&app, "GET", &format!("/questions/{}/answers", qid), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({ "text": "first" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["text"], "first");
    assert_eq!(created["questionId"], qid);
    let aid = created["id"].as_i64().expect("assigned id");
    assert!(timestamp(&created, "updatedAt") >= timestamp(&created, "createdAt"));

    let (status, list) = send_json(&app, "GET", &format!("/questions/{}/answers", qid), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![aid]);
    assert_eq!(list[0]["text"], "first");
}

#[tokio::test]
async fn client_supplied_fields_are_ignored_on_create() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;
    let other = seed_question(&store, "Other").await;

    let (status, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({
            "id": 4242,
            "text": "mine",
            "question": { "id": other },
            "questionId": other,
            "createdAt": "2000-01-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(created["id"], 4242);
    assert_eq!(created["questionId"], qid);
    assert!(timestamp(&created, "createdAt").timestamp() > 946_684_800);
}

#[tokio::test]
async fn update_replaces_text_and_refreshes_updated_at() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;
    let (_, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({ "text": "old" })),
    )
    .await;
    let aid = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/questions/{}/answers/{}", qid, aid),
        Some(json!({ "text": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], aid);
    assert_eq!(updated["text"], "new");
    assert_eq!(updated["questionId"], qid);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(timestamp(&updated, "updatedAt") > timestamp(&created, "updatedAt"));

    let (_, list) = send_json(&app, "GET", &format!("/questions/{}/answers", qid), None).await;
    assert_eq!(list[0]["text"], "new");
}

#[tokio::test]
async fn delete_then_repeat_is_not_found() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;
    let (_, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({ "text": "bye" })),
    )
    .await;
    let aid = created["id"].as_i64().unwrap();
    let uri = format!("/questions/{}/answers/{}", qid, aid);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, list) = send_json(&app, "GET", &format!("/questions/{}/answers", qid), None).await;
    assert!(!ids(&list).contains(&aid));
    assert!(store.question_exists(qid).await.unwrap());

    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Answer not found with id {}", aid));
}

#[tokio::test]
async fn writes_under_missing_question_are_not_found() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;
    let (_, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({ "text": "kept" })),
    )
    .await;
    let aid = created["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/questions/999/answers",
        Some(json!({ "text": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found with id 999");
    assert!(store.find_answers_by_question(999).await.unwrap().is_empty());

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/questions/999/answers/{}", aid),
        Some(json!({ "text": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found with id 999");

    let (status, body) = send_json(&app, "DELETE", &format!("/questions/999/answers/{}", aid), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found with id 999");

    let kept = store.find_answer(aid).await.unwrap().expect("answer untouched");
    assert_eq!(kept.text, "kept");
}

#[tokio::test]
async fn missing_answer_under_existing_question_names_answer() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/questions/{}/answers/77", qid),
        Some(json!({ "text": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Answer not found with id 77");

    let (status, body) = send_json(&app, "DELETE", &format!("/questions/{}/answers/77", qid), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Answer not found with id 77");
}

#[tokio::test]
async fn list_under_missing_question_is_empty() {
    let (app, _store) = setup_app().await;
    let (status, body) = send_json(&app, "GET", "/questions/999/answers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_or_null_text_is_rejected() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;
    let uri = format!("/questions/{}/answers", qid);

    for body in [json!({}), json!({ "text": null }), json!({ "text": "" })] {
        let (status, resp) = send_json(&app, "POST", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["error"].is_string());
    }
    assert!(store.find_answers_by_question(qid).await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_precedes_parent_check() {
    let (app, _store) = setup_app().await;
    let (status, _) = send_json(&app, "POST", "/questions/999/answers", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_ids_and_bodies_are_bad_requests() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;

    let (status, body) = send_json(&app, "GET", "/questions/abc/answers", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send_json(&app, "GET", "/questions/-4/answers", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/questions/{}/answers/12x", qid),
        Some(json!({ "text": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/questions/{}/answers", qid))
        .header("content-type", "application/json")
        .body(Body::from("{\"text\": "))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_does_not_check_answer_ownership() {
    let (app, store) = setup_app().await;
    let owner = seed_question(&store, "Owner").await;
    let other = seed_question(&store, "Other").await;
    let (_, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", owner),
        Some(json!({ "text": "old" })),
    )
    .await;
    let aid = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/questions/{}/answers/{}", other, aid),
        Some(json!({ "text": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["questionId"], owner);

    let (_, owner_list) = send_json(&app, "GET", &format!("/questions/{}/answers", owner), None).await;
    assert_eq!(ids(&owner_list), vec![aid]);
    let (_, other_list) = send_json(&app, "GET", &format!("/questions/{}/answers", other), None).await;
    assert_eq!(other_list, json!([]));
}

#[tokio::test]
async fn update_body_is_validated_before_parent_lookup() {
    let (app, store) = setup_app().await;

    for body in [json!({}), json!({ "text": null })] {
        let (status, resp) = send_json(&app, "PUT", "/questions/999/answers/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["error"].as_str().unwrap().contains("text must not be null"));
    }

    let qid = seed_question(&store, "Q").await;
    let (_, created) = send_json(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        Some(json!({ "text": "keep me" })),
    )
    .await;
    let aid = created["id"].as_i64().unwrap();

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/questions/{}/answers/{}", qid, aid),
        Some(json!({ "text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let stored = store.find_answer(aid).await.unwrap().expect("answer kept");
    assert_eq!(stored.text, "keep me");
}

#[tokio::test]
async fn delete_with_malformed_ids_is_bad_request() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;

    for uri in [
        format!("/questions/{}/answers/abc", qid),
        format!("/questions/{}/answers/0", qid),
        "/questions/0/answers/1".to_string(),
        "/questions/x/answers/1".to_string(),
    ] {
        let (status, body) = send_json(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn non_json_body_is_bad_request() {
    let (app, store) = setup_app().await;
    let qid = seed_question(&store, "Q").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/questions/{}/answers", qid),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/questions/{}/answers", qid))
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.find_answers_by_question(qid).await.unwrap().is_empty());
}
