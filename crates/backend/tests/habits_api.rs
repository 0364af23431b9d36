mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use chrono::{DateTime, Utc};
use serde_json::json;

use common::*;

fn updated_at(body: &serde_json::Value) -> DateTime<Utc> {
    serde_json::from_value(body["updatedAtUtc"].clone()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = get(&app, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_read_patch_delete_flow() {
    let app = test_app().await;

    let created = post(
        &app,
        "/habits",
        json!({
            "name": "Read",
            "description": null,
            "type": "Binary",
            "frequency": { "type": "Daily", "timesPerPeriod": 1 },
            "target": { "value": 1, "unit": "book" }
        }),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("h_"));
    assert_eq!(created.location.as_deref(), Some(format!("/habits/{}", id).as_str()));
    assert_eq!(created.body["status"], "Ongoing");
    assert_eq!(created.body["isArchived"], false);
    assert_eq!(created.body["createdAtUtc"], created.body["updatedAtUtc"]);

    let fetched = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Read");
    assert_eq!(fetched.body["target"]["unit"], "book");
    assert_eq!(fetched.body["tags"], json!([]));

    let patched = patch(
        &app,
        &format!("/habits/{}", id),
        json!([{ "op": "replace", "path": "/description", "value": "20 pages" }]),
    )
    .await;
    assert_eq!(patched.status, StatusCode::NO_CONTENT);
    assert_eq!(patched.body, serde_json::Value::Null);

    let fetched = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(fetched.body["description"], "20 pages");

    let deleted = delete(&app, &format!("/habits/{}", id)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_collection_in_creation_order() {
    let app = test_app().await;

    let empty = get(&app, "/habits").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!({ "items": [] }));

    create_habit(&app, "First").await;
    create_habit(&app, "Second").await;

    let list = get(&app, "/habits").await;
    let names: Vec<&str> = list.body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["First", "Second"]);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = test_app().await;

    assert_eq!(get(&app, "/habits/h_missing").await.status, StatusCode::NOT_FOUND);

    let update = put(
        &app,
        "/habits/h_missing",
        json!({
            "name": "Run",
            "type": "Binary",
            "frequency": { "type": "Daily", "timesPerPeriod": 1 }
        }),
    )
    .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let patched = patch(
        &app,
        "/habits/h_missing",
        json!([{ "op": "replace", "path": "/name", "value": "Run" }]),
    )
    .await;
    assert_eq!(patched.status, StatusCode::NOT_FOUND);
    assert_eq!(patched.content_type.as_deref(), Some("application/problem+json"));
    assert_eq!(patched.body["status"], 404);
}

#[tokio::test]
async fn test_create_reports_every_violated_rule() {
    let app = test_app().await;

    let response = post(
        &app,
        "/habits",
        json!({
            "name": "",
            "description": "d".repeat(501),
            "type": "Binary",
            "frequency": { "type": "Daily", "timesPerPeriod": 0 }
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.content_type.as_deref(), Some("application/problem+json"));
    let errors = response.body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("description"));
    assert!(errors.contains_key("frequency.timesPerPeriod"));

    let list = get(&app, "/habits").await;
    assert_eq!(list.body["items"], json!([]));
}

#[tokio::test]
async fn test_full_update_replaces_fields_and_keeps_status() {
    let app = test_app().await;
    let id = create_habit(&app, "Run").await;

    let response = put(
        &app,
        &format!("/habits/{}", id),
        json!({
            "name": "Run far",
            "description": "5k",
            "type": "Measurable",
            "frequency": { "type": "Weekly", "timesPerPeriod": 3 },
            "target": { "value": 5, "unit": "km" },
            "endDate": "2030-01-01",
            "milestone": { "target": 100 }
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(fetched.body["name"], "Run far");
    assert_eq!(fetched.body["type"], "Measurable");
    assert_eq!(fetched.body["frequency"], json!({ "type": "Weekly", "timesPerPeriod": 3 }));
    assert_eq!(fetched.body["endDate"], "2030-01-01");
    assert_eq!(fetched.body["milestone"], json!({ "target": 100, "current": 0 }));
    assert_eq!(fetched.body["status"], "Ongoing");

    let invalid = put(
        &app,
        &format!("/habits/{}", id),
        json!({
            "name": "",
            "type": "Binary",
            "frequency": { "type": "Daily", "timesPerPeriod": 1 }
        }),
    )
    .await;
    assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fetched = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(fetched.body["name"], "Run far");
}

#[tokio::test]
async fn test_patch_persists_only_name_and_description() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;
    let before = get(&app, &format!("/habits/{}", id)).await;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = patch(
        &app,
        &format!("/habits/{}", id),
        json!([
            { "op": "replace", "path": "/name", "value": "Read more" },
            { "op": "replace", "path": "/status", "value": "Completed" },
            { "op": "replace", "path": "/isArchived", "value": true }
        ]),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let after = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(after.body["name"], "Read more");
    assert_eq!(after.body["status"], "Ongoing");
    assert_eq!(after.body["isArchived"], false);
    assert_eq!(after.body["createdAtUtc"], before.body["createdAtUtc"]);
    assert!(updated_at(&after.body) > updated_at(&before.body));
}

#[tokio::test]
async fn test_patch_to_invalid_candidate_changes_nothing() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;
    let before = get(&app, &format!("/habits/{}", id)).await;

    let response = patch(
        &app,
        &format!("/habits/{}", id),
        json!([{ "op": "replace", "path": "/name", "value": "" }]),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"]["name"].is_array());

    let after = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(after.body, before.body);
}

#[tokio::test]
async fn test_patch_is_atomic_across_operations() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;

    let response = patch(
        &app,
        &format!("/habits/{}", id),
        json!([
            { "op": "replace", "path": "/name", "value": "Changed" },
            { "op": "replace", "path": "/doesNotExist", "value": 1 }
        ]),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"]["/doesNotExist"].is_array());

    let after = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(after.body["name"], "Read");
}

#[tokio::test]
async fn test_patch_with_malformed_document_is_validation_error() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/habits/{}", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"op":"replace"}"#))
        .unwrap();
    let response = send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"]["patch"].is_array());
}

#[tokio::test]
async fn test_failed_test_operation_rejects_patch() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;

    let response = patch(
        &app,
        &format!("/habits/{}", id),
        json!([
            { "op": "test", "path": "/name", "value": "Write" },
            { "op": "replace", "path": "/name", "value": "Write more" }
        ]),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let after = get(&app, &format!("/habits/{}", id)).await;
    assert_eq!(after.body["name"], "Read");
}

#[tokio::test]
async fn test_delete_absent_habit_is_gone() {
    let app = test_app().await;
    let id = create_habit(&app, "Read").await;

    assert_eq!(
        delete(&app, &format!("/habits/{}", id)).await.status,
        StatusCode::NO_CONTENT
    );

    let again = delete(&app, &format!("/habits/{}", id)).await;
    assert_eq!(again.status, StatusCode::GONE);
    assert_eq!(again.body["detail"], "Habit was removed from the system.");

    let never = delete(&app, "/habits/h_never_existed").await;
    assert_eq!(never.status, StatusCode::GONE);
    assert_eq!(never.body["detail"], "Habit was removed from the system.");
}

#[tokio::test]
async fn test_unreadable_create_body_is_problem_json() {
    let app = test_app().await;

    let response = post(
        &app,
        "/habits",
        json!({ "type": "Binary", "frequency": { "type": "Daily", "timesPerPeriod": 1 } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.content_type.as_deref(), Some("application/problem+json"));
    assert_eq!(response.body["status"], 422);
    assert!(response.body["errors"]["body"].is_array());
}

#[tokio::test]
async fn test_update_with_unreadable_body_checks_id_first() {
    let app = test_app().await;

    let missing = put(&app, "/habits/h_missing", json!({ "name": "x" })).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.content_type.as_deref(), Some("application/problem+json"));

    let id = create_habit(&app, "Read").await;
    let existing = put(&app, &format!("/habits/{}", id), json!({ "name": "x" })).await;
    assert_eq!(existing.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(existing.content_type.as_deref(), Some("application/problem+json"));
    assert!(existing.body["errors"]["body"].is_array());

    let malformed_patch = patch(&app, "/habits/h_missing", json!({ "op": "replace" })).await;
    assert_eq!(malformed_patch.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generic_habit_type_is_stored_as_binary() {
    let app = test_app().await;

    let created = post(
        &app,
        "/habits",
        json!({
            "name": "Read",
            "type": "Habit",
            "frequency": { "type": "Daily", "timesPerPeriod": 1 }
        }),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["type"], "Binary");
}
