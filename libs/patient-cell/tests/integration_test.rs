// =====================================================================================
// PATIENT CELL INTEGRATION TESTS - ROUTER + IN-MEMORY REPOSITORY
// =====================================================================================

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use patient_cell::{patient_routes, InMemoryPatientRepository, Patient, PatientState};
use shared_utils::test_utils::{response_json, TestConfig};

fn app_with(repo: InMemoryPatientRepository, config: TestConfig) -> Router {
    let state = PatientState::new(Arc::new(repo), config.to_arc());
    Router::new().nest("/api/v1/patients", patient_routes(state))
}

fn app() -> Router {
    app_with(InMemoryPatientRepository::new(), TestConfig::default())
}

fn stored(name: &str, cpf: i64) -> Patient {
    Patient {
        id: Uuid::new_v4(),
        name: name.to_string(),
        cpf,
        date_created: Utc::now(),
        doctor_id: None,
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_on_empty_store_is_ok() {
    let response = app()
        .oneshot(empty_request("GET", "/api/v1/patients"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/patients",
            json!({ "name": "Alice", "cpf": 12345678901_i64 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/api/v1/patients/{}", id));
    assert_eq!(created["name"], "Alice");
    assert!(created.get("dateCreated").is_some());

    let response = app.oneshot(empty_request("GET", &location)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);
}

#[tokio::test]
async fn test_create_duplicate_name_is_not_found_by_default() {
    let repo = InMemoryPatientRepository::with_patients(vec![stored("Alice", 1)]);
    let app = app_with(repo, TestConfig::default());

    let response = app
        .oneshot(json_request("POST", "/api/v1/patients", json!({ "name": "alice", "cpf": 2 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "The Patient already Exist");
}

#[tokio::test]
async fn test_create_duplicate_name_can_report_conflict() {
    let repo = InMemoryPatientRepository::with_patients(vec![stored("Alice", 1)]);
    let app = app_with(repo, TestConfig::conflict_on_duplicate());

    let response = app
        .oneshot(json_request("POST", "/api/v1/patients", json!({ "name": "Alice", "cpf": 2 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_rejects_missing_and_invalid_bodies() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/v1/patients"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/patients", json!({ "name": "", "cpf": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["errors"]["name"].is_array());

    let response = app
        .oneshot(json_request("POST", "/api/v1/patients", json!({ "cpf": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whitespace_name_is_rejected() {
    let existing = stored("Alice", 1);
    let app = app_with(
        InMemoryPatientRepository::with_patients(vec![existing.clone()]),
        TestConfig::default(),
    );

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/patients", json!({ "name": "   ", "cpf": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["errors"]["name"].is_array());

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/api/v1/patients",
            json!({ "id": existing.id, "name": "\t ", "cpf": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!("/api/v1/patients/{}", existing.id);
    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response_json(response).await["name"], "Alice");
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let uri = format!("/api/v1/patients/{}", Uuid::new_v4());
    let response = app().oneshot(empty_request("GET", &uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_unroutable_key_is_not_found() {
    let response = app()
        .oneshot(empty_request("GET", "/api/v1/patients/not-an-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_by_cpf() {
    let repo = InMemoryPatientRepository::with_patients(vec![
        stored("Alice", 555),
        stored("Bob", 555),
        stored("Carol", 777),
    ]);
    let app = app_with(repo, TestConfig::default());

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/patients/555"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let matches = response_json(response).await;
    assert_eq!(matches.as_array().map(Vec::len), Some(2));

    for uri in ["/api/v1/patients/999", "/api/v1/patients/0", "/api/v1/patients/-555"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_update_replaces_mutable_fields() {
    let original = stored("Alice", 1);
    let repo = InMemoryPatientRepository::with_patients(vec![original.clone()]);
    let app = app_with(repo, TestConfig::default());

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/api/v1/patients",
            json!({ "id": original.id, "name": "Alice Smith", "cpf": 9 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let uri = format!("/api/v1/patients/{}", original.id);
    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["name"], "Alice Smith");
    assert_eq!(body["cpf"], 9);
    assert_eq!(body["dateCreated"], json!(original.date_created));
}

#[tokio::test]
async fn test_update_null_body_is_bad_request() {
    let response = app()
        .oneshot(json_request("PATCH", "/api/v1/patients", Value::Null))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_patient_is_server_error() {
    let response = app()
        .oneshot(json_request(
            "PATCH",
            "/api/v1/patients",
            json!({ "id": Uuid::new_v4(), "name": "Nobody", "cpf": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Something went wrong when you trying to updating Nobody");
}

#[tokio::test]
async fn test_delete_lifecycle() {
    let patient = stored("Alice", 1);
    let repo = InMemoryPatientRepository::with_patients(vec![patient.clone()]);
    let app = app_with(repo, TestConfig::default());
    let uri = format!("/api/v1/patients/{}", patient.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_with_non_uuid_is_not_found() {
    let response = app()
        .oneshot(empty_request("DELETE", "/api/v1/patients/12345"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
