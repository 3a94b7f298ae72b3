mod common;

use axum::http::StatusCode;
use common::{
    DRAFT_ID, GRADED_ID, SUBMITTED_TO_T1_ID, SUBMITTED_TO_T2_ID, app, principal_header,
    seeded_store, send,
};
use serde_json::json;

#[tokio::test]
async fn test_list_assignments_submitted_to_teacher() {
    let store = seeded_store().await;
    let header = principal_header(1);

    let (status, body) = send(app(&store), "GET", "/teacher/assignments", Some(&header), None).await;

    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    ids.sort();
    assert_eq!(ids, vec![SUBMITTED_TO_T1_ID, GRADED_ID]);
}

#[tokio::test]
async fn test_grade_own_submission() {
    let store = seeded_store().await;
    let header = principal_header(1);

    let (status, body) = send(
        app(&store),
        "POST",
        "/teacher/assignments/grade",
        Some(&header),
        Some(json!({"id": SUBMITTED_TO_T1_ID, "grade": " A- "})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "GRADED");
    assert_eq!(body["data"]["grade"], "A-");
}

#[tokio::test]
async fn test_grade_other_teachers_submission_is_forbidden() {
    let store = seeded_store().await;
    let header = principal_header(1);

    let (status, body) = send(
        app(&store),
        "POST",
        "/teacher/assignments/grade",
        Some(&header),
        Some(json!({"id": SUBMITTED_TO_T2_ID, "grade": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "AssignmentOwnershipError");
    assert!(store.assignment(SUBMITTED_TO_T2_ID).await.unwrap().grade.is_none());
}

#[tokio::test]
async fn test_grade_draft_is_forbidden() {
    let store = seeded_store().await;
    let header = principal_header(1);

    let (status, body) = send(
        app(&store),
        "POST",
        "/teacher/assignments/grade",
        Some(&header),
        Some(json!({"id": DRAFT_ID, "grade": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "AssignmentOwnershipError");
}

#[tokio::test]
async fn test_grade_without_content_type() {
    let store = seeded_store().await;
    let header = principal_header(1);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/teacher/assignments/grade")
        .header("x-principal", &header)
        .body(axum::body::Body::from(r#"{"id": 2, "grade": "A"}"#))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app(&store), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_non_numeric_principal_id() {
    let store = seeded_store().await;

    let (status, body) = send(
        app(&store),
        "GET",
        "/teacher/assignments",
        Some(r#"{"principal_id": "abc"}"#),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "MalformedPrincipalError");
}
