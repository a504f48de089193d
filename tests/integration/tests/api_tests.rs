//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_list_without_token_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/tasks").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error, "Unauthorized");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/tasks", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_without_profile_claims_is_accepted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::without_profile();

    // The missing email/name claims fall back to placeholders on first login
    let response = server.get_auth("/api/v1/tasks", &user.token).await.unwrap();
    let tasks: Vec<TaskBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(tasks.is_empty());
}

// ============================================================================
// Task CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_task_defaults_to_pending() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();
    let request = CreateTaskBody::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &request)
        .await
        .unwrap();
    let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(task.title, request.title);
    assert_eq!(task.description, request.description);
    assert_eq!(task.status, "pending");
    assert!(task.deleted_at.is_none());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();
    let request = CreateTaskBody::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &request)
        .await
        .unwrap();
    let created: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/tasks/{}", created.id), &user.token)
        .await
        .unwrap();
    let fetched: TaskBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.status, created.status);
    assert_eq!(fetched.user_id, created.user_id);
}

#[tokio::test]
async fn test_task_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    // Create
    let response = server
        .post_auth(
            "/api/v1/tasks",
            &user.token,
            &CreateTaskBody {
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
            },
        )
        .await
        .unwrap();
    let created: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "pending");

    // Complete it; title must be untouched
    let response = server
        .put_auth(
            &format!("/api/v1/tasks/{}", created.id),
            &user.token,
            &json!({"status": "completed"}),
        )
        .await
        .unwrap();
    let updated: TaskBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.title, "Buy milk");

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/tasks/{}", created.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone
    let response = server
        .get_auth(&format!("/api/v1/tasks/{}", created.id), &user.token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Task not found");
}

#[tokio::test]
async fn test_delete_twice_second_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/tasks/{}", task.id);

    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Soft delete is terminal; repeating it finds no active row
    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_is_newest_first_and_excludes_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let mut ids = Vec::new();
    for title in ["first", "second", "third"] {
        let response = server
            .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::titled(title))
            .await
            .unwrap();
        let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(task.id);
    }

    // Soft-delete the middle one
    let response = server
        .delete_auth(&format!("/api/v1/tasks/{}", ids[1]), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/tasks", &user.token).await.unwrap();
    let tasks: Vec<TaskBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "first"]);
    assert!(tasks.iter().all(|t| t.deleted_at.is_none()));
}

#[tokio::test]
async fn test_malformed_task_id_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .get_auth("/api/v1/tasks/not-a-uuid", &user.token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Task not found");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .put_auth(
            &format!("/api/v1/tasks/{}", uuid::Uuid::new_v4()),
            &user.token,
            &json!({"status": "completed"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_create_with_empty_title_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth(
            "/api/v1/tasks",
            &user.token,
            &json!({"title": "", "description": "still here"}),
        )
        .await
        .unwrap();
    let body: ValidationErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error, "Validation failed");
    assert!(!body.details.is_empty());
    assert!(body.details.iter().any(|issue| issue.field == "title"));
}

#[tokio::test]
async fn test_create_with_whitespace_title_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth(
            "/api/v1/tasks",
            &user.token,
            &json!({"title": "   ", "description": "still here"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_with_empty_body_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/tasks/{}", task.id),
            &user.token,
            &json!({}),
        )
        .await
        .unwrap();
    let body: ValidationErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "Validation failed");
    assert!(!body.details.is_empty());
}

#[tokio::test]
async fn test_update_with_blank_title_uses_update_wording() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/tasks/{}", task.id),
            &user.token,
            &json!({"title": "   "}),
        )
        .await
        .unwrap();
    let body: ValidationErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error, "Validation failed");
    assert!(body
        .details
        .iter()
        .any(|issue| issue.field == "title" && issue.message == "Title cannot be empty"));
}

#[tokio::test]
async fn test_update_with_unknown_status_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/tasks/{}", task.id),
            &user.token,
            &json!({"status": "archived"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Ownership Isolation Tests
// ============================================================================

#[tokio::test]
async fn test_users_cannot_see_each_others_tasks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::unique();
    let bob = TestUser::unique();

    // Both create a task with the same title
    let response = server
        .post_auth("/api/v1/tasks", &alice.token, &CreateTaskBody::titled("X"))
        .await
        .unwrap();
    let alice_task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/tasks", &bob.token, &CreateTaskBody::titled("X"))
        .await
        .unwrap();
    let bob_task: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_ne!(alice_task.user_id, bob_task.user_id);

    // Each list contains only the owner's task
    let response = server.get_auth("/api/v1/tasks", &alice.token).await.unwrap();
    let alice_list: Vec<TaskBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(alice_list.len(), 1);
    assert_eq!(alice_list[0].id, alice_task.id);

    let response = server.get_auth("/api/v1/tasks", &bob.token).await.unwrap();
    let bob_list: Vec<TaskBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bob_list.len(), 1);
    assert_eq!(bob_list[0].id, bob_task.id);

    // Cross-access by id reports the same 404 as a missing row
    let response = server
        .get_auth(&format!("/api/v1/tasks/{}", bob_task.id), &alice.token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Task not found");

    let response = server
        .delete_auth(&format!("/api/v1/tasks/{}", alice_task.id), &bob.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_repeat_login_reuses_user_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let first: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Same subject on a later request maps to the same owner id
    let response = server
        .post_auth("/api/v1/tasks", &user.token, &CreateTaskBody::unique())
        .await
        .unwrap();
    let second: TaskBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(first.user_id, second.user_id);
}
