//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory backend, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_error, assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Register a fresh user and return their token and id
async fn signed_up(server: &TestServer, name: &str) -> (String, i64) {
    let reg = RegisterRequest::named(name);
    let response = server.post("/api/auth/register", &reg).await.expect("Request failed");
    let tokens: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/users/me", &tokens.token)
        .await
        .expect("Request failed");
    let me: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (tokens.token, me.id)
}

/// Requester proposes a swap to the receiver
async fn propose(server: &TestServer, token: &str, receiver_id: i64) -> SwapResponse {
    let response = server
        .post_auth("/api/swaps", token, &CreateSwapRequest::to(receiver_id))
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn answer(server: &TestServer, token: &str, swap_id: i64, status: &str) -> reqwest::Response {
    server
        .put_auth(&format!("/api/swaps/{swap_id}"), token, &json!({ "status": status }))
        .await
        .expect("Request failed")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let ready: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.store, "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let reg = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &reg).await.expect("Request failed");
    let registered: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!registered.token.is_empty());
    assert_eq!(registered.token_type, "Bearer");
    assert!(registered.expires_in > 0);

    let login = LoginRequest::from_register(&reg);
    let response = server.post("/api/auth/login", &login).await.expect("Request failed");
    let logged_in: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/users/me", &logged_in.token)
        .await
        .expect("Request failed");
    let me: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.email, reg.email);
    assert!(me.is_public);
    assert!(me.skills_offered.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");

    let reg = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &reg).await.expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/auth/register", &reg).await.expect("Request failed");
    let error = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &json!({ "email": "only@example.com" }))
        .await
        .expect("Request failed");
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = TestServer::start().await.expect("Failed to start server");

    let reg = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &reg).await.expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let wrong_password = LoginRequest {
        email: reg.email.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/auth/login", &wrong_password).await.expect("Request failed");
    let wrong_password = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let unknown = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: reg.password.clone(),
    };
    let response = server.post("/api/auth/login", &unknown).await.expect("Request failed");
    let unknown = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(wrong_password.error.code, unknown.error.code);
    assert_eq!(wrong_password.error.message, unknown.error.message);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/me").await.expect("Request failed");
    let error = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_bad_token_is_forbidden() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/users/me", "not.a.jwt")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_keeps_skill_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = signed_up(&server, "Ada").await;

    let response = server
        .put_auth(
            "/api/users/me",
            &token,
            &json!({
                "skillsOffered": ["Piano", "Chess", "Baking"],
                "skillsWanted": ["Guitar"],
                "location": "Lisbon"
            }),
        )
        .await
        .expect("Request failed");
    let updated: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.skills_offered, vec!["Piano", "Chess", "Baking"]);
    assert_eq!(updated.skills_wanted, vec!["Guitar"]);
    assert_eq!(updated.location.as_deref(), Some("Lisbon"));

    // Omitted fields stay as they were
    let response = server
        .put_auth("/api/users/me", &token, &json!({ "availability": "weekends" }))
        .await
        .expect("Request failed");
    let updated: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.skills_offered, vec!["Piano", "Chess", "Baking"]);
    assert_eq!(updated.availability.as_deref(), Some("weekends"));
}

#[tokio::test]
async fn test_update_profile_rejects_non_list_skills() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = signed_up(&server, "Ada").await;

    let response = server
        .put_auth("/api/users/me", &token, &json!({ "skillsOffered": "Piano" }))
        .await
        .expect("Request failed");
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Directory Tests
// ============================================================================

#[tokio::test]
async fn test_directory_lists_public_profiles_only() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, ada_id) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    server
        .put_auth("/api/users/me", &ada_token, &json!({ "skillsOffered": ["Piano"] }))
        .await
        .expect("Request failed");
    server
        .put_auth("/api/users/me", &bob_token, &json!({ "isPublic": false }))
        .await
        .expect("Request failed");

    let response = server.get("/api/users").await.expect("Request failed");
    let listed: Vec<PublicProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listed.iter().any(|user| user.id == ada_id));
    assert!(listed.iter().all(|user| user.id != bob_id));
    assert!(listed.iter().all(|user| user.email.is_none()));
}

#[tokio::test]
async fn test_directory_skill_filter() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, ada_id) = signed_up(&server, "Ada").await;
    let (bob_token, _) = signed_up(&server, "Bob").await;

    server
        .put_auth("/api/users/me", &ada_token, &json!({ "skillsOffered": ["Piano", "Chess"] }))
        .await
        .expect("Request failed");
    server
        .put_auth("/api/users/me", &bob_token, &json!({ "skillsOffered": ["Guitar"] }))
        .await
        .expect("Request failed");

    let response = server.get("/api/users?skill=Chess").await.expect("Request failed");
    let listed: Vec<PublicProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, ada_id);
    assert_eq!(listed[0].rating_count, 0);
}

// ============================================================================
// Swap Tests
// ============================================================================

#[tokio::test]
async fn test_swap_with_self_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (token, id) = signed_up(&server, "Ada").await;

    let response = server
        .post_auth("/api/swaps", &token, &CreateSwapRequest::to(id))
        .await
        .expect("Request failed");
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "SELF_SWAP");
}

#[tokio::test]
async fn test_swap_with_unknown_receiver() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = signed_up(&server, "Ada").await;

    let response = server
        .post_auth("/api/swaps", &token, &CreateSwapRequest::to(987_654))
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_accepted_swap_cannot_be_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, ada_id) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;
    assert_eq!(swap.status, "pending");
    assert_eq!(swap.requester_id, ada_id);

    let response = server.get_auth("/api/swaps/me", &bob_token).await.expect("Request failed");
    let bobs: SwapListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bobs.incoming.len(), 1);
    assert!(bobs.outgoing.is_empty());
    let requester = bobs.incoming[0].requester.as_ref().expect("requester summary");
    assert_eq!(requester.name, "Ada");

    let response = answer(&server, &bob_token, swap.id, "accepted").await;
    let accepted: SwapResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.status, "accepted");

    let response = answer(&server, &bob_token, swap.id, "rejected").await;
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.error.message.contains("accepted"));
}

#[tokio::test]
async fn test_only_receiver_can_respond() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, _) = signed_up(&server, "Ada").await;
    let (_, bob_id) = signed_up(&server, "Bob").await;
    let (cy_token, _) = signed_up(&server, "Cy").await;

    let swap = propose(&server, &ada_token, bob_id).await;

    let response = answer(&server, &ada_token, swap.id, "accepted").await;
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = answer(&server, &cy_token, swap.id, "accepted").await;
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_pending_status_is_not_a_valid_answer() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, _) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;

    let response = answer(&server, &bob_token, swap.id, "pending").await;
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_requester_cancels_pending_swap() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, _) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;
    let path = format!("/api/swaps/{}", swap.id);

    let response = server.delete_auth(&path, &bob_token).await.expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &ada_token).await.expect("Request failed");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/swaps/me", &ada_token).await.expect("Request failed");
    let adas: SwapListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(adas.outgoing.is_empty());

    let response = server.get_auth("/api/swaps/me", &bob_token).await.expect("Request failed");
    let bobs: SwapListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bobs.incoming.is_empty());

    // Gone swaps answer as if the caller had no right to them
    let response = server.delete_auth(&path, &ada_token).await.expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_resolved_swap_cannot_be_deleted() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, _) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;
    let response = answer(&server, &bob_token, swap.id, "rejected").await;
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/swaps/{}", swap.id), &ada_token)
        .await
        .expect("Request failed");
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "SWAP_NOT_CANCELLABLE");
}

#[tokio::test]
async fn test_malformed_swap_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = signed_up(&server, "Ada").await;

    let response = server
        .delete_auth("/api/swaps/not-a-number", &token)
        .await
        .expect("Request failed");
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_feedback_updates_rating() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, ada_id) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;
    let feedback_path = format!("/api/swaps/{}/feedback", swap.id);
    let review = FeedbackRequest {
        score: 4,
        comment: Some("Patient and clear".to_string()),
    };

    // Not accepted yet
    let response = server
        .post_auth(&feedback_path, &ada_token, &review)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = answer(&server, &bob_token, swap.id, "accepted").await;
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(&feedback_path, &ada_token, &review)
        .await
        .expect("Request failed");
    let recorded: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(recorded.rater_id, ada_id);
    assert_eq!(recorded.ratee_id, bob_id);
    assert_eq!(recorded.score, 4);

    let response = server
        .post_auth(&feedback_path, &ada_token, &review)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get(&format!("/api/users/{bob_id}/rating"))
        .await
        .expect("Request failed");
    let rating: RatingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rating.user_id, bob_id);
    assert_eq!(rating.rating_count, 1);
    assert!((rating.average_rating - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_feedback_score_out_of_range() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ada_token, _) = signed_up(&server, "Ada").await;
    let (bob_token, bob_id) = signed_up(&server, "Bob").await;

    let swap = propose(&server, &ada_token, bob_id).await;
    let response = answer(&server, &bob_token, swap.id, "accepted").await;
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/swaps/{}/feedback", swap.id),
            &ada_token,
            &FeedbackRequest {
                score: 9,
                comment: None,
            },
        )
        .await
        .expect("Request failed");
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_rating_of_unknown_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/424242/rating").await.expect("Request failed");
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!error.error.message.is_empty());
}
