// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};
use croprec_api::ApiError;
use serde_json::{Value, json};

use super::{create_test_app_state, send, start_session};
use crate::{AppState, HttpError, build_router};

fn rice_body() -> Value {
    json!({
        "N": 90,
        "P": 42,
        "K": 43,
        "temperature": 20.8,
        "humidity": 82.0,
        "ph": 6.5,
        "rainfall": 202.9
    })
}

fn credentials(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

async fn nav(app: &Router, token: &str, action: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/navigate",
        Some(token),
        Some(json!({ "action": action })),
    )
    .await
}

async fn signed_up_and_logged_in(app: &Router, username: &str, password: &str) -> String {
    let token: String = start_session(app).await;
    nav(app, &token, "open_signup").await;
    send(
        app,
        "POST",
        "/signup",
        Some(&token),
        Some(credentials(username, password)),
    )
    .await;
    let (status, _) = send(
        app,
        "POST",
        "/login",
        Some(&token),
        Some(credentials(username, password)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    token
}

#[tokio::test]
async fn test_create_session_returns_login_view() {
    let app: Router = build_router(create_test_app_state());

    let (status, body) = send(&app, "POST", "/sessions", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().unwrap().starts_with("session_"));
    assert_eq!(body["view"]["page"], "login");
    assert_eq!(body["view"]["title"], "Login to Crop Recommendation System");
}

#[tokio::test]
async fn test_missing_authorization_is_unauthorized() {
    let app: Router = build_router(create_test_app_state());

    let (status, body) = send(&app, "GET", "/view", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let app: Router = build_router(create_test_app_state());

    let (status, body) = send(&app, "GET", "/view", Some("session_bogus"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_full_recommendation_flow() {
    let app_state: AppState = create_test_app_state();
    let app: Router = build_router(app_state.clone());
    let token: String = start_session(&app).await;

    let (status, body) = nav(&app, &token, "open_signup").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "signup");
    assert!(body.get("notice").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/signup",
        Some(&token),
        Some(credentials("alice", "pw1")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "login");
    assert_eq!(body["notice"]["level"], "success");
    assert_eq!(
        body["notice"]["text"],
        "Account created successfully! You can now log in."
    );

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(&token),
        Some(credentials("alice", "pw1")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "app");
    assert_eq!(body["view"]["username"], "alice");
    assert_eq!(body["notice"]["text"], "Login successful! Redirecting...");

    let (status, body) = send(&app, "POST", "/recommend", Some(&token), Some(rice_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crop"], "rice");
    assert!(body["description"].as_str().unwrap().contains("Rice"));
    assert!(body["accuracy"].as_f64().is_some());

    let (status, body) = nav(&app, &token, "view_history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "history");
    let entries: &Vec<Value> = body["view"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["username"], "alice");
    assert_eq!(entries[0]["recommendation"], "rice");

    let (status, body) = send(&app, "GET", "/view", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "history");

    let (status, body) = nav(&app, &token, "back_to_app").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "app");

    let (status, body) = nav(&app, &token, "logout").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "login");

    let persistence = app_state.persistence.lock().await;
    assert_eq!(persistence.history().load_all().unwrap().len(), 1);
}

#[tokio::test]
async fn test_wrong_password_stays_on_login() {
    let app: Router = build_router(create_test_app_state());
    let token: String = signed_up_and_logged_in(&app, "alice", "pw1").await;
    nav(&app, &token, "logout").await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(&token),
        Some(credentials("alice", "wrong")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "login");
    assert_eq!(body["notice"]["level"], "error");
    assert_eq!(body["notice"]["text"], "Incorrect password.");
}

#[tokio::test]
async fn test_duplicate_signup_reports_error_notice() {
    let app: Router = build_router(create_test_app_state());
    signed_up_and_logged_in(&app, "alice", "pw1").await;

    let token: String = start_session(&app).await;
    nav(&app, &token, "open_signup").await;
    let (status, body) = send(
        &app,
        "POST",
        "/signup",
        Some(&token),
        Some(credentials("alice", "pw2")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "signup");
    assert_eq!(
        body["notice"]["text"],
        "Username already exists. Please choose another."
    );
}

#[tokio::test]
async fn test_recommend_before_login_is_conflict() {
    let app: Router = build_router(create_test_app_state());
    let token: String = start_session(&app).await;

    let (status, body) = send(&app, "POST", "/recommend", Some(&token), Some(rice_body())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_unavailable_navigation_is_conflict() {
    let app: Router = build_router(create_test_app_state());
    let token: String = start_session(&app).await;

    let (status, _) = nav(&app, &token, "back_to_app").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, "GET", "/view", Some(&token), None).await;
    assert_eq!(body["page"], "login");
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let app: Router = build_router(create_test_app_state());
    let alice: String = signed_up_and_logged_in(&app, "alice", "pw1").await;
    let other: String = start_session(&app).await;

    let (_, alice_view) = send(&app, "GET", "/view", Some(&alice), None).await;
    let (_, other_view) = send(&app, "GET", "/view", Some(&other), None).await;

    assert_eq!(alice_view["page"], "app");
    assert_eq!(other_view["page"], "login");
}

#[tokio::test]
async fn test_ended_session_is_rejected() {
    let app: Router = build_router(create_test_app_state());
    let token: String = start_session(&app).await;

    let (status, body) = send(&app, "DELETE", "/sessions", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "GET", "/view", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "DELETE", "/sessions", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_describe_crop_route() {
    let app: Router = build_router(create_test_app_state());

    let (status, body) = send(&app, "GET", "/crops/Maize", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maize");
    assert!(body["description"].as_str().unwrap().starts_with("Maize"));

    let (status, body) = send(&app, "GET", "/crops/durian", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["description"],
        "No additional information available for this crop."
    );
}

#[test]
fn test_api_errors_map_to_status_codes() {
    let cases: Vec<(ApiError, StatusCode)> = vec![
        (
            ApiError::InvalidInput {
                field: String::from("ph"),
                message: String::from("ph is not a finite number"),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::SessionNotFound {
                reason: String::from("Session expired"),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::NotLoggedIn {
                message: String::from("The app page requires a logged-in user"),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            ApiError::InvalidTransition {
                message: String::from("Action 'Logout' is not available on the login page"),
            },
            StatusCode::CONFLICT,
        ),
        (
            ApiError::Internal {
                message: String::from("disk full"),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (api_error, expected) in cases {
        let message: String = api_error.to_string();
        let http_error: HttpError = HttpError::from(api_error);
        assert_eq!(http_error.status, expected);
        assert_eq!(http_error.message, message);
    }
}

#[tokio::test]
async fn test_login_releases_session_lock_while_waiting_on_store() {
    let app_state: AppState = create_test_app_state();
    let app: Router = build_router(app_state.clone());
    let token: String = start_session(&app).await;

    let store_guard = app_state.persistence.lock().await;
    let pending = tokio::spawn({
        let app: Router = app.clone();
        let token: String = token.clone();
        async move {
            send(
                &app,
                "POST",
                "/login",
                Some(&token),
                Some(credentials("alice", "pw1")),
            )
            .await
        }
    });
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    let sessions = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        app_state.sessions.lock(),
    )
    .await;
    assert!(sessions.is_ok());
    drop(sessions);
    drop(store_guard);

    let (status, body) = pending.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["page"], "login");
    assert_eq!(body["notice"]["text"], "User not found. Please sign up first.");
}
