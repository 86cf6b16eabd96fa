// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod route_tests;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use croprec_api::SessionRegistry;
use croprec_model::{Dataset, Recommender, TrainingConfig};
use croprec_persistence::Persistence;
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::AppState;

/// Two crops separated by rainfall.
fn create_test_recommender() -> Recommender {
    let mut csv: String = String::from("N,P,K,temperature,humidity,ph,rainfall,label\n");
    for i in 0..10 {
        let jitter: f64 = f64::from(i);
        csv.push_str(&format!("80,45,40,23.0,82.0,6.4,{},rice\n", 200.0 + jitter));
        csv.push_str(&format!("80,45,40,23.0,82.0,6.4,{},maize\n", 60.0 + jitter));
    }
    let dataset: Dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    Recommender::train(&dataset, &TrainingConfig::default().with_trees(5)).unwrap()
}

/// Helper to create test app state with in-memory persistence.
pub fn create_test_app_state() -> AppState {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        sessions: Arc::new(Mutex::new(SessionRegistry::default())),
        recommender: Arc::new(create_test_recommender()),
    }
}

/// Sends one request and returns the status and decoded JSON body.
///
/// Bodies that are not JSON decode as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request: Request<Body> = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Starts a session and returns its token.
pub async fn start_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/sessions", None, None).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
