// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use croprec::{Page, SessionState};
use croprec_domain::{Password, Username};
use croprec_model::{Dataset, Recommender, TrainingConfig};
use croprec_persistence::Persistence;

use crate::{LoginRequest, RecommendRequest, SignupRequest};

/// Two crops separated by rainfall, ten rows each.
pub fn create_test_recommender() -> Recommender {
    let mut csv: String = String::from("N,P,K,temperature,humidity,ph,rainfall,label\n");
    for i in 0..10 {
        let jitter: f64 = f64::from(i);
        csv.push_str(&format!("80,45,40,23.0,82.0,6.4,{},rice\n", 200.0 + jitter));
        csv.push_str(&format!("80,45,40,23.0,82.0,6.4,{},maize\n", 60.0 + jitter));
    }
    let dataset: Dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    Recommender::train(&dataset, &TrainingConfig::default().with_trees(5)).unwrap()
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_persistence_with_user(username: &str, password: &str) -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_user(&Username::new(username), &Password::new(password))
        .unwrap();
    persistence
}

pub fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

pub fn signup_request(username: &str, password: &str) -> SignupRequest {
    SignupRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

pub fn on_page(page: Page) -> SessionState {
    SessionState {
        page,
        ..SessionState::new()
    }
}

pub fn logged_in_as(username: &str, page: Page) -> SessionState {
    SessionState {
        page,
        logged_in: true,
        username: Some(Username::new(username)),
    }
}

pub fn rice_request() -> RecommendRequest {
    RecommendRequest {
        n: 90.0,
        p: 42.0,
        k: 43.0,
        temperature: 20.8,
        humidity: 82.0,
        ph: 6.5,
        rainfall: 202.9,
    }
}
