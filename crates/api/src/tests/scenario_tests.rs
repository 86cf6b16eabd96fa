// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-session walkthroughs across handlers.

use croprec::{Page, SessionState};
use croprec_model::Recommender;
use croprec_persistence::Persistence;

use super::helpers::{
    create_test_persistence, create_test_recommender, login_request, rice_request,
    signup_request,
};
use crate::{
    NavigationAction, PageView, SessionRegistry, current_view, login, navigate, recommend, signup,
};

#[test]
fn test_alice_signs_up_logs_in_and_sees_her_recommendation() {
    let mut persistence: Persistence = create_test_persistence();
    let recommender: Recommender = create_test_recommender();
    let mut registry: SessionRegistry = SessionRegistry::default();
    let token: String = registry.create();

    let state: SessionState = registry.get(&token).unwrap();
    let state: SessionState = navigate(&state, NavigationAction::OpenSignup)
        .unwrap()
        .new_state;
    registry.update(&token, state).unwrap();

    let state: SessionState = registry.get(&token).unwrap();
    let state: SessionState = signup(&mut persistence, &state, &signup_request("alice", "pw1"))
        .unwrap()
        .new_state;
    assert_eq!(state.page, Page::Login);
    registry.update(&token, state).unwrap();

    let state: SessionState = registry.get(&token).unwrap();
    let state: SessionState = login(&persistence, &state, &login_request("alice", "pw1"))
        .unwrap()
        .new_state;
    assert_eq!(state.page, Page::App);
    registry.update(&token, state).unwrap();

    let state: SessionState = registry.get(&token).unwrap();
    let result = recommend(&mut persistence, &recommender, &state, &rice_request()).unwrap();
    assert_eq!(result.response.crop, "rice");
    registry.update(&token, result.new_state).unwrap();

    let state: SessionState = registry.get(&token).unwrap();
    let state: SessionState = navigate(&state, NavigationAction::ViewHistory)
        .unwrap()
        .new_state;
    registry.update(&token, state).unwrap();

    let state: SessionState = registry.get(&token).unwrap();
    let view: PageView = current_view(&persistence, &recommender, &state).unwrap();
    let PageView::History {
        username, entries, ..
    } = view
    else {
        panic!("expected history view, got {view:?}");
    };
    assert_eq!(username, "alice");
    assert_eq!(entries.len(), 1);
    assert!((entries[0].n - 90.0).abs() < f64::EPSILON);
    assert!((entries[0].rainfall - 202.9).abs() < f64::EPSILON);
    assert_eq!(entries[0].recommendation, "rice");
}

#[test]
fn test_logout_then_back_in_sees_same_history() {
    let mut persistence: Persistence = create_test_persistence();
    let recommender: Recommender = create_test_recommender();

    let state: SessionState = navigate(&SessionState::new(), NavigationAction::OpenSignup)
        .unwrap()
        .new_state;
    let state: SessionState = signup(&mut persistence, &state, &signup_request("bob", "pw"))
        .unwrap()
        .new_state;
    let state: SessionState = login(&persistence, &state, &login_request("bob", "pw"))
        .unwrap()
        .new_state;
    recommend(&mut persistence, &recommender, &state, &rice_request()).unwrap();

    let state: SessionState = navigate(&state, NavigationAction::Logout)
        .unwrap()
        .new_state;
    assert_eq!(state, SessionState::new());
    assert!(navigate(&state, NavigationAction::ViewHistory).is_err());

    let state: SessionState = login(&persistence, &state, &login_request("bob", "pw"))
        .unwrap()
        .new_state;
    let state: SessionState = navigate(&state, NavigationAction::ViewHistory)
        .unwrap()
        .new_state;
    let PageView::History { entries, .. } =
        current_view(&persistence, &recommender, &state).unwrap()
    else {
        panic!("expected history view");
    };
    assert_eq!(entries.len(), 1);
}
