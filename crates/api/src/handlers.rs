// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler takes the caller's session state, resolves any store
//! lookups, and runs the matching controller command. Handlers never
//! mutate the session in place; the caller stores `new_state`.

use croprec::{
    Command, CoreError, Notice, Page, SessionState, SignupOutcome, TransitionResult, apply,
    require_logged_in,
};
use croprec_domain::{
    AuthOutcome, CropLabel, FEATURE_NAMES, FeatureVector, HistoryEntry, Password, Username,
    describe, validate_credentials_present, validate_feature_vector,
};
use croprec_model::Recommender;
use croprec_persistence::Persistence;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::request_response::{
    CropInfoResponse, HistoryRowResponse, LoginRequest, NavigationAction, PageView,
    RecommendRequest, RecommendResponse, SignupRequest, TransitionResponse,
};

/// The result of an API operation together with the session's next state.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The session state after the operation.
    pub new_state: SessionState,
}

impl ApiResult<TransitionResponse> {
    fn from_transition(result: TransitionResult) -> Self {
        Self {
            response: TransitionResponse {
                page: result.new_state.page,
                notice: result.notice,
            },
            new_state: result.new_state,
        }
    }
}

/// Refuses a store-backed command before any store is touched.
fn ensure_page(state: &SessionState, page: Page, command: &Command) -> Result<(), CoreError> {
    if state.page == page {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            page: state.page,
            command: command.name(),
        })
    }
}

/// Submits the login form.
///
/// A blank username or password is reported as an unknown user.
///
/// # Arguments
///
/// * `persistence` - The credential store
/// * `state` - The caller's session state
/// * `request` - The entered credentials
///
/// # Errors
///
/// Returns an error if:
/// - The session is not on the login page
/// - The credential table cannot be read
pub fn login(
    persistence: &Persistence,
    state: &SessionState,
    request: &LoginRequest,
) -> Result<ApiResult<TransitionResponse>, ApiError> {
    let username: Username = Username::new(&request.username);
    let password: Password = Password::new(&request.password);
    ensure_page(
        state,
        Page::Login,
        &Command::SubmitLogin {
            username: username.clone(),
            outcome: AuthOutcome::NotFound,
        },
    )?;

    let outcome: AuthOutcome = if validate_credentials_present(&username, &password).is_err() {
        AuthOutcome::NotFound
    } else {
        persistence.authenticate(&username, &password)?
    };

    info!(username = %username, outcome = ?outcome, "Login attempt");

    let result: TransitionResult = apply(state, Command::SubmitLogin { username, outcome })?;
    Ok(ApiResult::from_transition(result))
}

/// Submits the signup form.
///
/// Usernames and passwords are stored exactly as entered; whitespace-only
/// values count as missing.
///
/// # Errors
///
/// Returns an error if:
/// - The session is not on the signup page
/// - The credential table cannot be read or written
pub fn signup(
    persistence: &mut Persistence,
    state: &SessionState,
    request: &SignupRequest,
) -> Result<ApiResult<TransitionResponse>, ApiError> {
    ensure_page(
        state,
        Page::Signup,
        &Command::SubmitSignup {
            outcome: SignupOutcome::MissingFields,
        },
    )?;

    let username: Username = Username::new(&request.username);
    let password: Password = Password::new(&request.password);

    let outcome: SignupOutcome = if let Err(e) = validate_credentials_present(&username, &password)
    {
        debug!(error = %e, "Signup rejected");
        SignupOutcome::MissingFields
    } else if persistence.create_user(&username, &password)? {
        SignupOutcome::Created
    } else {
        SignupOutcome::UsernameTaken
    };

    info!(username = %username, outcome = ?outcome, "Signup attempt");

    let result: TransitionResult = apply(state, Command::SubmitSignup { outcome })?;
    Ok(ApiResult::from_transition(result))
}

/// Presses a navigation button.
///
/// # Errors
///
/// Returns an error if the button is not available on the current page, or
/// the page requires a login the session does not have.
pub fn navigate(
    state: &SessionState,
    action: NavigationAction,
) -> Result<ApiResult<TransitionResponse>, ApiError> {
    let command: Command = action.to_command();
    debug!(page = %state.page, command = command.name(), "Navigating");
    let result: TransitionResult = apply(state, command)?;
    Ok(ApiResult::from_transition(result))
}

/// Recommends a crop and records it in the user's history.
///
/// # Arguments
///
/// * `persistence` - The history store
/// * `recommender` - The trained model
/// * `state` - The caller's session state
/// * `request` - The seven measurements
///
/// # Errors
///
/// Returns an error if:
/// - The session is not on the app page or is not logged in
/// - A measurement is not a finite number
/// - The history table cannot be written
pub fn recommend(
    persistence: &mut Persistence,
    recommender: &Recommender,
    state: &SessionState,
    request: &RecommendRequest,
) -> Result<ApiResult<RecommendResponse>, ApiError> {
    let result: TransitionResult = apply(state, Command::SubmitRecommendation)?;
    let username: Username = require_logged_in(state)?.clone();

    let features: FeatureVector = request.features();
    validate_feature_vector(&features)?;

    let crop: CropLabel = recommender.recommend(&features);
    persistence.record_recommendation(&HistoryEntry::new(
        username.clone(),
        features,
        crop.clone(),
    ))?;

    info!(username = %username, crop = %crop, "Recommended crop");

    Ok(ApiResult {
        response: RecommendResponse {
            crop: crop.value().to_string(),
            description: describe(crop.value()).to_string(),
            accuracy: recommender.accuracy(),
            notice: Notice::success(&format!("Recommended Crop: {}", crop.title())),
        },
        new_state: result.new_state,
    })
}

/// Renders the session's current page.
///
/// # Errors
///
/// Returns an error if:
/// - The page requires a login the session does not have
/// - The history table cannot be read
pub fn current_view(
    persistence: &Persistence,
    recommender: &Recommender,
    state: &SessionState,
) -> Result<PageView, ApiError> {
    let title: String = state.page.title().to_string();
    match state.page {
        Page::Login => Ok(PageView::Login { title }),
        Page::Signup => Ok(PageView::Signup { title }),
        Page::App => {
            let username: &Username = require_logged_in(state)?;
            Ok(PageView::App {
                title,
                username: username.value().to_string(),
                accuracy: recommender.accuracy(),
                fields: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
            })
        }
        Page::History => {
            let username: &Username = require_logged_in(state)?;
            let entries: Vec<HistoryRowResponse> = persistence
                .get_user_history(username)?
                .into_iter()
                .map(HistoryRowResponse::from)
                .collect();
            let notice: Option<Notice> = entries
                .is_empty()
                .then(|| Notice::info("No past recommendations found."));
            Ok(PageView::History {
                title,
                username: username.value().to_string(),
                entries,
                notice,
            })
        }
    }
}

/// Looks up a crop in the knowledge base.
///
/// Unknown crops get the fallback description.
#[must_use]
pub fn describe_crop(name: &str) -> CropInfoResponse {
    CropInfoResponse {
        name: name.to_string(),
        description: describe(name).to_string(),
    }
}
