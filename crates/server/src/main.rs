// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use croprec::{Notice, SessionState};
use croprec_api::{
    ApiError, ApiResult, CropInfoResponse, LoginRequest, NavigateRequest, PageView,
    RecommendRequest, RecommendResponse, SessionRegistry, SignupRequest, TransitionResponse,
    current_view, describe_crop, login, navigate, recommend, signup,
};
use croprec_model::{Dataset, Recommender, TrainingConfig};
use croprec_persistence::{MAX_BCRYPT_COST, MIN_BCRYPT_COST, PasswordStorage, Persistence};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::session::SessionToken;

/// Crop Recommendation Server - HTTP server for crop recommendations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding `users.csv` and `recommendations.csv`
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Labeled training dataset
    #[arg(long, default_value = "data/cropsrec.csv")]
    dataset: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How new passwords are stored: `plaintext` or `bcrypt`
    #[arg(long, default_value = "bcrypt")]
    password_storage: PasswordStorage,

    /// Bcrypt work factor. Defaults to the bcrypt library default.
    #[arg(
        long,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(MIN_BCRYPT_COST)..=i64::from(MAX_BCRYPT_COST))
    )]
    bcrypt_cost: Option<u32>,

    /// Minutes of inactivity after which a session expires
    #[arg(long, default_value_t = 30)]
    session_ttl_minutes: u32,

    /// Number of trees in the random forest
    #[arg(long, default_value_t = 100)]
    trees: usize,

    /// Seed for the train/test split and the forest
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Args {
    const fn password_storage(&self) -> PasswordStorage {
        match (self.password_storage, self.bcrypt_cost) {
            (PasswordStorage::Bcrypt { .. }, Some(cost)) => PasswordStorage::Bcrypt { cost },
            (storage, _) => storage,
        }
    }
}

/// Application state shared across handlers.
///
/// Handlers never hold both locks at once. A session's state is read under
/// the `sessions` lock, the store work runs under the `persistence` lock,
/// and the new state is written back under the `sessions` lock.
#[derive(Clone)]
struct AppState {
    /// Registered users and recommendation history.
    persistence: Arc<Mutex<Persistence>>,
    /// Per-client session states.
    sessions: Arc<Mutex<SessionRegistry>>,
    /// The model, trained once at startup.
    recommender: Arc<Recommender>,
}

/// API response for a newly created session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionCreatedResponse {
    /// Token to send as `Authorization: Bearer <token>`.
    token: String,
    /// The login page.
    view: PageView,
}

/// API response for page transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewResponse {
    /// The page after the transition.
    view: PageView,
    /// An inline message, if the transition produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notice: Option<Notice>,
}

/// API response for write operations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Whether the operation succeeded.
    success: bool,
    /// A message describing the result.
    message: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotLoggedIn { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Runs store work on the blocking pool under the persistence lock.
///
/// Password hashing and verification are CPU bound and must not stall the
/// async workers.
async fn run_store_blocking<T, F>(app_state: &AppState, op: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&mut Persistence) -> Result<T, ApiError> + Send + 'static,
{
    let mut persistence = Arc::clone(&app_state.persistence).lock_owned().await;
    let outcome: Result<T, ApiError> = tokio::task::spawn_blocking(move || op(&mut persistence))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("Store task failed: {e}"),
        })?;
    outcome.map_err(HttpError::from)
}

/// Renders a session's page and wraps it with the transition notice.
async fn render_transition(
    app_state: &AppState,
    result: &ApiResult<TransitionResponse>,
) -> Result<ViewResponse, ApiError> {
    let persistence = app_state.persistence.lock().await;
    let view: PageView = current_view(&persistence, &app_state.recommender, &result.new_state)?;
    Ok(ViewResponse {
        view,
        notice: result.response.notice.clone(),
    })
}

/// Handler for POST `/sessions` endpoint.
///
/// Starts a new session on the login page.
async fn handle_create_session(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SessionCreatedResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let token: String = sessions.create();
    drop(sessions);

    let persistence = app_state.persistence.lock().await;
    let view: PageView = current_view(
        &persistence,
        &app_state.recommender,
        &SessionState::new(),
    )?;
    drop(persistence);

    Ok(Json(SessionCreatedResponse { token, view }))
}

/// Handler for DELETE `/sessions` endpoint.
///
/// Ends the caller's session.
async fn handle_end_session(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    if !sessions.end(&token) {
        return Err(ApiError::SessionNotFound {
            reason: String::from("Unknown session token"),
        }
        .into());
    }
    drop(sessions);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Session ended")),
    }))
}

/// Handler for GET `/view` endpoint.
///
/// Renders the caller's current page.
async fn handle_get_view(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<PageView>, HttpError> {
    let state: SessionState = app_state.sessions.lock().await.get(&token)?;

    let persistence = app_state.persistence.lock().await;
    let view: PageView = current_view(&persistence, &app_state.recommender, &state)?;
    drop(persistence);

    Ok(Json(view))
}

/// Handler for POST `/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ViewResponse>, HttpError> {
    let state: SessionState = app_state.sessions.lock().await.get(&token)?;

    let result: ApiResult<TransitionResponse> =
        run_store_blocking(&app_state, move |persistence| login(persistence, &state, &req))
            .await?;

    app_state
        .sessions
        .lock()
        .await
        .update(&token, result.new_state.clone())?;
    let response: ViewResponse = render_transition(&app_state, &result).await?;

    Ok(Json(response))
}

/// Handler for POST `/signup` endpoint.
async fn handle_signup(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ViewResponse>, HttpError> {
    let state: SessionState = app_state.sessions.lock().await.get(&token)?;

    let result: ApiResult<TransitionResponse> =
        run_store_blocking(&app_state, move |persistence| signup(persistence, &state, &req))
            .await?;

    app_state
        .sessions
        .lock()
        .await
        .update(&token, result.new_state.clone())?;
    let response: ViewResponse = render_transition(&app_state, &result).await?;

    Ok(Json(response))
}

/// Handler for POST `/navigate` endpoint.
async fn handle_navigate(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<ViewResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: SessionState = sessions.get(&token)?;

    info!(page = %state.page, action = ?req.action, "Handling navigate request");

    let result: ApiResult<TransitionResponse> = navigate(&state, req.action)?;
    sessions.update(&token, result.new_state.clone())?;
    drop(sessions);

    let response: ViewResponse = render_transition(&app_state, &result).await?;

    Ok(Json(response))
}

/// Handler for POST `/recommend` endpoint.
async fn handle_recommend(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, HttpError> {
    let state: SessionState = app_state.sessions.lock().await.get(&token)?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<RecommendResponse> =
        recommend(&mut persistence, &app_state.recommender, &state, &req)?;
    drop(persistence);

    app_state
        .sessions
        .lock()
        .await
        .update(&token, result.new_state)?;

    Ok(Json(result.response))
}

/// Handler for GET `/crops/{name}` endpoint.
#[allow(clippy::unused_async)]
async fn handle_describe_crop(Path(name): Path<String>) -> Json<CropInfoResponse> {
    Json(describe_crop(&name))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/sessions",
            post(handle_create_session).delete(handle_end_session),
        )
        .route("/view", get(handle_get_view))
        .route("/login", post(handle_login))
        .route("/signup", post(handle_signup))
        .route("/navigate", post(handle_navigate))
        .route("/recommend", post(handle_recommend))
        .route("/crops/{name}", get(handle_describe_crop))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Crop Recommendation Server");

    let dataset: Dataset = Dataset::from_path(&args.dataset).inspect_err(|e| {
        error!(path = %args.dataset.display(), error = %e, "Cannot load dataset");
    })?;
    let config: TrainingConfig = TrainingConfig::default()
        .with_seed(args.seed)
        .with_trees(args.trees);
    let recommender: Recommender = Recommender::train(&dataset, &config).inspect_err(|e| {
        error!(error = %e, "Training failed");
    })?;
    info!(accuracy = recommender.accuracy(), "Model ready");

    let persistence: Persistence =
        Persistence::new_with_dir(&args.data_dir, args.password_storage())?;

    let sessions: SessionRegistry = SessionRegistry::new(time::Duration::minutes(i64::from(
        args.session_ttl_minutes,
    )));

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        sessions: Arc::new(Mutex::new(sessions)),
        recommender: Arc::new(recommender),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
