// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the crop recommendation service.
//!
//! This crate turns client requests into controller commands, resolves the
//! store and model lookups those commands depend on, and owns the registry
//! of per-client sessions. It performs no network I/O.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{ApiResult, current_view, describe_crop, login, navigate, recommend, signup};
pub use request_response::{
    CropInfoResponse, HistoryRowResponse, LoginRequest, NavigateRequest, NavigationAction,
    PageView, RecommendRequest, RecommendResponse, SignupRequest, TransitionResponse,
};
pub use session::{SessionRecord, SessionRegistry};
