// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Page, SessionState};
use croprec_domain::Username;

pub fn create_logged_in_state(page: Page) -> SessionState {
    SessionState {
        page,
        logged_in: true,
        username: Some(Username::new("alice")),
    }
}

pub fn create_state_on(page: Page) -> SessionState {
    SessionState {
        page,
        ..SessionState::new()
    }
}

/// Every command, with placeholder payloads.
pub fn all_commands() -> Vec<crate::Command> {
    use crate::{Command, SignupOutcome};
    use croprec_domain::AuthOutcome;

    vec![
        Command::SubmitLogin {
            username: Username::new("alice"),
            outcome: AuthOutcome::Success,
        },
        Command::OpenSignup,
        Command::SubmitSignup {
            outcome: SignupOutcome::Created,
        },
        Command::BackToLogin,
        Command::SubmitRecommendation,
        Command::ViewHistory,
        Command::Logout,
        Command::BackToApp,
    ]
}
