//! Shared-secret admin toggle.
//!
//! This is a convenience gate for the session, not authentication: there is no
//! lockout, no identity and no expiry. Access control must live elsewhere.

use zeroize::Zeroizing;

use crate::i18n::t;
use crate::state::{AppState, Modal, OverlayMode};

/// What: Start the admin toggle.
///
/// Details:
/// - When admin mode is off, opens the secret prompt with an empty buffer.
/// - When it is on, asks for logout confirmation instead.
pub fn open_prompt(app: &mut AppState) {
    app.modal = if app.admin {
        Modal::ConfirmLogout
    } else {
        Modal::AdminLogin {
            input: Zeroizing::new(String::new()),
        }
    };
}

/// What: Compare `input` with the configured secret and toggle admin mode.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `input`: Secret typed by the user
///
/// Output:
/// - `true` when admin mode was granted.
///
/// Details:
/// - Empty input is a silent no-op (the prompt was dismissed).
/// - A wrong secret shows the localized rejection alert and leaves admin off.
/// - A correct secret turns admin mode on and shows the access alert.
pub fn login(app: &mut AppState, input: &str) -> bool {
    if input.is_empty() {
        app.modal = Modal::None;
        return false;
    }
    if input == app.admin_secret.as_str() {
        app.admin = true;
        app.modal = Modal::Alert {
            message: t(app, "app.admin.access_granted"),
        };
        tracing::info!("admin mode enabled");
        true
    } else {
        app.modal = Modal::Alert {
            message: t(app, "app.admin.incorrect"),
        };
        tracing::warn!("admin secret rejected");
        false
    }
}

/// What: Submit the secret typed into the open prompt.
///
/// Output:
/// - Result of [`login`]; `false` when no prompt was open.
///
/// Details:
/// - The prompt buffer is moved out of the modal and zeroized when dropped.
pub fn submit_prompt(app: &mut AppState) -> bool {
    match std::mem::take(&mut app.modal) {
        Modal::AdminLogin { input } => login(app, &input),
        other => {
            app.modal = other;
            false
        }
    }
}

/// What: Leave admin mode.
///
/// Details:
/// - An edit in progress is abandoned: the draft is dropped and the overlay
///   returns to view mode, since editing is no longer permitted.
pub fn logout(app: &mut AppState) {
    if !app.admin {
        return;
    }
    app.admin = false;
    if app.overlay.mode == OverlayMode::Edit {
        app.overlay.mode = OverlayMode::View;
        app.overlay.draft = None;
    }
    app.modal = Modal::Alert {
        message: t(app, "app.admin.logged_out"),
    };
    tracing::info!("admin mode disabled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Wrong secret is rejected, correct secret grants admin mode
    ///
    /// - Input: "wrong" then the configured secret
    /// - Output: Rejection alert and admin off, then admin on
    fn login_rejects_wrong_and_accepts_correct_secret() {
        let mut app = AppState::default();
        assert!(!login(&mut app, "wrong"));
        assert!(!app.admin);
        match &app.modal {
            Modal::Alert { message } => assert_eq!(message, &t(&app, "app.admin.incorrect")),
            other => panic!("expected rejection alert, got {other:?}"),
        }

        assert!(login(&mut app, "admin"));
        assert!(app.admin);
    }

    #[test]
    fn empty_input_is_silent_noop() {
        let mut app = AppState::default();
        open_prompt(&mut app);
        assert!(!submit_prompt(&mut app));
        assert!(!app.admin);
        assert!(app.modal.is_none());
    }

    #[test]
    /// What: The prompt becomes a logout confirmation once admin is on
    fn open_prompt_offers_logout_when_admin() {
        let mut app = AppState::default();
        app.admin = true;
        open_prompt(&mut app);
        assert!(matches!(app.modal, Modal::ConfirmLogout));
        logout(&mut app);
        assert!(!app.admin);
    }

    #[test]
    fn submit_reads_prompt_buffer() {
        let mut app = AppState::default();
        app.admin_secret = Zeroizing::new("s3cret".into());
        app.modal = Modal::AdminLogin {
            input: Zeroizing::new("s3cret".into()),
        };
        assert!(submit_prompt(&mut app));
        assert!(app.admin);
    }
}
