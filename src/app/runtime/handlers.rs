use std::time::Instant;

use crate::i18n::t_fmt1;
use crate::logic::{editor, resolve_pending};
use crate::state::{AppState, Modal};

use super::channels::SeedResult;

/// What: Apply a finished seed load.
///
/// Inputs:
/// - `app`: Application state
/// - `result`: Loaded records or a readable error
///
/// Details:
/// - On success the store is replaced, the cursor clamped and a pending
///   deep link re-checked against the new records.
/// - On failure the store keeps its contents and an alert is shown.
pub fn handle_seed_result(app: &mut AppState, result: SeedResult) {
    app.loading = false;
    match result {
        Ok(profiles) => {
            tracing::info!(count = profiles.len(), "profiles loaded");
            app.store.replace_all(profiles);
            app.clamp_selection();
            resolve_pending(app);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load profiles");
            app.modal = Modal::Alert {
                message: t_fmt1(app, "app.alerts.seed_failed", e),
            };
        }
    }
}

/// Expire time-limited indicators such as "link copied".
pub fn handle_tick(app: &mut AppState) {
    app.overlay.expire_indicators(Instant::now());
}

/// Clear the overlay snapshot once its close delay has elapsed.
pub fn handle_close_done(app: &mut AppState, token: u64) {
    if !editor::finish_close(app, token) {
        tracing::trace!(token, "stale overlay close ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::PendingDeepLink;
    use crate::state::{ActiveView, Category, Profile};

    #[test]
    /// What: A deep link armed before the seed arrives opens once it loads
    fn seed_result_resolves_pending_deep_link() {
        let mut app = AppState {
            deep_link: PendingDeepLink::armed(Some(2)),
            loading: true,
            ..AppState::default()
        };
        let mut p = Profile::blank(2, Category::Business);
        p.name.so = "Dahab".into();
        handle_seed_result(&mut app, Ok(vec![Profile::blank(1, Category::Politician), p]));
        assert!(!app.loading);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.view, ActiveView::BusinessDirectory);
        assert_eq!(app.overlay.open_id, Some(2));
    }

    #[test]
    /// What: Adding before the seed arrives is refused, so seed records keep their ids
    fn add_before_seed_is_refused() {
        let mut app = AppState {
            admin: true,
            loading: true,
            ..AppState::default()
        };
        assert_eq!(editor::add_profile(&mut app), None);
        assert!(!app.overlay.is_open);

        let mut p = Profile::blank(1, Category::Politician);
        p.name.so = "Xamse".into();
        handle_seed_result(&mut app, Ok(vec![p]));
        assert!(!editor::save(&mut app));
        assert_eq!(app.store.get(1).map(|p| p.name.so.as_str()), Some("Xamse"));

        app.view = ActiveView::PoliticsDirectory;
        assert_eq!(editor::add_profile(&mut app), Some(2));
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn seed_failure_shows_alert_and_keeps_store() {
        let mut app = AppState::default();
        app.store.replace_all(vec![Profile::blank(1, Category::Politician)]);
        handle_seed_result(&mut app, Err("boom".to_string()));
        assert_eq!(app.store.len(), 1);
        match &app.modal {
            Modal::Alert { message } => assert!(message.contains("boom")),
            other => panic!("unexpected modal {other:?}"),
        }
    }

    #[test]
    /// What: Only the latest close token clears the snapshot
    fn close_done_respects_session() {
        let mut app = AppState::default();
        let mut p = Profile::blank(1, Category::Politician);
        p.name.so = "Xamse".into();
        app.store.replace_all(vec![p]);
        editor::open(&mut app, 1);
        let stale = editor::close(&mut app).expect("token");
        editor::open(&mut app, 1);
        handle_close_done(&mut app, stale);
        assert!(app.overlay.displayed.is_some());
        assert!(app.overlay.is_open);
    }
}
