//! Profile links and share targets.

use std::time::Instant;

use url::Url;

use crate::logic::deeplink::PROFILE_ID_PARAM;
use crate::state::{AppState, Modal, Profile, ProfileId, ShareTarget};
use crate::util::percent_encode;

/// What: Build the public link of a profile.
///
/// Inputs:
/// - `base`: Public origin and path (e.g. `https://diiwaan.so/people`)
/// - `id`: Profile id
///
/// Output:
/// - `base` with its query and fragment replaced by `?profileId=<id>`.
///
/// Details:
/// - An unparseable base is used verbatim up to its first `?` or `#`.
#[must_use]
pub fn profile_url(base: &str, id: ProfileId) -> String {
    match Url::parse(base.trim()) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.set_query(None);
            url.query_pairs_mut()
                .append_pair(PROFILE_ID_PARAM, &id.to_string());
            url.into()
        }
        Err(e) => {
            tracing::debug!(error = %e, base, "public url is not absolute");
            let stem = base.trim().split(['?', '#']).next().unwrap_or_default();
            format!("{stem}?{PROFILE_ID_PARAM}={id}")
        }
    }
}

/// What: Web share endpoint for a social target.
///
/// Inputs:
/// - `target`: Share target
/// - `link`: Profile link from [`profile_url`]
/// - `title`: Text to prefill (name and role) where the target supports it
///
/// Output:
/// - URL to open in the browser; `None` for targets that only copy the link.
#[must_use]
pub fn share_target_url(target: ShareTarget, link: &str, title: &str) -> Option<String> {
    let link = percent_encode(link);
    match target {
        ShareTarget::Facebook => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={link}"
        )),
        ShareTarget::Twitter => Some(format!(
            "https://twitter.com/intent/tweet?text={}&url={link}",
            percent_encode(title)
        )),
        ShareTarget::LinkedIn => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={link}"
        )),
        ShareTarget::CopyLink | ShareTarget::TikTok => None,
    }
}

/// Share title: resolved name and role in the active locale.
fn share_title(app: &AppState, profile: &Profile) -> String {
    format!(
        "{} - {}",
        profile.name.resolve(app.locale),
        profile.role.resolve(app.locale)
    )
}

/// Open the share menu for the profile shown in the overlay.
pub fn open_menu(app: &mut AppState) -> bool {
    if !app.overlay.is_open || app.overlay.displayed.is_none() {
        return false;
    }
    app.modal = Modal::ShareMenu { selected: 0 };
    true
}

/// Link of the profile shown in the overlay.
#[must_use]
pub fn current_link(app: &AppState) -> Option<String> {
    let id = app.overlay.displayed.as_ref()?.id;
    Some(profile_url(&app.public_url, id))
}

/// What: Copy the current profile link using `copier`.
///
/// Inputs:
/// - `app`: Application state with an open overlay
/// - `now`: Clock reading used for the indicator deadline
/// - `copier`: Clipboard writer
///
/// Output:
/// - `true` when the link was copied and the indicator started.
///
/// Details:
/// - A clipboard failure is logged and only shows up as a missing indicator.
pub fn copy_link_with(
    app: &mut AppState,
    now: Instant,
    copier: impl FnOnce(&str) -> Result<(), String>,
) -> bool {
    let Some(link) = current_link(app) else {
        return false;
    };
    match copier(&link) {
        Ok(()) => {
            app.overlay.mark_copied(now);
            tracing::debug!(link = %link, "copied profile link");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            false
        }
    }
}

/// Copy the current profile link to the system clipboard.
pub fn copy_link(app: &mut AppState) -> bool {
    copy_link_with(app, Instant::now(), crate::util::copy_to_clipboard)
}

/// What: Run the share target highlighted in the menu.
///
/// Inputs:
/// - `app`: Application state with the share menu open
/// - `target`: Chosen target
///
/// Details:
/// - Social targets open their web sharer in the browser; copy targets
///   write the link to the clipboard. The menu closes either way.
pub fn activate(app: &mut AppState, target: ShareTarget) {
    app.modal = Modal::None;
    let Some(profile) = app.overlay.displayed.clone() else {
        return;
    };
    let link = profile_url(&app.public_url, profile.id);
    match share_target_url(target, &link, &share_title(app, &profile)) {
        Some(url) => {
            tracing::info!(?target, id = profile.id, "sharing profile");
            crate::util::open_url(&url);
        }
        None => {
            copy_link(app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, ProfileStore};
    use std::time::Duration;

    #[test]
    /// What: Existing query and fragment are replaced by the profile id
    fn profile_url_replaces_query() {
        assert_eq!(
            profile_url("https://diiwaan.so/people?lang=en#top", 4),
            "https://diiwaan.so/people?profileId=4"
        );
        assert_eq!(
            profile_url("https://diiwaan.so", 7),
            "https://diiwaan.so/?profileId=7"
        );
        assert_eq!(profile_url("local/path?x=1", 2), "local/path?profileId=2");
    }

    #[test]
    fn social_targets_encode_link() {
        let link = "https://diiwaan.so/?profileId=1";
        let fb = share_target_url(ShareTarget::Facebook, link, "x").expect("web sharer");
        assert!(fb.ends_with("u=https%3A%2F%2Fdiiwaan.so%2F%3FprofileId%3D1"));
        let tw = share_target_url(ShareTarget::Twitter, link, "Xamse - Wasiir").expect("web sharer");
        assert!(tw.contains("text=Xamse%20-%20Wasiir"));
        assert!(share_target_url(ShareTarget::TikTok, link, "x").is_none());
        assert!(share_target_url(ShareTarget::CopyLink, link, "x").is_none());
    }

    fn open_app() -> AppState {
        let mut p = Profile::blank(1, Category::Politician);
        p.name.so = "Xamse".into();
        let mut app = AppState {
            store: ProfileStore::from_seed(vec![p]),
            ..AppState::default()
        };
        crate::logic::editor::open(&mut app, 1);
        app
    }

    #[test]
    /// What: A successful copy shows the indicator for two seconds
    fn copy_link_marks_indicator() {
        let mut app = open_app();
        let t0 = Instant::now();
        let mut copied = String::new();
        assert!(copy_link_with(&mut app, t0, |s| {
            copied = s.to_string();
            Ok(())
        }));
        assert_eq!(copied, "https://diiwaan.so/?profileId=1");
        assert!(app.overlay.is_copied(t0 + Duration::from_secs(1)));
        assert!(!app.overlay.is_copied(t0 + Duration::from_secs(2)));
    }

    #[test]
    /// What: A clipboard failure only results in a missing indicator
    fn copy_failure_is_silent() {
        let mut app = open_app();
        assert!(!copy_link_with(&mut app, Instant::now(), |_| Err("denied".into())));
        assert!(app.overlay.copied_until.is_none());
        assert!(app.modal.is_none());
    }
}
