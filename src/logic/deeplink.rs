//! Startup deep link: open the profile named by the `profileId` query parameter.

use url::Url;

use crate::state::{AppState, ProfileId};

/// Query parameter carrying the profile id.
pub const PROFILE_ID_PARAM: &str = "profileId";

/// What: Extract the profile id from a location string.
///
/// Inputs:
/// - `location`: Absolute URL (`https://host/path?profileId=3`) or a relative
///   form (`?profileId=3`, `/path?profileId=3`)
///
/// Output:
/// - `Some(id)` when the parameter is present and is a positive integer.
///
/// Details:
/// - Malformed locations, missing parameters and non-numeric or zero values
///   all yield `None`; a deep link is never an error.
#[must_use]
pub fn parse_location(location: &str) -> Option<ProfileId> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return None;
    }
    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) => Url::parse("http://localhost/").ok()?.join(trimmed).ok()?,
    };
    let (_, value) = url
        .query_pairs()
        .find(|(key, _)| key == PROFILE_ID_PARAM)?;
    value.trim().parse::<ProfileId>().ok().filter(|id| *id > 0)
}

/// Deep link armed at startup and waiting for its target to be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingDeepLink {
    target: Option<ProfileId>,
}

impl PendingDeepLink {
    /// Arm with the id read from the startup location.
    #[must_use]
    pub const fn armed(target: Option<ProfileId>) -> Self {
        Self { target }
    }

    /// Id still waiting to be resolved.
    #[must_use]
    pub const fn target(&self) -> Option<ProfileId> {
        self.target
    }
}

/// What: Try to resolve the pending deep link against the current store.
///
/// Inputs:
/// - `app`: Application state whose store was just loaded or replaced
///
/// Output:
/// - `true` when the link resolved and the overlay opened.
///
/// Details:
/// - Switches to the directory of the profile's category and opens the
///   overlay in view mode.
/// - An id missing from the store leaves the link armed, so a later store
///   load can still satisfy it. Once resolved the link is disarmed and later
///   loads never reopen it.
pub fn resolve_pending(app: &mut AppState) -> bool {
    let Some(id) = app.deep_link.target else {
        return false;
    };
    let Some(category) = app.store.get(id).map(|p| p.category) else {
        tracing::debug!(id, "deep link target not loaded yet");
        return false;
    };
    app.deep_link.target = None;
    app.view = category.directory();
    app.query.clear();
    app.clamp_selection();
    if let Some(pos) = app.visible_profiles().iter().position(|p| p.id == id) {
        app.selected = pos;
        app.list_state.select(Some(pos));
    }
    let opened = super::editor::open(app, id);
    tracing::info!(id, opened, "resolved deep link");
    opened
}
