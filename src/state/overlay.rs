//! Detail overlay state: the profile panel shown above the active view.

use std::time::{Duration, Instant};

use crate::state::types::{DetailTab, EDITOR_FIELDS, EditorField, Profile, ProfileId};

/// How long the "link copied" indicator stays visible.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

/// Sub-mode of an open overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayMode {
    /// Read-only tabs.
    #[default]
    View,
    /// Edit form bound to `Overlay::draft`.
    Edit,
}

/// Overlay state.
///
/// `displayed` is a snapshot of the record taken when the overlay opened (or
/// after a save). It stays valid while the overlay closes, even if the store
/// changes underneath, and is only cleared by [`Overlay::finish_close`] for the
/// matching open session.
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    /// Id of the profile being shown; cleared after the close delay.
    pub open_id: Option<ProfileId>,
    /// Snapshot rendered by the overlay.
    pub displayed: Option<Profile>,
    /// Whether the overlay is visible.
    pub is_open: bool,
    /// View or edit sub-mode.
    pub mode: OverlayMode,
    /// Working copy edited in `Edit` mode; never aliased with the store.
    pub draft: Option<Profile>,
    /// Active detail tab.
    pub tab: DetailTab,
    /// Incremented on every open; identifies which open a deferred clear belongs to.
    pub session: u64,
    /// Session token of a scheduled clear, if any.
    pub pending_close: Option<u64>,
    /// Deadline of the "link copied" indicator.
    pub copied_until: Option<Instant>,
    /// Cursor into [`EDITOR_FIELDS`].
    pub field: usize,
}

impl Overlay {
    /// What: Show `profile` in a new open session.
    ///
    /// Inputs:
    /// - `profile`: Snapshot to display
    /// - `edit`: Start directly in edit mode with a draft copy
    ///
    /// Details:
    /// - Resets the tab to Overview and clears the copied indicator.
    /// - Starting a new session disarms any clear still pending from a previous close.
    pub fn show(&mut self, profile: Profile, edit: bool) {
        self.session = self.session.wrapping_add(1);
        self.pending_close = None;
        self.is_open = true;
        self.open_id = Some(profile.id);
        self.tab = DetailTab::Overview;
        self.copied_until = None;
        self.field = 0;
        if edit {
            self.mode = OverlayMode::Edit;
            self.draft = Some(profile.clone());
        } else {
            self.mode = OverlayMode::View;
            self.draft = None;
        }
        self.displayed = Some(profile);
    }

    /// What: Hide the overlay and arm a deferred clear.
    ///
    /// Output:
    /// - `Some(token)` to pass to [`Overlay::finish_close`] once the exit delay
    ///   elapsed; `None` when the overlay was not open.
    pub fn close(&mut self) -> Option<u64> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.mode = OverlayMode::View;
        self.draft = None;
        self.pending_close = Some(self.session);
        Some(self.session)
    }

    /// What: Complete a deferred close.
    ///
    /// Inputs:
    /// - `token`: Session token returned by [`Overlay::close`]
    ///
    /// Output:
    /// - `true` when the displayed profile was cleared; `false` for a stale token.
    ///
    /// Details:
    /// - A token from an earlier session is ignored so a reopened overlay is never
    ///   wiped by an old timer.
    pub fn finish_close(&mut self, token: u64) -> bool {
        if self.is_open || self.pending_close != Some(token) || token != self.session {
            return false;
        }
        self.pending_close = None;
        self.open_id = None;
        self.displayed = None;
        true
    }

    /// Copy the displayed profile into a fresh draft and switch to edit mode.
    pub fn begin_edit(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        let Some(profile) = self.displayed.clone() else {
            return false;
        };
        self.draft = Some(profile);
        self.mode = OverlayMode::Edit;
        self.field = 0;
        true
    }

    /// Whether the overlay is open in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.is_open && self.mode == OverlayMode::Edit
    }

    /// Editor row under the cursor.
    #[must_use]
    pub fn current_field(&self) -> EditorField {
        EDITOR_FIELDS[self.field.min(EDITOR_FIELDS.len() - 1)]
    }

    /// Move the editor cursor down, stopping at the last row.
    pub fn next_field(&mut self) {
        if self.field + 1 < EDITOR_FIELDS.len() {
            self.field += 1;
        }
    }

    /// Move the editor cursor up, stopping at the first row.
    pub const fn prev_field(&mut self) {
        self.field = self.field.saturating_sub(1);
    }

    /// Start the copied indicator at `now`.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPIED_INDICATOR);
    }

    /// Whether the copied indicator is visible at `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Drop the copied indicator once its deadline passed.
    pub fn expire_indicators(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }
}
