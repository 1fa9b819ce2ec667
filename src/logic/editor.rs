//! Detail overlay and inline editor operations.
//!
//! The overlay shows a snapshot of one record. Edits go to a separate draft
//! and reach the store only through [`save`], which overwrites the whole
//! record (last writer wins, no field-level merge).

use crate::i18n::Locale;
use crate::logic::gating;
use crate::state::{AppState, Category, EditorField, Modal, OverlayMode, Profile, ProfileId};

/// Result of cancelling an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The overlay was not in edit mode.
    NotEditing,
    /// The draft was discarded and the stored record is shown again.
    Reverted,
    /// The draft belonged to a record that was never saved with a name.
    ///
    /// The record is still in the store; the caller decides whether to remove it.
    UnsavedNew {
        /// Id of the never-saved record.
        id: ProfileId,
    },
}

/// What: Open the overlay for the record with `id`.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `id`: Record to show
///
/// Output:
/// - `false` when no record has that id.
///
/// Details:
/// - Starts in view mode on the Overview tab with the copied indicator cleared.
/// - A freshly created record (empty primary-locale name) opens straight in
///   edit mode when the session may edit; otherwise it opens read-only.
pub fn open(app: &mut AppState, id: ProfileId) -> bool {
    let Some(profile) = app.store.get(id).cloned() else {
        tracing::debug!(id, "open ignored: no such profile");
        return false;
    };
    let edit = profile.is_unsaved_new() && gating::current(app).can_edit;
    app.overlay.show(profile, edit);
    tracing::debug!(id, edit, "opened profile");
    true
}

/// What: Hide the overlay.
///
/// Output:
/// - Session token for the deferred clear, `None` when nothing was open.
///
/// Details:
/// - The snapshot stays in place until [`finish_close`] runs with the same
///   token after the exit delay. A share menu belonging to the overlay is
///   dismissed along with it.
pub fn close(app: &mut AppState) -> Option<u64> {
    let token = app.overlay.close()?;
    if matches!(app.modal, Modal::ShareMenu { .. }) {
        app.modal = Modal::None;
    }
    tracing::debug!(token, "overlay closing");
    Some(token)
}

/// Clear the overlay snapshot once the exit delay for `token` elapsed.
pub fn finish_close(app: &mut AppState, token: u64) -> bool {
    app.overlay.finish_close(token)
}

/// What: Switch the open overlay to edit mode.
///
/// Output:
/// - `false` when the session may not edit or no overlay is open.
pub fn enter_edit(app: &mut AppState) -> bool {
    if !gating::current(app).can_edit {
        return false;
    }
    app.overlay.begin_edit()
}

/// Editor row under the cursor, when editing.
#[must_use]
pub fn current_field(app: &AppState) -> Option<EditorField> {
    app.overlay
        .is_editing()
        .then(|| app.overlay.current_field())
}

/// Move the editor cursor to the next row.
pub fn next_field(app: &mut AppState) {
    if app.overlay.is_editing() {
        app.overlay.next_field();
    }
}

/// Move the editor cursor to the previous row.
pub fn prev_field(app: &mut AppState) {
    if app.overlay.is_editing() {
        app.overlay.prev_field();
    }
}

/// Draft and cursor row, when editing.
fn draft_and_field(app: &mut AppState) -> Option<(&mut Profile, EditorField)> {
    if !app.overlay.is_editing() {
        return None;
    }
    let field = app.overlay.current_field();
    app.overlay.draft.as_mut().map(|draft| (draft, field))
}

/// What: Apply a typed character to the draft field under the cursor.
///
/// Details:
/// - Text rows append the character.
/// - On the verified and category rows a space toggles the value and any
///   other character is ignored.
pub fn input_char(app: &mut AppState, ch: char) {
    let Some((draft, field)) = draft_and_field(app) else {
        return;
    };
    match field {
        EditorField::Image => draft.image.push(ch),
        EditorField::Text(text, locale) => text.bundle_mut(draft).get_mut(locale).push(ch),
        EditorField::Verified if ch == ' ' => draft.verified = !draft.verified,
        EditorField::Category if ch == ' ' => draft.category = draft.category.toggled(),
        EditorField::Verified | EditorField::Category => {}
    }
}

/// Delete the last character of the text row under the cursor.
pub fn backspace(app: &mut AppState) {
    let Some((draft, field)) = draft_and_field(app) else {
        return;
    };
    match field {
        EditorField::Image => {
            draft.image.pop();
        }
        EditorField::Text(text, locale) => {
            text.bundle_mut(draft).get_mut(locale).pop();
        }
        EditorField::Verified | EditorField::Category => {}
    }
}

/// Flip the verified flag or the category when the cursor is on one of them.
pub fn toggle_field(app: &mut AppState) {
    let Some((draft, field)) = draft_and_field(app) else {
        return;
    };
    match field {
        EditorField::Verified => draft.verified = !draft.verified,
        EditorField::Category => draft.category = draft.category.toggled(),
        EditorField::Image | EditorField::Text(..) => {}
    }
}

/// What: Set one localized text field of the draft.
///
/// Inputs:
/// - `field`: Which bundle to change
/// - `locale`: Which entry of the bundle
/// - `text`: New value
pub fn set_draft_text(
    app: &mut AppState,
    field: crate::state::TextField,
    locale: Locale,
    text: &str,
) {
    if !app.overlay.is_editing() {
        return;
    }
    if let Some(draft) = app.overlay.draft.as_mut() {
        field.bundle_mut(draft).set(locale, text);
    }
}

/// What: Write the draft back to the store.
///
/// Output:
/// - `true` when the stored record was replaced.
///
/// Details:
/// - The entire record whose id equals the draft id is overwritten.
/// - On success the overlay returns to view mode showing the saved values.
/// - When the record vanished meanwhile the draft is kept and nothing changes.
pub fn save(app: &mut AppState) -> bool {
    if !app.overlay.is_editing() || !gating::current(app).can_edit {
        return false;
    }
    let Some(draft) = app.overlay.draft.clone() else {
        return false;
    };
    let id = draft.id;
    if !app.store.replace(draft.clone()) {
        tracing::warn!(id, "save ignored: profile no longer exists");
        return false;
    }
    app.overlay.displayed = Some(draft);
    app.overlay.draft = None;
    app.overlay.mode = OverlayMode::View;
    app.clamp_selection();
    tracing::info!(id, "saved profile");
    true
}

/// What: Discard the draft and show the stored record again.
///
/// Output:
/// - [`CancelOutcome::UnsavedNew`] when the stored record still has no
///   primary-locale name; the record is left in the store.
pub fn cancel(app: &mut AppState) -> CancelOutcome {
    if !app.overlay.is_editing() {
        return CancelOutcome::NotEditing;
    }
    app.overlay.draft = None;
    app.overlay.mode = OverlayMode::View;
    let Some(id) = app.overlay.open_id else {
        return CancelOutcome::Reverted;
    };
    match app.store.get(id).cloned() {
        Some(stored) => {
            let unsaved = stored.is_unsaved_new();
            app.overlay.displayed = Some(stored);
            if unsaved {
                CancelOutcome::UnsavedNew { id }
            } else {
                CancelOutcome::Reverted
            }
        }
        None => CancelOutcome::Reverted,
    }
}

/// What: Cancel the edit and apply the configured policy for never-saved records.
///
/// Output:
/// - Close token when the overlay was closed because the record was discarded.
///
/// Details:
/// - With `discard_unsaved_on_cancel` the orphan record is removed and the
///   overlay closes; otherwise it stays in the store with an empty name.
pub fn cancel_edit(app: &mut AppState) -> Option<u64> {
    match cancel(app) {
        CancelOutcome::UnsavedNew { id } if app.discard_unsaved_on_cancel => {
            app.store.remove(id);
            app.clamp_selection();
            tracing::info!(id, "discarded unsaved profile");
            close(app)
        }
        CancelOutcome::UnsavedNew { id } => {
            tracing::debug!(id, "kept unsaved profile after cancel");
            None
        }
        CancelOutcome::NotEditing | CancelOutcome::Reverted => None,
    }
}

/// What: Ask for confirmation before deleting the open record.
///
/// Output:
/// - `false` when the session may not delete or nothing is open.
pub fn request_delete(app: &mut AppState) -> bool {
    if !gating::current(app).can_delete || !app.overlay.is_open {
        return false;
    }
    let Some(id) = app.overlay.open_id else {
        return false;
    };
    app.modal = Modal::ConfirmDelete { id };
    true
}

/// What: Delete a record after the user confirmed.
///
/// Inputs:
/// - `id`: Record named in the confirmation dialog
///
/// Output:
/// - Close token when the deleted record was open in the overlay.
///
/// Details:
/// - Declining the confirmation is handled by dismissing the modal; nothing
///   here runs in that case.
pub fn confirm_delete(app: &mut AppState, id: ProfileId) -> Option<u64> {
    app.modal = Modal::None;
    if !gating::current(app).can_delete {
        return None;
    }
    app.store.remove(id)?;
    app.clamp_selection();
    tracing::info!(id, "deleted profile");
    if app.overlay.is_open && app.overlay.open_id == Some(id) {
        close(app)
    } else {
        None
    }
}

/// What: Create a blank record and open it for editing.
///
/// Output:
/// - New id, or `None` when the session may not create records.
///
/// Details:
/// - The category follows the directory being browsed (politicians on the
///   landing screen). The record is inserted at the front of the store.
pub fn add_profile(app: &mut AppState) -> Option<ProfileId> {
    if !gating::current(app).can_create {
        return None;
    }
    let category = app.view.category().unwrap_or(Category::Politician);
    let id = app.store.create(|id| Profile::blank(id, category));
    app.clamp_selection();
    open(app, id);
    Some(id)
}

/// Show the next detail tab.
pub fn next_tab(app: &mut AppState) {
    if app.overlay.is_open && app.overlay.mode == OverlayMode::View {
        app.overlay.tab = app.overlay.tab.next();
    }
}

/// Show the previous detail tab.
pub fn prev_tab(app: &mut AppState) {
    if app.overlay.is_open && app.overlay.mode == OverlayMode::View {
        app.overlay.tab = app.overlay.tab.prev();
    }
}
