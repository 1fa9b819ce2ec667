//! Modal dialog state for the UI.

use zeroize::Zeroizing;

use crate::state::types::ProfileId;

/// Share targets offered in the share menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    /// Copy the profile link to the clipboard.
    CopyLink,
    /// Facebook sharer popup.
    Facebook,
    /// Twitter intent popup.
    Twitter,
    /// `LinkedIn` share-offsite popup.
    LinkedIn,
    /// `TikTok` has no web sharer; copies the link instead.
    TikTok,
}

impl ShareTarget {
    /// All targets in menu order.
    pub const ALL: [Self; 5] = [
        Self::CopyLink,
        Self::Facebook,
        Self::Twitter,
        Self::LinkedIn,
        Self::TikTok,
    ];

    /// Label key for the menu row.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::CopyLink => "app.share.copy_link",
            Self::Facebook => "app.share.facebook",
            Self::Twitter => "app.share.twitter",
            Self::LinkedIn => "app.share.linkedin",
            Self::TikTok => "app.share.tiktok",
        }
    }
}

/// Blocking dialog shown above everything else.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// No modal.
    #[default]
    None,
    /// Informational message dismissed with Enter/Esc.
    Alert {
        /// Already-localized text.
        message: String,
    },
    /// Shared-secret prompt that unlocks admin mode.
    AdminLogin {
        /// Typed secret; wiped from memory when dropped.
        input: Zeroizing<String>,
    },
    /// Confirmation before leaving admin mode.
    ConfirmLogout,
    /// Confirmation before deleting a profile.
    ConfirmDelete {
        /// Record slated for removal.
        id: ProfileId,
    },
    /// Share target picker for the open profile.
    ShareMenu {
        /// Highlighted row in [`ShareTarget::ALL`].
        selected: usize,
    },
    /// Landing-page article reader.
    Article {
        /// Index into [`crate::state::INSIGHTS`].
        index: usize,
    },
    /// Keyboard shortcut reference.
    Help,
}

impl Modal {
    /// Whether no modal is active.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
