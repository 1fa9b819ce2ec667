//! Admin capability set consulted by every admin-only affordance.

/// What the current session may do to the profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Add new profiles.
    pub can_create: bool,
    /// Open the edit form and save drafts.
    pub can_edit: bool,
    /// Delete profiles.
    pub can_delete: bool,
}

/// What: Derive the capability set from the admin flag.
///
/// Inputs:
/// - `admin_mode`: Whether the shared secret was entered this session
///
/// Output:
/// - All capabilities when admin, none otherwise.
///
/// Details:
/// - A UI convenience gate; real access control must live outside this crate.
#[must_use]
pub const fn capabilities(admin_mode: bool) -> Capabilities {
    Capabilities {
        can_create: admin_mode,
        can_edit: admin_mode,
        can_delete: admin_mode,
    }
}

/// What: Capability set of the running session.
///
/// Details:
/// - Nothing is granted until the first seed load has been handled, so no
///   session record can take an id the seed is about to claim.
#[must_use]
pub const fn current(app: &crate::state::AppState) -> Capabilities {
    capabilities(app.admin && !app.loading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_unlocks_everything() {
        assert_eq!(
            capabilities(true),
            Capabilities {
                can_create: true,
                can_edit: true,
                can_delete: true
            }
        );
        assert_eq!(capabilities(false), Capabilities::default());
    }

    #[test]
    /// What: An admin gets no capabilities while the seed is still loading
    fn loading_withholds_admin_capabilities() {
        let mut app = crate::state::AppState {
            admin: true,
            loading: true,
            ..crate::state::AppState::default()
        };
        assert_eq!(current(&app), Capabilities::default());
        app.loading = false;
        assert!(current(&app).can_create);
    }
}
