//! Application state: value types, the profile store, overlay and modal state.

pub mod app_state;
pub mod modal;
pub mod overlay;
pub mod store;
pub mod types;

pub use app_state::AppState;
pub use modal::{Modal, ShareTarget};
pub use overlay::{Overlay, OverlayMode};
pub use store::ProfileStore;
pub use types::{
    ActiveView, Category, DetailTab, EDITOR_FIELDS, EditorField, INSIGHTS, Insight, Profile,
    ProfileId, Ratings, TextField,
};
