//! Core value types used by Diiwaan state.

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, LocalizedString};

/// Identifier of a profile record. Positive, unique and never reused within a session.
pub type ProfileId = u64;

/// Directory a profile belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Political figure.
    Politician,
    /// Company or business person.
    Business,
}

impl Category {
    /// Directory view listing profiles of this category.
    #[must_use]
    pub const fn directory(self) -> ActiveView {
        match self {
            Self::Politician => ActiveView::PoliticsDirectory,
            Self::Business => ActiveView::BusinessDirectory,
        }
    }

    /// The other category; used by the editor toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Politician => Self::Business,
            Self::Business => Self::Politician,
        }
    }

    /// Label key for this category.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Politician => "app.overlay.category_politician",
            Self::Business => "app.overlay.category_business",
        }
    }
}

/// Fame and popularity scores, conceptually percentages.
///
/// Values outside `0..=100` are stored as given; the renderer clamps bar widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    /// Public recognition.
    pub fame: i32,
    /// Public approval.
    pub popularity: i32,
}

/// A public-figure record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier.
    pub id: ProfileId,
    /// Display name.
    pub name: LocalizedString,
    /// Office, title or line of business.
    pub role: LocalizedString,
    /// City or region.
    pub location: LocalizedString,
    /// Directory the profile is listed in.
    pub category: Category,
    /// Whether the editorial team verified the record.
    #[serde(default)]
    pub verified: bool,
    /// Portrait or logo URI.
    #[serde(default)]
    pub image: String,
    /// Biography text.
    #[serde(default)]
    pub bio: LocalizedString,
    /// Offered services; only rendered for business profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<LocalizedString>>,
    /// Influence scores.
    #[serde(default)]
    pub ratings: Ratings,
}

impl Profile {
    /// Placeholder portrait assigned to new records.
    pub const PLACEHOLDER_IMAGE: &'static str = "https://via.placeholder.com/200";

    /// What: Build the blank record created by the admin "add" action.
    ///
    /// Inputs:
    /// - `id`: Freshly allocated identifier
    /// - `category`: Category of the directory the admin is browsing
    ///
    /// Output:
    /// - Record with empty name/role/bio, default capital-city location,
    ///   placeholder image and 50/50 ratings.
    #[must_use]
    pub fn blank(id: ProfileId, category: Category) -> Self {
        Self {
            id,
            name: LocalizedString::default(),
            role: LocalizedString::default(),
            location: LocalizedString::new("Muqdisho", "Mogadishu", "مقديشو"),
            category,
            verified: false,
            image: Self::PLACEHOLDER_IMAGE.to_string(),
            bio: LocalizedString::default(),
            services: None,
            ratings: Ratings {
                fame: 50,
                popularity: 50,
            },
        }
    }

    /// Whether this is a freshly created record that was never given a primary-locale name.
    #[must_use]
    pub fn is_unsaved_new(&self) -> bool {
        self.name.get(Locale::PRIMARY).is_empty()
    }

    /// Services to show in the overview tab: business profiles with a non-empty list only.
    #[must_use]
    pub fn visible_services(&self) -> &[LocalizedString] {
        match (&self.category, &self.services) {
            (Category::Business, Some(list)) => list,
            _ => &[],
        }
    }
}

/// Top-level screen. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Hero, category cards and insights.
    #[default]
    Landing,
    /// Politician listing.
    PoliticsDirectory,
    /// Business listing.
    BusinessDirectory,
}

impl ActiveView {
    /// Category listed by this view; `None` for the landing screen.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Landing => None,
            Self::PoliticsDirectory => Some(Category::Politician),
            Self::BusinessDirectory => Some(Category::Business),
        }
    }
}

/// Tab shown in the detail overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    /// Summary, services and verification status.
    #[default]
    Overview,
    /// Early-life section.
    Biography,
    /// Career placeholder.
    WorkHistory,
    /// Archive placeholder.
    Archive,
}

impl DetailTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Biography,
        Self::WorkHistory,
        Self::Archive,
    ];

    /// Following tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Biography,
            Self::Biography => Self::WorkHistory,
            Self::WorkHistory => Self::Archive,
            Self::Archive => Self::Overview,
        }
    }

    /// Preceding tab, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Archive,
            Self::Biography => Self::Overview,
            Self::WorkHistory => Self::Biography,
            Self::Archive => Self::WorkHistory,
        }
    }

    /// Label key for the tab header.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "app.overlay.tabs.overview",
            Self::Biography => "app.overlay.tabs.biography",
            Self::WorkHistory => "app.overlay.tabs.work",
            Self::Archive => "app.overlay.tabs.archive",
        }
    }
}

/// Localized text fields of a profile that the editor exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    /// `Profile::name`
    Name,
    /// `Profile::role`
    Role,
    /// `Profile::location`
    Location,
    /// `Profile::bio`
    Bio,
}

impl TextField {
    /// Label key for the field caption.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Name => "app.editor.name",
            Self::Role => "app.editor.role",
            Self::Location => "app.editor.location",
            Self::Bio => "app.editor.bio",
        }
    }

    /// Borrow the matching bundle of `profile` mutably.
    pub const fn bundle_mut(self, profile: &mut Profile) -> &mut LocalizedString {
        match self {
            Self::Name => &mut profile.name,
            Self::Role => &mut profile.role,
            Self::Location => &mut profile.location,
            Self::Bio => &mut profile.bio,
        }
    }

    /// Borrow the matching bundle of `profile`.
    #[must_use]
    pub const fn bundle(self, profile: &Profile) -> &LocalizedString {
        match self {
            Self::Name => &profile.name,
            Self::Role => &profile.role,
            Self::Location => &profile.location,
            Self::Bio => &profile.bio,
        }
    }
}

/// One row of the edit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorField {
    /// Image URI text input.
    Image,
    /// Verified checkbox.
    Verified,
    /// Category selector.
    Category,
    /// Localized text input.
    Text(TextField, Locale),
}

/// Edit form rows in display order.
pub const EDITOR_FIELDS: [EditorField; 15] = [
    EditorField::Image,
    EditorField::Verified,
    EditorField::Category,
    EditorField::Text(TextField::Name, Locale::So),
    EditorField::Text(TextField::Name, Locale::En),
    EditorField::Text(TextField::Name, Locale::Ar),
    EditorField::Text(TextField::Role, Locale::So),
    EditorField::Text(TextField::Role, Locale::En),
    EditorField::Text(TextField::Role, Locale::Ar),
    EditorField::Text(TextField::Location, Locale::So),
    EditorField::Text(TextField::Location, Locale::En),
    EditorField::Text(TextField::Location, Locale::Ar),
    EditorField::Text(TextField::Bio, Locale::So),
    EditorField::Text(TextField::Bio, Locale::En),
    EditorField::Text(TextField::Bio, Locale::Ar),
];

/// Landing-page article teaser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insight {
    /// Label key of the headline.
    pub title_key: &'static str,
    /// Label key of the section name.
    pub category_key: &'static str,
    /// Label key of the teaser text.
    pub summary_key: &'static str,
}

/// Articles featured on the landing screen.
pub const INSIGHTS: [Insight; 2] = [
    Insight {
        title_key: "app.insights.economy_title",
        category_key: "app.insights.economy_category",
        summary_key: "app.insights.economy_summary",
    },
    Insight {
        title_key: "app.insights.politics_title",
        category_key: "app.insights.politics_category",
        summary_key: "app.insights.politics_summary",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Seed JSON with optional fields omitted deserializes with defaults
    ///
    /// - Input: Politician record without services, image or bio
    /// - Output: `services` is None and the visible services list is empty
    fn profile_deserializes_with_defaults() {
        let json = r#"{
            "id": 9,
            "name": {"so": "Xamse"},
            "role": {"so": "Wasiir", "en": "Minister"},
            "location": {"so": "Muqdisho"},
            "category": "Politician",
            "ratings": {"fame": 120, "popularity": -5}
        }"#;
        let p: Profile = serde_json::from_str(json).expect("valid profile json");
        assert_eq!(p.id, 9);
        assert!(p.services.is_none());
        assert!(p.visible_services().is_empty());
        assert_eq!(p.ratings.fame, 120);
        assert_eq!(p.ratings.popularity, -5);
    }

    #[test]
    /// What: Services are only visible on business profiles
    fn services_hidden_for_politicians() {
        let mut p = Profile::blank(1, Category::Business);
        p.services = Some(vec![LocalizedString::new("Internet", "Internet", "الإنترنت")]);
        assert_eq!(p.visible_services().len(), 1);
        p.category = Category::Politician;
        assert!(p.visible_services().is_empty());
    }

    #[test]
    fn blank_profile_is_unsaved_new() {
        let p = Profile::blank(4, Category::Politician);
        assert!(p.is_unsaved_new());
        assert_eq!(p.ratings.fame, 50);
        assert_eq!(p.location.en, "Mogadishu");
    }

    #[test]
    fn category_and_view_mapping_round_trips() {
        for c in [Category::Politician, Category::Business] {
            assert_eq!(c.directory().category(), Some(c));
        }
        assert_eq!(ActiveView::Landing.category(), None);
    }

    #[test]
    fn detail_tab_next_and_prev_are_inverse() {
        for tab in DetailTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }
}
