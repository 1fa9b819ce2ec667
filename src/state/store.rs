//! In-memory ordered collection of profile records.

use crate::state::types::{Profile, ProfileId};

/// Session-local profile collection.
///
/// Order is significant: listings render records in store order. Identifiers
/// are never reused within a session, even after the highest record is deleted,
/// because the store remembers the highest id it has ever held.
#[derive(Clone, Debug, Default)]
pub struct ProfileStore {
    /// Records in display order.
    profiles: Vec<Profile>,
    /// Highest id ever held by this store.
    high_water: ProfileId,
}

impl ProfileStore {
    /// Build a store from seed records, keeping their order.
    #[must_use]
    pub fn from_seed(profiles: Vec<Profile>) -> Self {
        let mut store = Self::default();
        store.replace_all(profiles);
        store
    }

    /// What: Replace the whole collection (initial load or reload).
    ///
    /// Inputs:
    /// - `profiles`: New contents in display order
    ///
    /// Details:
    /// - The high-water mark only grows, so ids handed out earlier in the
    ///   session stay retired.
    pub fn replace_all(&mut self, profiles: Vec<Profile>) {
        let max = profiles.iter().map(|p| p.id).max().unwrap_or(0);
        self.high_water = self.high_water.max(max);
        self.profiles = profiles;
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Whether a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: ProfileId) -> bool {
        self.get(id).is_some()
    }

    /// Records in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Profile] {
        &self.profiles
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// What: Compute the id the next created record receives.
    ///
    /// Output:
    /// - `1` for a store that never held a record; otherwise one more than the
    ///   largest id ever held (which is at least the largest current id).
    #[must_use]
    pub fn next_id(&self) -> ProfileId {
        let current_max = self.profiles.iter().map(|p| p.id).max().unwrap_or(0);
        self.high_water.max(current_max) + 1
    }

    /// What: Insert a new record at the front of the collection.
    ///
    /// Inputs:
    /// - `make`: Builder receiving the allocated id
    ///
    /// Output:
    /// - The id assigned to the new record.
    pub fn create(&mut self, make: impl FnOnce(ProfileId) -> Profile) -> ProfileId {
        let id = self.next_id();
        let mut profile = make(id);
        profile.id = id;
        self.high_water = id;
        self.profiles.insert(0, profile);
        tracing::debug!(id, "created profile");
        id
    }

    /// What: Overwrite the record whose id matches `profile.id`.
    ///
    /// Output:
    /// - `true` when a record was replaced; `false` when no record has that id.
    ///
    /// Details:
    /// - Last writer wins; the entire record is replaced, no field-level merge.
    /// - The record keeps its position in the collection.
    pub fn replace(&mut self, profile: Profile) -> bool {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => {
                *slot = profile;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, returning it when present.
    pub fn remove(&mut self, id: ProfileId) -> Option<Profile> {
        let pos = self.profiles.iter().position(|p| p.id == id)?;
        Some(self.profiles.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Category;

    fn seeded(ids: &[ProfileId]) -> ProfileStore {
        ProfileStore::from_seed(
            ids.iter()
                .map(|&id| Profile::blank(id, Category::Politician))
                .collect(),
        )
    }

    #[test]
    /// What: An empty store hands out id 1
    fn next_id_on_empty_store_is_one() {
        let store = ProfileStore::default();
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    /// What: New ids exceed every existing id and land at the front
    ///
    /// - Input: Store with ids 3, 9, 4
    /// - Output: Created record gets id 10 and is first in order
    fn create_assigns_max_plus_one_at_front() {
        let mut store = seeded(&[3, 9, 4]);
        let id = store.create(|id| Profile::blank(id, Category::Business));
        assert_eq!(id, 10);
        assert_eq!(store.as_slice()[0].id, 10);
        assert_eq!(store.len(), 4);
    }

    #[test]
    /// What: Deleting the newest record does not recycle its id
    fn deleted_ids_are_not_reused() {
        let mut store = seeded(&[1, 2, 3]);
        assert!(store.remove(3).is_some());
        assert_eq!(store.next_id(), 4);
        let id = store.create(|id| Profile::blank(id, Category::Politician));
        assert_eq!(id, 4);
        store.remove(id);
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    /// What: Replace overwrites the full record and keeps its position
    fn replace_overwrites_whole_record_in_place() {
        let mut store = seeded(&[1, 2]);
        let mut updated = Profile::blank(2, Category::Business);
        updated.name.en = "Updated".into();
        assert!(store.replace(updated.clone()));
        assert_eq!(store.as_slice()[1], updated);

        let ghost = Profile::blank(77, Category::Business);
        assert!(!store.replace(ghost));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_missing_id_is_none() {
        let mut store = seeded(&[1]);
        assert!(store.remove(2).is_none());
        assert!(store.contains(1));
    }
}
