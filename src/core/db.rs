use std::sync::RwLock;

use uuid::Uuid;

use crate::{model::profile::Profile, repository::profile::initialize_demo_data};

/// Ordered in-memory profile storage. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn find(&self, id: &Uuid) -> Option<&Profile> {
        self.profiles.iter().find(|x| x.id == *id)
    }

    pub fn find_mut(&mut self, id: &Uuid) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|x| x.id == *id)
    }

    /// Whether `email` belongs to any profile other than `except`.
    pub fn email_in_use(&self, email: &str, except: Option<&Uuid>) -> bool {
        self.profiles
            .iter()
            .any(|x| x.email == email && Some(&x.id) != except)
    }

    pub fn insert(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    pub fn extend(&mut self, profiles: impl IntoIterator<Item = Profile>) {
        self.profiles.extend(profiles);
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Profile> {
        let index = self.profiles.iter().position(|x| x.id == *id)?;
        Some(self.profiles.remove(index))
    }

    /// Empties the store and returns how many profiles it held.
    pub fn clear(&mut self) -> usize {
        let count = self.profiles.len();
        self.profiles.clear();
        count
    }
}

pub type Db = RwLock<ProfileStore>;

/// Builds the application store, seeded with the demonstration profiles.
pub fn init_db() -> Db {
    let mut store = ProfileStore::new();
    initialize_demo_data(&mut store);
    RwLock::new(store)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::factory::profile::ProfileFactory;

    use super::{init_db, ProfileStore};

    #[test]
    fn test_init_db_is_seeded() {
        let db = init_db();
        let store = db.read().unwrap();
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut store = ProfileStore::new();
        let profiles = ProfileFactory::<()>::new().generate_many(&mut store, 3, ());
        let ids: Vec<Uuid> = store.iter().map(|x| x.id).collect();
        assert_eq!(ids, profiles.iter().map(|x| x.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = ProfileStore::new();
        let profiles = ProfileFactory::<()>::new().generate_many(&mut store, 3, ());
        let removed = store.remove(&profiles[1].id);
        assert_eq!(removed.map(|x| x.id), Some(profiles[1].id));
        assert!(store.find(&profiles[1].id).is_none());
        assert!(store.remove(&profiles[1].id).is_none());
        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_email_in_use_ignores_excluded_profile() {
        let mut store = ProfileStore::new();
        let profile = ProfileFactory::<()>::new().generate_one(&mut store, ());
        assert!(store.email_in_use(&profile.email, None));
        assert!(!store.email_in_use(&profile.email, Some(&profile.id)));
        assert!(!store.email_in_use("nobody@local.com", None));
    }
}
