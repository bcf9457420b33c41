use chrono::Utc;
use fake::{
    faker::{
        address::en::CityName,
        internet::en::SafeEmail,
        job::en::Title,
        name::en::{FirstName, LastName},
    },
    Dummy, Fake, Faker,
};
use uuid::Uuid;

use crate::{
    core::db::ProfileStore,
    model::profile::{Availability, LinkType, ProfessionalLink, Profile, Skill, SkillLevel},
};

const SKILL_NAMES: [&str; 8] = [
    "Rust", "Go", "SQL", "Figma", "Docker", "Python", "React", "Kotlin",
];

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &Profile, ext: T) -> Profile,
    modifier_many: fn(x: &Profile, idx: usize, ext: T) -> Profile,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Profile, ext: T) -> Profile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Profile, idx: usize, ext: T) -> Profile) {
        self.modifier_many = modifier
    }

    /// Inserts straight into the store, skipping validation.
    pub fn generate_one(&mut self, db: &mut ProfileStore, ext: T) -> Profile {
        let data = ProfileDummy::new().generate_one(0);
        let data = (self.modifier_one)(&data, ext);
        db.insert(data.clone());
        data
    }

    pub fn generate_many(&mut self, db: &mut ProfileStore, num: u32, ext: T) -> Vec<Profile> {
        let mut result: Vec<Profile> = vec![];
        for idx in 0..num as usize {
            let data = ProfileDummy::new().generate_one(idx);
            result.push((self.modifier_many)(&data, idx, ext.clone()));
        }
        db.extend(result.clone());
        result
    }
}

#[derive(Debug, Dummy, Clone)]
struct ProfileDummy {
    #[dummy(faker = "FirstName()")]
    pub first_name: String,
    #[dummy(faker = "LastName()")]
    pub last_name: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "Title()")]
    pub title: String,
    #[dummy(faker = "CityName()")]
    pub location: String,
    #[dummy(faker = "10.0..200.0")]
    pub hourly_rate: f64,
    #[dummy(faker = "0..3")]
    pub availability: u8,
    #[dummy(faker = "1..4")]
    pub skills_count: usize,
}

impl ProfileDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    /// `idx` is folded into the email so generated batches stay unique.
    pub fn generate_one(self, idx: usize) -> Profile {
        let now = Utc::now();
        let availability = match self.availability {
            0 => Availability::Available,
            1 => Availability::PartiallyAvailable,
            _ => Availability::Unavailable,
        };
        let offset = (0..SKILL_NAMES.len()).fake::<usize>();
        let skills = (0..self.skills_count)
            .map(|i| Skill {
                id: Uuid::now_v7(),
                name: SKILL_NAMES[(offset + i) % SKILL_NAMES.len()].to_string(),
                level: SkillLevel::Intermediate,
                category: None,
            })
            .collect();
        Profile {
            id: Uuid::now_v7(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: format!("{}.{}", idx, self.email),
            phone: None,
            title: self.title,
            description: None,
            location: Some(self.location),
            hourly_rate: Some(self.hourly_rate),
            availability,
            skills,
            professional_links: vec![ProfessionalLink {
                id: Uuid::now_v7(),
                link_type: LinkType::Website,
                url: "https://example.com".to_string(),
                label: None,
            }],
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{db::ProfileStore, test_utils::generate_random},
        factory::profile::ProfileFactory,
        model::profile::{Availability, Profile},
    };

    #[test]
    fn test_generate_one() {
        // When
        let mut db = ProfileStore::new();
        let mut factory = ProfileFactory::new();
        let profile = factory.generate_one(&mut db, ());

        // Expect
        assert_eq!(db.len(), 1);
        assert_eq!(db.find(&profile.id), Some(&profile));
        assert!(!profile.skills.is_empty());
    }

    #[test]
    fn test_generate_one_modified() {
        // When
        let mut db = ProfileStore::new();
        let mut factory = ProfileFactory::<String>::new();
        factory.modified_one(|data, ext| Profile {
            email: ext,
            availability: Availability::Unavailable,
            ..data.clone()
        });
        let email = format!("{}@local.com", generate_random::<u32>());
        let profile = factory.generate_one(&mut db, email.clone());

        // Expect
        assert_eq!(profile.email, email);
        assert_eq!(profile.availability, Availability::Unavailable);
    }

    #[test]
    fn test_generate_many() {
        // When
        let mut db = ProfileStore::new();
        let mut factory = ProfileFactory::new();
        factory.generate_many(&mut db, 10, ());

        // Expect
        assert_eq!(db.len(), 10);
        let mut emails: Vec<&str> = db.iter().map(|x| x.email.as_str()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 10);
    }

    #[test]
    fn test_generate_many_modified() {
        // When
        let mut db = ProfileStore::new();
        let mut factory = ProfileFactory::<Option<String>>::new();
        factory.modified_many(|data, idx, ext| Profile {
            location: if idx % 2 == 0 { ext } else { None },
            ..data.clone()
        });
        factory.generate_many(&mut db, 5, Some("Remote".to_string()));

        // Expect
        for (idx, item) in db.iter().enumerate() {
            if idx % 2 == 0 {
                assert_eq!(item.location.as_deref(), Some("Remote"));
            } else {
                assert!(item.location.is_none());
            }
        }
    }
}
