use std::sync::{Arc, RwLock};

use fake::{Fake, Faker};

use crate::{
    core::db::ProfileStore,
    model::profile::{
        Availability, LinkType, ProfessionalLinkInput, ProfilePayload, SkillInput, SkillLevel,
    },
    repository::profile::initialize_demo_data,
    settings::Config,
    AppState,
};

pub fn generate_random<T: fake::Dummy<fake::Faker>>() -> T {
    Faker.fake()
}

pub fn test_config() -> Config {
    Config {
        env: "server".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3000,
        prefix: Some("/api".to_string()),
        app_env: "test".to_string(),
        log_dir: "./logs".to_string(),
    }
}

/// App state around the given store, so tests control the starting data.
pub fn test_app_state(store: ProfileStore) -> Arc<AppState> {
    Arc::new(AppState {
        db: RwLock::new(store),
        config: test_config(),
    })
}

pub fn seeded_app_state() -> Arc<AppState> {
    let mut store = ProfileStore::new();
    initialize_demo_data(&mut store);
    test_app_state(store)
}

pub fn valid_payload(email: &str) -> ProfilePayload {
    ProfilePayload {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: Some("+33 6 12 34 56 78".to_string()),
        title: "Rust Developer".to_string(),
        description: None,
        location: Some("Nantes, France".to_string()),
        hourly_rate: Some(85.0),
        availability: Some(Availability::Available),
        skills: vec![
            SkillInput {
                id: None,
                name: "Rust".to_string(),
                level: SkillLevel::Expert,
                category: Some("Programming".to_string()),
            },
            SkillInput {
                id: None,
                name: "SQL".to_string(),
                level: SkillLevel::Advanced,
                category: None,
            },
        ],
        professional_links: vec![ProfessionalLinkInput {
            id: None,
            link_type: LinkType::Github,
            url: "https://github.com/janedoe".to_string(),
            label: Some("GitHub".to_string()),
        }],
    }
}
