use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    core::{db::ProfileStore, error::ServiceError, validation::validate_profile},
    factory::seed::{additional_profiles, seed_profiles},
    model::profile::{
        Availability, AvailabilityStats, ClearResult, DatabaseResult, Profile, ProfileFilters,
        ProfilePatch, ProfilePayload, ProfileStatistics, ProfileSummary, TestDataResult, TopSkill,
    },
};

pub const TOP_SKILLS_LIMIT: usize = 10;

pub fn get_all_profile(db: &ProfileStore, filters: &ProfileFilters) -> Vec<Profile> {
    db.iter().filter(|x| filters.matches(x)).cloned().collect()
}

/// Ids that are not valid UUIDs simply match nothing.
pub fn get_profile_by_id(db: &ProfileStore, id: &str) -> Option<Profile> {
    let id = Uuid::parse_str(id).ok()?;
    db.find(&id).cloned()
}

pub fn create_profile(
    db: &mut ProfileStore,
    payload: ProfilePayload,
) -> Result<Profile, ServiceError> {
    let errors = validate_profile(&payload);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }
    if db.email_in_use(&payload.email, None) {
        return Err(ServiceError::email_taken(&payload.email));
    }

    let now = Utc::now();
    let profile = Profile {
        id: Uuid::now_v7(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        title: payload.title,
        description: payload.description,
        location: payload.location,
        hourly_rate: payload.hourly_rate,
        availability: payload.availability.unwrap_or_default(),
        skills: payload.skills.into_iter().map(|x| x.into_skill()).collect(),
        professional_links: payload
            .professional_links
            .into_iter()
            .map(|x| x.into_link())
            .collect(),
        created_at: now,
        updated_at: now,
    };
    db.insert(profile.clone());
    tracing::info!("profile {} created for {}", profile.id, profile.email);
    Ok(profile)
}

pub fn update_profile(
    db: &mut ProfileStore,
    id: &str,
    patch: ProfilePatch,
) -> Result<Profile, ServiceError> {
    let uuid = Uuid::parse_str(id).map_err(|_| ServiceError::profile_not_found(id))?;
    let existing = db
        .find(&uuid)
        .ok_or_else(|| ServiceError::profile_not_found(id))?;

    // The whole merged record is validated, not just the patched fields.
    let merged = patch.merged_onto(existing);
    let errors = validate_profile(&merged);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }
    if let Some(email) = &patch.email {
        if db.email_in_use(email, Some(&uuid)) {
            return Err(ServiceError::email_taken(email));
        }
    }

    let profile = db
        .find_mut(&uuid)
        .ok_or_else(|| ServiceError::profile_not_found(id))?;
    if let Some(first_name) = patch.first_name {
        profile.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
        profile.last_name = last_name;
    }
    if let Some(email) = patch.email {
        profile.email = email;
    }
    if let Some(phone) = patch.phone {
        profile.phone = phone;
    }
    if let Some(title) = patch.title {
        profile.title = title;
    }
    if let Some(description) = patch.description {
        profile.description = description;
    }
    if let Some(location) = patch.location {
        profile.location = location;
    }
    if let Some(hourly_rate) = patch.hourly_rate {
        profile.hourly_rate = hourly_rate;
    }
    if let Some(availability) = patch.availability {
        profile.availability = availability;
    }
    if let Some(skills) = patch.skills {
        profile.skills = skills.into_iter().map(|x| x.into_skill()).collect();
    }
    if let Some(links) = patch.professional_links {
        profile.professional_links = links.into_iter().map(|x| x.into_link()).collect();
    }
    profile.updated_at = Utc::now().max(profile.updated_at);

    tracing::info!("profile {} updated", profile.id);
    Ok(profile.clone())
}

pub fn delete_profile(db: &mut ProfileStore, id: &str) -> Result<Profile, ServiceError> {
    let uuid = Uuid::parse_str(id).map_err(|_| ServiceError::profile_not_found(id))?;
    let profile = db
        .remove(&uuid)
        .ok_or_else(|| ServiceError::profile_not_found(id))?;
    tracing::info!("profile {} deleted", profile.id);
    Ok(profile)
}

pub fn get_profile_summary(profile: &Profile) -> ProfileSummary {
    ProfileSummary {
        id: profile.id,
        name: format!("{} {}", profile.first_name, profile.last_name),
        title: profile.title.clone(),
        location: profile.location.clone(),
        availability: profile.availability,
        skills_count: profile.skills.len(),
        hourly_rate: profile.hourly_rate,
    }
}

fn count_availability<'a>(profiles: impl Iterator<Item = &'a Profile>) -> AvailabilityStats {
    let mut stats = AvailabilityStats::default();
    for profile in profiles {
        match profile.availability {
            Availability::Available => stats.available += 1,
            Availability::PartiallyAvailable => stats.partially_available += 1,
            Availability::Unavailable => stats.unavailable += 1,
        }
    }
    stats
}

pub fn get_profile_statistics(db: &ProfileStore) -> ProfileStatistics {
    // Skill names in first-encountered order, counted once per profile.
    let mut top_skills: Vec<TopSkill> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for profile in db.iter() {
        let mut seen: Vec<&str> = vec![];
        for skill in profile.skills.iter() {
            let name = skill.name.as_str();
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            match positions.get(name) {
                Some(&idx) => top_skills[idx].count += 1,
                None => {
                    positions.insert(name, top_skills.len());
                    top_skills.push(TopSkill {
                        skill: name.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }
    top_skills.sort_by(|a, b| b.count.cmp(&a.count));
    top_skills.truncate(TOP_SKILLS_LIMIT);

    ProfileStatistics {
        total: db.len(),
        availability: count_availability(db.iter()),
        top_skills,
    }
}

/// Seeds the store only when it holds nothing yet.
pub fn initialize_demo_data(db: &mut ProfileStore) {
    if db.is_empty() {
        populate_seed_data(db);
    }
}

fn populate_seed_data(db: &mut ProfileStore) {
    tracing::info!("initializing profile store with seed data");
    let profiles = seed_profiles();
    let total = profiles.len();
    for (idx, profile) in profiles.into_iter().enumerate() {
        tracing::info!(
            "profile {}/{} added: {} {}",
            idx + 1,
            total,
            profile.first_name,
            profile.last_name
        );
        db.insert(profile);
    }

    let stats = count_availability(db.iter());
    let rated: Vec<f64> = db.iter().filter_map(|x| x.hourly_rate).collect();
    let average_rate = if rated.is_empty() {
        0.0
    } else {
        rated.iter().sum::<f64>() / rated.len() as f64
    };
    tracing::info!(
        "store initialized with {} profiles: {} available, {} partially available, {} unavailable, average rate {:.0}/h",
        db.len(),
        stats.available,
        stats.partially_available,
        stats.unavailable,
        average_rate
    );
}

pub fn reset_database(db: &mut ProfileStore) -> DatabaseResult {
    tracing::info!("resetting profile store");
    db.clear();
    populate_seed_data(db);
    DatabaseResult {
        message: "database reset successfully".to_string(),
        count: db.len(),
    }
}

/// Profiles from the pool whose email is already stored are skipped.
pub fn add_test_data(db: &mut ProfileStore, count: usize) -> TestDataResult {
    let previous_count = db.len();
    let candidates = additional_profiles(count);
    let requested = candidates.len();
    for profile in candidates {
        if db.email_in_use(&profile.email, None) {
            tracing::warn!("skipping test profile {}: email already used", profile.email);
            continue;
        }
        tracing::info!(
            "test profile added: {} {}",
            profile.first_name,
            profile.last_name
        );
        db.insert(profile);
    }
    let added = db.len() - previous_count;
    tracing::info!("{} of {} test profiles added", added, requested);
    TestDataResult {
        message: format!("{} additional profiles added", added),
        previous_count,
        new_count: db.len(),
    }
}

pub fn clear_database(db: &mut ProfileStore) -> ClearResult {
    let deleted_count = db.clear();
    tracing::info!("profile store cleared, {} profiles removed", deleted_count);
    ClearResult {
        message: "database cleared".to_string(),
        deleted_count,
    }
}
