use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ServiceError;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    poem_openapi::Enum,
    async_graphql::Enum,
)]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
#[graphql(name = "AvailabilityStatus", rename_items = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    PartiallyAvailable,
    Unavailable,
}

impl FromStr for Availability {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "partially_available" => Ok(Self::PartiallyAvailable),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(ServiceError::Validation(vec![format!(
                "availability must be one of available, partially_available, unavailable (got {})",
                s
            )])),
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    poem_openapi::Enum,
    async_graphql::Enum,
)]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
#[graphql(rename_items = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    poem_openapi::Enum,
    async_graphql::Enum,
)]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
#[graphql(rename_items = "snake_case")]
pub enum LinkType {
    Linkedin,
    Github,
    Portfolio,
    Website,
    Behance,
    Dribbble,
    Other,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProfessionalLink {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Availability,
    pub skills: Vec<Skill>,
    pub professional_links: Vec<ProfessionalLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Skill as received from a client; `id` is filled in when missing.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillInput {
    pub id: Option<Uuid>,
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

impl SkillInput {
    pub fn into_skill(self) -> Skill {
        Skill {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            name: self.name,
            level: self.level,
            category: self.category,
        }
    }
}

impl From<&Skill> for SkillInput {
    fn from(value: &Skill) -> Self {
        Self {
            id: Some(value.id),
            name: value.name.clone(),
            level: value.level,
            category: value.category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfessionalLinkInput {
    pub id: Option<Uuid>,
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

impl ProfessionalLinkInput {
    pub fn into_link(self) -> ProfessionalLink {
        ProfessionalLink {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            link_type: self.link_type,
            url: self.url,
            label: self.label,
        }
    }
}

impl From<&ProfessionalLink> for ProfessionalLinkInput {
    fn from(value: &ProfessionalLink) -> Self {
        Self {
            id: Some(value.id),
            link_type: value.link_type,
            url: value.url.clone(),
            label: value.label.clone(),
        }
    }
}

/// Complete candidate profile, used for creation and as the merged view
/// validated on update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<Availability>,
    pub skills: Vec<SkillInput>,
    pub professional_links: Vec<ProfessionalLinkInput>,
}

/// Partial update. `None` leaves a field untouched; for nullable fields
/// `Some(None)` clears the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub hourly_rate: Option<Option<f64>>,
    pub availability: Option<Availability>,
    pub skills: Option<Vec<SkillInput>>,
    pub professional_links: Option<Vec<ProfessionalLinkInput>>,
}

impl ProfilePatch {
    /// Overlay the patch on an existing profile, field by field.
    pub fn merged_onto(&self, profile: &Profile) -> ProfilePayload {
        ProfilePayload {
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| profile.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| profile.last_name.clone()),
            email: self.email.clone().unwrap_or_else(|| profile.email.clone()),
            phone: self.phone.clone().unwrap_or_else(|| profile.phone.clone()),
            title: self.title.clone().unwrap_or_else(|| profile.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| profile.description.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| profile.location.clone()),
            hourly_rate: self.hourly_rate.unwrap_or(profile.hourly_rate),
            availability: Some(self.availability.unwrap_or(profile.availability)),
            skills: match &self.skills {
                Some(skills) => skills.clone(),
                None => profile.skills.iter().map(SkillInput::from).collect(),
            },
            professional_links: match &self.professional_links {
                Some(links) => links.clone(),
                None => profile
                    .professional_links
                    .iter()
                    .map(ProfessionalLinkInput::from)
                    .collect(),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileFilters {
    pub availability: Option<Availability>,
    pub skill: Option<String>,
    pub location: Option<String>,
}

impl ProfileFilters {
    pub fn matches(&self, profile: &Profile) -> bool {
        if let Some(availability) = self.availability {
            if profile.availability != availability {
                return false;
            }
        }
        if let Some(skill) = self.skill.as_deref().filter(|x| !x.is_empty()) {
            let needle = skill.to_lowercase();
            if !profile
                .skills
                .iter()
                .any(|s| s.name.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref().filter(|x| !x.is_empty()) {
            let needle = location.to_lowercase();
            match &profile.location {
                Some(value) if value.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSummary {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub availability: Availability,
    pub skills_count: usize,
    pub hourly_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailabilityStats {
    pub available: usize,
    pub partially_available: usize,
    pub unavailable: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopSkill {
    pub skill: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileStatistics {
    pub total: usize,
    pub availability: AvailabilityStats,
    pub top_skills: Vec<TopSkill>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseResult {
    pub message: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDataResult {
    pub message: String,
    pub previous_count: usize,
    pub new_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearResult {
    pub message: String,
    pub deleted_count: usize,
}

#[cfg(test)]
mod tests {
    use super::Availability;

    #[test]
    fn test_availability_from_str() {
        assert_eq!("available".parse(), Ok(Availability::Available));
        assert_eq!(
            "partially_available".parse(),
            Ok(Availability::PartiallyAvailable)
        );
        assert_eq!("unavailable".parse(), Ok(Availability::Unavailable));
        assert!("busy".parse::<Availability>().is_err());
        assert!("".parse::<Availability>().is_err());
    }
}
