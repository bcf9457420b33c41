use async_graphql::{InputObject, MaybeUndefined, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::model::profile::{
    Availability, ClearResult, DatabaseResult, LinkType, ProfessionalLink, ProfessionalLinkInput,
    Profile, ProfileFilters, ProfilePatch, ProfilePayload, ProfileStatistics, ProfileSummary,
    Skill, SkillInput, SkillLevel, TestDataResult,
};

fn maybe<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(val) => Some(Some(val)),
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Skill")]
pub struct SkillObject {
    pub id: ID,
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

impl From<Skill> for SkillObject {
    fn from(value: Skill) -> Self {
        Self {
            id: ID(value.id.to_string()),
            name: value.name,
            level: value.level,
            category: value.category,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "ProfessionalLink")]
pub struct ProfessionalLinkObject {
    pub id: ID,
    #[graphql(name = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

impl From<ProfessionalLink> for ProfessionalLinkObject {
    fn from(value: ProfessionalLink) -> Self {
        Self {
            id: ID(value.id.to_string()),
            link_type: value.link_type,
            url: value.url,
            label: value.label,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Profile")]
pub struct ProfileObject {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Availability,
    pub skills: Vec<SkillObject>,
    pub professional_links: Vec<ProfessionalLinkObject>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileObject {
    fn from(value: Profile) -> Self {
        Self {
            id: ID(value.id.to_string()),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            title: value.title,
            description: value.description,
            location: value.location,
            hourly_rate: value.hourly_rate,
            availability: value.availability,
            skills: value.skills.into_iter().map(SkillObject::from).collect(),
            professional_links: value
                .professional_links
                .into_iter()
                .map(ProfessionalLinkObject::from)
                .collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "ProfileSummary")]
pub struct ProfileSummaryObject {
    pub id: ID,
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub availability: Availability,
    pub skills_count: i32,
    pub hourly_rate: Option<f64>,
}

impl From<ProfileSummary> for ProfileSummaryObject {
    fn from(value: ProfileSummary) -> Self {
        Self {
            id: ID(value.id.to_string()),
            name: value.name,
            title: value.title,
            location: value.location,
            availability: value.availability,
            skills_count: value.skills_count as i32,
            hourly_rate: value.hourly_rate,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "AvailabilityStats")]
pub struct AvailabilityStatsObject {
    pub available: i32,
    pub partially_available: i32,
    pub unavailable: i32,
}

#[derive(SimpleObject)]
#[graphql(name = "TopSkill")]
pub struct TopSkillObject {
    pub skill: String,
    pub count: i32,
}

#[derive(SimpleObject)]
#[graphql(name = "ProfileStats")]
pub struct ProfileStatsObject {
    pub total: i32,
    pub availability: AvailabilityStatsObject,
    pub top_skills: Vec<TopSkillObject>,
}

impl From<ProfileStatistics> for ProfileStatsObject {
    fn from(value: ProfileStatistics) -> Self {
        Self {
            total: value.total as i32,
            availability: AvailabilityStatsObject {
                available: value.availability.available as i32,
                partially_available: value.availability.partially_available as i32,
                unavailable: value.availability.unavailable as i32,
            },
            top_skills: value
                .top_skills
                .into_iter()
                .map(|x| TopSkillObject {
                    skill: x.skill,
                    count: x.count as i32,
                })
                .collect(),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "DatabaseResult")]
pub struct DatabaseResultObject {
    pub message: String,
    pub count: i32,
}

impl From<DatabaseResult> for DatabaseResultObject {
    fn from(value: DatabaseResult) -> Self {
        Self {
            message: value.message,
            count: value.count as i32,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "TestDataResult")]
pub struct TestDataResultObject {
    pub message: String,
    pub previous_count: i32,
    pub new_count: i32,
}

impl From<TestDataResult> for TestDataResultObject {
    fn from(value: TestDataResult) -> Self {
        Self {
            message: value.message,
            previous_count: value.previous_count as i32,
            new_count: value.new_count as i32,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "ClearResult")]
pub struct ClearResultObject {
    pub message: String,
    pub deleted_count: i32,
}

impl From<ClearResult> for ClearResultObject {
    fn from(value: ClearResult) -> Self {
        Self {
            message: value.message,
            deleted_count: value.deleted_count as i32,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "SkillInput")]
pub struct NewSkillInput {
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

impl From<NewSkillInput> for SkillInput {
    fn from(value: NewSkillInput) -> Self {
        Self {
            id: None,
            name: value.name,
            level: value.level,
            category: value.category,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "ProfessionalLinkInput")]
pub struct NewProfessionalLinkInput {
    #[graphql(name = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

impl From<NewProfessionalLinkInput> for ProfessionalLinkInput {
    fn from(value: NewProfessionalLinkInput) -> Self {
        Self {
            id: None,
            link_type: value.link_type,
            url: value.url,
            label: value.label,
        }
    }
}

#[derive(InputObject)]
pub struct ProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<Availability>,
    pub skills: Option<Vec<NewSkillInput>>,
    pub professional_links: Option<Vec<NewProfessionalLinkInput>>,
}

impl From<ProfileInput> for ProfilePayload {
    fn from(value: ProfileInput) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            title: value.title,
            description: value.description,
            location: value.location,
            hourly_rate: value.hourly_rate,
            availability: value.availability,
            skills: value
                .skills
                .unwrap_or_default()
                .into_iter()
                .map(SkillInput::from)
                .collect(),
            professional_links: value
                .professional_links
                .unwrap_or_default()
                .into_iter()
                .map(ProfessionalLinkInput::from)
                .collect(),
        }
    }
}

#[derive(InputObject)]
pub struct ProfileUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: MaybeUndefined<String>,
    pub title: Option<String>,
    pub description: MaybeUndefined<String>,
    pub location: MaybeUndefined<String>,
    pub hourly_rate: MaybeUndefined<f64>,
    pub availability: Option<Availability>,
    pub skills: Option<Vec<NewSkillInput>>,
    pub professional_links: Option<Vec<NewProfessionalLinkInput>>,
}

impl From<ProfileUpdateInput> for ProfilePatch {
    fn from(value: ProfileUpdateInput) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: maybe(value.phone),
            title: value.title,
            description: maybe(value.description),
            location: maybe(value.location),
            hourly_rate: maybe(value.hourly_rate),
            availability: value.availability,
            skills: value
                .skills
                .map(|x| x.into_iter().map(SkillInput::from).collect()),
            professional_links: value
                .professional_links
                .map(|x| x.into_iter().map(ProfessionalLinkInput::from).collect()),
        }
    }
}

#[derive(InputObject, Default)]
pub struct ProfileFilterInput {
    pub availability: Option<Availability>,
    pub skill: Option<String>,
    pub location: Option<String>,
}

impl From<ProfileFilterInput> for ProfileFilters {
    fn from(value: ProfileFilterInput) -> Self {
        Self {
            availability: value.availability,
            skill: value.skill,
            location: value.location,
        }
    }
}
