use poem_openapi::{payload::Json, types::MaybeUndefined, ApiResponse, Object, Union};
use uuid::Uuid;

use crate::{
    core::utils::datetime_to_string,
    model::profile::{
        Availability, LinkType, ProfessionalLink, ProfessionalLinkInput, Profile, ProfilePatch,
        ProfilePayload, ProfileStatistics, ProfileSummary, Skill, SkillInput, SkillLevel,
    },
};

use super::common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse};

fn maybe<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(val) => Some(Some(val)),
    }
}

#[derive(Object)]
pub struct SkillRequest {
    pub id: Option<Uuid>,
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

impl From<SkillRequest> for SkillInput {
    fn from(value: SkillRequest) -> Self {
        Self {
            id: value.id,
            name: value.name,
            level: value.level,
            category: value.category,
        }
    }
}

#[derive(Object)]
pub struct ProfessionalLinkRequest {
    pub id: Option<Uuid>,
    #[oai(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

impl From<ProfessionalLinkRequest> for ProfessionalLinkInput {
    fn from(value: ProfessionalLinkRequest) -> Self {
        Self {
            id: value.id,
            link_type: value.link_type,
            url: value.url,
            label: value.label,
        }
    }
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<Availability>,
    pub skills: Option<Vec<SkillRequest>>,
    pub professional_links: Option<Vec<ProfessionalLinkRequest>>,
}

impl From<ProfileCreateRequest> for ProfilePayload {
    fn from(value: ProfileCreateRequest) -> Self {
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

/// Absent fields are left alone; `null` clears the nullable ones.
#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: MaybeUndefined<String>,
    pub title: Option<String>,
    pub description: MaybeUndefined<String>,
    pub location: MaybeUndefined<String>,
    pub hourly_rate: MaybeUndefined<f64>,
    pub availability: Option<Availability>,
    pub skills: Option<Vec<SkillRequest>>,
    pub professional_links: Option<Vec<ProfessionalLinkRequest>>,
}

impl From<ProfileUpdateRequest> for ProfilePatch {
    fn from(value: ProfileUpdateRequest) -> Self {
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

#[derive(Object)]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<String>,
}

impl From<Skill> for SkillResponse {
    fn from(value: Skill) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            level: value.level,
            category: value.category,
        }
    }
}

#[derive(Object)]
pub struct ProfessionalLinkResponse {
    pub id: String,
    #[oai(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub label: Option<String>,
}

impl From<ProfessionalLink> for ProfessionalLinkResponse {
    fn from(value: ProfessionalLink) -> Self {
        Self {
            id: value.id.to_string(),
            link_type: value.link_type,
            url: value.url,
            label: value.label,
        }
    }
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Availability,
    pub skills: Vec<SkillResponse>,
    pub professional_links: Vec<ProfessionalLinkResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        Self {
            id: value.id.to_string(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            title: value.title,
            description: value.description,
            location: value.location,
            hourly_rate: value.hourly_rate,
            availability: value.availability,
            skills: value.skills.into_iter().map(SkillResponse::from).collect(),
            professional_links: value
                .professional_links
                .into_iter()
                .map(ProfessionalLinkResponse::from)
                .collect(),
            created_at: datetime_to_string(value.created_at),
            updated_at: datetime_to_string(value.updated_at),
        }
    }
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileSummaryResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub availability: Availability,
    pub skills_count: u32,
    pub hourly_rate: Option<f64>,
}

impl From<ProfileSummary> for ProfileSummaryResponse {
    fn from(value: ProfileSummary) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            title: value.title,
            location: value.location,
            availability: value.availability,
            skills_count: value.skills_count as u32,
            hourly_rate: value.hourly_rate,
        }
    }
}

#[derive(Union)]
pub enum ProfileListItem {
    Profile(ProfileResponse),
    Summary(ProfileSummaryResponse),
}

#[derive(Object)]
pub struct ProfileFiltersResponse {
    #[oai(skip_serializing_if_is_none)]
    pub availability: Option<Availability>,
    #[oai(skip_serializing_if_is_none)]
    pub skill: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

#[derive(Object)]
pub struct ProfileListResponse {
    pub count: u32,
    pub data: Vec<ProfileListItem>,
    pub filters: ProfileFiltersResponse,
}

#[derive(ApiResponse)]
pub enum ProfileListResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileListResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileCreateResponses {
    #[oai(status = 201)]
    Created(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDeleteResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct AvailabilityStatsResponse {
    pub available: u32,
    pub partially_available: u32,
    pub unavailable: u32,
}

#[derive(Object)]
pub struct TopSkillResponse {
    pub skill: String,
    pub count: u32,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileStatsResponse {
    pub total: u32,
    pub availability: AvailabilityStatsResponse,
    pub top_skills: Vec<TopSkillResponse>,
}

impl From<ProfileStatistics> for ProfileStatsResponse {
    fn from(value: ProfileStatistics) -> Self {
        Self {
            total: value.total as u32,
            availability: AvailabilityStatsResponse {
                available: value.availability.available as u32,
                partially_available: value.availability.partially_available as u32,
                unavailable: value.availability.unavailable as u32,
            },
            top_skills: value
                .top_skills
                .into_iter()
                .map(|x| TopSkillResponse {
                    skill: x.skill,
                    count: x.count as u32,
                })
                .collect(),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileStatsResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileStatsResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object)]
pub struct ResetDatabaseResponse {
    pub message: String,
    pub count: u32,
}

#[derive(ApiResponse)]
pub enum ResetDatabaseResponses {
    #[oai(status = 200)]
    Ok(Json<ResetDatabaseResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object)]
pub struct AddTestDataRequest {
    pub count: Option<u32>,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct AddTestDataResponse {
    pub message: String,
    pub previous_count: u32,
    pub new_count: u32,
}

#[derive(ApiResponse)]
pub enum AddTestDataResponses {
    #[oai(status = 200)]
    Ok(Json<AddTestDataResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct ClearDatabaseResponse {
    pub message: String,
    pub deleted_count: u32,
}

#[derive(ApiResponse)]
pub enum ClearDatabaseResponses {
    #[oai(status = 200)]
    Ok(Json<ClearDatabaseResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
