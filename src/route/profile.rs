use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::{
    core::error::ServiceError,
    model::profile::{Availability, ProfileFilters},
    repository::profile::{
        add_test_data, clear_database, create_profile, delete_profile, get_all_profile,
        get_profile_by_id, get_profile_statistics, get_profile_summary, reset_database,
        update_profile,
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, OptionalJson,
        },
        profile::{
            AddTestDataRequest, AddTestDataResponse, AddTestDataResponses, ClearDatabaseResponse,
            ClearDatabaseResponses, ProfileCreateRequest, ProfileCreateResponses,
            ProfileDeleteResponses, ProfileDetailResponses, ProfileFiltersResponse,
            ProfileListItem, ProfileListResponse, ProfileListResponses, ProfileResponse,
            ProfileStatsResponses, ProfileSummaryResponse, ProfileUpdateRequest,
            ProfileUpdateResponses, ResetDatabaseResponse, ResetDatabaseResponses,
        },
    },
    AppState,
};

const LOCATION: &str = "route.profile";
const DEFAULT_TEST_DATA_COUNT: u32 = 5;

#[derive(Tags)]
enum ApiProfileTags {
    Profile,
    Seed,
}

pub struct ApiProfile;

fn internal_error(
    state: &AppState,
    function: &str,
    step: &str,
    err: &str,
) -> Json<InternalServerErrorResponse> {
    Json(InternalServerErrorResponse::new(
        LOCATION,
        function,
        step,
        err,
        state.config.is_development(),
    ))
}

fn bad_request(err: ServiceError) -> Json<BadRequestResponse> {
    let details = match &err {
        ServiceError::Validation(errors) => errors.clone(),
        _ => vec![],
    };
    Json(BadRequestResponse {
        message: err.to_string(),
        details,
    })
}

#[OpenApi]
impl ApiProfile {
    #[oai(path = "/profiles", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_all_profile_api(
        &self,
        Query(availability): Query<Option<String>>,
        Query(skill): Query<Option<String>>,
        Query(location): Query<Option<String>>,
        Query(summary): Query<Option<bool>>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileListResponses {
        // Acquire store
        let db = match state.db.read() {
            Ok(val) => val,
            Err(err) => {
                return ProfileListResponses::InternalServerError(internal_error(
                    &state,
                    "get_all_profile_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        // Empty filter values are treated as absent
        let availability = match availability.filter(|x| !x.is_empty()) {
            Some(val) => match val.parse::<Availability>() {
                Ok(val) => Some(val),
                Err(err) => return ProfileListResponses::BadRequest(bad_request(err)),
            },
            None => None,
        };
        let filters = ProfileFilters {
            availability,
            skill: skill.filter(|x| !x.is_empty()),
            location: location.filter(|x| !x.is_empty()),
        };
        let profiles = get_all_profile(&db, &filters);
        let data: Vec<ProfileListItem> = if summary.unwrap_or(false) {
            profiles
                .iter()
                .map(|x| {
                    ProfileListItem::Summary(ProfileSummaryResponse::from(get_profile_summary(x)))
                })
                .collect()
        } else {
            profiles
                .into_iter()
                .map(|x| ProfileListItem::Profile(ProfileResponse::from(x)))
                .collect()
        };

        ProfileListResponses::Ok(Json(ProfileListResponse {
            count: data.len() as u32,
            data,
            filters: ProfileFiltersResponse {
                availability: filters.availability,
                skill: filters.skill,
                location: filters.location,
            },
        }))
    }

    #[oai(path = "/profiles/stats", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_profile_stats_api(&self, state: Data<&Arc<AppState>>) -> ProfileStatsResponses {
        // Acquire store
        let db = match state.db.read() {
            Ok(val) => val,
            Err(err) => {
                return ProfileStatsResponses::InternalServerError(internal_error(
                    &state,
                    "get_profile_stats_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        ProfileStatsResponses::Ok(Json(get_profile_statistics(&db).into()))
    }

    #[oai(path = "/profiles/:id", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_detail_profile_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileDetailResponses {
        // Acquire store
        let db = match state.db.read() {
            Ok(val) => val,
            Err(err) => {
                return ProfileDetailResponses::InternalServerError(internal_error(
                    &state,
                    "get_detail_profile_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        match get_profile_by_id(&db, &id) {
            Some(profile) => ProfileDetailResponses::Ok(Json(profile.into())),
            None => ProfileDetailResponses::NotFound(Json(NotFoundResponse {
                message: ServiceError::profile_not_found(&id).to_string(),
            })),
        }
    }

    #[oai(path = "/profiles", method = "post", tag = "ApiProfileTags::Profile")]
    async fn create_profile_api(
        &self,
        Json(json): Json<ProfileCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileCreateResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return ProfileCreateResponses::InternalServerError(internal_error(
                    &state,
                    "create_profile_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        match create_profile(&mut db, json.into()) {
            Ok(profile) => ProfileCreateResponses::Created(Json(profile.into())),
            Err(err @ (ServiceError::Validation(_) | ServiceError::Conflict(_))) => {
                ProfileCreateResponses::BadRequest(bad_request(err))
            }
            Err(err) => ProfileCreateResponses::InternalServerError(internal_error(
                &state,
                "create_profile_api",
                "create_profile",
                &err.to_string(),
            )),
        }
    }

    #[oai(path = "/profiles/:id", method = "put", tag = "ApiProfileTags::Profile")]
    async fn update_profile_api(
        &self,
        Path(id): Path<String>,
        Json(json): Json<ProfileUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileUpdateResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return ProfileUpdateResponses::InternalServerError(internal_error(
                    &state,
                    "update_profile_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        match update_profile(&mut db, &id, json.into()) {
            Ok(profile) => ProfileUpdateResponses::Ok(Json(profile.into())),
            Err(ServiceError::NotFound(message)) => {
                ProfileUpdateResponses::NotFound(Json(NotFoundResponse { message }))
            }
            Err(err @ (ServiceError::Validation(_) | ServiceError::Conflict(_))) => {
                ProfileUpdateResponses::BadRequest(bad_request(err))
            }
            Err(err) => ProfileUpdateResponses::InternalServerError(internal_error(
                &state,
                "update_profile_api",
                "update_profile",
                &err.to_string(),
            )),
        }
    }

    #[oai(path = "/profiles/:id", method = "delete", tag = "ApiProfileTags::Profile")]
    async fn delete_profile_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileDeleteResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return ProfileDeleteResponses::InternalServerError(internal_error(
                    &state,
                    "delete_profile_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        match delete_profile(&mut db, &id) {
            Ok(profile) => ProfileDeleteResponses::Ok(Json(profile.into())),
            Err(ServiceError::NotFound(message)) => {
                ProfileDeleteResponses::NotFound(Json(NotFoundResponse { message }))
            }
            Err(err) => ProfileDeleteResponses::InternalServerError(internal_error(
                &state,
                "delete_profile_api",
                "delete_profile",
                &err.to_string(),
            )),
        }
    }

    #[oai(path = "/profiles/seed/reset", method = "post", tag = "ApiProfileTags::Seed")]
    async fn reset_database_api(&self, state: Data<&Arc<AppState>>) -> ResetDatabaseResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return ResetDatabaseResponses::InternalServerError(internal_error(
                    &state,
                    "reset_database_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        let result = reset_database(&mut db);
        ResetDatabaseResponses::Ok(Json(ResetDatabaseResponse {
            message: result.message,
            count: result.count as u32,
        }))
    }

    #[oai(path = "/profiles/seed/add", method = "post", tag = "ApiProfileTags::Seed")]
    async fn add_test_data_api(
        &self,
        OptionalJson(json): OptionalJson<AddTestDataRequest>,
        state: Data<&Arc<AppState>>,
    ) -> AddTestDataResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return AddTestDataResponses::InternalServerError(internal_error(
                    &state,
                    "add_test_data_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        let count = json
            .and_then(|x| x.count)
            .unwrap_or(DEFAULT_TEST_DATA_COUNT);
        let result = add_test_data(&mut db, count as usize);
        AddTestDataResponses::Ok(Json(AddTestDataResponse {
            message: result.message,
            previous_count: result.previous_count as u32,
            new_count: result.new_count as u32,
        }))
    }

    #[oai(path = "/profiles/seed/clear", method = "delete", tag = "ApiProfileTags::Seed")]
    async fn clear_database_api(&self, state: Data<&Arc<AppState>>) -> ClearDatabaseResponses {
        // Acquire store
        let mut db = match state.db.write() {
            Ok(val) => val,
            Err(err) => {
                return ClearDatabaseResponses::InternalServerError(internal_error(
                    &state,
                    "clear_database_api",
                    "acquire store",
                    &err.to_string(),
                ))
            }
        };

        let result = clear_database(&mut db);
        ClearDatabaseResponses::Ok(Json(ClearDatabaseResponse {
            message: result.message,
            deleted_count: result.deleted_count as u32,
        }))
    }
}
