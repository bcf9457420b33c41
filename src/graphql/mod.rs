use std::sync::Arc;

use async_graphql::{
    http::GraphiQLSource, Context, EmptySubscription, ErrorExtensions, Object, Schema, ID,
};
use poem::{handler, web::Html, IntoResponse};

use crate::{
    core::error::ServiceError,
    model::profile::ProfileFilters,
    repository::profile::{
        add_test_data, clear_database, create_profile, delete_profile, get_all_profile,
        get_profile_by_id, get_profile_statistics, get_profile_summary, reset_database,
        update_profile,
    },
    AppState, GRAPHQL_PATH,
};

use types::{
    ClearResultObject, DatabaseResultObject, ProfileFilterInput, ProfileInput, ProfileObject,
    ProfileStatsObject, ProfileSummaryObject, ProfileUpdateInput, TestDataResultObject,
};

pub mod types;

#[cfg(test)]
mod resolver_test;

pub type ProfileSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn init_graphql_schema(app_state: Arc<AppState>) -> ProfileSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

/// SDL of the schema, without any state attached.
pub fn graphql_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

#[handler]
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

fn error_code(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Validation(_) => "VALIDATION_ERROR",
        ServiceError::Conflict(_) => "CONFLICT",
        ServiceError::NotFound(_) => "NOT_FOUND",
        ServiceError::Internal(_) => "INTERNAL_SERVER_ERROR",
    }
}

/// Prefixes the message with the failed operation and tags it with a `code` extension.
fn service_error(state: &AppState, operation: &str, err: ServiceError) -> async_graphql::Error {
    let message = match &err {
        ServiceError::Internal(detail) => {
            tracing::error!("graphql.{} failed: {}", operation, detail);
            if state.config.is_development() {
                err.to_string()
            } else {
                "internal server error".to_string()
            }
        }
        _ => err.to_string(),
    };
    let code = error_code(&err);
    let details = match err {
        ServiceError::Validation(errors) => errors,
        _ => vec![],
    };

    async_graphql::Error::new(format!("failed to {}: {}", operation, message)).extend_with(
        |_, ext| {
            ext.set("code", code);
            if !details.is_empty() {
                ext.set("details", details.clone());
            }
        },
    )
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Profiles matching every supplied filter.
    async fn profiles(
        &self,
        ctx: &Context<'_>,
        filters: Option<ProfileFilterInput>,
    ) -> async_graphql::Result<Vec<ProfileObject>> {
        let state = ctx.data::<Arc<AppState>>()?;
        let db = state.db.read().map_err(|err| {
            service_error(state, "fetch profiles", ServiceError::store_unavailable(err))
        })?;

        let filters: ProfileFilters = filters.unwrap_or_default().into();
        Ok(get_all_profile(&db, &filters)
            .into_iter()
            .map(ProfileObject::from)
            .collect())
    }

    async fn profile(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<ProfileObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let db = state.db.read().map_err(|err| {
            service_error(state, "fetch profile", ServiceError::store_unavailable(err))
        })?;

        get_profile_by_id(&db, &id)
            .map(ProfileObject::from)
            .ok_or_else(|| {
                service_error(state, "fetch profile", ServiceError::profile_not_found(&id))
            })
    }

    async fn profile_summaries(
        &self,
        ctx: &Context<'_>,
        filters: Option<ProfileFilterInput>,
    ) -> async_graphql::Result<Vec<ProfileSummaryObject>> {
        let state = ctx.data::<Arc<AppState>>()?;
        let db = state.db.read().map_err(|err| {
            service_error(state, "fetch profile summaries", ServiceError::store_unavailable(err))
        })?;

        let filters: ProfileFilters = filters.unwrap_or_default().into();
        Ok(get_all_profile(&db, &filters)
            .iter()
            .map(|x| get_profile_summary(x).into())
            .collect())
    }

    async fn profile_stats(&self, ctx: &Context<'_>) -> async_graphql::Result<ProfileStatsObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let db = state.db.read().map_err(|err| {
            service_error(state, "fetch profile statistics", ServiceError::store_unavailable(err))
        })?;

        Ok(get_profile_statistics(&db).into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_profile(
        &self,
        ctx: &Context<'_>,
        input: ProfileInput,
    ) -> async_graphql::Result<ProfileObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "create profile", ServiceError::store_unavailable(err))
        })?;

        create_profile(&mut db, input.into())
            .map(ProfileObject::from)
            .map_err(|err| service_error(state, "create profile", err))
    }

    async fn update_profile(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ProfileUpdateInput,
    ) -> async_graphql::Result<ProfileObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "update profile", ServiceError::store_unavailable(err))
        })?;

        update_profile(&mut db, &id, input.into())
            .map(ProfileObject::from)
            .map_err(|err| service_error(state, "update profile", err))
    }

    /// Returns the removed profile.
    async fn delete_profile(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<ProfileObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "delete profile", ServiceError::store_unavailable(err))
        })?;

        delete_profile(&mut db, &id)
            .map(ProfileObject::from)
            .map_err(|err| service_error(state, "delete profile", err))
    }

    /// Drops every profile and reloads the demo set.
    async fn reset_database(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<DatabaseResultObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "reset database", ServiceError::store_unavailable(err))
        })?;

        Ok(reset_database(&mut db).into())
    }

    async fn add_test_data(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 5)] count: i32,
    ) -> async_graphql::Result<TestDataResultObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "add test data", ServiceError::store_unavailable(err))
        })?;

        Ok(add_test_data(&mut db, count.max(0) as usize).into())
    }

    async fn clear_database(&self, ctx: &Context<'_>) -> async_graphql::Result<ClearResultObject> {
        let state = ctx.data::<Arc<AppState>>()?;
        let mut db = state.db.write().map_err(|err| {
            service_error(state, "clear database", ServiceError::store_unavailable(err))
        })?;

        Ok(clear_database(&mut db).into())
    }
}
