use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::{
    core::utils::datetime_to_string,
    schema::health::{HealthResponse, HealthResponses, WelcomeResponse, WelcomeResponses},
    GRAPHQL_PATH,
};

#[derive(Tags)]
enum ApiHealthTags {
    Health,
}

pub struct ApiHealth;

#[OpenApi]
impl ApiHealth {
    #[oai(path = "/health", method = "get", tag = "ApiHealthTags::Health")]
    async fn health_api(&self) -> HealthResponses {
        HealthResponses::Ok(Json(HealthResponse {
            status: "OK".to_string(),
            timestamp: datetime_to_string(Utc::now()),
            service: "Freelance Profiles API".to_string(),
            graphql: GRAPHQL_PATH.to_string(),
        }))
    }

    /// Entry point listing where the APIs live.
    #[oai(path = "/", method = "get", tag = "ApiHealthTags::Health")]
    async fn welcome_api(&self) -> WelcomeResponses {
        WelcomeResponses::Ok(Json(WelcomeResponse {
            message: "Welcome to the Freelance Profiles API".to_string(),
            graphql: GRAPHQL_PATH.to_string(),
            health: "/health".to_string(),
            docs: "/docs".to_string(),
        }))
    }
}
