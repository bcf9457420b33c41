use poem_openapi::{payload::Json, ApiResponse, Object};

#[derive(Object)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub graphql: String,
}

#[derive(ApiResponse)]
pub enum HealthResponses {
    #[oai(status = 200)]
    Ok(Json<HealthResponse>),
}

#[derive(Object)]
pub struct WelcomeResponse {
    pub message: String,
    pub graphql: String,
    pub health: String,
    pub docs: String,
}

#[derive(ApiResponse)]
pub enum WelcomeResponses {
    #[oai(status = 200)]
    Ok(Json<WelcomeResponse>),
}
