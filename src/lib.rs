use std::sync::Arc;

use async_graphql_poem::GraphQL;
use graphql::{graphiql, init_graphql_schema};
use poem::{
    get,
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint, Tracing, TracingEndpoint},
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use route::{health::ApiHealth, profile::ApiProfile};
use settings::Config;

pub mod cli;
pub mod core;
pub mod factory;
pub mod graphql;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;

pub const GRAPHQL_PATH: &str = "/graphql";

pub struct AppState {
    pub db: crate::core::db::Db,
    pub config: Config,
}

pub fn init_openapi_service(config: &Config) -> OpenApiService<(ApiHealth, ApiProfile), ()> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    OpenApiService::new((ApiHealth, ApiProfile), "Freelance Profiles", "1.0").server(prefix)
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> TracingEndpoint<CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>>> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route = init_openapi_service(config);
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    let schema = init_graphql_schema(app_state.clone());
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .at(GRAPHQL_PATH, get(graphiql).post(GraphQL::new(schema)))
        .with(AddData::new(app_state))
        .with(Cors::new())
        .with(Tracing)
}
