use crate::{graphql::graphql_sdl, init_openapi_service, settings::Config};

pub fn graphql_schema() -> String {
    graphql_sdl()
}

/// OpenAPI document as served at `/openapi.json`.
pub fn openapi_schema(config: &Config) -> String {
    init_openapi_service(config).spec()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::core::test_utils::test_config;

    use super::{graphql_schema, openapi_schema};

    #[test]
    fn test_graphql_schema_lists_roots() {
        let sdl = graphql_schema();
        assert!(sdl.contains("type QueryRoot"));
        assert!(sdl.contains("type MutationRoot"));
        assert!(sdl.contains("input ProfileInput"));
    }

    #[test]
    fn test_openapi_schema_lists_paths() -> anyhow::Result<()> {
        let spec: Value = serde_json::from_str(&openapi_schema(&test_config()))?;

        let paths = spec["paths"].as_object().unwrap();
        for path in [
            "/",
            "/health",
            "/profiles",
            "/profiles/stats",
            "/profiles/{id}",
            "/profiles/seed/reset",
            "/profiles/seed/add",
            "/profiles/seed/clear",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(spec["servers"][0]["url"], "/api");
        Ok(())
    }
}
