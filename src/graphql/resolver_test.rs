use async_graphql::{Request, Variables};
use serde_json::{json, Value};

use crate::{
    core::{
        db::ProfileStore,
        test_utils::{seeded_app_state, test_app_state},
    },
    graphql::{graphql_sdl, init_graphql_schema, ProfileSchema},
};

async fn execute(schema: &ProfileSchema, query: &str, variables: Value) -> anyhow::Result<Value> {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    Ok(serde_json::to_value(&response)?)
}

const CREATE_PROFILE: &str = r#"
    mutation Create($input: ProfileInput!) {
        createProfile(input: $input) {
            id firstName email availability hourlyRate
            skills { id name level }
            professionalLinks { id type url }
        }
    }
"#;

fn profile_input(email: &str) -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": email,
        "title": "Rust Developer",
        "location": "Nantes, France",
        "hourlyRate": 85.0,
        "skills": [{"name": "Rust", "level": "expert", "category": "Programming"}],
        "professionalLinks": [{"type": "github", "url": "https://github.com/janedoe"}]
    })
}

#[tokio::test]
async fn test_profiles_query_with_filters() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());
    let query = r#"
        query List($filters: ProfileFilterInput) {
            profiles(filters: $filters) { firstName lastName availability }
        }
    "#;

    // When
    let body = execute(
        &schema,
        query,
        json!({"filters": {"availability": "available", "skill": "python"}}),
    )
    .await?;

    // Expect
    assert!(body.get("errors").is_none(), "{}", body);
    let profiles = body["data"]["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["firstName"], "Sophie");
    assert_eq!(profiles[0]["availability"], "available");
    Ok(())
}

#[tokio::test]
async fn test_profiles_query_without_filters_returns_everything() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());

    // When
    let body = execute(&schema, "{ profiles { id } }", json!({})).await?;

    // Expect
    assert_eq!(body["data"]["profiles"].as_array().unwrap().len(), 8);
    Ok(())
}

#[tokio::test]
async fn test_profile_query_unknown_id() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());
    let id = uuid::Uuid::now_v7().to_string();

    // When
    let body = execute(
        &schema,
        "query One($id: ID!) { profile(id: $id) { id } }",
        json!({ "id": id }),
    )
    .await?;

    // Expect
    let error = &body["errors"][0];
    assert_eq!(
        error["message"],
        format!("failed to fetch profile: profile with id = {} not found", id)
    );
    assert_eq!(error["extensions"]["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_profile_summaries_query() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());
    let query = r#"
        {
            profileSummaries(filters: {location: "paris"}) {
                name title location availability skillsCount hourlyRate
            }
        }
    "#;

    // When
    let body = execute(&schema, query, json!({})).await?;

    // Expect
    let summaries = body["data"]["profileSummaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["name"], "Marie Dubois");
    assert_eq!(summaries[0]["skillsCount"], 4);
    assert_eq!(summaries[0]["hourlyRate"], 65.0);
    Ok(())
}

#[tokio::test]
async fn test_profile_stats_query() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());
    let query = r#"
        {
            profileStats {
                total
                availability { available partiallyAvailable unavailable }
                topSkills { skill count }
            }
        }
    "#;

    // When
    let body = execute(&schema, query, json!({})).await?;

    // Expect
    let stats = &body["data"]["profileStats"];
    assert_eq!(stats["total"], 8);
    assert_eq!(stats["availability"]["available"], 4);
    assert_eq!(stats["availability"]["partiallyAvailable"], 2);
    assert_eq!(stats["availability"]["unavailable"], 2);
    let top_skills = stats["topSkills"].as_array().unwrap();
    assert_eq!(top_skills.len(), 10);
    assert_eq!(top_skills[0]["skill"], "Python");
    assert_eq!(top_skills[0]["count"], 2);
    Ok(())
}

#[tokio::test]
async fn test_create_profile_mutation() -> anyhow::Result<()> {
    // Given
    let app_state = test_app_state(ProfileStore::new());
    let schema = init_graphql_schema(app_state.clone());

    // When
    let body = execute(
        &schema,
        CREATE_PROFILE,
        json!({"input": profile_input("jane.doe@example.com")}),
    )
    .await?;

    // Expect
    assert!(body.get("errors").is_none(), "{}", body);
    let created = &body["data"]["createProfile"];
    assert_eq!(created["firstName"], "Jane");
    assert_eq!(created["availability"], "available");
    assert_eq!(created["skills"][0]["level"], "expert");
    assert!(!created["skills"][0]["id"].as_str().unwrap().is_empty());
    assert_eq!(created["professionalLinks"][0]["type"], "github");
    assert_eq!(app_state.db.read().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_create_profile_mutation_duplicate_email() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());

    // When
    let body = execute(
        &schema,
        CREATE_PROFILE,
        json!({"input": profile_input("marie.dubois@email.com")}),
    )
    .await?;

    // Expect
    let error = &body["errors"][0];
    assert_eq!(
        error["message"],
        "failed to create profile: a profile with email marie.dubois@email.com already exists"
    );
    assert_eq!(error["extensions"]["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn test_create_profile_mutation_validation_error() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());
    let mut input = profile_input("not-an-email");
    input["firstName"] = json!("J");

    // When
    let body = execute(&schema, CREATE_PROFILE, json!({ "input": input })).await?;

    // Expect
    let error = &body["errors"][0];
    assert!(error["message"]
        .as_str()
        .unwrap()
        .starts_with("failed to create profile: validation failed"));
    assert_eq!(error["extensions"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        error["extensions"]["details"],
        json!(["first name must be at least 2 characters", "email must be valid"])
    );
    Ok(())
}

#[tokio::test]
async fn test_update_profile_mutation() -> anyhow::Result<()> {
    // Given
    let app_state = seeded_app_state();
    let schema = init_graphql_schema(app_state.clone());
    let id = app_state.db.read().unwrap().iter().next().unwrap().id.to_string();
    let query = r#"
        mutation Update($id: ID!, $input: ProfileUpdateInput!) {
            updateProfile(id: $id, input: $input) {
                firstName title phone hourlyRate availability
            }
        }
    "#;

    // When
    let body = execute(
        &schema,
        query,
        json!({
            "id": id,
            "input": {"title": "Staff Engineer", "phone": null, "availability": "unavailable"}
        }),
    )
    .await?;

    // Expect
    assert!(body.get("errors").is_none(), "{}", body);
    let updated = &body["data"]["updateProfile"];
    assert_eq!(updated["firstName"], "Marie");
    assert_eq!(updated["title"], "Staff Engineer");
    assert_eq!(updated["phone"], Value::Null);
    assert_eq!(updated["hourlyRate"], 65.0);
    assert_eq!(updated["availability"], "unavailable");
    Ok(())
}

#[tokio::test]
async fn test_update_profile_mutation_rate_out_of_range() -> anyhow::Result<()> {
    // Given
    let app_state = seeded_app_state();
    let schema = init_graphql_schema(app_state.clone());
    let id = app_state.db.read().unwrap().iter().next().unwrap().id.to_string();
    let query = r#"
        mutation Update($id: ID!, $input: ProfileUpdateInput!) {
            updateProfile(id: $id, input: $input) { id }
        }
    "#;

    // When
    let body = execute(
        &schema,
        query,
        json!({"id": id, "input": {"hourlyRate": 1500.0}}),
    )
    .await?;

    // Expect
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["errors"][0]["message"],
        "failed to update profile: validation failed: hourly rate must be between 0 and 1000"
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_profile_mutation() -> anyhow::Result<()> {
    // Given
    let app_state = seeded_app_state();
    let schema = init_graphql_schema(app_state.clone());
    let id = app_state.db.read().unwrap().iter().next().unwrap().id.to_string();
    let query = "mutation Delete($id: ID!) { deleteProfile(id: $id) { id email } }";

    // When
    let first = execute(&schema, query, json!({ "id": id })).await?;
    let second = execute(&schema, query, json!({ "id": id })).await?;

    // Expect
    assert_eq!(first["data"]["deleteProfile"]["email"], "marie.dubois@email.com");
    assert_eq!(app_state.db.read().unwrap().len(), 7);
    assert_eq!(second["errors"][0]["extensions"]["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_seed_mutations() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(seeded_app_state());

    // When
    let cleared = execute(
        &schema,
        "mutation { clearDatabase { message deletedCount } }",
        json!({}),
    )
    .await?;
    let added = execute(
        &schema,
        "mutation { addTestData(count: 2) { message previousCount newCount } }",
        json!({}),
    )
    .await?;
    let reset = execute(
        &schema,
        "mutation { resetDatabase { message count } }",
        json!({}),
    )
    .await?;

    // Expect
    assert_eq!(cleared["data"]["clearDatabase"]["deletedCount"], 8);
    assert_eq!(cleared["data"]["clearDatabase"]["message"], "database cleared");
    assert_eq!(added["data"]["addTestData"]["previousCount"], 0);
    assert_eq!(added["data"]["addTestData"]["newCount"], 2);
    assert_eq!(
        added["data"]["addTestData"]["message"],
        "2 additional profiles added"
    );
    assert_eq!(reset["data"]["resetDatabase"]["count"], 8);
    assert_eq!(
        reset["data"]["resetDatabase"]["message"],
        "database reset successfully"
    );
    Ok(())
}

#[tokio::test]
async fn test_add_test_data_default_count() -> anyhow::Result<()> {
    // Given
    let schema = init_graphql_schema(test_app_state(ProfileStore::new()));

    // When
    let body = execute(
        &schema,
        "mutation { addTestData { previousCount newCount } }",
        json!({}),
    )
    .await?;

    // Expect
    assert_eq!(body["data"]["addTestData"]["previousCount"], 0);
    assert_eq!(body["data"]["addTestData"]["newCount"], 4);
    Ok(())
}

#[test]
fn test_sdl_exposes_operations() {
    let sdl = graphql_sdl();

    for name in [
        "profiles(",
        "profile(",
        "profileSummaries(",
        "profileStats:",
        "createProfile(",
        "updateProfile(",
        "deleteProfile(",
        "resetDatabase:",
        "addTestData(",
        "clearDatabase:",
        "enum AvailabilityStatus",
    ] {
        assert!(sdl.contains(name), "missing {}", name);
    }
}
