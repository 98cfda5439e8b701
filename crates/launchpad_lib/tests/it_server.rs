use launchpad_lib::schema::schema_builder;
use launchpad_lib::server::{RunningServer, Server, ServerConfig};

fn test_server() -> Server {
    Server::new(ServerConfig {
        schema: schema_builder(),
        debug: false,
    })
}

async fn spawn_server() -> RunningServer {
    test_server()
        .listen_on(0)
        .await
        .expect("failed to bind test server")
}

#[tokio::test]
async fn serves_graphql_queries_over_post() {
    //// Given
    let running = spawn_server().await;

    //// When
    let response = reqwest::Client::new()
        .post(running.url())
        .json(&serde_json::json!({ "query": "{ launches { id site } }" }))
        .send()
        .await
        .expect("request failed");

    //// Then
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("body is not JSON");
    let launches = body["data"]["launches"]
        .as_array()
        .expect("launches is not an array");
    assert!(!launches.is_empty());
}

#[tokio::test]
async fn introspection_exposes_the_space_explorer_schema() {
    //// Given
    let running = spawn_server().await;

    //// When
    let query = "{ __schema {
        queryType { name fields { name } }
        mutationType { name }
        subscriptionType { name }
        types { name }
    } }";
    let body: serde_json::Value = reqwest::Client::new()
        .post(running.url())
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("body is not JSON");

    //// Then
    let schema = &body["data"]["__schema"];
    assert_eq!(schema["queryType"]["name"], "Query");
    assert_eq!(schema["mutationType"]["name"], "Mutation");
    assert!(schema["subscriptionType"].is_null());

    let query_fields: Vec<&str> = schema["queryType"]["fields"]
        .as_array()
        .expect("query fields is not an array")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(query_fields.len(), 3);
    for expected in ["launches", "launch", "me"] {
        assert!(query_fields.contains(&expected), "missing query field {expected}");
    }

    let type_names: Vec<&str> = schema["types"]
        .as_array()
        .expect("types is not an array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    for expected in ["Launch", "Rocket", "User", "Mission", "TripUpdateResponse"] {
        assert!(type_names.contains(&expected), "missing type {expected}");
    }
}

#[tokio::test]
async fn get_on_the_root_serves_graphiql() {
    //// Given
    let running = spawn_server().await;

    //// When
    let body = reqwest::get(running.url())
        .await
        .expect("request failed")
        .text()
        .await
        .expect("body is not text");

    //// Then
    assert!(body.contains("GraphiQL"));
}

#[tokio::test]
async fn listening_on_a_bound_port_fails() {
    //// Given
    let running = spawn_server().await;
    let port: u16 = running
        .url()
        .trim_start_matches("http://localhost:")
        .trim_end_matches('/')
        .parse()
        .expect("URL has no port");

    //// When
    let result = test_server().listen_on(port).await;

    //// Then
    assert!(result.is_err());
}
