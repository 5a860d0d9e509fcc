use elastic_async::types::ExpandWildcards;
use elastic_async::{Client, ElasticConfig, ElasticError};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<ElasticConfig> {
    let config = ElasticConfig::new().with_base_url(server.uri());
    Client::with_config(config)
}

#[tokio::test]
async fn close_index_success_parses_acknowledgement() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/myindex/_close"))
        .and(query_param("timeout", "5s"))
        .and(query_param_is_missing("masterTimeout"))
        .and(query_param_is_missing("ignoreUnavailable"))
        .and(query_param_is_missing("allowNoIndices"))
        .and(query_param_is_missing("expandWildcards"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .indices()
        .close()
        .with_index("myindex")
        .with_timeout("5s")
        .send()
        .await
        .unwrap();

    assert!(resp.acknowledged);
}

#[tokio::test]
async fn close_index_sends_explicit_false_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/myindex/_close"))
        .and(query_param("allowNoIndices", "false"))
        .and(query_param("expandWildcards", "closed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .indices()
        .close()
        .with_index("myindex")
        .with_allow_no_indices(false)
        .with_expand_wildcards(ExpandWildcards::Closed)
        .send()
        .await
        .unwrap();

    assert!(resp.acknowledged);
}

#[tokio::test]
async fn open_index_success_parses_acknowledgement() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/myindex/_open"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .indices()
        .open()
        .with_index("myindex")
        .send()
        .await
        .unwrap();

    assert!(!resp.acknowledged);
}

#[tokio::test]
async fn missing_index_never_reaches_transport() {
    let server = MockServer::start().await;

    // Any request at all is a failure; validation must short-circuit.
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.indices().close().with_timeout("5s").send().await;

    match result.unwrap_err() {
        ElasticError::Validation { missing } => assert_eq!(missing, vec!["index"]),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn basic_auth_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/myindex/_open"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ElasticConfig::new()
        .with_base_url(server.uri())
        .with_basic_auth("user", "pass");
    let client = Client::with_config(config);

    let resp = client
        .indices()
        .open()
        .with_index("myindex")
        .send()
        .await
        .unwrap();

    assert!(resp.acknowledged);
}
