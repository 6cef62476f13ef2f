//! Integration tests for the ECR token exchange against a mocked endpoint

#![allow(clippy::unwrap_used, clippy::expect_used)]

use aws_utils::core::registry::exchange_token;
use aws_utils::ServiceError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(endpoint: &str) -> aws_sdk_ecr::Client {
    use aws_sdk_ecr::config::retry::RetryConfig;
    use aws_sdk_ecr::config::{BehaviorVersion, Credentials, Region};

    let conf = aws_sdk_ecr::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("akid", "secret", None, None, "tests"))
        .endpoint_url(endpoint)
        .retry_config(RetryConfig::disabled())
        .build();

    aws_sdk_ecr::Client::from_conf(conf)
}

async fn mock_token_endpoint(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header(
            "x-amz-target",
            "AmazonEC2ContainerRegistry_V20150921.GetAuthorizationToken",
        ))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/x-amz-json-1.1"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn exchange_decodes_username_password_and_endpoint() {
    // "YWxpY2U6c2VjcmV0" is base64("alice:secret")
    let body = r#"{"authorizationData":[{"authorizationToken":"YWxpY2U6c2VjcmV0","proxyEndpoint":"https://123456789012.dkr.ecr.us-east-1.amazonaws.com"}]}"#;
    let server = mock_token_endpoint(body, 200).await;

    let token = exchange_token(&test_client(&server.uri())).await.unwrap();

    assert_eq!(token.username, "alice");
    assert_eq!(token.password.expose(), "secret");
    assert_eq!(token.endpoint, "123456789012.dkr.ecr.us-east-1.amazonaws.com");
}

#[tokio::test]
async fn only_the_first_authorization_entry_is_used() {
    let body = r#"{"authorizationData":[
        {"authorizationToken":"YWxpY2U6c2VjcmV0","proxyEndpoint":"https://first.dkr.ecr.us-east-1.amazonaws.com"},
        {"authorizationToken":"Ym9iOmh1bnRlcjI=","proxyEndpoint":"https://second.dkr.ecr.us-east-1.amazonaws.com"}
    ]}"#;
    let server = mock_token_endpoint(body, 200).await;

    let token = exchange_token(&test_client(&server.uri())).await.unwrap();

    assert_eq!(token.username, "alice");
    assert_eq!(token.endpoint, "first.dkr.ecr.us-east-1.amazonaws.com");
}

#[tokio::test]
async fn empty_authorization_data_is_an_empty_response_error() {
    let server = mock_token_endpoint(r#"{"authorizationData":[]}"#, 200).await;

    let err = exchange_token(&test_client(&server.uri())).await.unwrap_err();

    assert!(matches!(err, ServiceError::EmptyResponse(_)));
}

#[tokio::test]
async fn missing_authorization_data_is_an_empty_response_error() {
    let server = mock_token_endpoint("{}", 200).await;

    let err = exchange_token(&test_client(&server.uri())).await.unwrap_err();

    assert!(matches!(err, ServiceError::EmptyResponse(_)));
}

#[tokio::test]
async fn malformed_token_is_a_decode_error() {
    let body = r#"{"authorizationData":[{"authorizationToken":"!!not base64!!","proxyEndpoint":"https://123456789012.dkr.ecr.us-east-1.amazonaws.com"}]}"#;
    let server = mock_token_endpoint(body, 200).await;

    let err = exchange_token(&test_client(&server.uri())).await.unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn provider_failure_is_an_upstream_error() {
    let body = r#"{"__type":"ServerException","message":"internal failure"}"#;
    let server = mock_token_endpoint(body, 500).await;

    let err = exchange_token(&test_client(&server.uri())).await.unwrap_err();

    match err {
        ServiceError::Upstream(message) => {
            assert!(message.contains("GetAuthorizationToken failed"))
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
}
