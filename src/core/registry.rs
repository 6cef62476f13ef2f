//! ECR authorization-token exchange

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::core::secret::SecretString;
use crate::core::service::{error_chain, ServiceError, ServiceResult};

/// Registry login material derived from an ECR authorization token.
///
/// Valid for the short window the provider grants; consumed by exactly one
/// publish run and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryToken {
    pub username: String,
    pub password: SecretString,
    pub endpoint: String,
}

/// Call `GetAuthorizationToken` and decode the result.
pub async fn exchange_token(client: &aws_sdk_ecr::Client) -> ServiceResult<RegistryToken> {
    let response = client.get_authorization_token().send().await.map_err(|e| {
        ServiceError::Upstream(format!("GetAuthorizationToken failed: {}", error_chain(&e)))
    })?;

    // An empty list is a valid-shaped but unusable response; keep it
    // distinguishable from a failed call.
    let data = response.authorization_data().first().ok_or_else(|| {
        ServiceError::EmptyResponse("no authorization data in response".to_string())
    })?;

    let token = data.authorization_token().ok_or_else(|| {
        ServiceError::EmptyResponse("authorization data entry carries no token".to_string())
    })?;
    let proxy_endpoint = data.proxy_endpoint().ok_or_else(|| {
        ServiceError::EmptyResponse("authorization data entry carries no proxy endpoint".to_string())
    })?;

    let (username, password) = decode_authorization_token(token)?;
    let endpoint = endpoint_host(proxy_endpoint)?;
    debug!("exchanged authorization token for registry '{}'", endpoint);

    Ok(RegistryToken {
        username,
        password: SecretString::new(password),
        endpoint,
    })
}

/// Decode a base64 `username:password` authorization token.
///
/// The split is on the first colon. A token with no colon yields an empty
/// password; the provider has never produced one, so the shape is defined
/// rather than validated.
pub fn decode_authorization_token(token: &str) -> ServiceResult<(String, String)> {
    let decoded = STANDARD.decode(token).map_err(|e| {
        ServiceError::Decode(format!("authorization token is not valid base64: {}", e))
    })?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| ServiceError::Decode("authorization token is not valid UTF-8".to_string()))?;

    match decoded.split_once(':') {
        Some((username, password)) => Ok((username.to_string(), password.to_string())),
        None => Ok((decoded, String::new())),
    }
}

/// Reduce a proxy endpoint URL to its host component.
pub fn endpoint_host(proxy_endpoint: &str) -> ServiceResult<String> {
    let url = Url::parse(proxy_endpoint).map_err(|e| {
        ServiceError::Decode(format!(
            "failed to parse registry endpoint '{}': {}",
            proxy_endpoint, e
        ))
    })?;

    url.host_str().map(|host| host.to_string()).ok_or_else(|| {
        ServiceError::Decode(format!("registry endpoint '{}' has no host", proxy_endpoint))
    })
}
