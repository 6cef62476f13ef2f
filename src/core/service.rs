//! Service facade and error taxonomy

use aws_config::{BehaviorVersion, SdkConfig};
use thiserror::Error;
use tracing::debug;

use crate::core::credentials::{self, Credentials};
use crate::core::lambda;
use crate::core::publish::{self, ImageTransport};
use crate::core::registry::{self, RegistryToken};

/// Errors produced by the service layer.
///
/// Every variant is terminal for the current invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Publish error: {0}")]
    Publish(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Render an error with its full source chain.
///
/// SDK errors put the interesting detail (service message, HTTP status) in
/// the chain, not in the top-level `Display`.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// AWS operations scoped to a single named profile.
///
/// The profile is an explicit constructor argument; nothing in the service
/// layer reads the process environment.
pub struct AwsService {
    config: SdkConfig,
}

impl AwsService {
    /// Load provider configuration for the given profile.
    pub async fn new(profile: &str) -> ServiceResult<Self> {
        if profile.is_empty() {
            return Err(ServiceError::Configuration(
                "AWS profile is not set".to_string(),
            ));
        }

        debug!("loading AWS configuration for profile '{}'", profile);
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;

        Ok(Self { config })
    }

    /// Build a service around an already-loaded configuration.
    pub fn from_conf(config: SdkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Resolve the short-lived credentials for the profile.
    pub async fn retrieve_credentials(&self) -> ServiceResult<Credentials> {
        credentials::retrieve(&self.config).await
    }

    /// Exchange the profile's credentials for a registry login token.
    pub async fn ecr_token(&self) -> ServiceResult<RegistryToken> {
        let client = aws_sdk_ecr::Client::new(&self.config);
        registry::exchange_token(&client).await
    }

    /// Exchange a token, then push `source` as `endpoint/name:tag` for each tag.
    pub async fn push_image(
        &self,
        transport: &dyn ImageTransport,
        source: &str,
        name: &str,
        tags: &[String],
    ) -> ServiceResult<Vec<String>> {
        let token = self.ecr_token().await?;
        publish::publish_image(transport, &token, source, name, tags).await
    }

    /// Point a Lambda function at a new container image.
    pub async fn update_function(
        &self,
        function_name: &str,
        image_uri: &str,
    ) -> ServiceResult<()> {
        let client = aws_sdk_lambda::Client::new(&self.config);
        lambda::update_function_code(&client, function_name, image_uri).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aws_config::Region;
    use aws_credential_types::provider::SharedCredentialsProvider;

    #[tokio::test]
    async fn empty_profile_is_a_configuration_error() {
        let err = AwsService::new("").await.unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[tokio::test]
    async fn from_conf_serves_credential_retrieval() {
        let creds = aws_credential_types::Credentials::new(
            "akid",
            "secret",
            Some("token".to_string()),
            None,
            "tests",
        );
        let config = SdkConfig::builder()
            .credentials_provider(SharedCredentialsProvider::new(creds))
            .region(Region::new("eu-central-1"))
            .build();

        let service = AwsService::from_conf(config);
        let credentials = service.retrieve_credentials().await.unwrap();

        assert_eq!(credentials.access_key_id, "akid");
        assert_eq!(credentials.region, "eu-central-1");
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);

        let rendered = error_chain(&outer);
        assert!(rendered.contains("connection reset"));
    }

    #[test]
    fn error_messages_carry_their_category() {
        assert_eq!(
            ServiceError::EmptyResponse("no authorization data".to_string()).to_string(),
            "Empty response: no authorization data"
        );
        assert_eq!(
            ServiceError::Publish("push refused".to_string()).to_string(),
            "Publish error: push refused"
        );
    }
}
