//! # aws-utils
//!
//! Helpers for resolving short-lived AWS credentials for a named profile,
//! exchanging them for an ECR login token, publishing container images, and
//! updating a Lambda function's image reference.
//!
//! The service layer is a thin, typed facade over the AWS SDK: every
//! non-trivial operation is delegated to the provider, and responses are
//! reshaped into small records suitable for JSON output. All errors are
//! terminal for the invocation: a stale SSO session or a rejected push is
//! a user-facing condition, not a transient fault, so nothing is retried.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aws_utils::AwsService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = AwsService::new("staging").await?;
//!
//!     let credentials = service.retrieve_credentials().await?;
//!     println!("region: {}", credentials.region);
//!
//!     let token = service.ecr_token().await?;
//!     println!("registry: {}", token.endpoint);
//!
//!     Ok(())
//! }
//! ```

pub mod core;

pub use crate::core::credentials::Credentials;
pub use crate::core::publish::{DockerCli, ImageTransport};
pub use crate::core::registry::RegistryToken;
pub use crate::core::secret::SecretString;
pub use crate::core::service::{AwsService, ServiceError, ServiceResult};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging (safe to call more than once).
///
/// The subscriber writes to stderr: stdout is reserved for the JSON result
/// contract.
pub fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "aws_utils=warn".into());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // This will fail silently if already initialized
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
