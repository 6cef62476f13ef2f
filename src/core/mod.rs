//! Core service modules

pub mod credentials;
pub mod lambda;
pub mod publish;
pub mod registry;
pub mod secret;
pub mod service;

pub use credentials::Credentials;
pub use publish::{DockerCli, ImageTransport};
pub use registry::RegistryToken;
pub use secret::SecretString;
pub use service::{AwsService, ServiceError, ServiceResult};
