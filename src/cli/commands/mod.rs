//! Command modules for CLI

pub mod ecr_get_token;
pub mod ecr_push;
pub mod retrieve_credentials;
pub mod update_function;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve short-lived credentials for the profile
    #[command(about = "Print the profile's resolved credentials as JSON")]
    RetrieveCredentials,

    /// Exchange the profile's credentials for an ECR login token
    #[command(about = "Print a decoded ECR login token (username, password, endpoint) as JSON")]
    EcrGetToken,

    /// Push a local container image to ECR under one or more tags
    #[command(about = "Authenticate against ECR and push an image once per tag, in order")]
    EcrPush(ecr_push::EcrPushArgs),

    /// Update a Lambda function's container image
    #[command(about = "Point a Lambda function at a new container image reference")]
    UpdateFunction(update_function::UpdateFunctionArgs),
}
