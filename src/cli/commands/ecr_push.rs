//! ecr-push command implementation

use aws_utils::{AwsService, DockerCli};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::error::CliResult;
use crate::cli::output;

/// Push a local container image to ECR under one or more tags
#[derive(Debug, Args)]
pub struct EcrPushArgs {
    /// Local image reference (name:tag or image ID) to publish
    #[arg(short, long)]
    pub image: String,

    /// Repository name inside the registry
    #[arg(short, long)]
    pub name: String,

    /// Tags to publish, pushed in the order given
    #[arg(required = true)]
    pub tags: Vec<String>,
}

/// Published references, one per tag.
#[derive(Debug, Serialize)]
pub struct PushedReferences {
    pub references: Vec<String>,
}

pub async fn execute_ecr_push(service: &AwsService, args: EcrPushArgs) -> CliResult<()> {
    info!(
        "publishing '{}' as '{}' with {} tag(s)",
        args.image,
        args.name,
        args.tags.len()
    );

    let transport = DockerCli::new();
    let references = service
        .push_image(&transport, &args.image, &args.name, &args.tags)
        .await?;

    output::emit(&PushedReferences { references })
}
