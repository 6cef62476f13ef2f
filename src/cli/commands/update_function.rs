//! update-function command implementation

use aws_utils::AwsService;
use clap::Args;
use tracing::info;

use crate::cli::error::CliResult;

/// Update a Lambda function's container image
#[derive(Debug, Args)]
pub struct UpdateFunctionArgs {
    /// Name (or ARN) of the function to update
    #[arg(short, long)]
    pub function_name: String,

    /// Fully qualified image reference to deploy
    #[arg(short, long)]
    pub image_uri: String,
}

/// Success carries no payload; exit code 0 is the signal.
pub async fn execute_update_function(
    service: &AwsService,
    args: UpdateFunctionArgs,
) -> CliResult<()> {
    service
        .update_function(&args.function_name, &args.image_uri)
        .await?;

    info!(
        "function '{}' now points at '{}'",
        args.function_name, args.image_uri
    );
    Ok(())
}
