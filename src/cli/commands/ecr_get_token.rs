//! ecr-get-token command implementation

use aws_utils::AwsService;
use tracing::info;

use crate::cli::error::CliResult;
use crate::cli::output;

pub async fn execute_ecr_get_token(service: &AwsService) -> CliResult<()> {
    info!("exchanging credentials for a registry token");
    let token = service.ecr_token().await?;
    output::emit(&token)
}
