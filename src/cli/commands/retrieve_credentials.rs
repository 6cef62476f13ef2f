//! retrieve-credentials command implementation

use aws_utils::AwsService;
use tracing::info;

use crate::cli::error::CliResult;
use crate::cli::output;

pub async fn execute_retrieve_credentials(service: &AwsService) -> CliResult<()> {
    info!("resolving credentials");
    let credentials = service.retrieve_credentials().await?;
    output::emit(&credentials)
}
