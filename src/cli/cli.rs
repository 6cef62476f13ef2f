//! Main CLI application structure

use aws_utils::AwsService;
use clap::Parser;

use crate::cli::commands::{
    ecr_get_token, ecr_push, retrieve_credentials, update_function, Commands,
};
use crate::cli::config::determine_profile;
use crate::cli::error::CliResult;

/// aws-utils CLI - profile credentials, ECR tokens, image publishing
#[derive(Debug, Parser)]
#[command(name = "aws-utils")]
#[command(version = aws_utils::VERSION)]
#[command(about = "AWS profile credentials, ECR login tokens, image publishing, Lambda image updates")]
#[command(long_about = "Each command prints a single JSON object on stdout: the typed result on\n\
                         success, or {\"message\": ...} on failure with a non-zero exit status.\n\
                         Logs go to stderr.\n\n\
                         The AWS profile is taken from --profile, falling back to AWS_PROFILE.\n\n\
                         Examples:\n\
                           aws-utils --profile staging retrieve-credentials\n\
                           aws-utils --profile staging ecr-get-token\n\
                           aws-utils --profile staging ecr-push -i app:latest -n app v1 v2\n\
                           aws-utils --profile staging update-function -f app -i 123.dkr.ecr.us-east-1.amazonaws.com/app:v1")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// AWS profile to operate as (falls back to AWS_PROFILE)
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Enable verbose output (stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> CliResult<()> {
        // Initialize logging
        aws_utils::init_logging();

        // The profile is a fatal precondition for every command; resolve it
        // before touching the provider.
        let profile = determine_profile(self.profile.as_deref())?;

        if self.verbose {
            eprintln!("Using AWS profile: {}", profile);
        }

        let service = AwsService::new(&profile).await?;

        match self.command {
            Commands::RetrieveCredentials => {
                retrieve_credentials::execute_retrieve_credentials(&service).await
            }
            Commands::EcrGetToken => ecr_get_token::execute_ecr_get_token(&service).await,
            Commands::EcrPush(args) => ecr_push::execute_ecr_push(&service, args).await,
            Commands::UpdateFunction(args) => {
                update_function::execute_update_function(&service, args).await
            }
        }
    }
}
