//! Profile resolution for CLI invocations

use std::env;

use crate::cli::error::{CliError, CliResult};

/// Resolve the AWS profile: explicit flag first, then `AWS_PROFILE`.
///
/// This is the only place the process environment is consulted; everything
/// below the CLI edge takes the profile as an explicit argument.
pub fn determine_profile(flag: Option<&str>) -> CliResult<String> {
    if let Some(profile) = flag {
        if profile.is_empty() {
            return Err(CliError::Config("AWS profile is empty".to_string()));
        }
        return Ok(profile.to_string());
    }

    match env::var("AWS_PROFILE") {
        Ok(profile) if !profile.is_empty() => Ok(profile),
        _ => Err(CliError::Config(
            "AWS profile is not set. Pass --profile or set AWS_PROFILE.".to_string(),
        )),
    }
}
