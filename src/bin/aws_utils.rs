//! aws-utils CLI binary entry point

#[path = "../cli/mod.rs"]
mod cli;

use clap::Parser;
use cli::output;
use cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Handle help and version requests
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                let _ = e.print();
                std::process::exit(0);
            } else if e.kind() == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                || e.kind() == clap::error::ErrorKind::MissingSubcommand
            {
                println!("{}", output::error_envelope("no command provided"));
                std::process::exit(2);
            } else {
                // Parse failures (unknown command, bad arguments) follow the
                // same stdout contract as execution failures.
                println!("{}", output::error_envelope(e.to_string().trim()));
                std::process::exit(2);
            }
        }
    };

    // Execute the CLI command
    match cli.execute().await {
        Ok(()) => {
            std::process::exit(0);
        }
        Err(e) => {
            println!("{}", output::error_envelope(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}
