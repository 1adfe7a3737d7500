use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, StaffError, StaffResult};

pub async fn handle_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_remove_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_remove_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client();

    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| StaffError::InvalidInput("Employee id is required".to_string()))?;

    match client.remove(id).await {
        Err(StaffError::NotSupported(op)) => {
            eprintln!(
                "{}",
                format!("{} is not supported by this client yet.", op).yellow()
            );
            Ok(())
        }
        other => other,
    }
}
