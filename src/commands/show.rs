use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::{report_failure, TerminalUi};
use crate::error::{ErrorContext, StaffError, StaffResult};
use crate::formatting::print_single_employee;

pub async fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_show_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_show_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client();

    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| StaffError::InvalidInput("Employee id is required".to_string()))?;

    match client.get(id).await {
        Ok(employee) => {
            print_single_employee(&employee);
            Ok(())
        }
        Err(e) => Err(report_failure(e, &mut TerminalUi)),
    }
}
