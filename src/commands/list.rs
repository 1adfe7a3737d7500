use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, StaffError, StaffResult};
use crate::formatting::print_employees;

pub async fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_list_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_list_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client();

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");

    // List failures keep their raw status; the shared 403/401 handling does
    // not apply here.
    let employees = match client.get_all().await {
        Ok(employees) => employees,
        Err(e) => {
            eprintln!("{}", format!("Sorry, something bad happened: {}", e).red());
            return Err(StaffError::Reported);
        }
    };

    if employees.is_empty() {
        println!("No employees found.");
    } else {
        println!("Found {} employees:", employees.len());
        print_employees(&employees, format);
    }

    Ok(())
}
