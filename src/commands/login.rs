use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::client::{intercept, TerminalUi};
use crate::constants::{CREDENTIAL_MAX_LEN, CREDENTIAL_MIN_LEN};
use crate::error::{ErrorContext, StaffError, StaffResult};
use crate::validation::FormValidator;

pub async fn handle_login(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_login_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_login_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;

    let username = matches
        .get_one::<String>("username")
        .ok_or_else(|| StaffError::InvalidInput("Username is required".to_string()))?;
    let password = matches
        .get_one::<String>("password")
        .ok_or_else(|| StaffError::InvalidInput("Password is required".to_string()))?;

    let mut validator = FormValidator::new();
    let valid = validator.check_length(username, "username", CREDENTIAL_MIN_LEN, CREDENTIAL_MAX_LEN)
        && validator.check_length(password, "password", CREDENTIAL_MIN_LEN, CREDENTIAL_MAX_LEN);

    if !valid {
        for tip in validator.tips() {
            eprintln!("{}", tip.yellow());
        }
        return Err(StaffError::InvalidInput(format!(
            "Invalid field: {}",
            validator.invalid_fields().join(", ")
        )));
    }

    let client = context.client();
    match client.login(username, password).await {
        Ok(()) => {
            println!("{} Logged in as {}.", "✓".green(), username.bold());
            Ok(())
        }
        Err(e) => {
            if !intercept(&e, &mut TerminalUi) {
                eprintln!("{}", format!("Login failed: {}", e).red());
            }
            Err(StaffError::Reported)
        }
    }
}
