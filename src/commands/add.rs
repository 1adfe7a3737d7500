use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::client::{report_failure, TerminalUi};
use crate::constants::{
    DEPARTMENT_MAX_LEN, DEPARTMENT_MIN_LEN, NAME_MAX_LEN, NAME_MIN_LEN,
};
use crate::error::{ErrorContext, StaffError, StaffResult};
use crate::formatting::print_single_employee;
use crate::models::NewEmployee;
use crate::validation::FormValidator;

pub async fn handle_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_add_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_add_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;

    let firstname = matches
        .get_one::<String>("firstname")
        .ok_or_else(|| StaffError::InvalidInput("First name is required".to_string()))?;
    let surname = matches
        .get_one::<String>("surname")
        .ok_or_else(|| StaffError::InvalidInput("Surname is required".to_string()))?;
    let department = matches
        .get_one::<String>("department")
        .cloned()
        .or_else(|| context.default_department())
        .ok_or_else(|| {
            StaffError::InvalidInput(
                "No department given and no default department configured".to_string(),
            )
        })?;

    let mut validator = FormValidator::new();
    let valid = validator.check_length(firstname, "firstname", NAME_MIN_LEN, NAME_MAX_LEN)
        && validator.check_length(surname, "surname", NAME_MIN_LEN, NAME_MAX_LEN)
        && validator.check_length(&department, "department", DEPARTMENT_MIN_LEN, DEPARTMENT_MAX_LEN);

    if !valid {
        for tip in validator.tips() {
            eprintln!("{}", tip.yellow());
        }
        return Err(StaffError::InvalidInput(format!(
            "Invalid field: {}",
            validator.invalid_fields().join(", ")
        )));
    }

    let employee = NewEmployee {
        firstname: firstname.clone(),
        surname: surname.clone(),
        department,
    };

    let client = context.client();
    let new_id = match client.create(&employee).await {
        Ok(new_id) => new_id,
        Err(e) => return Err(report_failure(e, &mut TerminalUi)),
    };

    match new_id {
        Some(id) => {
            println!("{} {}", "✓".green(), "Employee created.".green().bold());
            // Fetch the stored record back so the user sees what the backend
            // actually persisted.
            match client.get(&id).await {
                Ok(created) => print_single_employee(&created),
                Err(e) => return Err(report_failure(e, &mut TerminalUi)),
            }
        }
        None => {
            println!(
                "{} {}",
                "✓".green(),
                "Employee created, but the backend returned no record location.".green()
            );
        }
    }

    Ok(())
}
