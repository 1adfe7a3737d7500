use std::process;

use clap::{Arg, Command};

use staff_cli::commands::{
    handle_add, handle_config, handle_list, handle_login, handle_remove, handle_show,
    handle_update,
};
use staff_cli::logging::{init_logging, log_error};
use staff_cli::StaffError;

fn build_cli() -> Command {
    Command::new("staff")
        .about("Staff CLI - Browse and manage the employee directory from the command line")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List all employees")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple")
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show a single employee")
                .arg(
                    Arg::new("id")
                        .value_name("EMPLOYEE_ID")
                        .help("Employee id")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("add")
                .about("Add a new employee")
                .arg(
                    Arg::new("firstname")
                        .value_name("FIRSTNAME")
                        .help("First name (1-50 characters)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("surname")
                        .value_name("SURNAME")
                        .help("Surname (1-50 characters)")
                        .required(true)
                        .index(2)
                )
                .arg(
                    Arg::new("department")
                        .long("department")
                        .short('d')
                        .value_name("DEPARTMENT")
                        .help("Department (1-16 characters, falls back to the configured default)")
                )
        )
        .subcommand(
            Command::new("update")
                .about("Update an existing employee (not supported yet)")
                .arg(
                    Arg::new("id")
                        .value_name("EMPLOYEE_ID")
                        .help("Employee id")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("remove")
                .about("Remove an employee (not supported yet)")
                .arg(
                    Arg::new("id")
                        .value_name("EMPLOYEE_ID")
                        .help("Employee id")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("login")
                .about("Log in to the directory backend")
                .arg(
                    Arg::new("username")
                        .value_name("USERNAME")
                        .help("Username (3-16 characters)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .value_name("PASSWORD")
                        .help("Password (3-16 characters)")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change the stored configuration")
                .arg(
                    Arg::new("base-url")
                        .long("base-url")
                        .value_name("URL")
                        .help("Set the API base URL")
                )
                .arg(
                    Arg::new("department")
                        .long("department")
                        .value_name("DEPARTMENT")
                        .help("Set the default department for 'add'")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(clap::ArgAction::SetTrue)
                )
        )
}

#[tokio::main]
async fn main() {
    // Logging is best-effort; a read-only cache dir must not break the CLI
    let _ = init_logging();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list(sub_matches).await,
        Some(("show", sub_matches)) => handle_show(sub_matches).await,
        Some(("add", sub_matches)) => handle_add(sub_matches).await,
        Some(("update", sub_matches)) => handle_update(sub_matches).await,
        Some(("remove", sub_matches)) => handle_remove(sub_matches).await,
        Some(("login", sub_matches)) => handle_login(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'staff --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        // Failures the command layer already showed only set the exit code
        if !matches!(e.downcast_ref::<StaffError>(), Some(StaffError::Reported)) {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}
