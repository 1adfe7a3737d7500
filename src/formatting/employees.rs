use colored::*;

use crate::formatting::utils::truncate;
use crate::models::Employee;

pub fn print_employees(employees: &[Employee], format: &str) {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(employees).unwrap());
        }
        "table" => {
            println!(
                "{:<8} {:<20} {:<20} {:<16}",
                "ID".bold(),
                "First name".bold(),
                "Surname".bold(),
                "Department".bold()
            );
            println!("{}", "-".repeat(66));
            for employee in employees {
                println!(
                    "{:<8} {:<20} {:<20} {:<16}",
                    employee.id.to_string().bright_blue().bold(),
                    truncate(&employee.firstname, 18),
                    truncate(&employee.surname, 18),
                    truncate(&employee.department, 16)
                );
            }
        }
        _ => {
            for employee in employees {
                println!(
                    "{} {} {} {}",
                    employee.id.to_string().bright_blue().bold(),
                    employee.firstname,
                    employee.surname.bold(),
                    format!("[{}]", employee.department).cyan()
                );
            }
        }
    }
}

pub fn print_single_employee(employee: &Employee) {
    println!("{}", "-".repeat(50).bright_black());
    println!(
        "{} {} {} {}",
        employee.id.to_string().bright_blue().bold(),
        "|".bright_black(),
        employee.firstname,
        employee.surname.bold()
    );
    println!("{}", "-".repeat(50).bright_black());
    println!("{}: {}", "Department".bold(), employee.department);
}
