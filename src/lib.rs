// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod validation;

// Re-export commonly used items
pub use cli_context::CliContext;
pub use client::{
    error_for_response, intercept, new_id_from_location, report_failure, EmployeeClient,
    SessionUi, TerminalUi,
};
pub use config::{get_base_url, load_config, save_config, Config};
pub use error::{StaffError, StaffResult};
pub use models::*;
pub use validation::FormValidator;
