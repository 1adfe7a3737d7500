pub mod employee_client;
pub mod interceptor;

pub use employee_client::{error_for_response, new_id_from_location, EmployeeClient};
pub use interceptor::{intercept, report_failure, SessionUi, TerminalUi};
