pub mod employees;
pub mod utils;

pub use employees::{print_employees, print_single_employee};
pub use utils::truncate;
