pub mod employee;

// Re-export commonly used types
pub use employee::{Employee, NewEmployee};
