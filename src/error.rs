use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("This action is not permitted")]
    Forbidden,

    #[error("Your session has expired, please log in again")]
    SessionExpired,

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("{0} is not supported by this client")]
    NotSupported(&'static str),

    // Sentinel for failures the command layer has already shown to the user;
    // main must not print it again, only exit nonzero.
    #[error("Operation failed")]
    Reported,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type StaffResult<T> = Result<T, StaffError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> StaffResult<T>;
    fn with_context<F>(self, f: F) -> StaffResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> StaffResult<T> {
        self.map_err(|e| StaffError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> StaffResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StaffError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> StaffResult<T> {
        self.ok_or_else(|| StaffError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> StaffResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| StaffError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! staff_error {
    ($error_type:ident, $msg:expr) => {
        StaffError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        StaffError::$error_type(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff_error;

    #[test]
    fn test_error_context_on_result() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let staff_result = result.context("Failed to read config file");
        assert!(staff_result.is_err());

        match staff_result {
            Err(StaffError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected StaffError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_on_option() {
        let option: Option<String> = None;
        let result = option.context("Base URL not configured");

        assert!(result.is_err());
        match result {
            Err(StaffError::Unknown(msg)) => {
                assert_eq!(msg, "Base URL not configured");
            }
            _ => panic!("Expected StaffError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_with_closure() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let staff_result =
            result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

        assert!(staff_result.is_err());
        match staff_result {
            Err(StaffError::Unknown(msg)) => {
                assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
                assert!(msg.contains("access denied"));
            }
            _ => panic!("Expected StaffError::Unknown"),
        }
    }

    #[test]
    fn test_staff_error_macro() {
        let error = staff_error!(ConfigError, "Bad config");
        match error {
            StaffError::ConfigError(msg) => assert_eq!(msg, "Bad config"),
            _ => panic!("Expected StaffError::ConfigError"),
        }

        let error = staff_error!(InvalidInput, "Invalid id: {}", "abc");
        match error {
            StaffError::InvalidInput(msg) => assert_eq!(msg, "Invalid id: abc"),
            _ => panic!("Expected StaffError::InvalidInput"),
        }
    }
}
