use colored::*;

use crate::error::StaffError;

/// The two reactions the shared error policy can demand from the user
/// interface: a blocking notice for a forbidden action, and sending the user
/// to the login flow when the session has expired.
pub trait SessionUi {
    fn show_forbidden_notice(&mut self);
    fn prompt_login(&mut self);
}

/// Offer a failure to the shared handling policy. Returns true when it was
/// handled here; a false return leaves reporting to the caller.
pub fn intercept(error: &StaffError, ui: &mut dyn SessionUi) -> bool {
    match error {
        StaffError::Forbidden => {
            ui.show_forbidden_notice();
            true
        }
        StaffError::SessionExpired => {
            ui.prompt_login();
            true
        }
        _ => false,
    }
}

/// Report a failure to the user: through the shared policy when it applies,
/// otherwise as the plain alert line. Returns the sentinel marking the
/// failure as already shown, so the exit path does not print it a second
/// time.
pub fn report_failure(error: StaffError, ui: &mut dyn SessionUi) -> StaffError {
    if !intercept(&error, ui) {
        eprintln!("{}", format!("Sorry, something bad happened: {}", error).red());
    }
    StaffError::Reported
}

/// Production `SessionUi` writing to the terminal.
pub struct TerminalUi;

impl SessionUi for TerminalUi {
    fn show_forbidden_notice(&mut self) {
        eprintln!(
            "{} {}",
            "✗".red().bold(),
            "You are not permitted to perform this action.".red()
        );
    }

    fn prompt_login(&mut self) {
        eprintln!(
            "{} {}",
            "✗".red().bold(),
            "Your session has expired.".red()
        );
        eprintln!("Run 'staff login <username>' to log in again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingUi {
        notices: usize,
        logins: usize,
    }

    impl SessionUi for RecordingUi {
        fn show_forbidden_notice(&mut self) {
            self.notices += 1;
        }

        fn prompt_login(&mut self) {
            self.logins += 1;
        }
    }

    #[test]
    fn test_forbidden_is_handled_with_notice() {
        let mut ui = RecordingUi::default();
        assert!(intercept(&StaffError::Forbidden, &mut ui));
        assert_eq!(ui.notices, 1);
        assert_eq!(ui.logins, 0);
    }

    #[test]
    fn test_session_expiry_prompts_login_exactly_once() {
        let mut ui = RecordingUi::default();
        assert!(intercept(&StaffError::SessionExpired, &mut ui));
        assert_eq!(ui.logins, 1);
        assert_eq!(ui.notices, 0);
    }

    #[test]
    fn test_plain_unauthorized_is_not_handled() {
        let mut ui = RecordingUi::default();
        assert!(!intercept(&StaffError::Http(401), &mut ui));
        assert_eq!(ui.notices, 0);
        assert_eq!(ui.logins, 0);
    }

    #[test]
    fn test_reported_failures_collapse_to_the_sentinel() {
        let mut ui = RecordingUi::default();

        // Handled through the policy: one notice, then the sentinel.
        let result = report_failure(StaffError::Forbidden, &mut ui);
        assert!(matches!(result, StaffError::Reported));
        assert_eq!(ui.notices, 1);

        let result = report_failure(StaffError::SessionExpired, &mut ui);
        assert!(matches!(result, StaffError::Reported));
        assert_eq!(ui.logins, 1);

        // Unhandled: the alert line fires instead, still the sentinel.
        let result = report_failure(StaffError::Http(404), &mut ui);
        assert!(matches!(result, StaffError::Reported));
        assert_eq!(ui.notices, 1);
        assert_eq!(ui.logins, 1);
    }

    #[test]
    fn test_other_failures_are_not_handled() {
        let mut ui = RecordingUi::default();
        assert!(!intercept(&StaffError::Http(404), &mut ui));
        assert!(!intercept(&StaffError::Http(500), &mut ui));
        assert!(!intercept(&StaffError::NotSupported("update"), &mut ui));
        assert_eq!(ui.notices, 0);
        assert_eq!(ui.logins, 0);
    }
}
