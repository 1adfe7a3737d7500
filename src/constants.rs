pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/rest-webapp/";
pub const CONFIG_FILE: &str = ".staff-cli-config.json";

// Custom header the backend's auth filter adds to a 401 to signal that the
// client should re-authenticate. Note the spelling: this is not the standard
// WWW-Authenticate header.
pub const CHALLENGE_HEADER: &str = "WWW-Authentication";

// Field length limits enforced before submission
pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 50;
pub const DEPARTMENT_MIN_LEN: usize = 1;
pub const DEPARTMENT_MAX_LEN: usize = 16;
pub const CREDENTIAL_MIN_LEN: usize = 3;
pub const CREDENTIAL_MAX_LEN: usize = 16;
