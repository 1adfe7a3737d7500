use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;

use crate::constants::CHALLENGE_HEADER;
use crate::error::{StaffError, StaffResult};
use crate::logging::log_debug;
use crate::models::{Employee, NewEmployee};

/// Client for the employee directory REST API. One request/response
/// transaction per call; no retries, no timeouts, no caching.
pub struct EmployeeClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fetch the full employee collection. Failures carry the raw HTTP
    /// status; they are never classified as Forbidden/SessionExpired, so the
    /// caller's own reporting always runs.
    pub async fn get_all(&self) -> StaffResult<Vec<Employee>> {
        let response = self.client.get(self.url("employees")).send().await?;

        if !response.status().is_success() {
            return Err(StaffError::Http(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Fetch one employee by id. A missing record surfaces as `Http(404)`;
    /// 403 and challenged 401 responses classify to their typed errors.
    pub async fn get(&self, id: &str) -> StaffResult<Employee> {
        let response = self
            .client
            .get(self.url(&format!("employees/{}", id)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response.status(), response.headers()));
        }

        Ok(response.json().await?)
    }

    /// Submit a new employee. On success the backend returns the new record's
    /// URL in the Location header; the extracted id is `None` when the header
    /// is absent. The expected failure here is `Forbidden`.
    pub async fn create(&self, employee: &NewEmployee) -> StaffResult<Option<String>> {
        let response = self
            .client
            .post(self.url("employees/"))
            .json(employee)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response.status(), response.headers()));
        }

        let new_id = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(new_id_from_location);

        Ok(new_id)
    }

    /// Submit login credentials as a form post. Any session state lives on
    /// the server side; this only reports whether the backend accepted them.
    pub async fn login(&self, username: &str, password: &str) -> StaffResult<()> {
        let form = [("username", username), ("password", password)];
        let response = self
            .client
            .post(self.url("login"))
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_response(response.status(), response.headers()));
        }

        Ok(())
    }

    /// Updating records is not implemented by this client. No request is
    /// issued.
    pub async fn update(&self, _id: &str, _employee: &NewEmployee) -> StaffResult<()> {
        log_debug("update is not implemented; no request was issued");
        Err(StaffError::NotSupported("update"))
    }

    /// Removing records is not implemented by this client. No request is
    /// issued.
    pub async fn remove(&self, _id: &str) -> StaffResult<()> {
        log_debug("remove is not implemented; no request was issued");
        Err(StaffError::NotSupported("remove"))
    }
}

/// Shared policy for mapping a failed response to a typed error, so every
/// caller treats a 403 and a challenged 401 the same way:
/// - 403 is a forbidden action.
/// - 401 with the challenge header means the session has expired.
/// - Anything else keeps its raw status.
pub fn error_for_response(status: StatusCode, headers: &HeaderMap) -> StaffError {
    match status {
        StatusCode::FORBIDDEN => StaffError::Forbidden,
        StatusCode::UNAUTHORIZED if headers.contains_key(CHALLENGE_HEADER) => {
            StaffError::SessionExpired
        }
        other => StaffError::Http(other.as_u16()),
    }
}

/// Extract the new record id from a Location header value.
///
/// Only the final character of the URL is taken, which matches the demo
/// backend where ids stay single-digit. TODO: parse the full trailing path
/// segment once the backend confirms multi-digit ids are in play.
pub fn new_id_from_location(location: &str) -> Option<String> {
    location.chars().last().map(|c| c.to_string())
}
