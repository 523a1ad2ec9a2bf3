use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::{is_retryable_status, with_retry, RetryConfig};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("server error: {0}")]
    ServerError(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the SearCh backend.
///
/// The service is a plain JSON-over-HTTP API with no auth tokens; the login
/// endpoint checks credentials and returns a nickname, nothing more. Every
/// method issues a single request and maps the response status to an error
/// before deserializing.
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, std::time::Duration::from_secs(10))
    }

    /// Create client with a custom per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: std::time::Duration) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("upstair/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_config: RetryConfig::default(),
        }
    }

    /// Create client with custom retry configuration
    pub fn with_retry_config(base_url: impl Into<String>, retry_config: RetryConfig) -> Self {
        let mut client = Self::new(base_url);
        client.retry_config = retry_config;
        client
    }

    /// Check credentials against `POST /login`.
    ///
    /// Never retried: a 401 will not get better on the second try, and
    /// resubmitting credentials on a wobbly connection is impolite.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if response.status() == 401 {
            return Err(ApiError::InvalidCredentials);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed(format!("Status {}: {}", status, body)));
        }

        let login: LoginResponse = response.json().await?;
        Ok(login)
    }

    /// Fetch the full scholarship listing from `GET /documents/titles`.
    pub async fn list_scholarships(&self) -> Result<Vec<RawScholarship>> {
        let url = format!("{}/documents/titles", self.base_url);

        with_retry(&self.retry_config, "list scholarships", || async {
            let response = self.client.get(&url).send().await?;

            if response.status() == 429 {
                return Err(ApiError::RateLimitExceeded);
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();

                if is_retryable_status(status) {
                    return Err(ApiError::ServerError(format!("Status {}: {}", status, body)));
                }

                return Err(ApiError::RequestFailed(format!("Status {}: {}", status, body)));
            }

            let records: Vec<RawScholarship> = response.json().await?;
            Ok(records)
        })
        .await
    }

    /// Fetch the server-filtered listing from `GET /documents/filter`.
    ///
    /// All three criteria are mandatory; the endpoint classifies records
    /// server-side and returns only title and link per match.
    pub async fn filter_scholarships(
        &self,
        min_gpa: f64,
        grade: u8,
        status: &str,
    ) -> Result<Vec<FilteredScholarship>> {
        let url = format!("{}/documents/filter", self.base_url);

        with_retry(&self.retry_config, "filter scholarships", || async {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("min_gpa", min_gpa.to_string()),
                    ("grade", grade.to_string()),
                    ("status", status.to_string()),
                ])
                .send()
                .await?;

            if response.status() == 429 {
                return Err(ApiError::RateLimitExceeded);
            }

            if !response.status().is_success() {
                let status_code = response.status();
                let body = response.text().await.unwrap_or_default();

                if is_retryable_status(status_code) {
                    return Err(ApiError::ServerError(format!(
                        "Status {}: {}",
                        status_code, body
                    )));
                }

                return Err(ApiError::RequestFailed(format!(
                    "Status {}: {}",
                    status_code, body
                )));
            }

            let records: Vec<FilteredScholarship> = response.json().await?;
            Ok(records)
        })
        .await
    }

    /// Fetch a user profile from `GET /user/{email}`.
    pub async fn get_user(&self, email: &str) -> Result<UserProfileResponse> {
        let url = format!("{}/user/{}", self.base_url, email);

        with_retry(&self.retry_config, "get user", || async {
            let response = self.client.get(&url).send().await?;

            if response.status() == 404 {
                return Err(ApiError::NotFound(email.to_string()));
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::RequestFailed(format!("Status {}: {}", status, body)));
            }

            let profile: UserProfileResponse = response.json().await?;
            Ok(profile)
        })
        .await
    }

    /// Update GPA, grade and enrollment status via `PUT /user/update`.
    ///
    /// Not retried: the write is not idempotent from the server's point of
    /// view and a duplicate PUT after a timed-out success would be silent.
    pub async fn update_user(&self, request: &UserUpdateRequest) -> Result<UserUpdateResponse> {
        let url = format!("{}/user/update", self.base_url);

        let response = self.client.put(&url).json(request).send().await?;

        if response.status() == 404 {
            return Err(ApiError::NotFound(request.email.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed(format!("Status {}: {}", status, body)));
        }

        let result: UserUpdateResponse = response.json().await?;
        Ok(result)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// One scholarship row as the listing endpoint returns it.
///
/// Every field is optional on the wire - the backing table tolerates nulls
/// in all columns, so the client must too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScholarship {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// One row from the filtered endpoint, which strips everything but
/// title and link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredScholarship {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    pub email: String,
    pub gpa: f64,
    pub grade: u8,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing_row() {
        let json = r#"{
            "title": "국가우수장학금",
            "link": "https://example.com/apply",
            "start_date": "2024-03-01",
            "end_date": "2024-03-15",
            "status": "재학",
            "grade": 2,
            "gpa": 3.5
        }"#;

        let record: RawScholarship = serde_json::from_str(json).unwrap();
        assert_eq!(record.title.as_deref(), Some("국가우수장학금"));
        assert_eq!(record.grade, Some(2));
        assert_eq!(record.gpa, Some(3.5));
    }

    #[test]
    fn tolerates_nulls_and_missing_fields() {
        // The listing endpoint emits whatever the table holds, nulls included
        let json = r#"{"title": null, "link": null, "start_date": null}"#;

        let record: RawScholarship = serde_json::from_str(json).unwrap();
        assert!(record.title.is_none());
        assert!(record.end_date.is_none());
        assert!(record.gpa.is_none());
    }

    #[test]
    fn deserializes_filtered_row() {
        let json = r#"[{"title": "성적우수장학금", "link": ""}]"#;

        let records: Vec<FilteredScholarship> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("성적우수장학금"));
        assert_eq!(records[0].link.as_deref(), Some(""));
    }

    #[test]
    fn deserializes_login_response() {
        let json = r#"{"success": true, "name": "홍길동"}"#;

        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(login.success);
        assert_eq!(login.name.as_deref(), Some("홍길동"));
    }

    #[test]
    fn serializes_update_request() {
        let request = UserUpdateRequest {
            email: "test1@example.com".to_string(),
            gpa: 4.1,
            grade: 3,
            status: "재학".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "test1@example.com");
        assert_eq!(json["gpa"], 4.1);
        assert_eq!(json["grade"], 3);
        assert_eq!(json["status"], "재학");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = SearchClient::new("http://192.168.11.230:8000/");
        assert_eq!(client.base_url, "http://192.168.11.230:8000");
    }
}
