// HTTP client for the SearCh scholarship service
pub mod client;
pub mod retry;

// Re-export common types
pub use client::{
    ApiError, FilteredScholarship, LoginRequest, LoginResponse, RawScholarship, SearchClient,
    UserProfileResponse, UserUpdateRequest, UserUpdateResponse,
};
pub use retry::RetryConfig;
