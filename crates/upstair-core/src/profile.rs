// User profile: the three fields the my-page screen edits
use serde::{Deserialize, Serialize};
use tracing::warn;
use upstair_api::{UserProfileResponse, UserUpdateRequest};

use crate::{Error, Result};

/// GPA scale ceiling used across the service.
pub const GPA_MAX: f64 = 4.5;

/// Enrollment status as the server stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Enrollment {
    /// 재학 - currently enrolled
    Enrolled,
    /// 휴학 - on leave
    OnLeave,
}

impl Enrollment {
    /// The exact wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Enrollment::Enrolled => "재학",
            Enrollment::OnLeave => "휴학",
        }
    }

    /// Parse a server or user-typed value. The screens historically used
    /// 재학생/휴학생 while the server stores 재학/휴학; both spellings are
    /// accepted and collapse to the server form.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "재학" | "재학생" => Some(Enrollment::Enrolled),
            "휴학" | "휴학생" => Some(Enrollment::OnLeave),
            _ => None,
        }
    }
}

impl std::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Enrollment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Enrollment::parse(s).ok_or_else(|| format!("expected 재학 or 휴학, got {:?}", s))
    }
}

/// A user profile as fetched from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub email: String,
    pub nickname: String,
    pub gpa: Option<f64>,
    pub grade: Option<u8>,
    pub enrollment: Option<Enrollment>,
}

impl Profile {
    pub fn from_response(response: UserProfileResponse) -> Self {
        let enrollment = response.status.as_deref().and_then(|raw| {
            let parsed = Enrollment::parse(raw);
            if parsed.is_none() {
                warn!("Unrecognized enrollment status on profile: {:?}", raw);
            }
            parsed
        });

        Self {
            email: response.email,
            nickname: response.nickname.unwrap_or_default(),
            gpa: response.gpa,
            grade: response.grade,
            enrollment,
        }
    }
}

/// An edit to the three mutable profile fields, validated before it is
/// allowed anywhere near the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub gpa: f64,
    pub grade: u8,
    pub enrollment: Enrollment,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=GPA_MAX).contains(&self.gpa) {
            return Err(Error::ValidationError(format!(
                "GPA must be between 0.0 and {}, got {}",
                GPA_MAX, self.gpa
            )));
        }

        if !(1..=4).contains(&self.grade) {
            return Err(Error::ValidationError(format!(
                "grade must be between 1 and 4, got {}",
                self.grade
            )));
        }

        Ok(())
    }

    /// Build the wire request, validating first.
    pub fn into_request(self, email: &str) -> Result<UserUpdateRequest> {
        self.validate()?;
        Ok(UserUpdateRequest {
            email: email.to_string(),
            gpa: self.gpa,
            grade: self.grade,
            status: self.enrollment.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(gpa: f64, grade: u8) -> ProfileUpdate {
        ProfileUpdate {
            gpa,
            grade,
            enrollment: Enrollment::Enrolled,
        }
    }

    #[test]
    fn accepts_the_whole_gpa_scale() {
        assert!(update(0.0, 1).validate().is_ok());
        assert!(update(3.5, 3).validate().is_ok());
        assert!(update(GPA_MAX, 4).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_scale_gpa() {
        assert!(update(4.6, 2).validate().is_err());
        assert!(update(-0.1, 2).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_grade() {
        assert!(update(3.0, 0).validate().is_err());
        assert!(update(3.0, 5).validate().is_err());
    }

    #[test]
    fn enrollment_accepts_both_spellings() {
        assert_eq!(Enrollment::parse("재학"), Some(Enrollment::Enrolled));
        assert_eq!(Enrollment::parse("재학생"), Some(Enrollment::Enrolled));
        assert_eq!(Enrollment::parse("휴학"), Some(Enrollment::OnLeave));
        assert_eq!(Enrollment::parse("휴학생"), Some(Enrollment::OnLeave));
        assert_eq!(Enrollment::parse("졸업생"), None);
    }

    #[test]
    fn update_serializes_server_spelling() {
        let request = ProfileUpdate {
            gpa: 4.1,
            grade: 3,
            enrollment: Enrollment::OnLeave,
        }
        .into_request("test1@example.com")
        .unwrap();

        assert_eq!(request.status, "휴학");
        assert_eq!(request.email, "test1@example.com");
    }

    #[test]
    fn invalid_update_never_becomes_a_request() {
        assert!(update(9.9, 2).into_request("x@example.com").is_err());
    }

    #[test]
    fn profile_tolerates_unknown_enrollment() {
        let profile = Profile::from_response(UserProfileResponse {
            email: "test1@example.com".to_string(),
            nickname: Some("이승재".to_string()),
            gpa: Some(4.1),
            grade: Some(3),
            status: Some("졸업".to_string()),
        });

        assert_eq!(profile.enrollment, None);
        assert_eq!(profile.nickname, "이승재");
    }
}
