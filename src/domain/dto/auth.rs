//! 인증 요청/응답 DTO
//!
//! 회원가입과 로그인 요청 구조, 그리고 비밀번호 해시를 제외한
//! 사용자 응답 구조를 정의합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Register;

/// 회원가입 요청 DTO
///
/// 네 필드 모두 필수이며, 이메일은 형식 검사를 통과해야 합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "firstname is required"))]
    pub firstname: String,

    #[validate(length(min = 1, message = "lastname is required"))]
    pub lastname: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 사용자 응답 DTO
///
/// 저장된 사용자 문서에서 비밀번호 해시를 제외한 필드만 노출합니다.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<Register> for UserResponse {
    fn from(user: Register) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_rejects_malformed_email() {
        let request = SignupRequest {
            firstname: "Santosh".to_string(),
            lastname: "Pawar".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_rejects_missing_required_field() {
        let request = SignupRequest {
            firstname: String::new(),
            lastname: "Pawar".to_string(),
            email: "santosh@example.com".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_accepts_valid_payload() {
        let request = SignupRequest {
            firstname: "Santosh".to_string(),
            lastname: "Pawar".to_string(),
            email: "santosh@example.com".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_response_never_carries_password() {
        let user = Register::new(
            "Santosh".to_string(),
            "Pawar".to_string(),
            "santosh@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "santosh@example.com");
    }
}
