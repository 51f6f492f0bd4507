//! 인증 서비스
//!
//! 회원가입과 로그인의 비즈니스 로직을 구현합니다.
//!
//! 비밀번호는 bcrypt로 해시되어 저장되고, 로그인 검증도 해시 비교로
//! 수행합니다. 해시 cost는 환경별로 조정됩니다
//! ([`crate::config::PasswordConfig`]).

use bcrypt::{hash, verify};

use crate::config::PasswordConfig;
use crate::domain::dto::{LoginRequest, SignupRequest};
use crate::domain::entities::Register;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

/// 로그인 시도의 판정 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginOutcome {
    /// 이메일과 비밀번호가 모두 일치
    Success,
    /// 이메일은 존재하지만 비밀번호 불일치
    WrongPassword,
}

/// 인증 비즈니스 로직 서비스
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 이메일 중복을 먼저 확인하고, 비밀번호를 해시한 뒤 저장합니다.
    /// 동시 가입으로 사전 검사를 통과하더라도 유니크 인덱스가 최종적으로
    /// 중복을 차단합니다.
    ///
    /// # Returns
    ///
    /// 저장된 사용자 문서 (식별자 포함)
    pub async fn signup(&self, request: SignupRequest) -> AppResult<Register> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "User with email {} already exists",
                request.email
            )));
        }

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        let user = Register::new(
            request.firstname,
            request.lastname,
            request.email,
            password_hash,
        );

        self.users.insert(user).await
    }

    /// 로그인 자격을 검증합니다.
    ///
    /// 알 수 없는 이메일은 `AuthenticationError`로 끝납니다. 원 시스템은
    /// 이 경로에서 비정상 종료했지만, 여기서는 의도된 구조화 에러를
    /// 반환합니다.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginOutcome> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("invalid login details".to_string()))?;

        let password_matches = verify(&request.password, &user.password)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

        if password_matches {
            log::info!("로그인 성공: {}", request.email);
            Ok(LoginOutcome::Success)
        } else {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", request.email);
            Ok(LoginOutcome::WrongPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_round_trip_at_dev_cost() {
        let hashed = hash("secret", 4).unwrap();

        assert!(verify("secret", &hashed).unwrap());
        assert!(!verify("wrong", &hashed).unwrap());
    }
}
