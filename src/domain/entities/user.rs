//! 사용자(가입) 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 가입 사용자
///
/// `registers` 컬렉션에 저장됩니다. 이메일은 유니크 인덱스로 중복이
/// 차단되며, `password`에는 bcrypt 해시만 저장됩니다. 평문 비밀번호는
/// 어디에도 저장되지 않고, 해시는 응답 DTO에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Register {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password: String,
}

impl Register {
    /// 새 가입 사용자를 생성합니다. `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(firstname: String, lastname: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            firstname,
            lastname,
            email,
            password: password_hash,
        }
    }
}
