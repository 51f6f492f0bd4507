//! 공통 응답 봉투
//!
//! 모든 리소스가 공유하는 `{data, status, message}` 응답 형태입니다.
//! 작업에 따라 세 필드 중 일부만 채워집니다 (필터 조회는 메시지 없음,
//! 삭제는 데이터 없음).

use serde::Serialize;

/// 성공 응답 봉투
///
/// 에러 쪽 봉투는 [`crate::errors::AppError`]의 `ResponseError` 구현이
/// 같은 모양(`{status: "Error", message}`)으로 생성합니다.
#[derive(Debug, Serialize)]
pub struct ResourceResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ResourceResponse<T> {
    /// 데이터와 메시지를 모두 담은 성공 봉투 (생성/수정 응답)
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status: "Success",
            message: Some(message.into()),
        }
    }

    /// 데이터만 담은 성공 봉투 (필터 조회 응답)
    pub fn data_only(data: T) -> Self {
        Self {
            data: Some(data),
            status: "Success",
            message: None,
        }
    }
}

impl ResourceResponse<()> {
    /// 메시지만 담은 성공 봉투 (삭제 응답)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: "Success",
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ResourceResponse::success(
            serde_json::json!({"name": "Maharashtra"}),
            "Maharashtra created successfully",
        );
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "Success");
        assert_eq!(value["message"], "Maharashtra created successfully");
        assert_eq!(value["data"]["name"], "Maharashtra");
    }

    #[test]
    fn test_data_only_envelope_omits_message() {
        let envelope = ResourceResponse::data_only(vec!["a", "b"]);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "Success");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_message_only_envelope_omits_data() {
        let envelope = ResourceResponse::message_only("Question deleted successfully");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "Success");
        assert!(value.get("data").is_none());
        assert_eq!(value["message"], "Question deleted successfully");
    }
}
