//! 기준 데이터 리소스 요청 DTO
//!
//! 카테고리, 섹터, 주, 지구, 탈루카, 부서의 생성/수정 요청 구조입니다.
//! 수정(PATCH)도 같은 구조를 사용합니다. 원 시스템이 수신한 필드 집합
//! 전체를 덮어쓰는 방식이었으므로, 부분 병합이 아니라 선언된 필드
//! 전체가 갱신 대상입니다.

use mongodb::bson::{Document, doc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{Category, Department, District, Sector, State, Taluka};

/// 카테고리 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl CategoryRequest {
    pub fn into_entity(self) -> Category {
        Category::new(self.name)
    }

    /// `$set`에 들어가는 선언 필드 집합
    pub fn update_document(&self) -> Document {
        doc! { "name": self.name.clone() }
    }
}

/// 섹터 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SectorRequest {
    pub industry_id: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl SectorRequest {
    pub fn into_entity(self) -> Sector {
        Sector::new(self.industry_id, self.name)
    }

    pub fn update_document(&self) -> Document {
        doc! {
            "industry_id": self.industry_id.clone(),
            "name": self.name.clone(),
        }
    }
}

/// 주 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StateRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl StateRequest {
    pub fn into_entity(self) -> State {
        State::new(self.name)
    }

    pub fn update_document(&self) -> Document {
        doc! { "name": self.name.clone() }
    }
}

/// 지구 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DistrictRequest {
    #[validate(length(min = 1, message = "state_id is required"))]
    pub state_id: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl DistrictRequest {
    pub fn into_entity(self) -> District {
        District::new(self.state_id, self.name)
    }

    pub fn update_document(&self) -> Document {
        doc! {
            "state_id": self.state_id.clone(),
            "name": self.name.clone(),
        }
    }
}

/// 탈루카 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TalukaRequest {
    #[validate(length(min = 1, message = "state_id is required"))]
    pub state_id: String,

    #[validate(length(min = 1, message = "district_id is required"))]
    pub district_id: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl TalukaRequest {
    pub fn into_entity(self) -> Taluka {
        Taluka::new(self.state_id, self.district_id, self.name)
    }

    pub fn update_document(&self) -> Document {
        doc! {
            "state_id": self.state_id.clone(),
            "district_id": self.district_id.clone(),
            "name": self.name.clone(),
        }
    }
}

/// 부서 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl DepartmentRequest {
    pub fn into_entity(self) -> Department {
        Department::new(self.name)
    }

    pub fn update_document(&self) -> Document {
        doc! { "name": self.name.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_fails_validation() {
        let request: StateRequest = serde_json::from_value(serde_json::json!({
            "name": ""
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let request: CategoryRequest = serde_json::from_value(serde_json::json!({
            "name": "Manufacturing",
            "unexpected": 42
        }))
        .unwrap();

        assert_eq!(request.name, "Manufacturing");
    }

    #[test]
    fn test_update_document_carries_declared_field_set() {
        let request = TalukaRequest {
            state_id: "651f".to_string(),
            district_id: "652a".to_string(),
            name: "Haveli".to_string(),
        };

        let update = request.update_document();
        assert_eq!(update.get_str("state_id").unwrap(), "651f");
        assert_eq!(update.get_str("district_id").unwrap(), "652a");
        assert_eq!(update.get_str("name").unwrap(), "Haveli");
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let result: Result<DistrictRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "Pune"
        }));

        assert!(result.is_err());
    }
}
