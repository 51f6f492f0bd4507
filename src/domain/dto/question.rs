//! 설문 문항 요청 DTO
//!
//! 문항 생성은 본문이 객체 배열이고, 수정도 배열의 첫 요소만 사용하는
//! 배열 모양 본문을 받습니다. 필수 필드 강제가 없어 모든 필드가
//! 선택적입니다.

use mongodb::bson::{Bson, Document};
use serde::Deserialize;

use crate::domain::entities::Question;
use crate::domain::entities::question::default_options;

/// 문항 생성/수정 요청
///
/// `options`가 본문에 없으면 빈 문자열 하나짜리 목록으로 채워집니다.
/// 빈 배열은 그대로 유지됩니다 (누락과 빈 목록은 다르게 취급).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionRequest {
    pub name: Option<String>,
    pub display_label: Option<String>,
    pub tooltip_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub field_type_id: Option<i32>,
    pub question_type_id: Option<i32>,
    pub industry_category_id: Option<String>,
    pub industry_sector_id: Option<String>,
}

impl QuestionRequest {
    pub fn into_entity(self) -> Question {
        Question {
            id: None,
            name: self.name,
            display_label: self.display_label,
            tooltip_text: self.tooltip_text,
            options: self.options.unwrap_or_else(default_options),
            field_type_id: self.field_type_id,
            question_type_id: self.question_type_id,
            industry_category_id: self.industry_category_id,
            industry_sector_id: self.industry_sector_id,
        }
    }

    /// `$set`에 들어가는 갱신 필드 집합
    ///
    /// 본문에 없는 필드는 갱신하지 않지만, `options`는 항상 갱신됩니다
    /// (누락 시 기본값으로 덮어쓰는 것이 원 시스템의 계약).
    pub fn update_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert("name", name.clone());
        }
        if let Some(display_label) = &self.display_label {
            set.insert("display_label", display_label.clone());
        }
        if let Some(tooltip_text) = &self.tooltip_text {
            set.insert("tooltip_text", tooltip_text.clone());
        }
        if let Some(field_type_id) = self.field_type_id {
            set.insert("field_type_id", field_type_id);
        }
        if let Some(question_type_id) = self.question_type_id {
            set.insert("question_type_id", question_type_id);
        }
        if let Some(industry_category_id) = &self.industry_category_id {
            set.insert("industry_category_id", industry_category_id.clone());
        }
        if let Some(industry_sector_id) = &self.industry_sector_id {
            set.insert("industry_sector_id", industry_sector_id.clone());
        }

        let options = self.options.clone().unwrap_or_else(default_options);
        set.insert(
            "options",
            Bson::Array(options.into_iter().map(Bson::String).collect()),
        );

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_entity_defaults_options() {
        let request: QuestionRequest = serde_json::from_value(serde_json::json!({
            "name": "annual_turnover"
        }))
        .unwrap();

        let question = request.into_entity();
        assert_eq!(question.options, vec![String::new()]);
    }

    #[test]
    fn test_into_entity_keeps_explicit_empty_options() {
        let request: QuestionRequest = serde_json::from_value(serde_json::json!({
            "name": "annual_turnover",
            "options": []
        }))
        .unwrap();

        let question = request.into_entity();
        assert!(question.options.is_empty());
    }

    #[test]
    fn test_update_document_always_sets_options() {
        let request: QuestionRequest = serde_json::from_value(serde_json::json!({
            "display_label": "Annual turnover"
        }))
        .unwrap();

        let update = request.update_document();
        assert!(update.contains_key("options"));
        assert!(!update.contains_key("name"));
        assert_eq!(update.get_str("display_label").unwrap(), "Annual turnover");
    }

    #[test]
    fn test_array_shaped_body_deserializes() {
        let requests: Vec<QuestionRequest> = serde_json::from_value(serde_json::json!([
            { "name": "q1" },
            { "name": "q2", "options": ["yes", "no"] },
            { "name": "q3", "field_type_id": 2 }
        ]))
        .unwrap();

        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[1].options.as_deref(),
            Some(["yes".to_string(), "no".to_string()].as_slice())
        );
    }
}
