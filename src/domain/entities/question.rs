//! 설문 문항 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 설문 문항
///
/// 다른 리소스와 달리 필수 필드 강제가 없습니다. `options`만 기본값
/// `[""]`를 가지며, 카테고리/섹터 참조는 무결성 검사 없는 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub display_label: Option<String>,
    pub tooltip_text: Option<String>,
    /// 선택지 목록. 비어 있으면 빈 문자열 하나로 채워집니다.
    #[serde(default = "default_options")]
    pub options: Vec<String>,
    pub field_type_id: Option<i32>,
    pub question_type_id: Option<i32>,
    /// 카테고리 참조 (문자열 id)
    pub industry_category_id: Option<String>,
    /// 섹터 참조 (문자열 id)
    pub industry_sector_id: Option<String>,
}

/// `options` 필드 기본값
pub fn default_options() -> Vec<String> {
    vec![String::new()]
}

impl Entity for Question {
    const COLLECTION: &'static str = "questions";
    const RESOURCE: &'static str = "Question";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_when_missing_in_document() {
        let question: Question = serde_json::from_value(serde_json::json!({
            "name": "annual_turnover",
            "display_label": "Annual turnover"
        }))
        .unwrap();

        assert_eq!(question.options, vec![String::new()]);
        assert_eq!(question.tooltip_text, None);
    }

    #[test]
    fn test_id_serializes_under_mongo_key() {
        let mut question: Question = serde_json::from_value(serde_json::json!({})).unwrap();
        question.set_id(ObjectId::new());

        let value = serde_json::to_value(&question).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }
}
