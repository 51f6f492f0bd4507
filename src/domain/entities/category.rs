//! 산업 카테고리 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 산업 카테고리
///
/// 섹터([`super::Sector`])가 `industry_id` 필드로 참조하는 최상위 분류입니다.
/// 이름은 유니크 인덱스로 저장소에서 중복이 차단됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 카테고리 이름 (unique)
    pub name: String,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

impl Entity for Category {
    const COLLECTION: &'static str = "categories";
    const RESOURCE: &'static str = "Category";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
