//! 산업 섹터 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 산업 섹터
///
/// `industry_id`는 카테고리 문서의 식별자를 담는 참조용 문자열이며,
/// 저장소 차원의 무결성 검사는 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소속 카테고리 참조 (문자열 id)
    pub industry_id: String,
    /// 섹터 이름 (unique)
    pub name: String,
}

impl Sector {
    pub fn new(industry_id: String, name: String) -> Self {
        Self {
            id: None,
            industry_id,
            name,
        }
    }
}

impl Entity for Sector {
    const COLLECTION: &'static str = "sectors";
    const RESOURCE: &'static str = "Sector";

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
