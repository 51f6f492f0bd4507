//! 탈루카(taluka) 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 탈루카 (지구 하위 행정구역)
///
/// 주/지구 참조 모두 무결성 검사 없는 문자열 필드입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taluka {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소속 주 참조 (문자열 id)
    pub state_id: String,
    /// 소속 지구 참조 (문자열 id)
    pub district_id: String,
    /// 탈루카 이름 (unique)
    pub name: String,
}

impl Taluka {
    pub fn new(state_id: String, district_id: String, name: String) -> Self {
        Self {
            id: None,
            state_id,
            district_id,
            name,
        }
    }
}

impl Entity for Taluka {
    const COLLECTION: &'static str = "talukas";
    const RESOURCE: &'static str = "Taluka";

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
