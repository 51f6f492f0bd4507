//! 지구(district) 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 지구 (주 하위 행정구역)
///
/// `state_id`는 주 문서의 식별자를 담는 참조용 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소속 주 참조 (문자열 id)
    pub state_id: String,
    /// 지구 이름 (unique)
    pub name: String,
}

impl District {
    pub fn new(state_id: String, name: String) -> Self {
        Self {
            id: None,
            state_id,
            name,
        }
    }
}

impl Entity for District {
    const COLLECTION: &'static str = "districts";
    const RESOURCE: &'static str = "District";

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
