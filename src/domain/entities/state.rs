//! 주(州) 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 주 (행정구역 최상위)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주 이름 (unique)
    pub name: String,
}

impl State {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

impl Entity for State {
    const COLLECTION: &'static str = "states";
    const RESOURCE: &'static str = "State";

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
