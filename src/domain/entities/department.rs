//! 부서 엔티티

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

/// 정부 부서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 부서 이름 (unique)
    pub name: String,
}

impl Department {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

impl Entity for Department {
    const COLLECTION: &'static str = "departments";
    const RESOURCE: &'static str = "Department";

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
