//! 사용자 리포지토리
//!
//! `registers` 컬렉션의 데이터 액세스를 담당합니다. 인증 흐름에 필요한
//! 이메일 단건 조회와 유니크 이메일 인덱스 관리를 제공합니다.

use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::db::Database;
use crate::domain::entities::Register;
use crate::errors::{AppError, AppResult};

const COLLECTION: &str = "registers";

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<Register>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Register>(COLLECTION),
        }
    }

    /// 새 사용자 문서를 삽입합니다.
    ///
    /// 이메일 중복은 유니크 인덱스가 막고, 위반은 `ConflictError`로
    /// 변환되어 올라갑니다.
    pub async fn insert(&self, mut user: Register) -> AppResult<Register> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(AppError::from_store)?;

        if let Some(id) = result.inserted_id.as_object_id() {
            user.id = Some(id);
        }

        Ok(user)
    }

    /// 이메일 주소로 사용자를 조회합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Register))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Register>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(AppError::from_store)
    }

    /// 유니크 이메일 인덱스를 생성합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("email_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection
            .create_index(model)
            .await
            .map_err(AppError::from_store)?;

        Ok(())
    }
}
