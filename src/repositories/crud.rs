//! 컬렉션 공통 CRUD 리포지토리
//!
//! 리소스 컬렉션 하나에 대한 단일 연산 액세스를 제공합니다.
//! 갱신/삭제는 조회 후 쓰기가 아니라 find-and-modify 한 번으로 처리해서
//! 문서 단위 원자성 위에서 last-write-wins 의미를 유지합니다.

use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult};

/// 엔티티 타입 하나당 하나씩 인스턴스화되는 제네릭 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let states = CrudRepository::<State>::new(&db);
/// let all = states.find_all().await?;
/// let one = states.find_by_id("651f1c2e9d3a4b0012345678").await?;
/// ```
#[derive(Clone)]
pub struct CrudRepository<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> CrudRepository<T> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<T>(T::COLLECTION),
        }
    }

    /// 경로 파라미터 문자열을 ObjectId로 해석합니다.
    ///
    /// 해석 불가능한 식별자는 저장소까지 가지 않고 400으로 끝납니다.
    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError(format!("Invalid {} id: {}", T::RESOURCE, id)))
    }

    /// 컬렉션의 모든 문서를 반환합니다. 필터/페이지네이션 없음.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(AppError::from_store)?;

        cursor.try_collect().await.map_err(AppError::from_store)
    }

    /// 주어진 필터와 정확히 일치하는 문서들을 반환합니다.
    pub async fn find_filtered(&self, filter: Document) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(AppError::from_store)?;

        cursor.try_collect().await.map_err(AppError::from_store)
    }

    /// 저장소 식별자로 단건 조회합니다. 없으면 `None`.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = Self::parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(AppError::from_store)
    }

    /// 문서 하나를 삽입하고, 저장소가 부여한 식별자를 채워 돌려줍니다.
    pub async fn insert(&self, mut entity: T) -> AppResult<T> {
        let result = self
            .collection
            .insert_one(&entity)
            .await
            .map_err(AppError::from_store)?;

        if let Some(id) = result.inserted_id.as_object_id() {
            entity.set_id(id);
        }

        Ok(entity)
    }

    /// 문서 여러 개를 한 번의 배치로 삽입합니다.
    ///
    /// ordered 삽입이므로 배치는 전체 성공 또는 전체 실패로 끝납니다.
    pub async fn insert_many(&self, mut entities: Vec<T>) -> AppResult<Vec<T>> {
        if entities.is_empty() {
            return Ok(entities);
        }

        let result = self
            .collection
            .insert_many(&entities)
            .await
            .map_err(AppError::from_store)?;

        for (index, inserted_id) in result.inserted_ids {
            if let (Some(id), Some(entity)) =
                (inserted_id.as_object_id(), entities.get_mut(index))
            {
                entity.set_id(id);
            }
        }

        Ok(entities)
    }

    /// 선언된 필드 집합을 `$set`으로 덮어쓰고 갱신된 문서를 반환합니다.
    ///
    /// 대상이 없으면 `NotFound`를 반환합니다.
    pub async fn update_by_id(&self, id: &str, update: Document) -> AppResult<T> {
        let object_id = Self::parse_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update })
            .with_options(options)
            .await
            .map_err(AppError::from_store)?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} with id {} not found", T::RESOURCE, id))
            })
    }

    /// 문서를 삭제하고 삭제된 문서를 반환합니다.
    ///
    /// 대상이 없으면 `NotFound`를 반환합니다.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<T> {
        let object_id = Self::parse_id(id)?;

        self.collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(AppError::from_store)?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} with id {} not found", T::RESOURCE, id))
            })
    }

    /// 단일 필드 유니크 인덱스를 생성합니다. 이미 있으면 no-op입니다.
    pub async fn ensure_unique_index(&self, field: &str) -> AppResult<()> {
        let mut keys = Document::new();
        keys.insert(field, 1);

        let options = IndexOptions::builder()
            .unique(true)
            .name(format!("{}_unique", field))
            .build();
        let model = IndexModel::builder().keys(keys).options(options).build();

        self.collection
            .create_index(model)
            .await
            .map_err(AppError::from_store)?;

        Ok(())
    }
}
