//! 데이터 액세스 계층
//!
//! 여덟 개 컬렉션이 전부 같은 얕은 액세스 패턴(전체 조회, id 조회,
//! 필터 조회, 삽입, 갱신, 삭제)을 공유하므로 제네릭
//! [`CrudRepository`] 하나로 일반화했습니다. 이메일 조회가 필요한
//! 사용자 컬렉션만 전용 [`UserRepository`]를 가집니다.

pub mod crud;
pub mod users;

pub use crud::CrudRepository;
pub use users::UserRepository;

use crate::db::Database;
use crate::domain::entities::{Category, Department, District, Sector, State, Taluka};
use crate::errors::AppResult;

/// 유니크 인덱스를 부트스트랩합니다.
///
/// 원 시스템에서는 스키마 정의가 인덱스를 암묵적으로 생성했지만,
/// Rust 드라이버에서는 명시적으로 만들어야 저장소가 중복을 계속
/// 차단합니다. 부팅 시 한 번 호출됩니다.
pub async fn ensure_indexes(db: &Database) -> AppResult<()> {
    CrudRepository::<Category>::new(db)
        .ensure_unique_index("name")
        .await?;
    CrudRepository::<Sector>::new(db)
        .ensure_unique_index("name")
        .await?;
    CrudRepository::<State>::new(db)
        .ensure_unique_index("name")
        .await?;
    CrudRepository::<District>::new(db)
        .ensure_unique_index("name")
        .await?;
    CrudRepository::<Taluka>::new(db)
        .ensure_unique_index("name")
        .await?;
    CrudRepository::<Department>::new(db)
        .ensure_unique_index("name")
        .await?;
    UserRepository::new(db).ensure_indexes().await?;

    Ok(())
}
