//! HTTP 요청/응답 DTO
//!
//! 클라이언트 입력은 리소스별 요청 구조체로 역직렬화되며, 선언되지 않은
//! 필드는 조용히 버려집니다. 응답은 [`envelope::ResourceResponse`] 봉투를
//! 공유합니다.

pub mod auth;
pub mod envelope;
pub mod question;
pub mod resources;

pub use auth::{LoginRequest, SignupRequest, UserResponse};
pub use envelope::ResourceResponse;
pub use question::QuestionRequest;
pub use resources::{
    CategoryRequest, DepartmentRequest, DistrictRequest, SectorRequest, StateRequest,
    TalukaRequest,
};
