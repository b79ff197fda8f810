//! 데이터 접근 계층 (Repository Layer)
//!
//! Spring Data의 Repository 인터페이스에 해당하는 계층입니다.
//! MongoDB 컬렉션에 대한 CRUD 연산을 캡슐화하여
//! 서비스 계층이 드라이버 세부사항을 알 필요가 없게 합니다.

pub mod users;
