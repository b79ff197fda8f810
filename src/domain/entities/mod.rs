//! 핵심 도메인 엔티티 모듈
//!
//! MongoDB에 영속되는 비즈니스 핵심 객체들을 정의합니다.
//! Spring JPA의 `@Entity` 클래스와 동일한 역할을 수행합니다.

pub mod users;
