//! 인사(HR) 참조 데이터 백엔드
//!
//! 국가, 주, 도시, 주소, 부서, 직무, 직무 이력, 직원 여덟 개 엔티티를
//! 문서 저장소에 보관하고 REST 로 제공하는 논블로킹 서비스입니다.
//!
//! # Features
//!
//! - **제네릭 CRUD**: 모든 엔티티가 하나의 `EntityService` 구현을 공유
//! - **외래 키 조회**: `EntityDescriptor` 에 선언된 참조 필드로 동등 조회
//! - **이름 검색**: 대소문자 무시 부분 일치, 검색 필드 오름차순
//! - **의사 스트림**: 조회 결과를 2초마다 재방출하는 SSE 피드
//! - **피어 복제**: 재시도/백오프를 갖춘 아웃바운드 클라이언트
//! - **저장소 선택**: MongoDB 또는 인메모리 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/{collection}, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 상태 코드, SSE
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │ EntityService<M>│      │   PeerClient    │ ← 재시도, 기본값 폴백
//! └─────────────────┘      └─────────────────┘
//!          │ EntityMapper (DTO ⇄ 문서)
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB / 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use human_resources_backend::core::state::{AppState, InMemoryStores};
//! use human_resources_backend::client::PeerClient;
//! use human_resources_backend::config::PeerClientConfig;
//!
//! let state = AppState::build(&InMemoryStores, PeerClient::new(PeerClientConfig::from_env())?);
//! let created = state.states.create(dto).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod client;
pub mod seed;
pub mod utils;
pub mod routes;
pub mod handlers;
