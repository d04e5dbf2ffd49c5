//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 선택적 문자열 정리
//! - [`display_terminal`] - 시작 요약 터미널 출력

pub mod string_utils;
pub mod display_terminal;
