//! # Application Error Handling System
//!
//! 인사(HR) 참조 데이터 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스 계층이 만들어 내는 실패를 두 가지 의미 있는 종류로 나누고,
//! 나머지 인프라 실패는 500 계열로 모읍니다.
//!
//! ## 에러 분류 원칙
//!
//! - **부재(absence)는 에러가 아님**: 엔티티 서비스는 "없음"을 `Option::None`
//!   이나 빈 스트림으로 표현합니다. `NotFound` 는 HTTP 경계에서만 만들어집니다.
//! - **잘못된 요청은 항상 관찰 가능**: 매핑 실패, 검증 실패, 생성/수정 중
//!   저장소 거부는 `BadRequest` 로 호출자에게 전파됩니다.
//! - **외부 전송 실패는 흡수됨**: 아웃바운드 클라이언트는 재시도 소진 후에도
//!   에러를 올리지 않습니다 (`client::peer_client` 참고).
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `BadRequest` | 400 Bad Request | 매핑/검증/저장 거부 |
//! | `NotFound` | 404 Not Found | 식별자에 해당하는 문서 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 조회 중 저장소 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 피어 서비스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_state(id: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
//!     let dto = state.states
//!         .find_by_id(&id)
//!         .await?
//!         .ok_or_else(|| AppError::not_found(&id))?;
//!     Ok(HttpResponse::Ok().json(dto))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror` 로 `Error` trait 을 구현하고, `actix_web::ResponseError` 를
/// 구현하여 핸들러에서 `?` 만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청 (400 Bad Request)
    ///
    /// DTO 검증 실패, 타임스탬프 파싱 실패, 생성/수정 중 저장소가 입력을
    /// 거부한 경우 등 입력에 원인이 있는 실패입니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 저장소 계층에서 발생한 원본 에러 메시지를 그대로 담습니다.
    /// 생성/수정 경로에서는 서비스가 이 에러를 `BadRequest` 로 재분류합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 주어진 파라미터에 해당하는 리소스가 없다는 `NotFound` 를 만듭니다.
    pub fn not_found(param: &str) -> Self {
        AppError::NotFound(format!("Resource with param: {} is not found.", param))
    }

    /// 생성/수정 경로에서 발생한 저장소 실패를 잘못된 요청으로 재분류합니다.
    ///
    /// 이미 `BadRequest` 인 경우는 그대로 둡니다.
    pub fn into_bad_request(self) -> Self {
        match self {
            AppError::BadRequest(msg) => AppError::BadRequest(msg),
            AppError::DatabaseError(msg) => AppError::BadRequest(msg),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 `{"error": "..."}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_bad_request_response() {
        let error = AppError::BadRequest("invalid createdAt".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_response() {
        let error = AppError::not_found("64b7f0c2a1");
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("64b7f0c2a1"));
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        for error in [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::ExternalServiceError("peer down".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_database_error_reclassified_as_bad_request() {
        let error = AppError::DatabaseError("E11000 duplicate key".to_string()).into_bad_request();
        match error {
            AppError::BadRequest(msg) => assert_eq!(msg, "E11000 duplicate key"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
