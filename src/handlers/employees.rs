//! 직원 전용 엔드포인트

use actix_web::{web, HttpResponse};
use log::info;

use crate::core::errors::AppError;
use crate::core::state::AppState;

/// 저장된 직원을 피어 서비스로 전달하고, 피어 클라이언트가 돌려준 값을 응답합니다.
///
/// 피어 전송이 포기되면 모든 필드가 `null` 인 직원이 200 으로 응답됩니다.
pub async fn replicate_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let employee = state
        .employees
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(&id))?;

    info!("🔁 직원 복제 요청: {}", id);
    let forwarded = state.peer_client.post_employee(&employee).await;

    Ok(HttpResponse::Ok().json(forwarded))
}
