use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::messages::dtos::SendMessageDto;
use crate::features::messages::models::ContactMessage;
use crate::features::messages::services::MessageService;
use crate::shared::localized::{pick, LangQuery};
use crate::shared::types::ApiResponse;

/// Submit the contact form
///
/// This is a public endpoint (no authentication required).
#[utoipa::path(
    post,
    path = "/api/contact",
    params(LangQuery),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message stored", body = ApiResponse<ContactMessage>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn send_message(
    State(service): State<Arc<MessageService>>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<SendMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactMessage>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.send(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(message),
            Some(pick(query.lang, "Message sent successfully!", "留言发送成功！")),
            None,
        )),
    ))
}
