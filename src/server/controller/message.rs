use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{
            CreateDeletedMessageDto, CreateEditedMessageDto, DeletedMessageDto, EditedMessageDto,
        },
    },
    server::{
        error::AppError,
        model::message::{CreateDeletedMessageParam, CreateEditedMessageParam},
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message log endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Log a deleted message.
///
/// # Returns
/// - `201 Created` - The stored record with generated ID and timestamps
/// - `400 Bad Request` - Body is not valid JSON of the expected shape
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/messages/deleted",
    tag = MESSAGE_TAG,
    request_body = CreateDeletedMessageDto,
    responses(
        (status = 201, description = "Deleted message logged", body = DeletedMessageDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store_deleted_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateDeletedMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreateDeletedMessageParam::from_dto(payload);
    let message = MessageService::new(&state.db).store_deleted(param).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get a guild's most recently deleted messages.
///
/// Returns up to 10 records, newest first.
///
/// # Returns
/// - `200 OK` - Recent deleted messages, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/messages/deleted",
    tag = MESSAGE_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Recent deleted messages", body = Vec<DeletedMessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_deleted_messages(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db)
        .get_recent_deleted(&guild_id)
        .await?;

    let dtos: Vec<DeletedMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Log an edited message.
///
/// # Returns
/// - `201 Created` - The stored record with generated ID and timestamps
/// - `400 Bad Request` - Body is not valid JSON of the expected shape
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/messages/edited",
    tag = MESSAGE_TAG,
    request_body = CreateEditedMessageDto,
    responses(
        (status = 201, description = "Edited message logged", body = EditedMessageDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store_edited_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateEditedMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreateEditedMessageParam::from_dto(payload);
    let message = MessageService::new(&state.db).store_edited(param).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get a guild's most recently edited messages.
///
/// Returns up to 10 records, newest first.
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/messages/edited",
    tag = MESSAGE_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Recent edited messages", body = Vec<EditedMessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_edited_messages(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db)
        .get_recent_edited(&guild_id)
        .await?;

    let dtos: Vec<EditedMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
