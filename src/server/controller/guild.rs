use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, PrefixDto, UpdatePrefixDto},
    },
    server::{error::AppError, service::guild::GuildService, state::AppState},
};

/// Tag for grouping guild configuration endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get a guild's command prefix.
///
/// Guilds that never set a prefix, or whose configuration was reset, report the
/// default `"!"`.
///
/// # Returns
/// - `200 OK` - Prefix in effect for the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/prefix",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Prefix in effect for the guild", body = PrefixDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prefix(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let prefix = GuildService::new(&state.db).get_prefix(&guild_id).await?;

    Ok((StatusCode::OK, Json(PrefixDto { prefix })))
}

/// Set a guild's command prefix.
///
/// Creates the guild's configuration on first use. The body must carry a non-empty
/// `prefix`; otherwise nothing is written.
///
/// # Returns
/// - `200 OK` - Full guild record after the update
/// - `400 Bad Request` - Malformed body or missing/empty prefix
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/guilds/{guild_id}/prefix",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdatePrefixDto,
    responses(
        (status = 200, description = "Prefix updated", body = GuildDto),
        (status = 400, description = "Missing or empty prefix", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_prefix(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    payload: Result<Json<UpdatePrefixDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let guild = GuildService::new(&state.db)
        .update_prefix(&guild_id, payload.prefix)
        .await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

/// Reset a guild's configuration.
///
/// Soft-deletes the stored configuration so the guild falls back to defaults. A later
/// prefix update restores the same record.
///
/// # Returns
/// - `204 No Content` - Configuration reset
/// - `404 Not Found` - Guild has no stored configuration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 204, description = "Configuration reset"),
        (status = 404, description = "Guild has no stored configuration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_guild(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db).reset(&guild_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
