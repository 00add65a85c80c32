//! Reader endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{ApiJson, DataResponse};
use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        reader::{CreateReader, Reader, UpdateReader},
        MessageResponse,
    },
    AppState,
};

/// Body returned after a reader is created
#[derive(Serialize, ToSchema)]
pub struct ReaderCreated {
    pub message: String,
    pub reader_id: String,
}

/// List all readers
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    responses(
        (status = 200, description = "All readers, wrapped in `data`", body = Vec<Reader>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_readers(State(state): State<AppState>) -> AppResult<Json<DataResponse<Reader>>> {
    let readers = state.services.readers.list().await?;
    Ok(Json(readers.into()))
}

/// Register a new reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = ReaderCreated),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Reader id already exists", body = ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateReader>,
) -> AppResult<(StatusCode, Json<ReaderCreated>)> {
    let reader_id = state.services.readers.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReaderCreated {
            message: "Reader added successfully".to_string(),
            reader_id,
        }),
    ))
}

/// Replace an existing reader
#[utoipa::path(
    put,
    path = "/readers/{reader_id}",
    tag = "readers",
    params(("reader_id" = String, Path, description = "Reader ID")),
    request_body = UpdateReader,
    responses(
        (status = 200, description = "Reader updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn update_reader(
    State(state): State<AppState>,
    Path(reader_id): Path<String>,
    ApiJson(data): ApiJson<UpdateReader>,
) -> AppResult<Json<MessageResponse>> {
    state.services.readers.update(&reader_id, &data).await?;
    Ok(Json(MessageResponse::new("Reader updated successfully")))
}

/// Delete a reader
#[utoipa::path(
    delete,
    path = "/readers/{reader_id}",
    tag = "readers",
    params(("reader_id" = String, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Reader deleted", body = MessageResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn delete_reader(
    State(state): State<AppState>,
    Path(reader_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.readers.delete(&reader_id).await?;
    Ok(Json(MessageResponse::new("Reader deleted successfully")))
}
