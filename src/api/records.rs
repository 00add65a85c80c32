//! Borrow record endpoints

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
        record::{CreateRecord, Record, UpdateRecord},
        MessageResponse,
    },
    AppState,
};

/// Body returned after a record is created
#[derive(Serialize, ToSchema)]
pub struct RecordCreated {
    pub message: String,
    pub book_id: String,
    pub reader_id: String,
}

/// List all borrow records
#[utoipa::path(
    get,
    path = "/records",
    tag = "records",
    responses(
        (status = 200, description = "All borrow records, wrapped in `data`", body = Vec<Record>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_records(State(state): State<AppState>) -> AppResult<Json<DataResponse<Record>>> {
    let records = state.services.records.list().await?;
    Ok(Json(records.into()))
}

/// Record a new loan
#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = CreateRecord,
    responses(
        (status = 201, description = "Record created", body = RecordCreated),
        (status = 400, description = "Invalid input or unknown book/reader", body = ErrorResponse),
        (status = 409, description = "Record for this book and reader already exists", body = ErrorResponse)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateRecord>,
) -> AppResult<(StatusCode, Json<RecordCreated>)> {
    let key = state.services.records.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordCreated {
            message: "Record added successfully".to_string(),
            book_id: key.book_id,
            reader_id: key.reader_id,
        }),
    ))
}

/// Update dates and notes of a record
#[utoipa::path(
    put,
    path = "/records/{book_id}/{reader_id}",
    tag = "records",
    params(
        ("book_id" = String, Path, description = "Book ID"),
        ("reader_id" = String, Path, description = "Reader ID")
    ),
    request_body = UpdateRecord,
    responses(
        (status = 200, description = "Record updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path((book_id, reader_id)): Path<(String, String)>,
    ApiJson(data): ApiJson<UpdateRecord>,
) -> AppResult<Json<MessageResponse>> {
    state.services.records.update(&book_id, &reader_id, &data).await?;
    Ok(Json(MessageResponse::new("Record updated successfully")))
}

/// Delete a record by its composite key
#[utoipa::path(
    delete,
    path = "/records/{book_id}/{reader_id}",
    tag = "records",
    params(
        ("book_id" = String, Path, description = "Book ID"),
        ("reader_id" = String, Path, description = "Reader ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path((book_id, reader_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.records.delete(&book_id, &reader_id).await?;
    Ok(Json(MessageResponse::new("Record deleted successfully")))
}
