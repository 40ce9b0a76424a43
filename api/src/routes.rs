use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{ErrorResponse, RecordRequest, RecordResponse, RecordsResponse};

use crate::error::ServiceError;
use crate::utils::{day_key, parse_day};
use crate::AppState;

#[derive(Debug)]
pub enum ApiError {
    InvalidBody(JsonRejection),
    InvalidDate(String),
    Validation(&'static str),
    Storage {
        message: &'static str,
        source: ServiceError,
    },
}

impl ApiError {
    fn from_service(err: ServiceError, message: &'static str) -> Self {
        match err {
            ServiceError::Validation(reason) => Self::Validation(reason),
            source => Self::Storage { message, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidBody(rejection) => {
                tracing::debug!("rejected record body: {rejection}");
                (StatusCode::BAD_REQUEST, "invalid request body")
            }
            ApiError::InvalidDate(raw) => {
                tracing::debug!(date = %raw, "rejected date");
                (StatusCode::BAD_REQUEST, "invalid date format")
            }
            ApiError::Validation(reason) => (StatusCode::BAD_REQUEST, reason),
            ApiError::Storage { message, source } => {
                tracing::error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let Json(req) = payload.map_err(ApiError::InvalidBody)?;

    let entry = state
        .service
        .submit(req.content, req.duration.unwrap_or_default())
        .await
        .map_err(|err| ApiError::from_service(err, "failed to save record"))?;

    Ok(Json(RecordResponse {
        message: String::from("record saved"),
        data: entry,
    }))
}

pub async fn list_today(State(state): State<AppState>) -> Result<Json<RecordsResponse>, ApiError> {
    let (today, entries) = state
        .service
        .fetch_today()
        .await
        .map_err(|err| ApiError::from_service(err, "failed to load records"))?;

    Ok(Json(RecordsResponse {
        data: entries,
        date: day_key(today),
    }))
}

pub async fn list_by_date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let date = parse_day(&raw).ok_or_else(|| ApiError::InvalidDate(raw.clone()))?;

    let entries = state
        .service
        .fetch_for_date(date)
        .await
        .map_err(|err| ApiError::from_service(err, "failed to load records"))?;

    Ok(Json(RecordsResponse {
        data: entries,
        date: raw,
    }))
}
