use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

pub fn make_missing_field() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "Both 'Your name' and 'Event name' are required",
        }),
    )
        .into_response()
}
