//! 请求参数解析失败时返回统一的 400 信封

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(kind: &str, detail: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid {kind}: {detail}"),
    ))
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let detail = err.to_string();
    InternalError::from_response(err, bad_request("request body", detail)).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string error on {}: {}", req.path(), err);
    let detail = err.to_string();
    InternalError::from_response(err, bad_request("query parameters", detail)).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path parameter error on {}: {}", req.path(), err);
    let detail = err.to_string();
    InternalError::from_response(err, bad_request("path parameters", detail)).into()
}
