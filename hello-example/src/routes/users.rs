use serde::Serialize;
use serde_json::json;
use tinyroute::{
    http::{header::CONTENT_TYPE, Request, Response, StatusCode},
    RequestExt, Result,
};

use crate::model::users;

pub fn list<B>(_request: Request<B>) -> Result<Response<String>> {
    json_response(StatusCode::OK, &users())
}

pub fn detail<B>(request: Request<B>) -> Result<Response<String>> {
    let id = request.param("id").unwrap_or_default();

    match users().into_iter().find(|user| user.id == id) {
        Some(user) => json_response(StatusCode::OK, &user),
        None => json_response(
            StatusCode::NOT_FOUND,
            &json!({ "error": format!("No user with id {}", id) }),
        ),
    }
}

/// Users are fixed, so removal always fails and the host answers 500.
pub fn remove<B>(request: Request<B>) -> Result<Response<String>> {
    let id = request.param("id").unwrap_or_default();
    Err(format!("User {} is read-only", id).into())
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<String>> {
    let body = serde_json::to_string(value)?;
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(body)?;

    Ok(response)
}
