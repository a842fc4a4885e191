use kv_log_macro as log;
use tinyroute::{
    http::{Request, Response, StatusCode},
    RequestExt,
};

pub fn purge<B>(request: Request<B>) -> Response<String> {
    let key = request.param("key").unwrap_or_default();
    log::info!("Cache purged", { key: key });

    let mut response = Response::new(String::new());
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}
