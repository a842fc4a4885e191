use std::time::Duration;

use tinyroute::{
    http::{Request, Response},
    Reply, RequestExt,
};

const MAX_DELAY_MS: u64 = 5_000;

pub fn health<B>(_request: Request<B>) -> Response<String> {
    Response::new("ok".to_string())
}

/// Answers after `{ms}` milliseconds, capped at five seconds.
pub fn slow<B>(request: Request<B>) -> Reply<String> {
    let ms = request
        .param("ms")
        .and_then(|ms| ms.parse::<u64>().ok())
        .unwrap_or_default()
        .min(MAX_DELAY_MS);

    Reply::from_future(async move {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(Response::new(format!("waited {}ms", ms)))
    })
}
