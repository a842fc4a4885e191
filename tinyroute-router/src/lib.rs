//! A tiny HTTP request router.
//!
//! Routes are `(method, path template)` pairs such as `GET /users/{id}`.
//! Each `{name}` placeholder matches one or more characters other than `/`
//! and its value is attached to the request as [`Params`]. Requests are
//! matched against routes in registration order; the first match wins and
//! anything unmatched gets a `404` with the body `Cannot <METHOD> <path>`.
//!
//! ```
//! use tinyroute::{http::{Request, Response}, RequestExt, Router};
//!
//! # async fn example() -> tinyroute::Result<()> {
//! let mut router: Router<()> = Router::new();
//! router
//!     .get("/health", |_: Request<()>| Response::new("ok".to_string()))?
//!     .get("/users/{id}", |req: Request<()>| {
//!         Response::new(format!("user {}", req.param("id").unwrap_or_default()))
//!     })?;
//!
//! let request = Request::get("/users/42").body(())?;
//! let response = router.dispatch(request).await?;
//! assert_eq!(response.body(), "user 42");
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod pattern;
mod route;
mod router;

pub use http;

pub use context::{Params, RequestExt};
pub use error::TemplateError;
pub use pattern::RoutePattern;
pub use route::{Handler, Reply};
pub use router::{Dispatcher, Router};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, BoxError>;
