mod cache;
mod health;
mod users;

use tinyroute::{Router, TemplateError};

pub fn router<B: Send + 'static>() -> Result<Router<B>, TemplateError> {
    let mut router = Router::new();

    router
        .get("/health", health::health::<B>)?
        .get("/slow/{ms}", health::slow::<B>)?
        .get("/users", users::list::<B>)?
        .get("/users/{id}", users::detail::<B>)?
        .delete("/users/{id}", users::remove::<B>)?
        .custom("PURGE", "/cache/{key}", cache::purge::<B>)?;

    Ok(router)
}
