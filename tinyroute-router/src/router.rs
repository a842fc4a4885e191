use std::{fmt, sync::Arc};

use http::{
    header::{HeaderValue, CONTENT_TYPE},
    Request, Response, StatusCode,
};
use kv_log_macro as log;

use crate::{Handler, Reply, RoutePattern, TemplateError};

struct Route<B, R> {
    pattern: RoutePattern,
    handler: Box<dyn Handler<B, R>>,
}

/// An ordered route table.
///
/// Routes are tried in registration order and the first match wins.
/// Register everything up front, then either dispatch from the router
/// directly or freeze it with [`Router::into_dispatcher`] to share it
/// between tasks.
pub struct Router<B, R = String> {
    routes: Vec<Route<B, R>>,
}

impl<B, R> Router<B, R> {
    pub fn new() -> Self {
        Router { routes: Vec::new() }
    }

    /// Add a route with a custom method. The method is upper-cased.
    pub fn custom<H>(
        &mut self,
        method: &str,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError>
    where
        H: Handler<B, R>,
    {
        let pattern = RoutePattern::compile(method, template)?;

        if let Some(earlier) = self
            .routes
            .iter()
            .find(|route| route.pattern.same_shape(&pattern))
        {
            log::warn!("Route is shadowed by an earlier registration", {
                method: pattern.method().as_str(),
                template: template,
                shadowed_by: earlier.pattern.template()
            });
        }

        log::debug!("Route registered", {
            method: pattern.method().as_str(),
            template: template,
            priority: self.routes.len()
        });

        self.routes.push(Route {
            pattern,
            handler: Box::new(handler),
        });

        Ok(self)
    }

    pub fn get<H: Handler<B, R>>(
        &mut self,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError> {
        self.custom("GET", template, handler)
    }

    pub fn post<H: Handler<B, R>>(
        &mut self,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError> {
        self.custom("POST", template, handler)
    }

    pub fn put<H: Handler<B, R>>(
        &mut self,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError> {
        self.custom("PUT", template, handler)
    }

    pub fn patch<H: Handler<B, R>>(
        &mut self,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError> {
        self.custom("PATCH", template, handler)
    }

    pub fn delete<H: Handler<B, R>>(
        &mut self,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, TemplateError> {
        self.custom("DELETE", template, handler)
    }

    /// Compiled patterns in match priority order.
    pub fn routes(&self) -> impl Iterator<Item = &RoutePattern> {
        self.routes.iter().map(|route| &route.pattern)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freeze the table into a cheaply cloneable dispatcher.
    pub fn into_dispatcher(self) -> Dispatcher<B, R> {
        Dispatcher {
            routes: self.routes.into(),
        }
    }
}

impl<B, R> Router<B, R>
where
    B: 'static,
    R: From<String> + 'static,
{
    pub fn dispatch(&self, request: Request<B>) -> Reply<R> {
        dispatch(&self.routes, request)
    }
}

impl<B, R> Default for Router<B, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> fmt::Debug for Router<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes()).finish()
    }
}

/// A frozen route table shared behind an `Arc`.
pub struct Dispatcher<B, R = String> {
    routes: Arc<[Route<B, R>]>,
}

impl<B, R> Dispatcher<B, R>
where
    B: 'static,
    R: From<String> + 'static,
{
    pub fn dispatch(&self, request: Request<B>) -> Reply<R> {
        dispatch(&self.routes, request)
    }
}

impl<B, R> Dispatcher<B, R> {
    pub fn routes(&self) -> impl Iterator<Item = &RoutePattern> {
        self.routes.iter().map(|route| &route.pattern)
    }
}

impl<B, R> Clone for Dispatcher<B, R> {
    fn clone(&self) -> Self {
        Dispatcher {
            routes: Arc::clone(&self.routes),
        }
    }
}

impl<B, R> fmt::Debug for Dispatcher<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes()).finish()
    }
}

fn dispatch<B, R>(routes: &[Route<B, R>], mut request: Request<B>) -> Reply<R>
where
    B: 'static,
    R: From<String> + 'static,
{
    let method = request.method().as_str().to_ascii_uppercase();

    let matched = routes.iter().find_map(|route| {
        route
            .pattern
            .matches(&method, request.uri().path())
            .map(|params| (route, params))
    });

    match matched {
        Some((route, params)) => {
            log::trace!("Route matched", {
                route: route.pattern.template(),
                path: request.uri().path()
            });

            if route.pattern.has_params() {
                request.extensions_mut().insert(params);
            }

            route.handler.call(request)
        }

        None => {
            let path = request.uri().path();
            log::debug!("No route found", { method: method.as_str(), path: path });
            not_found(&method, path)
        }
    }
}

fn not_found<R: From<String>>(method: &str, path: &str) -> Reply<R> {
    let mut response = Response::new(R::from(format!("Cannot {} {}", method, path)));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );

    Reply::ready(response)
}
