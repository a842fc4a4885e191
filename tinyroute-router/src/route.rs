use std::{fmt, future::IntoFuture};

use futures::future::{self, BoxFuture, Either, FutureExt};
use http::{Request, Response};

use crate::Result;

/// What a handler hands back to the dispatcher.
///
/// The dispatcher returns it to its caller as-is. A pending reply is never
/// awaited by the router; `.await` the reply (it implements [`IntoFuture`])
/// to get the response out of either variant.
pub enum Reply<R> {
    Ready(Result<Response<R>>),
    Pending(BoxFuture<'static, Result<Response<R>>>),
}

impl<R> Reply<R> {
    pub fn ready(response: Response<R>) -> Self {
        Reply::Ready(Ok(response))
    }

    pub fn from_future<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Result<Response<R>>> + Send + 'static,
    {
        Reply::Pending(future.boxed())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Reply::Pending(_))
    }
}

impl<R> From<Response<R>> for Reply<R> {
    fn from(response: Response<R>) -> Self {
        Reply::ready(response)
    }
}

impl<R> From<Result<Response<R>>> for Reply<R> {
    fn from(result: Result<Response<R>>) -> Self {
        Reply::Ready(result)
    }
}

impl<R> IntoFuture for Reply<R> {
    type Output = Result<Response<R>>;
    type IntoFuture = Either<future::Ready<Self::Output>, BoxFuture<'static, Self::Output>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Reply::Ready(result) => Either::Left(future::ready(result)),
            Reply::Pending(pending) => Either::Right(pending),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Reply<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Reply::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Something that turns a routed request into a reply.
///
/// Implemented for any `Fn(Request<B>) -> T` closure where `T` is a
/// `Response<R>`, a `Result<Response<R>>` or a [`Reply<R>`].
pub trait Handler<B, R>: Send + Sync + 'static {
    fn call(&self, request: Request<B>) -> Reply<R>;
}

impl<F, B, R, T> Handler<B, R> for F
where
    F: Fn(Request<B>) -> T + Send + Sync + 'static,
    T: Into<Reply<R>>,
{
    fn call(&self, request: Request<B>) -> Reply<R> {
        self(request).into()
    }
}
