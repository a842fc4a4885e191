mod model;
mod routes;

use std::{convert::Infallible, future::Future, net::SocketAddr};

use clap::Parser;
use hyper::{body::Incoming, server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use kv_log_macro as log;
use tinyroute::{
    http::{header::CONTENT_TYPE, HeaderValue, Request, Response, StatusCode},
    Dispatcher, Result,
};
use tokio::{net::TcpListener, task};

/// Demo HTTP server built on the tinyroute router
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TINYROUTE_ADDR", default_value = "127.0.0.1:8080")]
    address: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    femme::start();

    let args = Args::parse();
    let dispatcher = routes::router::<Incoming>()?.into_dispatcher();

    accept_loop(dispatcher, args.address).await
}

async fn accept_loop(dispatcher: Dispatcher<Incoming>, address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    log::info!("Listening on {}", address);

    loop {
        let (stream, peer) = listener.accept().await?;
        log::debug!("New connection from {}", peer);

        let dispatcher = dispatcher.clone();
        spawn_and_log_error(async move {
            let service = service_fn(move |request| handle(dispatcher.clone(), request));
            http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await?;
            Ok(())
        });
    }
}

/// Route one request; handler errors become a 500 so the connection survives.
async fn handle<B: 'static>(
    dispatcher: Dispatcher<B>,
    request: Request<B>,
) -> std::result::Result<Response<String>, Infallible> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match dispatcher.dispatch(request).await {
        Ok(response) => {
            log::info!("Request handled", {
                method: method.as_str(),
                path: path.as_str(),
                status: response.status().as_u16()
            });
            Ok(response)
        }
        Err(err) => {
            let error = err.to_string();
            log::error!("Handler failed", {
                method: method.as_str(),
                path: path.as_str(),
                error: error.as_str()
            });
            Ok(internal_error())
        }
    }
}

fn internal_error() -> Response<String> {
    let mut response = Response::new("Internal Server Error".to_string());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    response
}

fn spawn_and_log_error<F>(fut: F) -> task::JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    task::spawn(async move {
        if let Err(e) = fut.await {
            log::error!("Connection error {}", e);
        }
    })
}
