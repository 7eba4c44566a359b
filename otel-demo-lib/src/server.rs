use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use prometheus::Registry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::telemetry::{
    handle_metrics, health_check_response, record_hello_trace, Metrics, RespBody,
};

/// Start the demo HTTP server. Serves:
/// - `/hello` - fixed text response, records the demo metrics and spans
/// - `/metrics` - Prometheus metrics
/// - `/health` - Health check endpoint
///
/// Blocks until SIGTERM or SIGINT is received, then returns so the caller
/// can shut down the telemetry providers.
pub async fn run(config: Arc<Config>, metrics: Arc<Metrics>, registry: Registry) -> Result<()> {
    let registry = Arc::new(registry);
    let addr = config.listen;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(crate::error::DemoError::Io)?;

    info!(?addr, "http server started");

    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(|e| std::io::Error::other(format!("Failed to setup SIGTERM handler: {e}")))?;
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .map_err(|e| std::io::Error::other(format!("Failed to setup SIGINT handler: {e}")))?;

    let builder = ConnBuilder::new(TokioExecutor::new());

    loop {
        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
                break;
            }
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down");
                break;
            }
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok((stream, peer)) => (stream, peer),
                    Err(e) => {
                        warn!(error = %e, "accept error");
                        continue;
                    }
                };

                let registry = registry.clone();
                let metrics = metrics.clone();
                let builder = builder.clone();
                tokio::spawn(async move {
                    let svc = hyper::service::service_fn(move |req: Request<Incoming>| {
                        let registry = registry.clone();
                        let metrics = metrics.clone();
                        async move { Ok::<_, hyper::Error>(route(&req, &metrics, &registry)) }
                    });

                    if let Err(e) = builder.serve_connection(TokioIo::new(stream), svc).await {
                        warn!(?peer, error = %e, "serve_connection error");
                    }
                });
            }
        }
    }

    info!("http server stopped");
    Ok(())
}

fn route(req: &Request<Incoming>, metrics: &Metrics, registry: &Registry) -> Response<RespBody> {
    match req.uri().path() {
        "/hello" => hello_response(metrics),
        "/metrics" => handle_metrics(registry)
            .unwrap_or_else(|_| text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")),
        "/health" => health_check_response()
            .unwrap_or_else(|_| text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")),
        _ => text_response(StatusCode::NOT_FOUND, "Not Found"),
    }
}

fn hello_response(metrics: &Metrics) -> Response<RespBody> {
    info!("hello world!!!");
    metrics.record_hello();
    record_hello_trace();
    text_response(StatusCode::OK, "hello world")
}

fn text_response(status: StatusCode, body: &'static str) -> Response<RespBody> {
    let body = Full::new(Bytes::from_static(body.as_bytes()))
        .map_err(|never| match never {})
        .boxed();
    let mut resp = Response::new(body);
    *resp.status_mut() = status;
    resp
}
