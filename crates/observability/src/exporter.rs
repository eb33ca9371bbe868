//! HTTP metrics endpoint
//!
//! Serves the gauge store over HTTP for external polling. Binding is
//! fail-fast: a bad listen address is a startup error, never a silent
//! background failure.

use std::sync::Arc;

use anyhow::{Context, Result};
use contracts::{GaugeSpec, MetricSink};
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::middleware::Tracing;
use poem::web::Data;
use poem::{get, handler, Endpoint, EndpointExt, Response, Route, Server};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::render;
use crate::store::GaugeStore;

/// Exporter endpoint configuration
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Address to listen on
    pub listen_addr: String,
    /// URL path serving the exposition
    pub telemetry_path: String,
    /// Namespace prefixed to every metric name
    pub namespace: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9156".to_string(),
            telemetry_path: "/metrics".to_string(),
            namespace: "gps".to_string(),
        }
    }
}

/// Shared state behind the telemetry route
struct ExporterContext {
    store: GaugeStore,
    namespace: String,
    specs: Vec<GaugeSpec>,
}

/// HTTP server exposing the gauge store
pub struct MetricsServer {
    ctx: Arc<ExporterContext>,
    config: ExporterConfig,
}

impl MetricsServer {
    /// Create a new metrics server over a shared gauge store
    pub fn new(store: GaugeStore, specs: &[GaugeSpec], config: ExporterConfig) -> Self {
        let ctx = Arc::new(ExporterContext {
            store,
            namespace: config.namespace.clone(),
            specs: specs.to_vec(),
        });
        Self { ctx, config }
    }

    /// Compose the route tree
    ///
    /// The telemetry path answers with the exposition; everything else is
    /// a plain 404. Split out from [`Self::spawn`] so tests can drive the
    /// routes without a socket.
    pub fn routes(&self) -> impl Endpoint {
        Route::new()
            .at(&self.config.telemetry_path, get(metrics_endpoint))
            .data(self.ctx.clone())
            .with(Tracing)
    }

    /// Bind the listener and serve in the background
    ///
    /// Binding happens before this returns, so export-side startup
    /// failures surface here. The serve task then runs detached for the
    /// rest of the process lifetime.
    #[instrument(
        name = "metrics_server_spawn",
        skip(self),
        fields(addr = %self.config.listen_addr, path = %self.config.telemetry_path)
    )]
    pub async fn spawn(self) -> Result<JoinHandle<()>> {
        let app = self.routes();

        let acceptor = TcpListener::bind(&self.config.listen_addr)
            .into_acceptor()
            .await
            .with_context(|| {
                format!(
                    "failed to bind metrics listener on {}",
                    self.config.listen_addr
                )
            })?;

        let local_addr = acceptor
            .local_addr()
            .into_iter()
            .next()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| self.config.listen_addr.clone());
        info!(
            addr = %local_addr,
            path = %self.config.telemetry_path,
            "metrics endpoint listening"
        );

        let handle = tokio::spawn(async move {
            if let Err(e) = Server::new_with_acceptor(acceptor).run(app).await {
                error!(error = %e, "metrics server terminated");
            }
        });

        Ok(handle)
    }
}

/// Serve the current exposition
#[handler]
fn metrics_endpoint(ctx: Data<&Arc<ExporterContext>>) -> Response {
    let body = render::render(&ctx.store.snapshot(), &ctx.namespace, &ctx.specs);
    Response::builder()
        .content_type(render::CONTENT_TYPE)
        .body(body)
}
