use std::net::TcpListener;

use axum::Router;
use axum::routing::get;

use crate::configuration::Settings;
use crate::routes::{health_check, not_found};

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    /// Bind the listener described by the settings.
    ///
    /// The actual port is recorded at bind time so that port `0`
    /// (OS-assigned, used by the test suite) can be reported back.
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(configuration.application.address())?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is terminated externally.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, create_router()).await
    }
}

/// The whole request surface, as data: one route, JSON 404 for
/// everything else.
///
/// The surface is GET-only. HEAD is routed to the 404 handler
/// explicitly, otherwise the method router would answer it with the
/// GET endpoint.
pub fn create_router() -> Router {
    Router::new()
        .route(
            "/health",
            get(health_check).head(not_found).fallback(not_found),
        )
        .fallback(not_found)
}
