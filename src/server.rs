//! HTTP server lifecycle

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::create_router;
use crate::state::AppContext;
use crate::utils::errors::Result;

const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Serve the API on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, ctx: AppContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(address = %listener.local_addr()?, "HTTP server listening");

    let cleanup = ctx.rate_limiter.clone().map(|limiter| {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                limiter.cleanup();
            }
        })
    });

    let app = create_router(ctx);

    let served = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await;

    if let Some(task) = cleanup {
        task.abort();
    }
    served?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
