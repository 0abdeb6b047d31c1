//! HTTP/1.1 accept loop.
//!
//! Each connection gets a deadline for sending its request headers. On
//! shutdown the listener closes, open connections finish their in-flight
//! request, and `serve` returns once the last one is gone.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    header_read_timeout: Duration,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = watch::channel(false);
    let mut shutdown = pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            },
            () = &mut shutdown => break,
        };

        let service = TowerToHyperService::new(app.clone());
        let mut stop = stop_rx.clone();

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .header_read_timeout(header_read_timeout);

        tokio::spawn(async move {
            let mut conn = pin!(builder.serve_connection(TokioIo::new(stream), service));

            let result = tokio::select! {
                result = conn.as_mut() => result,
                () = stopping(&mut stop) => {
                    conn.as_mut().graceful_shutdown();
                    conn.as_mut().await
                }
            };

            if let Err(e) = result {
                debug!(%peer, error = %e, "Connection closed with error");
            }
        });
    }

    drop(listener);
    drop(stop_rx);

    let open = stop_tx.receiver_count();
    if open > 0 {
        info!(connections = open, "Draining open connections");
    }
    // Errs only when no connection is open.
    let _ = stop_tx.send(true);
    stop_tx.closed().await;

    Ok(())
}

async fn stopping(stop: &mut watch::Receiver<bool>) {
    // A dropped sender also means stop.
    let _ = stop.wait_for(|stopping| *stopping).await;
}
