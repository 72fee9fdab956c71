//! Servidor HTTP del servicio: una tarea tokio por conexión.

pub mod http;
pub mod routes;
pub mod service;

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::errors::CoreError;
use http::Response;
pub use service::{MoleculeService, PipelineService};

/// Límites por conexión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionLimits {
    pub max_body: usize,
    /// Plazo para recibir la petición completa (cabeceras y cuerpo).
    pub read_timeout: Duration,
}

impl ConnectionLimits {
    pub fn from_config(config: &AppConfig) -> Self {
        Self { max_body: config.max_body_bytes,
               read_timeout: config.request_timeout() }
    }
}

/// Atiende una conexión: lee una petición, la enruta y cierra.
pub async fn handle_connection<S>(stream: S, service: &dyn MoleculeService, limits: ConnectionLimits) -> Result<(), CoreError>
    where S: AsyncRead + AsyncWrite + Unpin
{
    let (read_half, mut write_half) = tokio::io::split(stream);
    let mut reader = BufReader::new(read_half);
    let read = service::with_deadline(limits.read_timeout, http::read_request(&mut reader, limits.max_body));
    let response = match read.await {
        Ok(Some(request)) => routes::route(service, &request).await,
        Ok(None) => return Ok(()),
        Err(e) => {
            log::warn!("malformed request: {e}");
            Response::error(e.status_code(), &e.client_message())
        }
    };
    write_half.write_all(&response.to_bytes()).await?;
    write_half.shutdown().await?;
    Ok(())
}

/// Bucle de aceptación sobre un listener ya abierto.
pub async fn serve(listener: TcpListener, service: Arc<dyn MoleculeService>, limits: ConnectionLimits) -> Result<(), CoreError> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, service.as_ref(), limits).await {
                log::warn!("connection {peer} failed: {e}");
            }
        });
    }
}

/// Abre `config.bind` y sirve hasta que el proceso termine.
pub async fn run(config: &AppConfig) -> Result<(), CoreError> {
    let listener = TcpListener::bind(&config.bind).await
                                                   .map_err(|e| CoreError::Config(format!("cannot bind {}: {e}", config.bind)))?;
    log::info!("chemdesc listening on {} (parallel descriptors: {}, timeout {} ms)",
               config.bind,
               config.parallel_descriptors,
               config.request_timeout_ms);
    serve(listener, Arc::new(PipelineService::from_config(config)), ConnectionLimits::from_config(config)).await
}
