//! Servicio de moléculas: fachada asíncrona sobre el pipeline síncrono.
//!
//! El trabajo de CPU se ejecuta en el pool bloqueante de tokio y cada
//! llamada tiene un plazo; al vencer se responde `Timeout` aunque el
//! cálculo siga hasta terminar en segundo plano.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chem_adapters::{JsonWireEncoder, NativeEngine, WireEncoder};
use chem_core::{MoleculePipeline, PipelineConfig, PipelineError};
use serde_json::Value;

use crate::config::AppConfig;
use crate::errors::CoreError;

#[async_trait]
pub trait MoleculeService: Send + Sync {
    /// Molécula completa codificada como JSON de transporte.
    async fn parse(&self, smiles: String) -> Result<Value, CoreError>;
    /// Solo la imagen SVG.
    async fn image(&self, smiles: String) -> Result<Vec<u8>, CoreError>;
    /// Descriptores que el motor sabe calcular.
    fn descriptors(&self) -> Value;
}

/// Espera `fut` como máximo `limit`.
pub async fn with_deadline<T, F>(limit: Duration, fut: F) -> Result<T, CoreError>
    where F: Future<Output = Result<T, CoreError>>
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::Timeout(limit.as_millis() as u64)),
    }
}

pub struct PipelineService {
    pipeline: Arc<MoleculePipeline<NativeEngine>>,
    encoder: JsonWireEncoder,
    timeout: Duration,
}

impl PipelineService {
    pub fn new(pipeline: MoleculePipeline<NativeEngine>, timeout: Duration) -> Self {
        Self { pipeline: Arc::new(pipeline),
               encoder: JsonWireEncoder,
               timeout }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let engine = NativeEngine::new(config.image_width, config.image_height);
        let pipeline = MoleculePipeline::new(engine).with_config(PipelineConfig { parallel: config.parallel_descriptors });
        Self::new(pipeline, config.request_timeout())
    }

    async fn blocking<T, F>(&self, work: F) -> Result<T, CoreError>
        where T: Send + 'static,
              F: FnOnce(&MoleculePipeline<NativeEngine>) -> Result<T, PipelineError> + Send + 'static
    {
        let pipeline = Arc::clone(&self.pipeline);
        let task = tokio::task::spawn_blocking(move || work(&pipeline));
        with_deadline(self.timeout, async {
            match task.await {
                Ok(result) => result.map_err(CoreError::from),
                Err(join) => Err(CoreError::Internal(format!("tarea de cálculo abortada: {join}"))),
            }
        }).await
    }
}

#[async_trait]
impl MoleculeService for PipelineService {
    async fn parse(&self, smiles: String) -> Result<Value, CoreError> {
        let molecule = self.blocking(move |p| p.build(&smiles)).await?;
        Ok(self.encoder.encode_molecule(&molecule))
    }

    async fn image(&self, smiles: String) -> Result<Vec<u8>, CoreError> {
        self.blocking(move |p| p.image(&smiles)).await
    }

    fn descriptors(&self) -> Value {
        self.encoder.encode_specs(self.pipeline.available_descriptors())
    }
}
