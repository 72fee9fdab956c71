/// Opciones del pipeline que no dependen del motor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Calcular descriptores en paralelo (rayon). El orden no cambia.
    pub parallel: bool,
}
