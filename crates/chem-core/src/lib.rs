//! chem-core: registro de descriptores, formateo de resultados, ejecución
//! aislada por descriptor y orquestación SMILES -> `Molecule`.
pub mod chemistry;
pub mod constants;
pub mod errors;
pub mod executor;
pub mod formatter;
pub mod pipeline;
pub mod registry;

pub use chemistry::ChemistryEngine;
pub use errors::{ComputeError, EngineFailure, PipelineError};
pub use executor::DescriptorExecutor;
pub use formatter::format_value;
pub use pipeline::{MoleculePipeline, PipelineConfig};
pub use registry::Registry;
