//! chemdesc: servicio de descriptores moleculares.
//!
//! Este crate agrupa la parte de servicio del workspace:
//! - `config`: configuración por entorno (`CHEMDESC_*`, `.env`).
//! - `errors`: errores del servicio y su código HTTP.
//! - `server`: HTTP/1.1 JSON sobre `MoleculePipeline` y el motor nativo.
//!
//! Puede usarse desde `main.rs` o embebido en otros binarios.

pub mod config;
pub mod errors;
pub mod server;

pub use config::{AppConfig, CONFIG};
pub use errors::CoreError;
