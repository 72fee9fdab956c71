//! chem-adapters: Capa de adaptación motor químico ↔ core y dominio ↔ JSON
//!
//! Este crate provee:
//! - `NativeEngine`: implementación de `chem_core::ChemistryEngine` sobre el
//!   motor nativo `chemengine`, incluida la tabla de disponibilidad de
//!   descriptores.
//! - Un trait `WireEncoder` y su implementación `JsonWireEncoder` para
//!   serializar `Molecule`, `DescriptorResult` y `DescriptorSpec` con el
//!   formato que consumen los clientes HTTP y la CLI.

pub mod encoder;
pub mod native;

pub use encoder::{JsonWireEncoder, WireEncoder};
pub use native::NativeEngine;
