// chem-domain library entry point
pub mod descriptor;
pub mod error;
pub mod molecule;
pub mod value;
pub use descriptor::{DescriptorKind, DescriptorResult, DescriptorSpec, DESCRIPTOR_ID_PREFIX};
pub use error::DomainError;
pub use molecule::Molecule;
pub use value::DescriptorValue;
