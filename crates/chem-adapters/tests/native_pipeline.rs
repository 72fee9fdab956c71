//! Pipeline completo sobre el motor nativo y codificación JSON del resultado.

use chem_adapters::{JsonWireEncoder, NativeEngine, WireEncoder};
use chem_core::{MoleculePipeline, Registry};
use chem_domain::DescriptorKind;

#[test]
fn aspirin_encodes_with_camel_case_fields() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let mol = pipeline.build("CC(=O)Oc1ccccc1C(=O)O").expect("aspirin should build");
    let json = JsonWireEncoder.encode_molecule(&mol);

    assert_eq!(json["smiles"], "CC(=O)Oc1ccccc1C(=O)O");
    assert!(json["imageSvg"].as_str().unwrap().starts_with("<svg"));
    assert!(json["molfile"].as_str().unwrap().contains("M  END"));
    assert!(json["computedAt"].is_string());

    let descriptors = json["descriptors"].as_array().unwrap();
    let tpsa = descriptors.iter()
                          .find(|d| d["id"] == DescriptorKind::Tpsa.id())
                          .expect("tpsa present");
    assert_eq!(tpsa["name"], "Topological Polar Surface Area");
    assert_eq!(tpsa["value"], "63.6000");
}

#[test]
fn geometric_descriptors_surface_as_error_entries() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let mol = pipeline.build("CCO").unwrap();
    for kind in [DescriptorKind::Cpsa, DescriptorKind::Whim, DescriptorKind::MomentOfInertia] {
        let entry = mol.descriptor(kind.id()).expect("3D descriptors stay visible");
        assert_eq!(entry.value, "Error");
        assert_eq!(entry.description, "Failed to calculate: requires 3D coordinates");
    }
    assert!(mol.descriptor(DescriptorKind::XLogP.id()).is_none());
}

#[test]
fn catalog_listing_matches_available_descriptors() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let json = JsonWireEncoder.encode_specs(pipeline.available_descriptors());
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), Registry::global().len() - chem_adapters::native::UNAVAILABLE.len());
    assert_eq!(list[0]["name"], "ALOGP");
    assert!(list.iter().all(|s| s["description"].as_str().map(|d| !d.is_empty()).unwrap_or(false)));
}
