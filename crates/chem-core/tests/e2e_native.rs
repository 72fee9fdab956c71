//! Extremo a extremo con el motor nativo.

use chem_adapters::NativeEngine;
use chem_core::{MoleculePipeline, PipelineConfig, PipelineError, Registry};
use chem_domain::DescriptorKind;

#[test]
fn benzene_builds_a_complete_molecule() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let mol = pipeline.build("C1=CC=CC=C1").expect("benzene should build");

    assert!(!mol.id().is_nil());
    assert!(!mol.molfile().is_empty());
    assert!(!mol.image().is_empty());
    assert_eq!(mol.descriptors().len(), pipeline.available_descriptors().len());
    assert!(mol.descriptors().len() <= Registry::global().len());

    let weight = mol.descriptor(DescriptorKind::Weight.id()).unwrap();
    assert_eq!(weight.display_name, "Molecular Weight");
    assert_eq!(weight.value, "78.1140");
    assert_eq!(mol.descriptor(DescriptorKind::AromaticBondsCount.id()).unwrap().value, "6");
    assert_eq!(mol.descriptor(DescriptorKind::HBondDonorCount.id()).unwrap().value, "0");
}

#[test]
fn unbalanced_smiles_is_a_parse_error() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    assert!(matches!(pipeline.build("C1CC(C"), Err(PipelineError::Parse(_))));
    assert!(matches!(pipeline.build("C1CC"), Err(PipelineError::Parse(_))));
}

#[test]
fn hypervalent_input_still_yields_descriptors() {
    // La preparación falla por valencia pero el lote continúa.
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let mol = pipeline.build("C(C)(C)(C)(C)C").expect("valence problems are not fatal");
    assert_eq!(mol.descriptors().len(), pipeline.available_descriptors().len());
}

#[test]
fn repeated_builds_are_deterministic() {
    let pipeline = MoleculePipeline::new(NativeEngine::default()).with_config(PipelineConfig { parallel: true });
    let a = pipeline.build("CC(=O)Nc1ccc(O)cc1").unwrap();
    let b = pipeline.build("CC(=O)Nc1ccc(O)cc1").unwrap();
    assert_eq!(a.descriptors(), b.descriptors());
    assert_eq!(a.molfile(), b.molfile());
}

#[test]
fn out_of_range_bracket_values_are_parse_errors() {
    let pipeline = MoleculePipeline::new(NativeEngine::default());
    let many_plus = format!("[C{}]", "+".repeat(200));
    for bad in ["[C-128]", "[C+128]", "[99999999999C]", "[CH256]", many_plus.as_str()] {
        assert!(matches!(pipeline.build(bad), Err(PipelineError::Parse(_))), "{bad}");
    }
}
