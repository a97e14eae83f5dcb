#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized valid transitions
// ============================================================================

#[test_case(GenerationStage::Init, GenerationStage::WriteHeader)]
#[test_case(GenerationStage::WriteHeader, GenerationStage::WriteImports)]
#[test_case(GenerationStage::WriteImports, GenerationStage::WriteDeclaration)]
#[test_case(GenerationStage::WriteDeclaration, GenerationStage::WriteFields)]
#[test_case(GenerationStage::WriteFields, GenerationStage::WriteBody)]
#[test_case(GenerationStage::WriteBody, GenerationStage::WriteTrailerHooks)]
#[test_case(GenerationStage::WriteTrailerHooks, GenerationStage::WriteClose)]
#[test_case(GenerationStage::WriteClose, GenerationStage::Handoff)]
fn GenerationStage___valid_transitions___allowed(from: GenerationStage, to: GenerationStage) {
    assert!(
        from.can_transition_to(to),
        "{:?} should transition to {:?}",
        from,
        to
    );
    assert_eq!(from.next(), Some(to));
}

// ============================================================================
// Parameterized invalid transitions
// ============================================================================

#[test_case(GenerationStage::Init, GenerationStage::WriteBody)]
#[test_case(GenerationStage::Init, GenerationStage::Handoff)]
#[test_case(GenerationStage::WriteHeader, GenerationStage::WriteHeader)]
#[test_case(GenerationStage::WriteImports, GenerationStage::WriteFields)]
#[test_case(GenerationStage::WriteBody, GenerationStage::WriteFields)]
#[test_case(GenerationStage::WriteClose, GenerationStage::WriteTrailerHooks)]
#[test_case(GenerationStage::Handoff, GenerationStage::Init)]
#[test_case(GenerationStage::Handoff, GenerationStage::WriteHeader)]
fn GenerationStage___invalid_transitions___not_allowed(from: GenerationStage, to: GenerationStage) {
    assert!(
        !from.can_transition_to(to),
        "{:?} should not transition to {:?}",
        from,
        to
    );
}
