use analysis::{CompilerContext, CompilerPhase, DeclarationValidator};
use ir::{DeclarationSet, OperationDeclaration, ServiceDeclaration};

fn latch() -> ServiceDeclaration {
    ServiceDeclaration::new("CPCountDownLatch", 0x1)
        .with_operation(OperationDeclaration::request("trySetCount", 1))
        .with_operation(OperationDeclaration::request("await", 2))
}

#[test]
fn accepts_clean_declarations() {
    let set = DeclarationSet::new(vec![latch(), ServiceDeclaration::new("Map", 0x2)]);
    let errors = DeclarationValidator::new().validate(&set);
    assert!(errors.is_empty(), "Expected no warnings, got: {:?}", errors);
}

#[test]
fn warns_on_shared_service_id() {
    let set = DeclarationSet::new(vec![latch(), ServiceDeclaration::new("Semaphore", 0x1)]);
    let warnings = DeclarationValidator::new().validate(&set);
    assert!(
        warnings.iter().any(|w| w.contains("`CPCountDownLatch` and `Semaphore` share id 0x1")),
        "Expected shared id warning, got: {:?}",
        warnings
    );
}

#[test]
fn warns_on_duplicate_service_name() {
    let set = DeclarationSet::new(vec![latch(), ServiceDeclaration::new("CPCountDownLatch", 0x9)]);
    let warnings = DeclarationValidator::new().validate(&set);
    assert!(warnings.iter().any(|w| w.contains("Duplicate service name: CPCountDownLatch")));
}

#[test]
fn warns_on_duplicate_operation_name_and_id() {
    let service = latch()
        .with_operation(OperationDeclaration::request("await", 3))
        .with_operation(OperationDeclaration::request("getRound", 1));
    let warnings = DeclarationValidator::new().validate(&DeclarationSet::new(vec![service]));

    assert!(warnings.iter().any(|w| w.contains("duplicate operation `await`")));
    assert!(warnings.iter().any(|w| w.contains("`trySetCount` and `getRound` share id 0x1")));
}

#[test]
fn ignores_events_when_checking_operations() {
    let service = latch().with_operation(OperationDeclaration::event("await", Some(1)));
    let warnings = DeclarationValidator::new().validate(&DeclarationSet::new(vec![service]));
    assert!(warnings.is_empty(), "Events should not be checked, got: {:?}", warnings);
}

#[test]
fn warns_on_invalid_identifiers() {
    let service = ServiceDeclaration::new("CP Latch", 0x3)
        .with_operation(OperationDeclaration::request("1st", 1));
    let warnings = DeclarationValidator::new().validate(&DeclarationSet::new(vec![service]));

    assert!(warnings.iter().any(|w| w.contains("Service name `CP Latch` is not a valid identifier")));
    assert!(warnings.iter().any(|w| w.contains("operation name `1st` is not a valid identifier")));
}

#[test]
fn phase_records_warnings_in_context() {
    let set = DeclarationSet::new(vec![latch(), ServiceDeclaration::new("Other", 0x1)]);
    let mut ctx = CompilerContext::new(set);

    let validator = DeclarationValidator::new();
    assert_eq!(validator.name(), "DeclarationValidator");
    assert!(validator.description().starts_with("Validate service declarations"));
    validator.run(&mut ctx).expect("validation never fails the run");

    assert_eq!(ctx.diagnostics.warnings.len(), 1);
    assert!(ctx.diagnostics.is_clean());
    assert_eq!(ctx.diagnostics.stats.get("declaration_warnings"), Some(&1));
}
