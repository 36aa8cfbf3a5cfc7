//! Declaration Validation
//!
//! Structural checks over the declaration set. Findings are warnings: the
//! model builder already isolates per-service failures, so nothing here
//! stops generation on its own.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use ir::{DeclarationSet, ServiceDeclaration};
use regex::Regex;

use crate::{CompilerContext, CompilerPhase, PhaseResult};

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Declaration validator
#[derive(Debug, Default, Clone)]
pub struct DeclarationValidator;

impl DeclarationValidator {
    /// Create a new declaration validator
    pub fn new() -> Self { Self }

    /// Validate a declaration set and return warnings in declaration order.
    pub fn validate(&self, set: &DeclarationSet) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut names = HashSet::new();
        let mut ids: HashMap<u32, &str> = HashMap::new();
        for service in set.services() {
            if !names.insert(service.name.as_str()) {
                warnings.push(format!("Duplicate service name: {}", service.name));
            }
            if let Some(previous) = ids.insert(service.id, service.name.as_str()) {
                if previous != service.name {
                    warnings.push(format!(
                        "Services `{}` and `{}` share id {:#x}",
                        previous, service.name, service.id
                    ));
                }
            }
            self.validate_service(service, &mut warnings);
        }

        warnings
    }

    fn validate_service(&self, service: &ServiceDeclaration, warnings: &mut Vec<String>) {
        if !identifier_pattern().is_match(&service.name) {
            warnings.push(format!("Service name `{}` is not a valid identifier", service.name));
        }

        let mut names = HashSet::new();
        let mut ids: HashMap<u32, &str> = HashMap::new();
        for op in service.operations.iter().filter(|op| op.is_request()) {
            if !identifier_pattern().is_match(&op.name) {
                warnings.push(format!(
                    "Service `{}`: operation name `{}` is not a valid identifier",
                    service.name, op.name
                ));
            }
            if !names.insert(op.name.as_str()) {
                warnings.push(format!(
                    "Service `{}`: duplicate operation `{}`",
                    service.name, op.name
                ));
            }
            if let Some(id) = op.id {
                if let Some(previous) = ids.insert(id, op.name.as_str()) {
                    warnings.push(format!(
                        "Service `{}`: operations `{}` and `{}` share id {:#x}",
                        service.name, previous, op.name, id
                    ));
                }
            }
        }
    }
}

impl CompilerPhase for DeclarationValidator {
    fn name(&self) -> &str { "DeclarationValidator" }

    fn description(&self) -> &str { "Validate service declarations for consistency" }

    fn run(&self, ctx: &mut CompilerContext) -> PhaseResult {
        let warnings = self.validate(&ctx.declarations);
        ctx.record_stat("declaration_warnings", warnings.len());
        for warning in warnings {
            tracing::warn!("{}", warning);
            ctx.add_warning(warning);
        }
        Ok(())
    }
}
