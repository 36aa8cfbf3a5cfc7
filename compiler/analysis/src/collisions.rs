//! Message-code collision detection.
//!
//! A collision means two operations would be routed to the same handler on
//! the wire. It is a protocol design mistake rather than a per-service
//! problem, so it blocks the whole run before anything is written.

use std::collections::HashMap;
use std::fmt;

use ir::DeclarationSet;
use model::{build_operation_entries, MessageCode};

use crate::{CompilerContext, CompilerPhase, PhaseResult};

/// Two operations that merged to the same code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The shared code
    pub code: MessageCode,
    /// First `(service, operation)` that produced the code
    pub first: (String, String),
    /// Later `(service, operation)` that produced it again
    pub second: (String, String),
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is used by both {}.{} and {}.{}",
            self.code, self.first.0, self.first.1, self.second.0, self.second.1
        )
    }
}

/// One or more message-code collisions across the declaration set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} message code collision(s): {}", .collisions.len(), render(.collisions))]
pub struct CollisionError {
    /// Every collision found, in declaration order
    pub collisions: Vec<Collision>,
}

fn render(collisions: &[Collision]) -> String {
    collisions.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Find every pair of operations sharing a merged code.
///
/// Services whose ids cannot be merged are skipped here; the model builder
/// reports them.
pub fn detect_collisions(set: &DeclarationSet) -> Result<(), CollisionError> {
    let mut owners: HashMap<MessageCode, (String, String)> = HashMap::new();
    let mut collisions = Vec::new();

    for service in set.services() {
        let Ok(entries) = build_operation_entries(service) else {
            continue;
        };
        for entry in entries {
            let owner = (service.name.clone(), entry.name().to_string());
            match owners.get(&entry.code()) {
                Some(first) => collisions.push(Collision {
                    code: entry.code(),
                    first: first.clone(),
                    second: owner,
                }),
                None => {
                    owners.insert(entry.code(), owner);
                }
            }
        }
    }

    if collisions.is_empty() {
        Ok(())
    } else {
        Err(CollisionError { collisions })
    }
}

/// Phase wrapper around [`detect_collisions`].
#[derive(Debug, Default, Clone)]
pub struct CollisionChecker;

impl CompilerPhase for CollisionChecker {
    fn name(&self) -> &str { "CollisionChecker" }

    fn description(&self) -> &str { "Reject declaration sets whose merged message codes collide" }

    fn run(&self, ctx: &mut CompilerContext) -> PhaseResult {
        if let Err(err) = detect_collisions(&ctx.declarations) {
            ctx.record_stat("message_code_collisions", err.collisions.len());
            for collision in &err.collisions {
                ctx.add_error(format!("Message code collision: {}", collision));
            }
            return Err(err.into());
        }
        Ok(())
    }
}
