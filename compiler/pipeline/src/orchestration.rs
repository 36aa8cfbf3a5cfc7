//! Pipeline orchestration for the main entry points.
//!
//! A run goes load → validate → build → collision check → emit. Only an
//! unreadable declaration file, a code collision, or a failed write stops
//! the run; everything else is recorded in the report.

use std::collections::{BTreeMap, HashSet};

use analysis::{
    CollisionChecker, CompilerContext, CompilerPhase, DeclarationValidator, PhaseResult,
};
use codegen::{write_generated, CodeGenerator, MessageTypeEnumGenerator};
use ir::{DeclarationSource, JsonFileSource};
use model::MessageTypeModel;
use tracing::{debug, info, warn};
use types::Lang;

use crate::report::{Failure, GenerationReport};
use crate::{PipelineError, PipelineOptions, Result};

/// Run the pipeline on the declaration file named in `options`.
pub fn run(options: &PipelineOptions) -> Result<GenerationReport> {
    run_with_source(&JsonFileSource::new(options.input()), options)
}

/// Load, validate and collision-check without writing anything.
///
/// Models are still built for every requested language so that missing
/// namespaces and out-of-range ids show up in the report.
pub fn check(options: &PipelineOptions) -> Result<GenerationReport> {
    let options = PipelineOptions::builder()
        .input(options.input())
        .languages(options.languages().iter().copied())
        .dry_run(true)
        .build()?;
    run(&options)
}

/// Run the pipeline on an arbitrary declaration source.
pub fn run_with_source(
    source: &dyn DeclarationSource,
    options: &PipelineOptions,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    info!(source = %source.describe(), "loading declarations");
    let loaded = source.load().map_err(|error| PipelineError::Declarations {
        source_name: source.describe(),
        error,
    })?;
    let (declarations, read_failures) = loaded.into_parts();
    for failure in read_failures {
        warn!("skipping service: {}", failure);
        report.failures.push(Failure::Declaration(failure.to_string()));
    }
    report.version = declarations.version().to_string();
    info!(
        services = declarations.services().len(),
        operations = declarations.operation_count(),
        version = %report.version,
        "declarations loaded"
    );

    let mut ctx = CompilerContext::new(declarations);
    run_phase(&DeclarationValidator::new(), &mut ctx)?;
    report.warnings = ctx.diagnostics.warnings.clone();

    let models = build_models(&ctx, options.languages(), &mut report);

    let collision_check = run_phase(&CollisionChecker, &mut ctx);
    report.diagnostics = ctx.diagnostics.clone();
    collision_check?;

    emit(&models, options, &mut report)?;

    info!("{}", report.summary());
    Ok(report)
}

fn run_phase(phase: &dyn CompilerPhase, ctx: &mut CompilerContext) -> PhaseResult {
    debug!(phase = phase.name(), "{}", phase.description());
    phase.run(ctx)
}

/// Build one model per (service, language), grouping non-empty models by language.
///
/// A model whose output path was already claimed by an earlier service is
/// recorded as a failure instead of overwriting that service's file.
fn build_models(
    ctx: &CompilerContext,
    languages: &[Lang],
    report: &mut GenerationReport,
) -> BTreeMap<Lang, Vec<MessageTypeModel>> {
    let mut models: BTreeMap<Lang, Vec<MessageTypeModel>> = BTreeMap::new();
    let mut claimed: HashSet<(Lang, String)> = HashSet::new();

    for service in ctx.declarations.services() {
        for &lang in languages {
            match MessageTypeModel::build(service, lang) {
                Ok(model) if model.is_empty() => {
                    debug!(service = %service.name, %lang, "no request operations; not emitted");
                    report.empty_skipped += 1;
                }
                Ok(model) => {
                    let path = MessageTypeEnumGenerator::new(lang).relative_path(&model);
                    if !claimed.insert((lang, path.clone())) {
                        warn!(service = %service.name, %lang, %path, "output path already taken");
                        report.failures.push(Failure::DuplicateOutput {
                            service: service.name.clone(),
                            lang,
                            path,
                        });
                        continue;
                    }
                    report.models_generated += 1;
                    models.entry(lang).or_default().push(model);
                }
                Err(error) => {
                    warn!(service = %service.name, %lang, "{}", error);
                    report.failures.push(Failure::Model {
                        service: service.name.clone(),
                        lang,
                        error,
                    });
                }
            }
        }
    }

    models
}

fn emit(
    models: &BTreeMap<Lang, Vec<MessageTypeModel>>,
    options: &PipelineOptions,
    report: &mut GenerationReport,
) -> Result<()> {
    for (&lang, lang_models) in models {
        let generator = MessageTypeEnumGenerator::new(lang);
        generator.validate(lang_models)?;
        let files = generator.generate(lang_models);
        let out_dir = options.lang_dir(lang);

        report.files_planned.extend(files.iter().map(|(path, _)| out_dir.join(path)));
        if options.dry_run() {
            info!(%lang, files = files.len(), "dry run; not writing");
            continue;
        }

        let written = write_generated(&out_dir, &files)?;
        info!(%lang, files = written.len(), dir = %out_dir.display(), "wrote message types");
        report.files_written.extend(written);
    }
    Ok(())
}
