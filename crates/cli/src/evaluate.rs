//! `bideval run` and `bideval validate`: config-driven compliance evaluation.

use std::path::{Path, PathBuf};

use bideval_evaluator::config::EvalConfig;
use bideval_evaluator::model::{Evaluation, SpecLine, Verdict};
use bideval_evaluator::table::{load_spec_table, load_vendor_table, vendor_name_from_path};
use bideval_evaluator::{evaluate, Classifier};

use crate::exit_codes::{
    EXIT_EVAL_INVALID_CONFIG, EXIT_EVAL_NONCOMPLIANT, EXIT_EVAL_RUNTIME, EXIT_USAGE,
};
use crate::view::write_table;
use crate::CliError;

fn eval_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

/// Parse the config and load the spec table it points at.
fn load_config_and_spec(config_path: &Path) -> Result<(EvalConfig, Vec<SpecLine>), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| eval_err(EXIT_EVAL_RUNTIME, format!("cannot read config: {e}")))?;

    let config = EvalConfig::from_toml(&config_str).map_err(|e| {
        eval_err(EXIT_EVAL_INVALID_CONFIG, e.to_string())
            .with_hint("check [tolerance], [alternatives] and [missing] in the config")
    })?;

    // Resolve the spec path relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let spec_path = base_dir.join(&config.spec.file);
    let spec_csv = std::fs::read_to_string(&spec_path).map_err(|e| {
        eval_err(EXIT_EVAL_RUNTIME, format!("cannot read {}: {e}", spec_path.display()))
    })?;
    let spec = load_spec_table(&spec_csv, &config.spec.columns)
        .map_err(|e| eval_err(EXIT_EVAL_RUNTIME, e.to_string()))?;

    tracing::info!(
        config = %config.name,
        spec = %spec_path.display(),
        lines = spec.len(),
        "loaded specification"
    );
    Ok((config, spec))
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, spec) = load_config_and_spec(&config_path)?;
    eprintln!(
        "ok: '{}': {} spec lines, {} alternative tokens, {} aliases",
        config.name,
        spec.len(),
        config.alternatives.tokens.len(),
        config.vendor.aliases.len(),
    );
    Ok(())
}

pub struct RunArgs {
    pub config: PathBuf,
    pub vendors: Vec<PathBuf>,
    pub json: bool,
    pub output_dir: Option<PathBuf>,
    pub strict: bool,
    pub quiet: bool,
}

pub fn cmd_run(args: RunArgs) -> Result<(), CliError> {
    if let Some(ref dir) = args.output_dir {
        if dir.exists() && !dir.is_dir() {
            return Err(eval_err(
                EXIT_USAGE,
                format!("--output-dir {} is not a directory", dir.display()),
            ));
        }
        std::fs::create_dir_all(dir).map_err(|e| {
            eval_err(EXIT_EVAL_RUNTIME, format!("cannot create {}: {e}", dir.display()))
        })?;
    }

    let (config, spec) = load_config_and_spec(&args.config)?;
    let classifier = Classifier::from_config(&config);

    let mut evaluations = Vec::with_capacity(args.vendors.len());
    for path in &args.vendors {
        let evaluation = evaluate_document(&config, &classifier, &spec, path)?;

        if let Some(ref dir) = args.output_dir {
            write_outputs(dir, &evaluation)?;
        }

        if !args.json && !args.quiet {
            println!("== {}", evaluation.meta.vendor);
            let stdout = std::io::stdout();
            write_table(&mut stdout.lock(), &evaluation.rows)
                .map_err(|e| eval_err(EXIT_EVAL_RUNTIME, format!("cannot write output: {e}")))?;
        }

        // Human summary to stderr
        if !args.quiet {
            eprintln!("{}", summary_line(&evaluation));
        }

        evaluations.push(evaluation);
    }

    if args.json {
        let json_str = serde_json::to_string_pretty(&evaluations)
            .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    if args.strict && evaluations.iter().any(|e| !e.summary.is_clean()) {
        return Err(eval_err(
            EXIT_EVAL_NONCOMPLIANT,
            "non-compliant or unanswered lines found (--strict)",
        ));
    }

    Ok(())
}

/// `<vendor>: <total> lines: <n> Y, <n> A, <n> N, <n> C`
fn summary_line(evaluation: &Evaluation) -> String {
    let s = &evaluation.summary;
    let counts: Vec<String> = Verdict::ALL
        .iter()
        .map(|v| format!("{} {}", s.count(*v), v))
        .collect();
    format!("{}: {} lines: {}", evaluation.meta.vendor, s.total, counts.join(", "))
}

fn evaluate_document(
    config: &EvalConfig,
    classifier: &Classifier,
    spec: &[SpecLine],
    path: &Path,
) -> Result<Evaluation, CliError> {
    let csv = std::fs::read_to_string(path).map_err(|e| {
        eval_err(EXIT_EVAL_RUNTIME, format!("cannot read {}: {e}", path.display()))
    })?;
    let vendor_name = vendor_name_from_path(path);

    let vendor = load_vendor_table(&csv, &vendor_name, &config.vendor.columns, &config.vendor.aliases)
        .map_err(|e| eval_err(EXIT_EVAL_RUNTIME, format!("{}: {e}", path.display())))?;

    evaluate(config, classifier, spec, &vendor_name, &vendor)
        .map_err(|e| eval_err(EXIT_EVAL_RUNTIME, format!("{}: {e}", path.display())))
}

fn write_outputs(dir: &Path, evaluation: &Evaluation) -> Result<(), CliError> {
    let stem = format!("{}_eval", evaluation.meta.vendor);

    let csv_path = dir.join(format!("{stem}.csv"));
    let file = std::fs::File::create(&csv_path).map_err(|e| {
        eval_err(EXIT_EVAL_RUNTIME, format!("cannot write {}: {e}", csv_path.display()))
    })?;
    bideval_evaluator::export::write_csv(file, &evaluation.rows).map_err(|e| {
        eval_err(EXIT_EVAL_RUNTIME, format!("cannot write {}: {e}", csv_path.display()))
    })?;

    let json_path = dir.join(format!("{stem}.json"));
    let json_str = serde_json::to_string_pretty(evaluation)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;
    std::fs::write(&json_path, json_str).map_err(|e| {
        eval_err(EXIT_EVAL_RUNTIME, format!("cannot write {}: {e}", json_path.display()))
    })?;

    tracing::info!(csv = %csv_path.display(), json = %json_path.display(), "wrote evaluation");
    Ok(())
}
