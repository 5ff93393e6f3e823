use std::collections::HashMap;

use crate::classify::Classifier;
use crate::config::EvalConfig;
use crate::error::Result;
use crate::model::{Evaluation, EvaluationMeta, EvaluationRow, SpecLine, VendorLine};
use crate::summary::compute_summary;

/// Vendor rows that did not take part in the join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub unmatched_vendor_lines: usize,
    pub duplicate_vendor_lines: usize,
}

#[derive(Debug)]
pub struct JoinOutput<'a> {
    pub pairs: Vec<(&'a SpecLine, Option<&'a VendorLine>)>,
    pub stats: JoinStats,
}

/// Left-join spec lines with vendor lines on line code.
///
/// Spec order is preserved and every spec line appears exactly once. When a
/// vendor table repeats a line code the first row wins.
pub fn join<'a>(spec: &'a [SpecLine], vendor: &'a [VendorLine]) -> JoinOutput<'a> {
    let mut by_code: HashMap<&str, &VendorLine> = HashMap::new();
    let mut stats = JoinStats::default();

    for line in vendor {
        if by_code.contains_key(line.line_code.as_str()) {
            stats.duplicate_vendor_lines += 1;
            tracing::warn!(
                line_code = %line.line_code,
                vendor = %line.vendor,
                "duplicate vendor line code, keeping first occurrence"
            );
            continue;
        }
        by_code.insert(line.line_code.as_str(), line);
    }

    let pairs: Vec<_> = spec
        .iter()
        .map(|s| (s, by_code.get(s.line_code.as_str()).copied()))
        .collect();

    let matched = pairs.iter().filter(|(_, v)| v.is_some()).count();
    stats.unmatched_vendor_lines = by_code.len() - matched;
    if stats.unmatched_vendor_lines > 0 {
        tracing::debug!(
            unmatched = stats.unmatched_vendor_lines,
            "vendor lines with no spec counterpart"
        );
    }

    JoinOutput { pairs, stats }
}

/// Classify every spec line against the vendor table.
///
/// The returned rows follow spec order and their count always equals
/// `spec.len()`; lines the vendor did not answer are `C`.
pub fn evaluate_rows(
    classifier: &Classifier,
    spec: &[SpecLine],
    vendor: &[VendorLine],
) -> Result<(Vec<EvaluationRow>, JoinStats)> {
    let joined = join(spec, vendor);
    let mut rows = Vec::with_capacity(spec.len());

    for &(s, v) in &joined.pairs {
        let vendor_value = v.and_then(|v| v.vendor_value.as_deref());
        let (compliance, rule) = classifier
            .classify_explained(&s.spec_value, vendor_value)
            .map_err(|e| e.at_line(&s.line_code))?;

        tracing::debug!(
            line_code = %s.line_code,
            verdict = %compliance,
            rule = rule.as_str(),
            "classified"
        );

        rows.push(EvaluationRow {
            line_code: s.line_code.clone(),
            item: s.item.clone(),
            spec_value: s.spec_value.clone(),
            vendor_value: vendor_value.map(String::from),
            vendor: v.map(|v| v.vendor.clone()),
            compliance,
        });
    }

    Ok((rows, joined.stats))
}

/// Evaluate one vendor document against the spec table.
pub fn evaluate(
    config: &EvalConfig,
    classifier: &Classifier,
    spec: &[SpecLine],
    vendor_name: &str,
    vendor: &[VendorLine],
) -> Result<Evaluation> {
    let (rows, stats) = evaluate_rows(classifier, spec, vendor)?;

    let mut summary = compute_summary(&rows);
    summary.unmatched_vendor_lines = stats.unmatched_vendor_lines;
    summary.duplicate_vendor_lines = stats.duplicate_vendor_lines;

    tracing::info!(
        vendor = vendor_name,
        total = summary.total,
        y = summary.compliant,
        a = summary.alternative,
        n = summary.non_compliant,
        c = summary.clarification,
        "evaluated"
    );

    Ok(Evaluation {
        meta: EvaluationMeta {
            config_name: config.name.clone(),
            vendor: vendor_name.to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        rows,
    })
}
