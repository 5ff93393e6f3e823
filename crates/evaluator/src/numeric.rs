//! Relative-deviation banding of the leading numbers in two values.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AbsoluteBand, ToleranceConfig};
use crate::error::{EvalError, Result};
use crate::model::Verdict;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("number pattern is valid"));

/// Leftmost signed or unsigned decimal number anywhere in `text`.
pub fn extract_number(text: &str) -> Option<f64> {
    NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Band the deviation between the first numbers of `spec` and `vendor`.
///
/// Returns `Ok(None)` when either side carries no number so the caller can
/// fall through to text comparison. Only the leading numbers are compared,
/// whatever surrounds them.
pub fn compare_numeric(
    spec: &str,
    vendor: &str,
    tolerance: &ToleranceConfig,
) -> Result<Option<Verdict>> {
    let (Some(sv), Some(vv)) = (extract_number(spec), extract_number(vendor)) else {
        return Ok(None);
    };

    let deviation = (vv - sv).abs();

    if sv == 0.0 {
        let band = tolerance
            .zero_reference
            .as_ref()
            .ok_or_else(|| EvalError::ZeroReferenceValue {
                spec_value: spec.to_string(),
            })?;
        return Ok(Some(band_absolute(deviation, band)));
    }

    let delta = deviation / sv.abs();
    Ok(Some(band(delta, tolerance.strict, tolerance.lenient)))
}

fn band_absolute(deviation: f64, band_cfg: &AbsoluteBand) -> Verdict {
    band(deviation, band_cfg.strict, band_cfg.lenient)
}

fn band(delta: f64, strict: f64, lenient: f64) -> Verdict {
    if delta <= strict {
        Verdict::Y
    } else if delta <= lenient {
        Verdict::A
    } else {
        Verdict::N
    }
}
