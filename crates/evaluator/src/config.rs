use std::collections::HashMap;

use serde::Deserialize;

use crate::error::EvalError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    pub name: String,
    pub spec: SpecSource,
    #[serde(default)]
    pub vendor: VendorConfig,
    #[serde(default)]
    pub tolerance: ToleranceConfig,
    #[serde(default)]
    pub alternatives: AlternativesConfig,
    #[serde(default)]
    pub missing: MissingConfig,
}

// ---------------------------------------------------------------------------
// Specification template
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SpecSource {
    /// CSV path, resolved relative to the config file by the caller.
    pub file: String,
    #[serde(default)]
    pub columns: SpecColumns,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpecColumns {
    pub line_code: String,
    pub item: String,
    pub spec_value: String,
}

impl Default for SpecColumns {
    fn default() -> Self {
        Self {
            line_code: "line_code".into(),
            item: "item".into(),
            spec_value: "spec_value".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Vendor tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorConfig {
    #[serde(default)]
    pub columns: VendorColumns,
    /// Exact item label → line code, for extractions that carry no code column.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VendorColumns {
    pub line_code: String,
    pub item: String,
    pub vendor_value: String,
    /// Optional column; the document name is used when it is absent.
    pub vendor: String,
}

impl Default for VendorColumns {
    fn default() -> Self {
        Self {
            line_code: "line_code".into(),
            item: "item".into(),
            vendor_value: "vendor_value".into(),
            vendor: "vendor".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

/// Relative-deviation bands for numeric comparison.
///
/// `delta <= strict` is compliant, `delta <= lenient` is an acceptable
/// alternative, anything wider is non-compliant.
#[derive(Debug, Clone, Deserialize)]
pub struct ToleranceConfig {
    #[serde(default = "default_strict")]
    pub strict: f64,
    #[serde(default = "default_lenient")]
    pub lenient: f64,
    /// Absolute bands used when the spec value is zero. Without it a zero
    /// reference is an error.
    #[serde(default)]
    pub zero_reference: Option<AbsoluteBand>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbsoluteBand {
    pub strict: f64,
    pub lenient: f64,
}

fn default_strict() -> f64 {
    0.05
}

fn default_lenient() -> f64 {
    0.15
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            lenient: default_lenient(),
            zero_reference: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Alternatives + missing markers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct AlternativesConfig {
    #[serde(default = "default_tokens")]
    pub tokens: Vec<String>,
}

fn default_tokens() -> Vec<String> {
    ["api", "iso", "ansi", "dual", "self-flush"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for AlternativesConfig {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissingConfig {
    /// Textual null representations, compared case-insensitively after trim.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

fn default_markers() -> Vec<String> {
    vec!["nan".into(), "none".into()]
}

impl Default for MissingConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl EvalConfig {
    pub fn from_toml(input: &str) -> Result<Self, EvalError> {
        let config: EvalConfig =
            toml::from_str(input).map_err(|e| EvalError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.name.trim().is_empty() {
            return Err(EvalError::ConfigValidation("name must not be empty".into()));
        }

        if self.spec.file.trim().is_empty() {
            return Err(EvalError::ConfigValidation(
                "spec.file must not be empty".into(),
            ));
        }

        validate_band("tolerance", self.tolerance.strict, self.tolerance.lenient)?;
        if let Some(ref zero) = self.tolerance.zero_reference {
            validate_band("tolerance.zero_reference", zero.strict, zero.lenient)?;
        }

        if let Some(pos) = self
            .alternatives
            .tokens
            .iter()
            .position(|t| t.trim().is_empty())
        {
            return Err(EvalError::ConfigValidation(format!(
                "alternatives.tokens[{pos}] is empty"
            )));
        }

        for (label, code) in &self.vendor.aliases {
            if code.trim().is_empty() {
                return Err(EvalError::ConfigValidation(format!(
                    "vendor.aliases: '{label}' maps to an empty line code"
                )));
            }
        }

        Ok(())
    }
}

fn validate_band(section: &str, strict: f64, lenient: f64) -> Result<(), EvalError> {
    if !strict.is_finite() || !lenient.is_finite() {
        return Err(EvalError::ConfigValidation(format!(
            "{section}: thresholds must be finite"
        )));
    }
    if strict < 0.0 {
        return Err(EvalError::ConfigValidation(format!(
            "{section}: strict must be >= 0, got {strict}"
        )));
    }
    if lenient < strict {
        return Err(EvalError::ConfigValidation(format!(
            "{section}: lenient ({lenient}) must be >= strict ({strict})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
