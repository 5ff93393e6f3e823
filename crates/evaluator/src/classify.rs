use crate::config::{EvalConfig, ToleranceConfig};
use crate::error::Result;
use crate::model::Verdict;
use crate::numeric::compare_numeric;
use crate::text::{compare_text, AlternativeTokens};

/// One step of the classification chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Absent, blank, or null-marker vendor value → `C`.
    MissingData,
    /// Leading numbers on both sides → banded relative deviation.
    Numeric,
    /// Containment / alternative token. Always decides.
    Text,
}

/// Rules that may defer to the next one.
const DEFERRING_RULES: [Rule; 2] = [Rule::MissingData, Rule::Numeric];

/// Rules in priority order. Missing data short-circuits before any content
/// comparison, and numeric comparison wins whenever both values carry a
/// number, even if the surrounding wording differs. Text always decides.
pub const RULE_CHAIN: [Rule; 3] = [DEFERRING_RULES[0], DEFERRING_RULES[1], Rule::Text];

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingData => "missing_data",
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

/// Per-line compliance classifier built from explicit configuration.
#[derive(Debug, Clone)]
pub struct Classifier {
    tolerance: ToleranceConfig,
    alternatives: AlternativeTokens,
    missing_markers: Vec<String>,
}

impl Classifier {
    pub fn new(
        tolerance: ToleranceConfig,
        alternatives: AlternativeTokens,
        missing_markers: &[String],
    ) -> Self {
        Self {
            tolerance,
            alternatives,
            missing_markers: missing_markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &EvalConfig) -> Self {
        Self::new(
            config.tolerance.clone(),
            AlternativeTokens::new(&config.alternatives.tokens),
            &config.missing.markers,
        )
    }

    /// Classify one line. Errors only on a zero numeric reference without an
    /// absolute override.
    pub fn classify(&self, spec_value: &str, vendor_value: Option<&str>) -> Result<Verdict> {
        self.classify_explained(spec_value, vendor_value)
            .map(|(verdict, _)| verdict)
    }

    /// Like [`classify`](Self::classify), also naming the rule that decided.
    pub fn classify_explained(
        &self,
        spec_value: &str,
        vendor_value: Option<&str>,
    ) -> Result<(Verdict, Rule)> {
        let vendor = vendor_value.unwrap_or("");

        for rule in DEFERRING_RULES {
            if let Some(verdict) = self.apply(rule, spec_value, vendor)? {
                return Ok((verdict, rule));
            }
        }

        Ok((compare_text(spec_value, vendor, &self.alternatives), Rule::Text))
    }

    fn apply(&self, rule: Rule, spec: &str, vendor: &str) -> Result<Option<Verdict>> {
        match rule {
            Rule::MissingData => Ok(self.is_missing(vendor).then_some(Verdict::C)),
            Rule::Numeric => compare_numeric(spec, vendor, &self.tolerance),
            Rule::Text => Ok(Some(compare_text(spec, vendor, &self.alternatives))),
        }
    }

    /// Blank, or equal (case-insensitively, after trim) to a null marker.
    pub fn is_missing(&self, value: &str) -> bool {
        let v = value.trim();
        v.is_empty() || self.missing_markers.iter().any(|m| v.eq_ignore_ascii_case(m))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            ToleranceConfig::default(),
            AlternativeTokens::new(crate::config::AlternativesConfig::default().tokens),
            &crate::config::MissingConfig::default().markers,
        )
    }
}
