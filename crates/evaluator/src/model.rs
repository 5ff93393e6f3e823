use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One requirement of the specification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecLine {
    pub line_code: String,
    pub item: String,
    pub spec_value: String,
}

/// One extracted field from a vendor submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorLine {
    pub line_code: String,
    /// As-extracted label, informational only.
    pub item: String,
    pub vendor_value: Option<String>,
    pub vendor: String,
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Per-line compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// Complies, or contains the required wording.
    Y,
    /// Acceptable alternative.
    A,
    /// Non-compliant.
    N,
    /// Clarification required; the vendor value is missing.
    C,
}

impl Verdict {
    /// Report order: best to worst, then unanswered.
    pub const ALL: [Verdict; 4] = [Self::Y, Self::A, Self::N, Self::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Y => "Y",
            Self::A => "A",
            Self::N => "N",
            Self::C => "C",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Y => "compliant",
            Self::A => "acceptable alternative",
            Self::N => "non-compliant",
            Self::C => "clarification required",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A spec line joined with at most one vendor line, plus its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationRow {
    pub line_code: String,
    pub item: String,
    pub spec_value: String,
    pub vendor_value: Option<String>,
    pub vendor: Option<String>,
    pub compliance: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    pub total: usize,
    pub compliant: usize,
    pub alternative: usize,
    pub non_compliant: usize,
    pub clarification: usize,
    /// Vendor rows whose line code is not in the spec table.
    pub unmatched_vendor_lines: usize,
    /// Vendor rows ignored because an earlier row had the same line code.
    pub duplicate_vendor_lines: usize,
}

impl EvaluationSummary {
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Y => self.compliant,
            Verdict::A => self.alternative,
            Verdict::N => self.non_compliant,
            Verdict::C => self.clarification,
        }
    }

    /// True when every line is Y or A.
    pub fn is_clean(&self) -> bool {
        self.non_compliant == 0 && self.clarification == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationMeta {
    pub config_name: String,
    pub vendor: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub meta: EvaluationMeta,
    pub summary: EvaluationSummary,
    pub rows: Vec<EvaluationRow>,
}
