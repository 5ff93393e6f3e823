use crate::model::{EvaluationRow, EvaluationSummary, Verdict};

/// Count verdicts across evaluated rows.
pub fn compute_summary(rows: &[EvaluationRow]) -> EvaluationSummary {
    let mut summary = EvaluationSummary {
        total: rows.len(),
        ..EvaluationSummary::default()
    };

    for r in rows {
        match r.compliance {
            Verdict::Y => summary.compliant += 1,
            Verdict::A => summary.alternative += 1,
            Verdict::N => summary.non_compliant += 1,
            Verdict::C => summary.clarification += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(compliance: Verdict) -> EvaluationRow {
        EvaluationRow {
            line_code: "P01".into(),
            item: "Pump standard".into(),
            spec_value: "API 610".into(),
            vendor_value: None,
            vendor: None,
            compliance,
        }
    }

    #[test]
    fn summary_counts() {
        let rows = vec![
            row(Verdict::Y),
            row(Verdict::Y),
            row(Verdict::A),
            row(Verdict::N),
            row(Verdict::C),
        ];
        let summary = compute_summary(&rows);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.count(Verdict::Y), 2);
        assert_eq!(summary.alternative, 1);
        assert_eq!(summary.non_compliant, 1);
        assert_eq!(summary.clarification, 1);
        assert!(!summary.is_clean());
    }

    #[test]
    fn empty_is_clean() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.is_clean());
    }
}
