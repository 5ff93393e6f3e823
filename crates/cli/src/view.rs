//! Fixed-width terminal rendering of an evaluation table.

use std::io::{self, Write};

use bideval_evaluator::model::{EvaluationRow, Verdict};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CODE_W: usize = 6;
const VERDICT_W: usize = 2;
const ITEM_W: usize = 26;
const VALUE_W: usize = 30;

/// Cut `s` to at most `width` display columns, marking the cut with "..".
pub(crate) fn truncate_display(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let budget = width.saturating_sub(2);
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        out.push(ch);
    }
    if width >= 2 {
        out.push_str("..");
    }
    out
}

/// Exactly `width` display columns: truncated or right-padded.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let cut = truncate_display(s, width);
    let w = UnicodeWidthStr::width(cut.as_str());
    format!("{cut}{}", " ".repeat(width.saturating_sub(w)))
}

/// One line naming every verdict symbol.
pub(crate) fn legend() -> String {
    let parts: Vec<String> = Verdict::ALL
        .iter()
        .map(|v| format!("{} = {}", v, v.description()))
        .collect();
    format!("legend: {}", parts.join(", "))
}

/// Write a header, one line per row (code, verdict, item, spec and vendor
/// value), then the legend.
pub(crate) fn write_table<W: Write>(out: &mut W, rows: &[EvaluationRow]) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} {} {}",
        pad_right("code", CODE_W),
        pad_right("", VERDICT_W),
        pad_right("item", ITEM_W),
        pad_right("spec", VALUE_W),
        "vendor"
    )?;
    for r in rows {
        let vendor_value = r.vendor_value.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{} {} {} {} {}",
            pad_right(&r.line_code, CODE_W),
            pad_right(r.compliance.as_str(), VERDICT_W),
            pad_right(&r.item, ITEM_W),
            pad_right(&r.spec_value, VALUE_W),
            truncate_display(vendor_value, VALUE_W),
        )?;
    }
    writeln!(out, "{}", legend())
}
