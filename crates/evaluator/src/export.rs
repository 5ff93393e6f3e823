//! Flat CSV rendering of an evaluation table.

use std::io::Write;

use crate::model::EvaluationRow;

pub const CSV_HEADERS: [&str; 6] = [
    "line_code",
    "item",
    "spec_value",
    "vendor_value",
    "vendor",
    "compliance",
];

/// Write rows as CSV with a header line. Absent vendor fields are empty cells.
pub fn write_csv<W: Write>(writer: W, rows: &[EvaluationRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    for r in rows {
        wtr.write_record([
            r.line_code.as_str(),
            r.item.as_str(),
            r.spec_value.as_str(),
            r.vendor_value.as_deref().unwrap_or(""),
            r.vendor.as_deref().unwrap_or(""),
            r.compliance.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
