//! CSV loading for specification and vendor tables.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::config::{SpecColumns, VendorColumns};
use crate::error::{EvalError, Result};
use crate::model::{SpecLine, VendorLine};

const SPEC_TABLE: &str = "spec";
const VENDOR_TABLE: &str = "vendor";

fn read_headers(
    reader: &mut csv::Reader<&[u8]>,
    table: &str,
) -> Result<Vec<String>> {
    Ok(reader
        .headers()
        .map_err(|e| csv_error(table, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect())
}

fn csv_error(table: &str, e: csv::Error) -> EvalError {
    EvalError::Csv {
        table: table.into(),
        message: e.to_string(),
    }
}

fn position(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn require(headers: &[String], table: &str, name: &str) -> Result<usize> {
    position(headers, name).ok_or_else(|| EvalError::MissingColumn {
        table: table.into(),
        column: name.into(),
    })
}

/// Load the specification template.
///
/// Every configured column must be present and line codes must be unique.
/// Rows with a blank line code or a missing or blank spec value are rejected
/// rather than skipped.
pub fn load_spec_table(csv_data: &str, columns: &SpecColumns) -> Result<Vec<SpecLine>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = read_headers(&mut reader, SPEC_TABLE)?;
    let code_idx = require(&headers, SPEC_TABLE, &columns.line_code)?;
    let item_idx = require(&headers, SPEC_TABLE, &columns.item)?;
    let value_idx = require(&headers, SPEC_TABLE, &columns.spec_value)?;

    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for (n, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(SPEC_TABLE, e))?;
        let line_code = record.get(code_idx).unwrap_or("").trim().to_string();
        if line_code.is_empty() {
            return Err(EvalError::Csv {
                table: SPEC_TABLE.into(),
                message: format!("row {}: empty '{}'", n + 1, columns.line_code),
            });
        }
        if !seen.insert(line_code.clone()) {
            return Err(EvalError::DuplicateLineCode { line_code });
        }

        // An empty reference is contained in every vendor text.
        let spec_value = record.get(value_idx).unwrap_or("").trim().to_string();
        if spec_value.is_empty() {
            return Err(EvalError::Csv {
                table: SPEC_TABLE.into(),
                message: format!("row {}: empty '{}'", n + 1, columns.spec_value),
            });
        }

        lines.push(SpecLine {
            line_code,
            item: record.get(item_idx).unwrap_or("").trim().to_string(),
            spec_value,
        });
    }

    tracing::debug!(lines = lines.len(), "loaded spec table");
    Ok(lines)
}

/// Load one vendor document's extracted table.
///
/// The line-code column may be omitted when `aliases` is non-empty; blank
/// codes are then resolved from the item label by exact match. Rows that
/// still carry no code are unmapped extraction output and are dropped.
/// `document` names the vendor unless a non-blank vendor column says
/// otherwise.
pub fn load_vendor_table(
    csv_data: &str,
    document: &str,
    columns: &VendorColumns,
    aliases: &HashMap<String, String>,
) -> Result<Vec<VendorLine>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = read_headers(&mut reader, VENDOR_TABLE)?;

    let code_idx = if aliases.is_empty() {
        Some(require(&headers, VENDOR_TABLE, &columns.line_code)?)
    } else {
        position(&headers, &columns.line_code)
    };
    let item_idx = require(&headers, VENDOR_TABLE, &columns.item)?;
    let value_idx = require(&headers, VENDOR_TABLE, &columns.vendor_value)?;
    let vendor_idx = position(&headers, &columns.vendor);

    let mut lines = Vec::new();
    let mut unmapped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| csv_error(VENDOR_TABLE, e))?;

        let item = record.get(item_idx).unwrap_or("").trim().to_string();
        let explicit = code_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let line_code = match explicit {
            Some(code) => code.to_string(),
            None => match aliases.get(&item) {
                Some(code) => code.trim().to_string(),
                None => {
                    unmapped += 1;
                    continue;
                }
            },
        };

        let vendor_value = record
            .get(value_idx)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);

        let vendor = vendor_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(document)
            .to_string();

        lines.push(VendorLine {
            line_code,
            item,
            vendor_value,
            vendor,
        });
    }

    if unmapped > 0 {
        tracing::warn!(document, unmapped, "dropped vendor rows without a line code");
    }
    tracing::debug!(document, lines = lines.len(), "loaded vendor table");
    Ok(lines)
}

/// Vendor name for a document: its file stem.
pub fn vendor_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
