//! Canonical text form used by the text comparator.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text for comparison.
///
/// Applies NFKD, maps the multiplication sign to `x` and unicode dashes to
/// `-`, collapses whitespace runs to one space, trims, and lower-cases.
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfkd().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(fold_glyph(ch));
    }

    // Lower-casing can emit combining marks that NFKD would reorder, so a
    // second canonical pass keeps the function idempotent.
    if out.is_ascii() {
        out
    } else {
        out.nfkd().collect()
    }
}

fn fold_glyph(ch: char) -> char {
    match ch {
        '\u{00D7}' => 'x',
        // hyphen, non-breaking hyphen, figure dash, en dash, em dash,
        // horizontal bar, minus sign
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
        | '\u{2212}' => '-',
        _ => ch,
    }
}
