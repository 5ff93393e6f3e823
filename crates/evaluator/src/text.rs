//! Containment and alternative-token comparison of free text.

use crate::model::Verdict;
use crate::normalize::normalize;

/// Alternative tokens, normalized once at construction.
#[derive(Debug, Clone, Default)]
pub struct AlternativeTokens {
    tokens: Vec<String>,
}

impl AlternativeTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for token in tokens {
            let t = normalize(token.as_ref());
            if !t.is_empty() && !normalized.contains(&t) {
                normalized.push(t);
            }
        }
        Self { tokens: normalized }
    }

    /// First configured token contained in already-normalized `text`.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| text.contains(t.as_str()))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Compare two values as text.
///
/// Equal or mutually contained normalized strings are compliant. Otherwise a
/// recognized alternative token in the vendor text earns `A`, and anything
/// else is `N`. No edit distance is used: a false `N` is preferred over a
/// false `Y`.
pub fn compare_text(spec: &str, vendor: &str, alternatives: &AlternativeTokens) -> Verdict {
    let spec_n = normalize(spec);
    let vendor_n = normalize(vendor);

    if spec_n == vendor_n || vendor_n.contains(&spec_n) || spec_n.contains(&vendor_n) {
        return Verdict::Y;
    }

    if alternatives.find_in(&vendor_n).is_some() {
        return Verdict::A;
    }

    Verdict::N
}
