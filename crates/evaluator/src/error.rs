use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    /// TOML parse / deserialization error.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// Config validation error (bad thresholds, empty token, etc.).
    #[error("config validation error: {0}")]
    ConfigValidation(String),
    /// Missing required column in an input table.
    #[error("{table} table: missing column '{column}'")]
    MissingColumn { table: String, column: String },
    /// The same line code appears twice in the specification table.
    #[error("spec table: duplicate line code '{line_code}'")]
    DuplicateLineCode { line_code: String },
    /// Malformed CSV input.
    #[error("{table} table: {message}")]
    Csv { table: String, message: String },
    /// Relative deviation is undefined against a zero specification value.
    #[error(
        "spec value '{spec_value}' is zero and relative deviation is undefined; \
         configure [tolerance.zero_reference] for an absolute band"
    )]
    ZeroReferenceValue { spec_value: String },
    /// Classification failure attributed to one line item.
    #[error("line '{line_code}': {source}")]
    Line {
        line_code: String,
        #[source]
        source: Box<EvalError>,
    },
}

impl EvalError {
    pub(crate) fn at_line(self, line_code: &str) -> Self {
        Self::Line {
            line_code: line_code.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
