//! `bideval-evaluator`: per-line compliance evaluation of vendor proposals.
//!
//! Pure engine crate: receives already-extracted specification and vendor
//! tables, returns one verdict per specification line. No CLI dependencies.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod numeric;
pub mod summary;
pub mod table;
pub mod text;

pub use classify::{Classifier, Rule};
pub use config::EvalConfig;
pub use engine::{evaluate, evaluate_rows};
pub use error::EvalError;
pub use model::{Evaluation, EvaluationRow, SpecLine, VendorLine, Verdict};
pub use normalize::normalize;
