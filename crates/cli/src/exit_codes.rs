//! CLI Exit Code Registry
//!
//! Single source of truth for `bideval` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | Success                                                  |
//! | 1    | General error (unspecified)                              |
//! | 2    | Usage error (bad args; clap also exits 2)                |
//! | 3    | Invalid config (TOML parse or validation)                |
//! | 4    | Runtime error (I/O, malformed table, zero reference)     |
//! | 5    | `--strict` and at least one line is N or C               |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file failed to parse or validate.
pub const EXIT_EVAL_INVALID_CONFIG: u8 = 3;

/// Reading inputs or classifying failed.
pub const EXIT_EVAL_RUNTIME: u8 = 4;

/// Non-compliant or unanswered lines found under `--strict`.
pub const EXIT_EVAL_NONCOMPLIANT: u8 = 5;
