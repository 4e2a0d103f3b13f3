use std::path::Path;

use anyhow::{Context, Result};

use crate::report::render_error;

/// Result of checking one file: whether it parsed, and what to print for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
}

pub fn read_source(path: &Path) -> Result<String> {
    log::debug!("reading {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse `source` and describe the result for `filename`.
pub fn check_source(filename: &str, source: &str) -> CheckOutcome {
    match uitree_markup::parse_str(source) {
        Ok(roots) => CheckOutcome {
            passed: true,
            message: format!("ok: {} ({} root nodes)", filename, roots.len()),
        },
        Err(e) => CheckOutcome {
            passed: false,
            message: render_error(&e, filename, source),
        },
    }
}

/// Check one file. An unreadable file is a failed check, not a fatal error.
pub fn check_path(path: &Path) -> CheckOutcome {
    match read_source(path) {
        Ok(source) => check_source(&path.display().to_string(), &source),
        Err(e) => CheckOutcome { passed: false, message: format!("error: {:#}", e) },
    }
}

/// Check every path in order; returns the outcomes and the number that failed.
pub fn check_all<P: AsRef<Path>>(paths: &[P]) -> (Vec<CheckOutcome>, usize) {
    let outcomes: Vec<CheckOutcome> = paths.iter().map(|p| check_path(p.as_ref())).collect();
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    (outcomes, failed)
}
