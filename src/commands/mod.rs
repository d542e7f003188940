use crate::errors::SearchError;
use std::io::Write;

pub mod daemonsets;

/// Exit status for a finished run. Failures print their message to `out` and exit with 1.
pub fn finish<W: Write>(result: Result<(), SearchError>, out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(out, "{err}");
            1
        }
    }
}
