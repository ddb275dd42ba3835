use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DressError, Result};

use super::helpers::record;

/// Read the last `lines` audit entries. The viewing itself is logged
/// afterwards, so it never shows up in its own output.
pub fn run<A: AuditLog>(audit: &A, lines: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match audit.tail(lines) {
        Ok(found) => result = result.with_log_lines(found),
        Err(DressError::LogNotFound(_)) => {
            result.add_message(CmdMessage::warning("Log file not found."));
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!("Could not read the log: {}", e)));
        }
    }
    record(audit, "Audit log viewed", &mut result);
    Ok(result)
}
