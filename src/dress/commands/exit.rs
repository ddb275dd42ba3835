use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::record;

pub fn run<A: AuditLog>(audit: &A) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    record(audit, "System exit", &mut result);
    result.add_message(CmdMessage::info("Exiting..."));
    Ok(result)
}
