//! Alerts CLI command

use super::CommandContext;
use crate::display::alert::format_alerts;
use crate::error::FintrackResult;
use crate::services::derive_snapshot_alerts;

/// Derive and print every alert for the current user
pub fn handle_alerts_command(ctx: &CommandContext<'_>) -> FintrackResult<()> {
    let snapshot = ctx.storage.snapshot(ctx.user)?;
    let alerts = derive_snapshot_alerts(&snapshot, ctx.today);
    print!("{}", format_alerts(&alerts));
    Ok(())
}
