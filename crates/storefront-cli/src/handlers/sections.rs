//! Sections command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the sections command.
///
/// Prints an empty list when sections cannot be fetched; the reason is logged.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let sections = ctx.catalog.sections().await;
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}
