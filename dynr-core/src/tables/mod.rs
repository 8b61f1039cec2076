//! Table selection
//!
//! none → tentative → confirmed. Selecting replaces whatever was selected
//! before. Availability is fixed by the dataset; a confirmed table is never
//! released within a session.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::DiningTable;
use shared::order::{TableConfirmation, TableSelection};

/// Make `table` the tentative selection
///
/// Unavailable tables are rejected and the current selection is kept.
pub fn select_table(selection: &mut TableSelection, table: &DiningTable) -> AppResult<()> {
    if !table.available {
        return Err(AppError::with_message(
            ErrorCode::TableUnavailable,
            format!("{} is not available", table.name),
        )
        .with_detail("table_id", table.id));
    }

    *selection = TableSelection::Tentative {
        table: table.clone(),
    };
    Ok(())
}

/// Promote the tentative selection to confirmed
///
/// `None` when nothing is tentatively selected.
pub fn confirm_selection(selection: &mut TableSelection) -> Option<TableConfirmation> {
    match std::mem::take(selection) {
        TableSelection::Tentative { table } => {
            let confirmation = TableConfirmation {
                table_id: table.id,
                table_name: table.name.clone(),
                seats: table.seats,
            };
            *selection = TableSelection::Confirmed { table };
            Some(confirmation)
        }
        other => {
            *selection = other;
            None
        }
    }
}
