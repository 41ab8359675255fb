use crate::board::BoardClient;
use crate::board::palette::sorted_colours;
use crate::cards;
use crate::cli::commands::CommandOutput;
use crate::cli::commands::card::format_delete_table;
use crate::cli::error::CliResult;

/// Delete labels by name, or all labels on the board when no names are given
pub async fn delete_labels<C: BoardClient>(
    board: &C,
    names: &[String],
) -> CliResult<CommandOutput> {
    let reports = cards::delete_labels(board, names).await?;
    Ok(CommandOutput {
        text: format_delete_table(&reports, "No labels found."),
        failed: reports.iter().filter(|r| !r.is_success()).count(),
    })
}

/// Label colours Planka accepts, one per line
pub fn list_colours() -> String {
    sorted_colours().join("\n")
}
