use std::collections::BTreeSet;

use tabled::{Table, Tabled};

use crate::board::BoardClient;
use crate::clear::{self, ClearReport};
use crate::cli::commands::{CommandOutput, OK};
use crate::cli::error::CliResult;
use crate::cli::utils::apply_table_style;

#[derive(Tabled)]
pub(crate) struct ClearReportDisplay {
    #[tabled(rename = "List")]
    pub(crate) list: String,
    #[tabled(rename = "Deleted")]
    pub(crate) deleted: usize,
    #[tabled(rename = "Skipped")]
    pub(crate) skipped: usize,
    #[tabled(rename = "Failed")]
    pub(crate) failed: usize,
    #[tabled(rename = "Result")]
    pub(crate) result: String,
}

impl From<&ClearReport> for ClearReportDisplay {
    fn from(report: &ClearReport) -> Self {
        let result = match &report.error {
            Some(e) => format!("✗ {}", e),
            None if report.failed > 0 => "✗ some cards not deleted".to_string(),
            None => OK.to_string(),
        };
        Self {
            list: report.list.clone(),
            deleted: report.deleted,
            skipped: report.skipped,
            failed: report.failed,
            result,
        }
    }
}

/// Delete cards from lists, only those carrying one of `tags` if any are given
pub async fn clear_lists<C: BoardClient>(
    board: &C,
    lists: &[String],
    tags: &[String],
) -> CliResult<CommandOutput> {
    let tag_names: BTreeSet<String> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let reports = clear::clear_lists(board, lists, &tag_names).await?;

    let rows: Vec<ClearReportDisplay> = reports.iter().map(|r| r.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);

    Ok(CommandOutput {
        text: table.to_string(),
        failed: reports
            .iter()
            .map(|r| if r.error.is_some() { 1 } else { r.failed })
            .sum(),
    })
}
