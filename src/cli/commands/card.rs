use tabled::{Table, Tabled};

use crate::board::BoardClient;
use crate::cards::{self, AddCards, CardReport, DeleteReport};
use crate::cli::commands::{CommandOutput, OK};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_names, truncate_with_ellipsis};
use crate::tags::{ColourChooser, LabelAttacher};

#[derive(Tabled)]
pub(crate) struct CardReportDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Card")]
    pub(crate) name: String,
    #[tabled(rename = "Labels")]
    pub(crate) labels: String,
    #[tabled(rename = "Members")]
    pub(crate) members: String,
    #[tabled(rename = "Result")]
    pub(crate) result: String,
}

impl From<&CardReport> for CardReportDisplay {
    fn from(report: &CardReport) -> Self {
        let labels = report
            .labels
            .iter()
            .map(|l| {
                if report.created_labels.contains(l) {
                    format!("{} (new)", l)
                } else {
                    l.clone()
                }
            })
            .collect::<Vec<_>>();
        Self {
            id: report.id.clone().unwrap_or_else(|| "-".to_string()),
            name: truncate_with_ellipsis(&report.name, 40),
            labels: format_names(&labels),
            members: format_names(&report.members),
            result: if report.errors.is_empty() {
                OK.to_string()
            } else {
                format!("✗ {}", report.errors.join("; "))
            },
        }
    }
}

#[derive(Tabled)]
pub(crate) struct DeleteDisplay {
    #[tabled(rename = "Target")]
    pub(crate) target: String,
    #[tabled(rename = "Result")]
    pub(crate) result: String,
}

impl From<&DeleteReport> for DeleteDisplay {
    fn from(report: &DeleteReport) -> Self {
        Self {
            target: report.target.clone(),
            result: match &report.error {
                None => "✓ deleted".to_string(),
                Some(e) => format!("✗ {}", e),
            },
        }
    }
}

pub(crate) fn format_delete_table(reports: &[DeleteReport], empty: &str) -> String {
    if reports.is_empty() {
        return empty.to_string();
    }
    let rows: Vec<DeleteDisplay> = reports.iter().map(|r| r.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

/// Add named cards to a list, with members and tags
pub async fn add_cards<C: BoardClient, P: ColourChooser>(
    board: &C,
    chooser: P,
    request: &AddCards,
    names: &[String],
) -> CliResult<CommandOutput> {
    let mut attacher = LabelAttacher::new(board, chooser);
    let reports = cards::add_cards(board, &mut attacher, request, names).await?;

    let rows: Vec<CardReportDisplay> = reports.iter().map(|r| r.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);

    Ok(CommandOutput {
        text: table.to_string(),
        failed: reports.iter().filter(|r| !r.is_success()).count(),
    })
}

/// Delete cards by id
pub async fn delete_cards<C: BoardClient>(board: &C, ids: &[String]) -> CliResult<CommandOutput> {
    let reports = cards::delete_cards(board, ids).await?;
    Ok(CommandOutput {
        text: format_delete_table(&reports, "No cards given."),
        failed: reports.iter().filter(|r| !r.is_success()).count(),
    })
}
