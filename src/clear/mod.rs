//! Clearing cards out of lists, optionally only those carrying given labels.

use std::collections::{BTreeSet, HashSet};

use tracing::{error, info, warn};

use crate::board::{BoardClient, BoardResult};


/// Which cards of a list get deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelFilter {
    /// No label names were requested: every card goes.
    Unfiltered,
    /// Only cards carrying at least one of these label ids go.
    Matching(HashSet<String>),
}

impl LabelFilter {
    pub fn is_active(&self) -> bool {
        matches!(self, LabelFilter::Matching(_))
    }

    /// True when no card can match, so card labels need not be read.
    pub fn matches_nothing(&self) -> bool {
        matches!(self, LabelFilter::Matching(ids) if ids.is_empty())
    }

    fn matches(&self, card_label_ids: &[String]) -> bool {
        match self {
            LabelFilter::Unfiltered => true,
            LabelFilter::Matching(ids) => card_label_ids.iter().any(|id| ids.contains(id)),
        }
    }
}

/// Outcome of clearing one list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearReport {
    pub list: String,
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub error: Option<String>,
}

impl ClearReport {
    fn new(list: &str) -> Self {
        Self {
            list: list.to_string(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.error.is_none()
    }
}

/// Build the label filter for `tag_names` from the board's labels.
///
/// Names no label carries are warned about and ignored. If names were given
/// but none resolve, the filter matches nothing.
pub async fn label_filter<C: BoardClient>(
    board: &C,
    tag_names: &BTreeSet<String>,
) -> BoardResult<LabelFilter> {
    if tag_names.is_empty() {
        return Ok(LabelFilter::Unfiltered);
    }

    let labels = board.labels().await?;
    let ids: HashSet<String> = labels
        .iter()
        .filter(|l| tag_names.contains(&l.name))
        .map(|l| l.id.clone())
        .collect();

    for name in tag_names {
        if !labels.iter().any(|l| &l.name == name) {
            warn!(label = %name, "label not found on board");
        }
    }

    Ok(LabelFilter::Matching(ids))
}

/// Delete cards from each named list, in the order given.
///
/// A list that cannot be found or read is reported and skipped. Per-card
/// failures are counted and do not stop the list.
pub async fn clear_lists<C: BoardClient>(
    board: &C,
    list_names: &[String],
    tag_names: &BTreeSet<String>,
) -> BoardResult<Vec<ClearReport>> {
    let filter = label_filter(board, tag_names).await?;
    let mut reports = Vec::with_capacity(list_names.len());

    for list_name in list_names {
        let mut report = ClearReport::new(list_name);

        let cards = match board.list_cards(list_name).await {
            Ok(cards) => cards,
            Err(e) => {
                error!(list = %list_name, error = %e, "cannot clear list");
                report.error = Some(e.to_string());
                reports.push(report);
                continue;
            }
        };

        if filter.matches_nothing() {
            report.skipped = cards.len();
            reports.push(report);
            continue;
        }

        for card in cards {
            if filter.is_active() {
                let card_labels = match board.card_label_ids(&card.id).await {
                    Ok(ids) => ids,
                    Err(e) => {
                        error!(card_id = %card.id, error = %e, "cannot read card labels");
                        report.failed += 1;
                        continue;
                    }
                };
                if !filter.matches(&card_labels) {
                    report.skipped += 1;
                    continue;
                }
            }

            match board.delete_card(&card.id).await {
                Ok(()) => {
                    info!(card_id = %card.id, list = %list_name, "deleted card");
                    report.deleted += 1;
                }
                Err(e) => {
                    error!(card_id = %card.id, error = %e, "failed to delete card");
                    report.failed += 1;
                }
            }
        }

        reports.push(report);
    }

    Ok(reports)
}
