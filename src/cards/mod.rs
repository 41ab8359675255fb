//! Bulk card and label workflows.

use tracing::{error, info, warn};

use crate::board::{BoardClient, BoardError, BoardResult, NewCard, User};
use crate::tags::{AttachOutcome, ColourChooser, LabelAttacher, resolve_tags};

#[cfg(test)]
mod cards_test;

/// Parameters shared by every card of one `card add` invocation.
#[derive(Debug, Clone, Default)]
pub struct AddCards {
    pub list_name: String,
    pub position: f64,
    pub due_date: Option<String>,
    /// Raw `name[:colour]` tag tokens.
    pub tags: Vec<String>,
    /// User names or usernames to make card members.
    pub users: Vec<String>,
}

/// Outcome of adding one card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardReport {
    pub name: String,
    pub id: Option<String>,
    pub labels: Vec<String>,
    pub created_labels: Vec<String>,
    pub members: Vec<String>,
    pub errors: Vec<String>,
}

impl CardReport {
    pub fn is_success(&self) -> bool {
        self.id.is_some() && self.errors.is_empty()
    }
}

/// Outcome of deleting one card or label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub target: String,
    pub error: Option<String>,
}

impl DeleteReport {
    fn deleted(target: &str) -> Self {
        Self {
            target: target.to_string(),
            error: None,
        }
    }

    fn failed(target: &str, error: &BoardError) -> Self {
        Self {
            target: target.to_string(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

async fn resolve_users<C: BoardClient>(board: &C, names: &[String]) -> BoardResult<Vec<User>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let users = board.users().await?;
    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        match users.iter().find(|u| u.answers_to(name)) {
            Some(user) => resolved.push(user.clone()),
            None => warn!(user = %name, "user not found on board"),
        }
    }
    Ok(resolved)
}

/// Create one card per name in `list_name`, then add members and tags.
///
/// Fails only when the list or board users cannot be looked up. Failures for
/// a single card, member or tag are recorded in that card's report and the
/// remaining work carries on.
pub async fn add_cards<C: BoardClient, P: ColourChooser>(
    board: &C,
    attacher: &mut LabelAttacher<'_, C, P>,
    request: &AddCards,
    names: &[String],
) -> BoardResult<Vec<CardReport>> {
    let list = board
        .lists()
        .await?
        .into_iter()
        .find(|l| l.name == request.list_name)
        .ok_or_else(|| BoardError::not_found("list", request.list_name.as_str()))?;

    let users = resolve_users(board, &request.users).await?;
    let tags = resolve_tags(&request.tags, board.colour_palette());

    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        let mut report = CardReport {
            name: name.clone(),
            ..CardReport::default()
        };

        let new_card = NewCard {
            name: name.clone(),
            position: request.position,
            due_date: request.due_date.clone(),
            description: None,
        };
        let card = match board.create_card(&list.id, &new_card).await {
            Ok(card) => card,
            Err(e) => {
                error!(card = %name, error = %e, "failed to create card");
                report.errors.push(e.to_string());
                reports.push(report);
                continue;
            }
        };
        info!(card = %name, card_id = %card.id, list = %list.name, "created card");
        report.id = Some(card.id.clone());

        for user in &users {
            match board.add_member(&card.id, &user.id).await {
                Ok(()) => report.members.push(user.name.clone()),
                Err(e) => {
                    error!(card_id = %card.id, user = %user.name, error = %e, "failed to add member");
                    report.errors.push(format!("member {}: {}", user.name, e));
                }
            }
        }

        for tag in &tags {
            match attacher.attach_tag(&card.id, tag).await {
                Ok(AttachOutcome::Attached) => report.labels.push(tag.name.clone()),
                Ok(AttachOutcome::Created { .. }) => {
                    report.labels.push(tag.name.clone());
                    report.created_labels.push(tag.name.clone());
                }
                Err(e) => {
                    error!(card_id = %card.id, label = %tag.name, error = %e, "failed to attach label");
                    report.errors.push(format!("label {}: {}", tag.name, e));
                }
            }
        }

        reports.push(report);
    }

    Ok(reports)
}

/// Delete cards by id. Ids that are not on this board are not touched.
pub async fn delete_cards<C: BoardClient>(board: &C, ids: &[String]) -> BoardResult<Vec<DeleteReport>> {
    let cards = board.cards().await?;
    let mut reports = Vec::with_capacity(ids.len());

    for id in ids {
        if !cards.iter().any(|c| &c.id == id) {
            let err = BoardError::not_found("card", id.as_str());
            error!(card_id = %id, "card not on board");
            reports.push(DeleteReport::failed(id, &err));
            continue;
        }

        match board.delete_card(id).await {
            Ok(()) => {
                info!(card_id = %id, "deleted card");
                reports.push(DeleteReport::deleted(id));
            }
            Err(e) => {
                error!(card_id = %id, error = %e, "failed to delete card");
                reports.push(DeleteReport::failed(id, &e));
            }
        }
    }

    Ok(reports)
}

/// Delete labels by name, or every label on the board when `names` is empty.
///
/// Each name removes the first label carrying it.
pub async fn delete_labels<C: BoardClient>(
    board: &C,
    names: &[String],
) -> BoardResult<Vec<DeleteReport>> {
    let labels = board.labels().await?;
    let mut reports = Vec::new();

    let targets: Vec<(String, Option<String>)> = if names.is_empty() {
        labels
            .iter()
            .map(|l| {
                let target = if l.name.is_empty() { l.id.clone() } else { l.name.clone() };
                (target, Some(l.id.clone()))
            })
            .collect()
    } else {
        names
            .iter()
            .map(|name| {
                let id = labels.iter().find(|l| &l.name == name).map(|l| l.id.clone());
                (name.clone(), id)
            })
            .collect()
    };

    for (target, id) in targets {
        let Some(id) = id else {
            let err = BoardError::not_found("label", target.as_str());
            error!(label = %target, "label not found");
            reports.push(DeleteReport::failed(&target, &err));
            continue;
        };

        match board.delete_label(&id).await {
            Ok(()) => {
                info!(label = %target, "deleted label");
                reports.push(DeleteReport::deleted(&target));
            }
            Err(e) => {
                error!(label = %target, error = %e, "failed to delete label");
                reports.push(DeleteReport::failed(&target, &e));
            }
        }
    }

    Ok(reports)
}
