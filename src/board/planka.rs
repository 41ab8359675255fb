//! Planka REST implementation of [`BoardClient`].

use reqwest::header::{AUTHORIZATION, COOKIE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::palette::LABEL_COLOURS;
use crate::board::{
    Board, BoardClient, BoardError, BoardResult, Card, CardLabel, Label, List, NewCard, NewLabel,
    Project, User,
};

#[derive(Debug, Deserialize)]
struct ItemResponse<T> {
    item: T,
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    items: Vec<Project>,
    #[serde(default)]
    included: ProjectsIncluded,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsIncluded {
    #[serde(default)]
    boards: Vec<Board>,
}

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    included: BoardIncluded,
}

/// Everything Planka returns alongside a board.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardIncluded {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    lists: Vec<List>,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct CardResponse {
    #[serde(default)]
    included: CardIncluded,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardIncluded {
    #[serde(default)]
    card_labels: Vec<CardLabel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachLabelRequest<'a> {
    label_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberRequest<'a> {
    user_id: &'a str,
}

/// HTTP client for a Planka instance.
pub struct PlankaClient {
    base_url: String,
    client: Client,
}

impl PlankaClient {
    /// Create a client authenticated with `token`.
    ///
    /// The token is either `accessToken` or `accessToken:httpOnlyToken`. The
    /// second half, when present, is sent as the `httpOnlyToken` cookie.
    pub fn new(base_url: &str, token: &str) -> BoardResult<Self> {
        let client = Client::builder()
            .default_headers(auth_headers(token)?)
            .build()
            .map_err(|e| BoardError::ConnectionFailed { source: e })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        debug!(method = "GET", path, "planka request");
        self.client.get(format!("{}{}", self.base_url, path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        debug!(method = "POST", path, "planka request");
        self.client.post(format!("{}{}", self.base_url, path))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        debug!(method = "DELETE", path, "planka request");
        self.client.delete(format!("{}{}", self.base_url, path))
    }

    /// Handle a Planka response with standardized error handling.
    ///
    /// 404 becomes `NotFound` so callers can treat it as an expected outcome.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> BoardResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| BoardError::InvalidResponse {
                    message: e.to_string(),
                });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(BoardError::not_found("resource", response.url().path()));
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(BoardError::Api {
            status: status.as_u16(),
            message: error_text,
        })
    }

    /// All projects visible to the token, with their boards.
    pub async fn projects(&self) -> BoardResult<(Vec<Project>, Vec<Board>)> {
        let response = self.get("/api/projects").send().await?;
        let projects: ProjectsResponse = Self::handle_response(response).await?;
        Ok((projects.items, projects.included.boards))
    }

    /// Resolve a project and board by name and scope a client to that board.
    ///
    /// The first project and board with a matching name win.
    pub async fn open_board(self, project_name: &str, board_name: &str) -> BoardResult<PlankaBoard> {
        let (projects, boards) = self.projects().await?;

        let project = projects
            .into_iter()
            .find(|p| p.name == project_name)
            .ok_or_else(|| BoardError::not_found("project", project_name))?;

        let board = boards
            .into_iter()
            .find(|b| b.project_id == project.id && b.name == board_name)
            .ok_or_else(|| BoardError::not_found("board", board_name))?;

        debug!(project_id = %project.id, board_id = %board.id, "resolved board");

        Ok(PlankaBoard {
            client: self,
            project,
            board,
        })
    }
}

fn auth_headers(token: &str) -> BoardResult<HeaderMap> {
    let (access_token, http_only_token) = match token.split_once(':') {
        Some((access, http_only)) => (access, Some(http_only)),
        None => (token, None),
    };

    let invalid = |e: reqwest::header::InvalidHeaderValue| BoardError::InvalidToken {
        message: e.to_string(),
    };

    let mut headers = HeaderMap::new();
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", access_token)).map_err(invalid)?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    if let Some(http_only) = http_only_token.filter(|t| !t.is_empty()) {
        let mut cookie =
            HeaderValue::from_str(&format!("httpOnlyToken={}", http_only)).map_err(invalid)?;
        cookie.set_sensitive(true);
        headers.insert(COOKIE, cookie);
    }

    Ok(headers)
}

/// A [`PlankaClient`] scoped to one board.
pub struct PlankaBoard {
    client: PlankaClient,
    project: Project,
    board: Board,
}

impl PlankaBoard {
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    async fn snapshot(&self) -> BoardResult<BoardIncluded> {
        let response = self
            .client
            .get(&format!("/api/boards/{}", self.board.id))
            .send()
            .await?;
        let board: BoardResponse = PlankaClient::handle_response(response).await?;
        Ok(board.included)
    }

    async fn discard(&self, path: &str) -> BoardResult<()> {
        let response = self.client.delete(path).send().await?;
        let _: serde_json::Value = PlankaClient::handle_response(response).await?;
        Ok(())
    }
}

impl BoardClient for PlankaBoard {
    fn colour_palette(&self) -> &[&str] {
        LABEL_COLOURS
    }

    async fn lists(&self) -> BoardResult<Vec<List>> {
        Ok(self.snapshot().await?.lists)
    }

    async fn labels(&self) -> BoardResult<Vec<Label>> {
        Ok(self.snapshot().await?.labels)
    }

    async fn users(&self) -> BoardResult<Vec<User>> {
        Ok(self.snapshot().await?.users)
    }

    async fn cards(&self) -> BoardResult<Vec<Card>> {
        Ok(self.snapshot().await?.cards)
    }

    async fn list_cards(&self, list_name: &str) -> BoardResult<Vec<Card>> {
        let snapshot = self.snapshot().await?;
        let list = snapshot
            .lists
            .iter()
            .find(|l| l.name == list_name)
            .ok_or_else(|| BoardError::not_found("list", list_name))?;

        Ok(snapshot
            .cards
            .into_iter()
            .filter(|c| c.list_id == list.id)
            .collect())
    }

    async fn card_label_ids(&self, card_id: &str) -> BoardResult<Vec<String>> {
        let response = self
            .client
            .get(&format!("/api/cards/{}", card_id))
            .send()
            .await?;
        let card: CardResponse = PlankaClient::handle_response(response).await?;
        Ok(card
            .included
            .card_labels
            .into_iter()
            .map(|cl| cl.label_id)
            .collect())
    }

    async fn create_card(&self, list_id: &str, card: &NewCard) -> BoardResult<Card> {
        let response = self
            .client
            .post(&format!("/api/lists/{}/cards", list_id))
            .json(card)
            .send()
            .await?;
        let created: ItemResponse<Card> = PlankaClient::handle_response(response).await?;
        Ok(created.item)
    }

    async fn delete_card(&self, card_id: &str) -> BoardResult<()> {
        self.discard(&format!("/api/cards/{}", card_id)).await
    }

    async fn create_label(&self, label: &NewLabel) -> BoardResult<Label> {
        let response = self
            .client
            .post(&format!("/api/boards/{}/labels", self.board.id))
            .json(label)
            .send()
            .await?;
        let created: ItemResponse<Label> = PlankaClient::handle_response(response).await?;
        Ok(created.item)
    }

    async fn delete_label(&self, label_id: &str) -> BoardResult<()> {
        self.discard(&format!("/api/labels/{}", label_id)).await
    }

    async fn attach_label(&self, card_id: &str, label_name: &str) -> BoardResult<()> {
        let labels = self.labels().await?;
        let label = labels
            .iter()
            .find(|l| l.name == label_name)
            .ok_or_else(|| BoardError::not_found("label", label_name))?;

        let response = self
            .client
            .post(&format!("/api/cards/{}/labels", card_id))
            .json(&AttachLabelRequest {
                label_id: &label.id,
            })
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            debug!(card_id, label = label_name, "label already attached");
            return Ok(());
        }
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::not_found("card", card_id));
        }

        let _: ItemResponse<CardLabel> = PlankaClient::handle_response(response).await?;
        Ok(())
    }

    async fn add_member(&self, card_id: &str, user_id: &str) -> BoardResult<()> {
        let response = self
            .client
            .post(&format!("/api/cards/{}/memberships", card_id))
            .json(&AddMemberRequest { user_id })
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            debug!(card_id, user_id, "user already a card member");
            return Ok(());
        }

        let _: serde_json::Value = PlankaClient::handle_response(response).await?;
        Ok(())
    }
}
