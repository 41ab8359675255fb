//! In-memory board used by workflow tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::board::{
    BoardClient, BoardError, BoardResult, Card, Label, List, NewCard, NewLabel, User,
};

pub(crate) const TEST_PALETTE: &[&str] = &["red", "blue", "green"];

/// Calls made against the fake, for asserting protocol behaviour.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Calls {
    pub attach: usize,
    pub create_label: usize,
    pub create_card: usize,
    pub delete_card: usize,
    pub delete_label: usize,
    pub card_label_lookups: usize,
}

#[derive(Default)]
struct State {
    lists: Vec<List>,
    labels: Vec<Label>,
    cards: Vec<Card>,
    users: Vec<User>,
    card_labels: HashMap<String, Vec<String>>,
    members: HashMap<String, Vec<String>>,
    next_id: u64,
    calls: Calls,
    fail_label_creation: bool,
    fail_attach: HashSet<String>,
    fail_card_creation: HashSet<String>,
    fail_delete: HashSet<String>,
    created_labels: Vec<NewLabel>,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("n{}", self.next_id)
    }
}

pub(crate) struct FakeBoard {
    state: Mutex<State>,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_list(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().lists.push(List {
            id: id.to_string(),
            board_id: "b1".to_string(),
            name: name.to_string(),
            position: 0.0,
        });
        self
    }

    pub fn with_label(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().labels.push(Label {
            id: id.to_string(),
            board_id: "b1".to_string(),
            name: name.to_string(),
            color: "red".to_string(),
            position: 0.0,
        });
        self
    }

    pub fn with_card(self, id: &str, list_id: &str, label_ids: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.cards.push(Card {
                id: id.to_string(),
                list_id: list_id.to_string(),
                board_id: "b1".to_string(),
                name: format!("card {}", id),
                description: None,
                position: 0.0,
                due_date: None,
            });
            state.card_labels.insert(
                id.to_string(),
                label_ids.iter().map(|l| l.to_string()).collect(),
            );
        }
        self
    }

    pub fn with_user(self, id: &str, name: &str, username: &str) -> Self {
        self.state.lock().unwrap().users.push(User {
            id: id.to_string(),
            name: name.to_string(),
            username: Some(username.to_string()),
            email: None,
        });
        self
    }

    /// Make every label creation fail with an API error.
    pub fn fail_label_creation(self) -> Self {
        self.state.lock().unwrap().fail_label_creation = true;
        self
    }

    /// Make attaching `name` fail with an API error even when it exists.
    pub fn fail_attach(self, name: &str) -> Self {
        self.state.lock().unwrap().fail_attach.insert(name.to_string());
        self
    }

    pub fn fail_card_creation(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_card_creation
            .insert(name.to_string());
        self
    }

    pub fn fail_delete(self, card_id: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_delete
            .insert(card_id.to_string());
        self
    }

    pub fn calls(&self) -> Calls {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn created_labels(&self) -> Vec<NewLabel> {
        self.state.lock().unwrap().created_labels.clone()
    }

    pub fn card_ids(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.cards.iter().map(|c| c.id.clone()).collect()
    }

    pub fn label_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.labels.iter().map(|l| l.name.clone()).collect()
    }

    /// Names of the labels attached to a card.
    pub fn attached(&self, card_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .card_labels
            .get(card_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.labels.iter().find(|l| &l.id == id))
                    .map(|l| l.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn members(&self, card_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.members.get(card_id).cloned().unwrap_or_default()
    }

    pub fn card_named(&self, name: &str) -> Option<Card> {
        let state = self.state.lock().unwrap();
        state.cards.iter().find(|c| c.name == name).cloned()
    }
}

fn api_error(message: &str) -> BoardError {
    BoardError::Api {
        status: 500,
        message: message.to_string(),
    }
}

impl BoardClient for FakeBoard {
    fn colour_palette(&self) -> &[&str] {
        TEST_PALETTE
    }

    async fn lists(&self) -> BoardResult<Vec<List>> {
        Ok(self.state.lock().unwrap().lists.clone())
    }

    async fn labels(&self) -> BoardResult<Vec<Label>> {
        Ok(self.state.lock().unwrap().labels.clone())
    }

    async fn users(&self) -> BoardResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn cards(&self) -> BoardResult<Vec<Card>> {
        Ok(self.state.lock().unwrap().cards.clone())
    }

    async fn list_cards(&self, list_name: &str) -> BoardResult<Vec<Card>> {
        let state = self.state.lock().unwrap();
        let list = state
            .lists
            .iter()
            .find(|l| l.name == list_name)
            .ok_or_else(|| BoardError::not_found("list", list_name))?;
        Ok(state
            .cards
            .iter()
            .filter(|c| c.list_id == list.id)
            .cloned()
            .collect())
    }

    async fn card_label_ids(&self, card_id: &str) -> BoardResult<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.calls.card_label_lookups += 1;
        Ok(state.card_labels.get(card_id).cloned().unwrap_or_default())
    }

    async fn create_card(&self, list_id: &str, card: &NewCard) -> BoardResult<Card> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_card += 1;
        if state.fail_card_creation.contains(&card.name) {
            return Err(api_error("card creation failed"));
        }
        let created = Card {
            id: state.next_id(),
            list_id: list_id.to_string(),
            board_id: "b1".to_string(),
            name: card.name.clone(),
            description: card.description.clone(),
            position: card.position,
            due_date: card.due_date.clone(),
        };
        state.cards.push(created.clone());
        Ok(created)
    }

    async fn delete_card(&self, card_id: &str) -> BoardResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.delete_card += 1;
        if state.fail_delete.contains(card_id) {
            return Err(api_error("card deletion failed"));
        }
        let before = state.cards.len();
        state.cards.retain(|c| c.id != card_id);
        if state.cards.len() == before {
            return Err(BoardError::not_found("card", card_id));
        }
        Ok(())
    }

    async fn create_label(&self, label: &NewLabel) -> BoardResult<Label> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_label += 1;
        if state.fail_label_creation {
            return Err(api_error("label creation failed"));
        }
        let created = Label {
            id: state.next_id(),
            board_id: "b1".to_string(),
            name: label.name.clone(),
            color: label.color.clone(),
            position: label.position,
        };
        state.labels.push(created.clone());
        state.created_labels.push(label.clone());
        Ok(created)
    }

    async fn delete_label(&self, label_id: &str) -> BoardResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.delete_label += 1;
        let before = state.labels.len();
        state.labels.retain(|l| l.id != label_id);
        if state.labels.len() == before {
            return Err(BoardError::not_found("label", label_id));
        }
        Ok(())
    }

    async fn attach_label(&self, card_id: &str, label_name: &str) -> BoardResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.attach += 1;
        let label_id = state
            .labels
            .iter()
            .find(|l| l.name == label_name)
            .map(|l| l.id.clone())
            .ok_or_else(|| BoardError::not_found("label", label_name))?;
        if state.fail_attach.contains(label_name) {
            return Err(api_error("attach failed"));
        }
        let attached = state.card_labels.entry(card_id.to_string()).or_default();
        if !attached.contains(&label_id) {
            attached.push(label_id);
        }
        Ok(())
    }

    async fn add_member(&self, card_id: &str, user_id: &str) -> BoardResult<()> {
        let mut state = self.state.lock().unwrap();
        let members = state.members.entry(card_id.to_string()).or_default();
        if !members.iter().any(|m| m == user_id) {
            members.push(user_id.to_string());
        }
        Ok(())
    }
}
