//! The board collaborator consumed by the card, label and list workflows.

use crate::board::{BoardResult, Card, Label, List, NewCard, NewLabel, User};

/// Operations on a single board, already resolved from project and board name.
///
/// Implementations are expected to fetch fresh state on every call; the
/// workflows create labels between lookups and rely on seeing them.
pub trait BoardClient {
    /// Label colours the service accepts.
    fn colour_palette(&self) -> &[&str];

    /// All lists on the board, in board order.
    async fn lists(&self) -> BoardResult<Vec<List>>;

    /// All labels on the board.
    async fn labels(&self) -> BoardResult<Vec<Label>>;

    /// Users that are members of the board.
    async fn users(&self) -> BoardResult<Vec<User>>;

    /// Every card on the board.
    async fn cards(&self) -> BoardResult<Vec<Card>>;

    /// Cards of the first list named `list_name`, in service order.
    ///
    /// Fails with `NotFound` when the board has no such list.
    async fn list_cards(&self, list_name: &str) -> BoardResult<Vec<Card>>;

    /// Ids of the labels attached to a card.
    async fn card_label_ids(&self, card_id: &str) -> BoardResult<Vec<String>>;

    async fn create_card(&self, list_id: &str, card: &NewCard) -> BoardResult<Card>;

    async fn delete_card(&self, card_id: &str) -> BoardResult<()>;

    async fn create_label(&self, label: &NewLabel) -> BoardResult<Label>;

    async fn delete_label(&self, label_id: &str) -> BoardResult<()>;

    /// Attach the first board label named `label_name` to a card.
    ///
    /// Fails with `NotFound` when no label has that name. Attaching a label
    /// the card already carries succeeds without changing anything.
    async fn attach_label(&self, card_id: &str, label_name: &str) -> BoardResult<()>;

    /// Make a user a member of a card. Existing memberships are left alone.
    async fn add_member(&self, card_id: &str, user_id: &str) -> BoardResult<()>;
}
