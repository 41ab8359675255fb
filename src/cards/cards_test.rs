use crate::board::fake::FakeBoard;
use crate::cards::*;
use crate::tags::{LabelAttacher, MockColourChooser, RandomColours};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sprint_board() -> FakeBoard {
    FakeBoard::new()
        .with_list("l-todo", "Todo")
        .with_label("1", "bug")
        .with_user("u1", "Ada Lovelace", "ada")
        .with_user("u2", "Grace Hopper", "grace")
}

#[tokio::test]
async fn test_add_cards_creates_each_card_in_argument_order() {
    let board = sprint_board();
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Todo".to_string(),
        position: 65535.0,
        due_date: Some("2026-11-01T00:00:00.000Z".to_string()),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["One", "Two"]))
        .await
        .unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two"]);
    assert!(reports.iter().all(|r| r.is_success()));

    let card = board.card_named("Two").unwrap();
    assert_eq!(card.list_id, "l-todo");
    assert_eq!(card.position, 65535.0);
    assert_eq!(card.due_date.as_deref(), Some("2026-11-01T00:00:00.000Z"));
}

#[tokio::test]
async fn test_add_cards_unknown_list_creates_nothing() {
    let board = sprint_board();
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Doing".to_string(),
        ..AddCards::default()
    };

    let err = add_cards(&board, &mut attacher, &request, &strings(&["One"]))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(board.calls().create_card, 0);
}

#[tokio::test]
async fn test_add_cards_attaches_existing_and_new_labels() {
    let board = sprint_board();
    let mut attacher = LabelAttacher::new(&board, RandomColours::seeded(7));
    let request = AddCards {
        list_name: "Todo".to_string(),
        tags: strings(&["bug", "urgent:red", "area:api", " "]),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["One", "Two"]))
        .await
        .unwrap();

    assert_eq!(reports[0].labels, vec!["bug", "urgent", "area:api"]);
    assert_eq!(reports[0].created_labels, vec!["urgent", "area:api"]);
    assert!(reports[1].created_labels.is_empty());
    assert_eq!(board.calls().create_label, 2);

    let one = board.card_named("One").unwrap();
    assert_eq!(board.attached(&one.id), vec!["bug", "urgent", "area:api"]);
    let created = board.created_labels();
    assert_eq!(created[0].color, "red");
    assert!(["red", "blue", "green"].contains(&created[1].color.as_str()));
}

#[tokio::test]
async fn test_add_cards_attaches_repeated_tag_once_per_card() {
    let board = sprint_board();
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Todo".to_string(),
        tags: strings(&["bug", "bug", "bug:red"]),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["One"]))
        .await
        .unwrap();

    assert_eq!(reports[0].labels, vec!["bug"]);
    assert_eq!(board.calls().attach, 1);
}

#[tokio::test]
async fn test_add_cards_failed_tag_does_not_stop_later_tags() {
    let board = sprint_board().fail_label_creation();
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Todo".to_string(),
        tags: strings(&["urgent:red", "bug"]),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["One"]))
        .await
        .unwrap();

    let report = &reports[0];
    assert!(report.id.is_some());
    assert_eq!(report.labels, vec!["bug"]);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("label urgent:"));
    assert!(!report.is_success());
}

#[tokio::test]
async fn test_add_cards_failed_card_does_not_stop_later_cards() {
    let board = sprint_board().fail_card_creation("Broken");
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Todo".to_string(),
        tags: strings(&["bug"]),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["Broken", "Fine"]))
        .await
        .unwrap();

    assert!(reports[0].id.is_none());
    assert_eq!(reports[0].errors.len(), 1);
    assert!(reports[1].is_success());
    assert_eq!(reports[1].labels, vec!["bug"]);
}

#[tokio::test]
async fn test_add_cards_adds_known_members_only() {
    let board = sprint_board();
    let mut attacher = LabelAttacher::new(&board, MockColourChooser::new());
    let request = AddCards {
        list_name: "Todo".to_string(),
        users: strings(&["grace", "Ada Lovelace", "nobody"]),
        ..AddCards::default()
    };

    let reports = add_cards(&board, &mut attacher, &request, &strings(&["One"]))
        .await
        .unwrap();

    assert_eq!(reports[0].members, vec!["Grace Hopper", "Ada Lovelace"]);
    let card_id = reports[0].id.clone().unwrap();
    assert_eq!(board.members(&card_id), vec!["u2", "u1"]);
}

#[tokio::test]
async fn test_delete_cards_only_touches_board_cards() {
    let board = sprint_board()
        .with_card("10", "l-todo", &[])
        .with_card("11", "l-todo", &[]);

    let reports = delete_cards(&board, &strings(&["10", "99", "11"]))
        .await
        .unwrap();

    assert!(reports[0].is_success());
    assert_eq!(reports[1].error.as_deref(), Some("card '99' not found"));
    assert!(reports[2].is_success());
    assert_eq!(board.calls().delete_card, 2);
    assert!(board.card_ids().is_empty());
}

#[tokio::test]
async fn test_delete_labels_by_name() {
    let board = sprint_board().with_label("2", "urgent");

    let reports = delete_labels(&board, &strings(&["urgent", "missing"]))
        .await
        .unwrap();

    assert!(reports[0].is_success());
    assert_eq!(reports[1].target, "missing");
    assert!(!reports[1].is_success());
    assert_eq!(board.label_names(), vec!["bug"]);
}

#[tokio::test]
async fn test_delete_labels_without_names_removes_all() {
    let board = sprint_board().with_label("2", "urgent");

    let reports = delete_labels(&board, &[]).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_success()));
    assert!(board.label_names().is_empty());
}
