//! Bulk operations against a Planka kanban board.
//!
//! - `board`: the board client trait and its Planka REST implementation
//! - `tags`: `name[:colour]` tag parsing and the label attach protocol
//! - `cards`: adding cards with members and tags, deleting cards and labels
//! - `clear`: deleting cards from lists, optionally filtered by label
//! - `cli`: command-line surface, configuration and logging

pub mod board;
pub mod cards;
pub mod clear;
pub mod cli;
pub mod tags;

mod serde_utils;
