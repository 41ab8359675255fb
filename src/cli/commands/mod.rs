pub mod card;
pub mod label;
pub mod list;

/// Rendered command result plus how many items in it failed
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub failed: usize,
}

pub(crate) const OK: &str = "✓ ok";
